mod collect;
mod complete;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lsda")]
#[command(about = "Bounded profile collection and LLM completion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save an account summary and its most recent posts with top comments
    Scrape {
        /// Account to scrape
        username: String,

        /// Number of most recent posts to keep
        #[arg(long, default_value_t = 10)]
        posts: usize,

        /// Number of comment candidates to read per post
        #[arg(long, default_value_t = 100)]
        comments: usize,
    },
    /// Save the top-ranked profiles matching a query
    Search {
        /// Free-text search query
        query: String,

        /// Number of results to keep
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Send a prompt to the configured completion backend
    Complete {
        /// Model identifier understood by the backend
        #[arg(long)]
        model: String,

        /// Optional system message sent before the prompt
        #[arg(long)]
        system: Option<String>,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,

        /// Maximum number of tokens to generate
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Print the full provider response as JSON instead of just the text
        #[arg(long)]
        raw: bool,

        /// User prompt
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = lsda_core::load_app_config().context("failed to load configuration")?;
    let dispatch = init_tracing(&config.log_level)?;
    tracing::debug!(output_dir = %config.output_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Scrape {
            username,
            posts,
            comments,
        } => collect::run_scrape(&config, dispatch, &username, posts, comments).await,
        Commands::Search { query, top } => {
            collect::run_search(&config, dispatch, &query, top).await
        }
        Commands::Complete {
            model,
            system,
            temperature,
            max_tokens,
            raw,
            prompt,
        } => {
            let request = complete::PromptArgs {
                model,
                system,
                temperature,
                max_tokens,
                prompt,
            };
            complete::run_complete(&config, request, raw).await
        }
    }
}

/// Installs a stderr `fmt` subscriber filtered by `log_level` as the process
/// default and returns it for injection into library runs.
fn init_tracing(log_level: &str) -> anyhow::Result<Dispatch> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("invalid LSDA_LOG_LEVEL directive '{log_level}'"))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let dispatch = Dispatch::new(subscriber);
    tracing::dispatcher::set_global_default(dispatch.clone())
        .context("failed to install log subscriber")?;
    Ok(dispatch)
}
