//! `scrape` and `search` command handlers.

use anyhow::Context;
use lsda_collector::{Collector, HttpSocialClient};
use lsda_core::AppConfig;
use tracing::Dispatch;

fn build_collector(
    config: &AppConfig,
    dispatch: Dispatch,
) -> anyhow::Result<Collector<HttpSocialClient>> {
    let client = HttpSocialClient::new(config).context("failed to build social API client")?;
    Ok(Collector::new(client, &config.output_dir).with_dispatch(dispatch))
}

/// Scrapes `username` and reports where the files went and which posts lost
/// their comments to a failed fetch.
///
/// # Errors
///
/// Returns an error if credentials are missing, the client cannot be built,
/// or the run fails.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    dispatch: Dispatch,
    username: &str,
    posts: usize,
    comments: usize,
) -> anyhow::Result<()> {
    let credentials = lsda_core::load_credentials().context("credentials are not configured")?;
    let collector = build_collector(config, dispatch)?;

    let run = collector
        .scrape(&credentials, username, posts, comments)
        .await
        .with_context(|| format!("scrape of '{username}' failed"))?;

    println!(
        "saved account summary and {} post(s) to {}",
        run.posts.len(),
        run.directory.display()
    );
    for item in &run.degraded {
        println!(
            "  post {}: comments unavailable ({})",
            item.position, item.reason
        );
    }
    Ok(())
}

/// Searches profiles for `query` and reports the output file.
///
/// # Errors
///
/// Returns an error if credentials are missing, the client cannot be built,
/// or the run fails.
pub(crate) async fn run_search(
    config: &AppConfig,
    dispatch: Dispatch,
    query: &str,
    top: usize,
) -> anyhow::Result<()> {
    let credentials = lsda_core::load_credentials().context("credentials are not configured")?;
    let collector = build_collector(config, dispatch)?;

    let run = collector
        .search(&credentials, query, top)
        .await
        .with_context(|| format!("search for '{query}' failed"))?;

    println!(
        "saved {} result(s) to {}",
        run.results.len(),
        run.path.display()
    );
    Ok(())
}
