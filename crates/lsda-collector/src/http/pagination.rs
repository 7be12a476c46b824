//! `Link`-header paging (RFC 8288).
//!
//! Every listing endpoint returns one page of `items`. When more exist, the
//! response carries a `Link` header whose `rel="next"` target is the URL of
//! the following page:
//!
//! ```text
//! <https://api.example.com/users/acct/posts?cursor=QVFE%3D%3D>; rel="next"
//! ```
//!
//! The target is followed exactly as the server wrote it. Its query string
//! is opaque here, so an encoded cursor goes back upstream byte for byte.

use reqwest::Url;

/// Returns the `rel="next"` target of `link_header`, resolved against the
/// URL of the page that carried it.
///
/// `None` means the listing is exhausted: the header is absent, has no next
/// relation, or its target is not a valid URL.
#[must_use]
pub fn next_page_url(link_header: Option<&str>, current: &Url) -> Option<Url> {
    link_header?.split(',').find_map(|link| {
        let (target, params) = link.trim().split_once(';')?;
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        if !params.split(';').any(is_next_relation) {
            return None;
        }
        current.join(target).ok()
    })
}

/// `rel` accepts a quoted or bare, space-separated list of relation types.
fn is_next_relation(param: &str) -> bool {
    let Some((name, value)) = param.split_once('=') else {
        return false;
    };
    name.trim().eq_ignore_ascii_case("rel")
        && value
            .trim()
            .trim_matches('"')
            .split_ascii_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case("next"))
}
