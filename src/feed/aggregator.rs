//! Concurrent fetch-and-merge across section URLs.
//!
//! One task per URL, all joined before returning. A failed section
//! contributes nothing and is logged; it never cancels its siblings and
//! never surfaces an error to the caller. An all-failed round is therefore
//! indistinguishable from an empty feed, which is what the loader wants.
use crate::article::Article;
use crate::feed::fetcher::{self, FetchError};
use crate::feed::parser::{self, ParseError, ParseResult};
use thiserror::Error;
use url::Url;

/// Errors from one section's fetch-and-parse pipeline.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("Parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// Fetches every section URL concurrently and merges the successes.
///
/// Spawns one task per URL and waits for all of them; there is no early
/// exit and no retry. Merge order follows the input URL order, but callers
/// should treat it as unspecified and sort explicitly.
pub async fn fetch_all(client: &reqwest::Client, urls: &[Url]) -> Vec<Article> {
    if urls.is_empty() {
        return Vec::new();
    }

    let mut tasks = Vec::with_capacity(urls.len());
    for url in urls {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let result = fetch_section(&client, &url).await;
            (url, result)
        }));
    }

    // Full barrier: every section completes before any result is delivered.
    let outcomes = futures::future::join_all(tasks).await;

    let mut articles = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok((url, Ok(ParseResult { articles: mut section, skipped }))) => {
                if skipped > 0 {
                    tracing::warn!(
                        url = %url,
                        skipped = skipped,
                        "Dropped items with unusable timestamps"
                    );
                }
                articles.append(&mut section);
            }
            Ok((url, Err(e))) => {
                tracing::warn!(url = %url, error = %e, "Section fetch failed, continuing without it");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Section fetch task panicked");
            }
        }
    }

    tracing::debug!(
        sections = urls.len(),
        articles = articles.len(),
        "Merged section feeds"
    );
    articles
}

async fn fetch_section(client: &reqwest::Client, url: &Url) -> Result<ParseResult, FeedError> {
    let bytes = fetcher::fetch(client, url).await?;
    Ok(parser::parse(&bytes)?)
}
