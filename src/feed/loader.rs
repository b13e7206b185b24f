//! Single-slot result cache over the aggregator.
//!
//! [`ArticleLoader`] remembers the result of the last completed fetch round
//! together with the URL list that produced it. Loading the same list again
//! serves the stored articles without touching the network; loading a
//! different list replaces the slot wholesale. There is no merging between
//! rounds and no expiry; [`ArticleLoader::reset`] is the only invalidation.
use crate::article::Article;
use crate::feed::aggregator;
use crate::feed::fetcher;
use url::Url;

/// Cache slot: either nothing has been loaded yet, or exactly one round's
/// result is held, keyed by the URL list that produced it.
enum LoaderState {
    Empty,
    Loaded { urls: Vec<Url>, articles: Vec<Article> },
}

/// Owns the HTTP client and the single cache slot.
///
/// Methods take `&mut self`, so one loader serves one logical consumer and
/// overlapping loads cannot be expressed. Dropping an in-flight `load`
/// future abandons that round and leaves the previous state intact; the
/// slot only ever holds the latest round that ran to completion.
pub struct ArticleLoader {
    client: reqwest::Client,
    state: LoaderState,
}

/// Result of a connectivity-gated load.
#[derive(Debug)]
pub enum LoadOutcome<'a> {
    /// The host reported no connectivity; nothing was fetched and the
    /// cache slot was left untouched.
    Offline,
    /// Articles from the cache slot, freshly fetched or replayed.
    Loaded(&'a [Article]),
}

impl ArticleLoader {
    /// Creates a loader with the standard client (fixed timeouts).
    pub fn new() -> Self {
        Self::with_client(fetcher::build_client())
    }

    /// Creates a loader around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            state: LoaderState::Empty,
        }
    }

    /// Loads articles for the given URL list, consulting the cache first.
    ///
    /// A round that fails everywhere stores an empty list, and that empty
    /// list replays on the next identical `load`; there are no automatic
    /// retries. `reset` (or a changed URL list) is the way to force a
    /// fresh fetch.
    pub async fn load(&mut self, urls: Vec<Url>) -> &[Article] {
        let cache_hit = matches!(
            &self.state,
            LoaderState::Loaded { urls: cached, .. } if *cached == urls
        );

        if cache_hit {
            tracing::debug!(urls = urls.len(), "Cache hit, serving stored articles");
        } else {
            let articles = aggregator::fetch_all(&self.client, &urls).await;
            tracing::info!(
                urls = urls.len(),
                articles = articles.len(),
                "Feed refreshed"
            );
            self.state = LoaderState::Loaded { urls, articles };
        }

        match &self.state {
            LoaderState::Loaded { articles, .. } => articles,
            LoaderState::Empty => &[],
        }
    }

    /// Like [`load`](Self::load), gated on the host's connectivity signal.
    ///
    /// With `online` false the network is never touched and the cache is
    /// left as it was, letting the host tell "offline" apart from "the
    /// feed is empty".
    pub async fn load_if_online(&mut self, urls: Vec<Url>, online: bool) -> LoadOutcome<'_> {
        if !online {
            tracing::info!("Offline, skipping feed load");
            return LoadOutcome::Offline;
        }
        LoadOutcome::Loaded(self.load(urls).await)
    }

    /// The held articles, if a round has completed since the last reset.
    pub fn cached(&self) -> Option<&[Article]> {
        match &self.state {
            LoaderState::Loaded { articles, .. } => Some(articles),
            LoaderState::Empty => None,
        }
    }

    /// Clears the slot; the next `load` always fetches.
    pub fn reset(&mut self) {
        self.state = LoaderState::Empty;
    }
}

impl Default for ArticleLoader {
    fn default() -> Self {
        Self::new()
    }
}
