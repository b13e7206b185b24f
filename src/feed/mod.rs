//! Feed pipeline: query building, fetching, parsing, merging, caching.
//!
//! This module turns configured section ids into one merged article list:
//!
//! - **Query building**: One search URL per section with the fixed parameters
//! - **Fetching**: HTTP GET with fixed timeouts and a strict 200 check
//! - **Parsing**: Guardian JSON payloads into [`Article`](crate::article::Article) values
//! - **Aggregation**: Concurrent per-section fetches merged with partial-failure tolerance
//! - **Loading**: A single-slot cache keyed on the URL list
//!
//! # Architecture
//!
//! The module is organized into five submodules:
//!
//! - [`query`] - Section URL construction and page-size validation
//! - [`fetcher`] - HTTP retrieval of one payload
//! - [`parser`] - JSON payload to articles, with per-item skip counting
//! - [`aggregator`] - Scatter/gather across all section URLs
//! - [`loader`] - Cached entry point consumers drive
//!
//! # Example
//!
//! ```ignore
//! use newsreel::config::Config;
//! use newsreel::feed::{section_urls, ArticleLoader};
//!
//! let config = Config::default();
//! let mut loader = ArticleLoader::new();
//! let articles = loader.load(section_urls(&config)).await;
//! ```

pub mod aggregator;
pub mod fetcher;
pub mod loader;
pub mod parser;
pub mod query;

pub use aggregator::{fetch_all, FeedError};
pub use fetcher::{build_client, fetch, FetchError};
pub use loader::{ArticleLoader, LoadOutcome};
pub use parser::{parse, ParseError, ParseResult};
pub use query::{section_urls, DEFAULT_PAGE_SIZE};
