//! Newsreel - a Guardian content API feed aggregator.
//!
//! This crate fetches news articles from the Guardian's search API one
//! section at a time, concurrently, and merges the results into a single
//! chronologically sortable list. Failed sections are logged and skipped
//! rather than failing the round, and the last completed round is cached
//! so re-displaying a feed costs no network traffic.
//!
//! # Example
//!
//! ```no_run
//! use newsreel::feed::section_urls;
//! use newsreel::{sort_articles, ArticleLoader, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let mut loader = ArticleLoader::new();
//!
//!     let mut articles = loader.load(section_urls(&config)).await.to_vec();
//!     if let Some(order) = config.sort_order() {
//!         sort_articles(&mut articles, order);
//!     }
//!
//!     for article in &articles {
//!         println!(
//!             "{} {}  {}",
//!             article.publication_date, article.publication_time, article.title
//!         );
//!     }
//! }
//! ```

pub mod article;
pub mod config;
pub mod feed;

pub use article::{sort_articles, Article, SortOrder};
pub use config::{Config, ConfigError};
pub use feed::{ArticleLoader, LoadOutcome};
