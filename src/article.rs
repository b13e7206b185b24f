//! Article value type and chronological ordering.
//!
//! Articles are produced by the feed parser and never mutated afterward.
//! The publication date and time are stored as fixed-width strings
//! (`YYYY-MM-DD` and `HH:MM`) so that plain byte-wise comparison is also
//! chronological comparison. That property is guaranteed by the parser,
//! which derives both fields from a single timestamp or drops the item.
use std::cmp::Ordering;

/// One normalized news article.
///
/// All fields come from a single feed item. `title`, `url`, `category` and
/// `summary` default to the empty string when the feed omits them; `author`
/// is `None` rather than empty when no contributor tag is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Publication date as `YYYY-MM-DD` (zero-padded).
    pub publication_date: String,
    /// Publication time as `HH:MM`, 24-hour clock (zero-padded).
    pub publication_time: String,
    /// Section name as reported by the feed (free text, may be empty).
    pub category: String,
    /// Article headline.
    pub title: String,
    /// Link to the full article on the publisher's site.
    pub url: String,
    /// Trail text shown under the headline. Empty when the feed omits it.
    pub summary: String,
    /// First contributor tag, when present and non-empty.
    pub author: Option<String>,
}

impl Article {
    /// Compares two articles by publication instant: date first, then time.
    ///
    /// Both fields are fixed-width and zero-padded, so lexicographic string
    /// comparison orders them chronologically. Intentionally not an `Ord`
    /// impl: derived equality is structural (all fields), while this
    /// comparison keys on the timestamp alone, and the two must not be
    /// conflated.
    pub fn publication_cmp(&self, other: &Article) -> Ordering {
        self.publication_date
            .cmp(&other.publication_date)
            .then_with(|| self.publication_time.cmp(&other.publication_time))
    }
}

/// Direction for sorting a merged article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent publication first.
    Newest,
    /// Oldest publication first.
    Oldest,
}

impl SortOrder {
    /// Maps a sort preference label to a direction.
    ///
    /// Labels are exact: `"Newest"` and `"Oldest"`. Anything else yields
    /// `None`, which callers treat as "leave the list in merge order".
    pub fn from_label(label: &str) -> Option<SortOrder> {
        match label {
            "Newest" => Some(SortOrder::Newest),
            "Oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }
}

/// Sorts articles by publication instant in the given direction.
///
/// Uses a stable sort in both directions, so articles with identical
/// date and time keep their relative order from the input list.
pub fn sort_articles(articles: &mut [Article], order: SortOrder) {
    match order {
        SortOrder::Oldest => articles.sort_by(|a, b| a.publication_cmp(b)),
        SortOrder::Newest => articles.sort_by(|a, b| b.publication_cmp(a)),
    }
}
