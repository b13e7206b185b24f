//! Builds one search URL per configured section.
//!
//! The query shape is fixed: `section`, `show-tags=contributor` (for author
//! attribution), `show-fields=trailText` (for summaries), `page-size`, and
//! `api-key`. URLs are parsed and encoded with the `url` crate here so the
//! fetcher only ever sees well-formed [`Url`] values.
use crate::config::Config;
use secrecy::ExposeSecret;
use url::Url;

/// Items requested per section when the configured page size is unusable.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Builds the list of section query URLs for one fetch round.
///
/// One URL per entry in `config.sections`; an empty section list yields an
/// empty vec. A base URL that does not parse is logged and that section is
/// skipped rather than failing the whole round.
pub fn section_urls(config: &Config) -> Vec<Url> {
    let page_size = effective_page_size(&config.page_size).to_string();

    config
        .sections
        .iter()
        .filter_map(|section| match Url::parse(&config.base_url) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("section", section)
                    .append_pair("show-tags", "contributor")
                    .append_pair("show-fields", "trailText")
                    .append_pair("page-size", &page_size)
                    .append_pair("api-key", config.api_key.expose_secret());
                Some(url)
            }
            Err(e) => {
                tracing::warn!(
                    section = %section,
                    error = %e,
                    "Skipping section, base URL does not parse"
                );
                None
            }
        })
        .collect()
}

/// Interprets the raw page-size preference, falling back to
/// [`DEFAULT_PAGE_SIZE`] when it is not a positive integer.
fn effective_page_size(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
