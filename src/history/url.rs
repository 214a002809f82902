//! Resolution of raw navigation tokens into URL records.
//!
//! A navigation token may carry a domain (`https://<alphanumeric>.com`) and an
//! absolute (`/a/b`) or relative (`a/b`) path. Relative paths extend the path
//! of the page currently being viewed. Paths are taken verbatim: `.` and `..`
//! are ordinary segments and empty segments are kept.

use regex::Regex;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://[A-Za-z0-9]+\.com").expect("domain pattern compiles"));

/// A resolved page address: an optional domain and its path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecord {
    /// `None` when no domain has been seen yet, which is not the same as `""`.
    pub domain: Option<String>,
    pub components: Vec<String>,
}

impl UrlRecord {
    /// Creates a record from a domain and path segments.
    pub fn new<S: Into<String>>(domain: Option<S>, components: Vec<String>) -> Self {
        Self {
            domain: domain.map(Into::into),
            components,
        }
    }

    /// Returns the route of this record, see [`assemble_route`].
    pub fn route(&self) -> Option<String> {
        assemble_route(self)
    }
}

/// Resolves one navigation token.
///
/// # Arguments
///
/// * `line` - The navigation token
/// * `current_domain` - The sticky domain tracked by the caller
/// * `current` - The record of the page being viewed, if any
///
/// The returned record carries the explicit domain found in `line` if there is
/// one, otherwise `current_domain`. The caller is responsible for adopting the
/// record's domain as its new sticky domain.
///
/// # Example
///
/// ```
/// use navreplay::history::url::resolve;
///
/// let first = resolve("https://example.com/docs", None, None);
/// assert_eq!(first.domain.as_deref(), Some("https://example.com"));
/// assert_eq!(first.components, vec!["docs"]);
///
/// let second = resolve("intro", first.domain.as_deref(), Some(&first));
/// assert_eq!(second.route().as_deref(), Some("https://example.com/docs/intro"));
/// ```
pub fn resolve(line: &str, current_domain: Option<&str>, current: Option<&UrlRecord>) -> UrlRecord {
    let (domain, path) = match DOMAIN_PATTERN.find(line) {
        Some(found) => {
            let mut path = String::with_capacity(line.len() - found.len());
            path.push_str(&line[..found.start()]);
            path.push_str(&line[found.end()..]);
            (Some(found.as_str().to_string()), path)
        }
        None => (current_domain.map(str::to_string), line.to_string()),
    };

    let components = if let Some(absolute) = path.strip_prefix('/') {
        split_path(absolute)
    } else {
        match current {
            Some(record) if !path.is_empty() => {
                let mut components = record.components.clone();
                components.extend(split_path(&path));
                components
            }
            _ => Vec::new(),
        }
    };

    UrlRecord { domain, components }
}

/// Flattens a record into its route string.
///
/// Each component is appended with a leading `/`. Returns `None` when the
/// record has no domain; callers decide how such a page is rendered.
///
/// # Example
///
/// ```
/// use navreplay::history::url::{assemble_route, UrlRecord};
///
/// let record = UrlRecord::new(Some("https://a.com"), vec!["x".into(), "y".into()]);
/// assert_eq!(assemble_route(&record).as_deref(), Some("https://a.com/x/y"));
/// assert_eq!(assemble_route(&UrlRecord::default()), None);
/// ```
pub fn assemble_route(record: &UrlRecord) -> Option<String> {
    record
        .domain
        .as_deref()
        .map(|domain| join_route(domain, &record.components))
}

/// Builds a route from an explicit domain string and path segments.
pub fn join_route(domain: &str, components: &[String]) -> String {
    let mut route = String::from(domain);
    for component in components {
        route.push('/');
        route.push_str(component);
    }
    route
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}
