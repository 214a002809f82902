use navreplay::history::url::{assemble_route, resolve, UrlRecord};

fn components(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

#[test]
fn test_domain_only() {
    let record = resolve("https://a.com", None, None);
    assert_eq!(record.domain.as_deref(), Some("https://a.com"));
    assert!(record.components.is_empty());
    assert_eq!(assemble_route(&record).as_deref(), Some("https://a.com"));
}

#[test]
fn test_domain_with_absolute_path() {
    let record = resolve("https://shop123.com/cart/items", None, None);
    assert_eq!(record.domain.as_deref(), Some("https://shop123.com"));
    assert_eq!(record.components, components(&["cart", "items"]));
}

#[test]
fn test_absolute_path_inherits_sticky_domain() {
    let current = UrlRecord::new(Some("https://a.com"), components(&["x", "y"]));
    let record = resolve("/z", Some("https://a.com"), Some(&current));

    assert_eq!(record.domain.as_deref(), Some("https://a.com"));
    // Absolute paths replace the current path
    assert_eq!(record.components, components(&["z"]));
}

#[test]
fn test_relative_path_extends_current() {
    let current = UrlRecord::new(Some("https://a.com"), components(&["x"]));
    let record = resolve("y/z", Some("https://a.com"), Some(&current));
    assert_eq!(record.components, components(&["x", "y", "z"]));
}

#[test]
fn test_relative_path_without_current_page_is_empty() {
    let record = resolve("y/z", Some("https://a.com"), None);
    assert_eq!(record.domain.as_deref(), Some("https://a.com"));
    assert!(record.components.is_empty());
}

#[test]
fn test_empty_token_keeps_domain_root() {
    let current = UrlRecord::new(Some("https://a.com"), components(&["x"]));
    let record = resolve("", Some("https://a.com"), Some(&current));
    assert_eq!(record.domain.as_deref(), Some("https://a.com"));
    assert!(record.components.is_empty());
}

#[test]
fn test_no_domain_ever_seen() {
    let record = resolve("/x", None, None);
    assert_eq!(record.domain, None);
    assert_eq!(record.components, components(&["x"]));
    assert_eq!(assemble_route(&record), None);
}

#[test]
fn test_explicit_domain_overrides_sticky_domain() {
    let current = UrlRecord::new(Some("https://a.com"), components(&["x"]));
    let record = resolve("https://b.com/y", Some("https://a.com"), Some(&current));
    assert_eq!(record.domain.as_deref(), Some("https://b.com"));
    assert_eq!(record.components, components(&["y"]));
}

#[test]
fn test_explicit_domain_with_relative_rest_extends_current() {
    // Removing the domain leaves "x", a relative path
    let current = UrlRecord::new(Some("https://a.com"), components(&["p"]));
    let record = resolve("https://b.comx", Some("https://a.com"), Some(&current));
    assert_eq!(record.domain.as_deref(), Some("https://b.com"));
    assert_eq!(record.components, components(&["p", "x"]));
}

#[test]
fn test_segments_are_not_normalized() {
    let record = resolve("https://a.com/x/../y//./z/", None, None);
    assert_eq!(
        record.components,
        components(&["x", "..", "y", "", ".", "z", ""])
    );
    assert_eq!(
        assemble_route(&record).as_deref(),
        Some("https://a.com/x/../y//./z/")
    );
}

#[test]
fn test_lone_slash_is_single_empty_segment() {
    let record = resolve("https://a.com/", None, None);
    assert_eq!(record.components, components(&[""]));
    assert_eq!(assemble_route(&record).as_deref(), Some("https://a.com/"));
}

#[test]
fn test_http_is_not_a_domain() {
    let record = resolve("http://a.com/x", Some("https://b.com"), None);
    assert_eq!(record.domain.as_deref(), Some("https://b.com"));
    // "http://a.com/x" is relative and there is no current page
    assert!(record.components.is_empty());
}
