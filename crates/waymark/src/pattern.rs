// File: src/pattern.rs
// Purpose: Case-insensitive glob matching for route names and request paths

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;

/// Compiled patterns kept for reuse; navigation menus evaluate the same
/// handful of patterns on every render. Failed compiles are cached too.
static PATTERN_CACHE: Lazy<RwLock<HashMap<String, Option<Regex>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Cache is cleared once it reaches this many entries.
const PATTERN_CACHE_LIMIT: usize = 256;

/// True when `subject` matches the glob `pattern`.
///
/// `*` matches any substring, including the empty one and across `/`.
/// Matching is case-insensitive and anchored at both ends; everything but
/// `*` is taken literally. A pattern that cannot be compiled matches
/// nothing.
///
/// # Examples
///
/// ```
/// use waymark::pattern::matches;
///
/// assert!(matches("foo/*", "foo/bar/baz"));
/// assert!(matches("*.create", "prefix.foo.create"));
/// assert!(!matches("*.foo", "prefix.foo.create"));
/// ```
pub fn matches(pattern: &str, subject: &str) -> bool {
    regex_for(pattern).map_or(false, |re| re.is_match(subject))
}

/// Glob matching for request paths.
///
/// One leading slash on either side is ignored, so `"foo/*"` and
/// `"/foo/*"` both match the path `/foo/bar`.
pub fn matches_path(pattern: &str, path: &str) -> bool {
    matches(
        pattern.strip_prefix('/').unwrap_or(pattern),
        path.strip_prefix('/').unwrap_or(path),
    )
}

fn regex_for(pattern: &str) -> Option<Regex> {
    if let Ok(cache) = PATTERN_CACHE.read() {
        if let Some(cached) = cache.get(pattern) {
            return cached.clone();
        }
    }

    let compiled = Regex::new(&glob_to_regex(pattern)).ok();

    if let Ok(mut cache) = PATTERN_CACHE.write() {
        if cache.len() >= PATTERN_CACHE_LIMIT {
            cache.clear();
        }
        cache.insert(pattern.to_string(), compiled.clone());
    }

    compiled
}

/// Translate a glob into an anchored, case-insensitive regex.
fn glob_to_regex(pattern: &str) -> String {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");
    format!("(?i)^{escaped}$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_spans_segments() {
        assert!(matches("foo/*", "foo/bar/baz"));
        assert!(matches("foo/*", "foo/"));
        assert!(!matches("foo/*", "bar/foo"));
        assert!(!matches("foo/*", "foo"));
    }

    #[test]
    fn test_route_name_patterns() {
        assert!(matches("*.foo.*", "prefix.foo.create"));
        assert!(!matches("*.foo", "prefix.foo.create"));
        assert!(matches("*.create", "prefix.foo.create"));
        assert!(matches("admin.*", "admin.users.index"));
    }

    #[test]
    fn test_exact_without_wildcard() {
        assert!(matches("foo/bar", "foo/bar"));
        assert!(!matches("foo/", "foo/bar/baz"));
        assert!(!matches("foo", "fooz"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("FOO/*", "foo/bar"));
        assert!(matches("admin.*", "Admin.Users"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(matches("foo.bar", "foo.bar"));
        assert!(!matches("foo.bar", "fooxbar"));
        assert!(matches("price (usd)", "price (usd)"));
        assert!(!matches("a+b", "aab"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(matches("", ""));
        assert!(matches("*", ""));
        assert!(!matches("", "foo"));
    }

    #[test]
    fn test_leading_slash_ignored_for_paths() {
        assert!(matches_path("foo/*", "/foo/bar/baz"));
        assert!(matches_path("/foo/*", "/foo/bar/baz"));
        assert!(matches_path("/foo/*", "foo/bar"));
        assert!(!matches_path("foo/*", "/bar/foo"));
    }

    #[test]
    fn test_repeated_patterns_hit_cache() {
        for _ in 0..3 {
            assert!(matches("cached/*", "cached/value"));
        }
    }
}
