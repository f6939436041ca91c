// File: src/snapshot.rs
// Purpose: Route and request state captured when the router matches

use crate::action::CLOSURE_ACTION;
use crate::value::OneOrMany;
use std::collections::HashMap;

/// The matched route, as the evaluator sees it.
///
/// Built once per request by the host integration and replaced wholesale
/// on every match; nothing here survives the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnapshot {
    name: Option<String>,
    action: String,
    params: HashMap<String, String>,
}

impl RouteSnapshot {
    /// A route with no name, no bound parameters and the [`CLOSURE_ACTION`]
    /// action sentinel.
    pub fn new() -> Self {
        Self {
            name: None,
            action: CLOSURE_ACTION.to_string(),
            params: HashMap::new(),
        }
    }

    /// Set the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the action identifier (e.g. `"PostsController@getShow"`).
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Bind one path parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Bind several path parameters at once.
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Route name, if the route was registered with one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Raw action identifier.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// One bound path parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All bound path parameters.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

impl Default for RouteSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// The current request, reduced to what the predicates read: the decoded
/// path and the query-parameter map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSnapshot {
    path: String,
    query: HashMap<String, OneOrMany<String>>,
}

impl RequestSnapshot {
    /// Snapshot an already-decoded path with no query parameters.
    pub fn new(decoded_path: impl Into<String>) -> Self {
        Self {
            path: decoded_path.into(),
            query: HashMap::new(),
        }
    }

    /// Add one query parameter. A scalar stores the `One` form; passing a
    /// `Vec` or array stores the `Many` form.
    pub fn with_query_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<OneOrMany<String>>,
    ) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Snapshot a raw (still-encoded) path and query string.
    ///
    /// The path is percent-decoded; query keys and values additionally
    /// decode `+` as space. Repeated keys accumulate into the `Many` form
    /// and a key without `=` maps to the empty string. Malformed percent
    /// escapes decode lossily rather than failing.
    pub fn from_encoded(path: &str, query: Option<&str>) -> Self {
        let mut snapshot = Self::new(percent_decode(path));

        for segment in query.unwrap_or("").split('&') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) => (key, value),
                None => (segment, ""),
            };
            snapshot.push_query_value(decode_component(key), decode_component(value));
        }

        snapshot
    }

    fn push_query_value(&mut self, key: String, value: String) {
        let stored = match self.query.remove(&key) {
            None => OneOrMany::One(value),
            Some(OneOrMany::One(first)) => OneOrMany::Many(vec![first, value]),
            Some(OneOrMany::Many(mut values)) => {
                values.push(value);
                OneOrMany::Many(values)
            }
        };
        self.query.insert(key, stored);
    }

    /// Decoded request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Stored value(s) for a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&OneOrMany<String>> {
        self.query.get(key)
    }

    /// True when the query string contains the key at all.
    pub fn has_query(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }
}

/// Percent-decode, keeping malformed escapes as replacement characters.
fn percent_decode(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Query components also decode `+` as space.
fn decode_component(raw: &str) -> String {
    percent_decode(&raw.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_snapshot_defaults() {
        let route = RouteSnapshot::new();
        assert_eq!(route.name(), None);
        assert_eq!(route.action(), CLOSURE_ACTION);
        assert!(route.params().is_empty());
    }

    #[test]
    fn test_route_snapshot_builder() {
        let route = RouteSnapshot::new()
            .with_name("users.show")
            .with_action("UsersController@getShow")
            .with_param("id", "42")
            .with_params([("tab", "posts")]);

        assert_eq!(route.name(), Some("users.show"));
        assert_eq!(route.action(), "UsersController@getShow");
        assert_eq!(route.param("id"), Some("42"));
        assert_eq!(route.param("tab"), Some("posts"));
        assert_eq!(route.param("missing"), None);
    }

    #[test]
    fn test_request_snapshot_builder() {
        let request = RequestSnapshot::new("/foo")
            .with_query_value("page", "2")
            .with_query_value("id", vec!["1", "2"]);

        assert_eq!(request.path(), "/foo");
        assert_eq!(
            request.query_value("page"),
            Some(&OneOrMany::One("2".to_string()))
        );
        assert_eq!(
            request.query_value("id"),
            Some(&OneOrMany::Many(vec!["1".to_string(), "2".to_string()]))
        );
        assert!(!request.has_query("missing"));
    }

    #[test]
    fn test_from_encoded_decodes_path() {
        let request = RequestSnapshot::from_encoded("/caf%C3%A9/m%20n", None);
        assert_eq!(request.path(), "/café/m n");
    }

    #[test]
    fn test_from_encoded_plus_is_literal_in_path() {
        let request = RequestSnapshot::from_encoded("/a+b", None);
        assert_eq!(request.path(), "/a+b");
    }

    #[test]
    fn test_from_encoded_query_parsing() {
        let request = RequestSnapshot::from_encoded("/", Some("q=hello+world&flag&empty="));
        assert_eq!(
            request.query_value("q"),
            Some(&OneOrMany::One("hello world".to_string()))
        );
        assert_eq!(
            request.query_value("flag"),
            Some(&OneOrMany::One(String::new()))
        );
        assert_eq!(
            request.query_value("empty"),
            Some(&OneOrMany::One(String::new()))
        );
    }

    #[test]
    fn test_from_encoded_repeated_keys_accumulate() {
        let request = RequestSnapshot::from_encoded("/", Some("id=1&id=2&id=3"));
        assert_eq!(
            request.query_value("id"),
            Some(&OneOrMany::Many(vec![
                "1".to_string(),
                "2".to_string(),
                "3".to_string()
            ]))
        );
    }

    #[test]
    fn test_from_encoded_malformed_escape_degrades() {
        let request = RequestSnapshot::from_encoded("/%zz", Some("k=%"));
        assert_eq!(request.path(), "/%zz");
        assert!(request.has_query("k"));
    }
}
