// File: src/active.rs
// Purpose: The active-state evaluator: predicates over the current route
// and request, mapped to CSS classes for navigation menus

use crate::action::ActionParts;
use crate::config::ActiveConfig;
use crate::pattern;
use crate::snapshot::{RequestSnapshot, RouteSnapshot};
use crate::value::{OneOrMany, Probe, QueryProbe, RouteName};

/// Answers "is the current route/URI/query X?" and turns the answer into
/// a CSS class.
///
/// Holds at most one [`RouteSnapshot`] and one [`RequestSnapshot`],
/// replaced wholesale on every route match. With no state (before the
/// first request, or for an unmatched request) every `check_*` returns
/// `false` and every getter returns `""`; nothing errors.
///
/// Request-scoped: build a fresh one per request, never share a mutable
/// instance across concurrent requests.
///
/// # Examples
///
/// ```
/// use waymark::{Active, RequestSnapshot, RouteSnapshot};
///
/// let active = Active::new(
///     Some(RouteSnapshot::new().with_name("blog.index")),
///     Some(RequestSnapshot::new("/blog")),
/// );
///
/// assert!(active.check_route("blog.index"));
/// assert_eq!(active.uri_class("/blog"), "active");
/// assert_eq!(active.uri_class("/about"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Active {
    route: Option<RouteSnapshot>,
    request: Option<RequestSnapshot>,
    config: ActiveConfig,
}

impl Active {
    /// An evaluator with no route and no request.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An evaluator over the given snapshots (either side may be absent).
    pub fn new(route: Option<RouteSnapshot>, request: Option<RequestSnapshot>) -> Self {
        Self {
            route,
            request,
            config: ActiveConfig::default(),
        }
    }

    /// Use a custom class pair instead of `"active"`/`""`.
    pub fn with_config(mut self, config: ActiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the whole state with fresh snapshots.
    pub fn update(&mut self, route: Option<RouteSnapshot>, request: Option<RequestSnapshot>) {
        self.route = route;
        self.request = request;
    }

    /// The held route snapshot, if any.
    pub fn route(&self) -> Option<&RouteSnapshot> {
        self.route.as_ref()
    }

    /// The held request snapshot, if any.
    pub fn request(&self) -> Option<&RequestSnapshot> {
        self.request.as_ref()
    }

    // ── predicates ──────────────────────────────────────────────

    /// True when the decoded request path equals one of the given URIs
    /// exactly (`"/foo"` does not match `"/foo/"` or `"/fooz"`).
    pub fn check_uri<'a>(&self, uris: impl Into<OneOrMany<&'a str>>) -> bool {
        let Some(request) = &self.request else {
            return false;
        };
        uris.into().iter().any(|uri| request.path() == *uri)
    }

    /// True when the decoded path matches one of the glob patterns
    /// (`*` wildcard, case-insensitive). Leading slashes on either side
    /// are ignored, so `"foo/*"` matches the path `/foo/bar/baz`.
    pub fn check_uri_pattern<'a>(&self, patterns: impl Into<OneOrMany<&'a str>>) -> bool {
        let Some(request) = &self.request else {
            return false;
        };
        patterns
            .into()
            .iter()
            .any(|p| pattern::matches_path(p, request.path()))
    }

    /// True when the query parameter `key` satisfies the probe:
    /// [`QueryProbe::Any`] (or the `false` shorthand for it) means
    /// "present with any value"; a concrete value matches the stored
    /// value or any element of a stored list.
    pub fn check_query<'a>(&self, key: &str, value: impl Into<QueryProbe<'a>>) -> bool {
        let Some(request) = &self.request else {
            return false;
        };
        match value.into() {
            QueryProbe::Any => request.has_query(key),
            QueryProbe::Value(probe) => request
                .query_value(key)
                .map_or(false, |stored| {
                    stored.iter().any(|v| v.as_str() == probe.as_str())
                }),
        }
    }

    /// True when the route name equals one of the given names.
    /// [`RouteName::Unnamed`] in the list matches a route with no name.
    pub fn check_route<'a>(&self, names: impl Into<OneOrMany<RouteName<'a>>>) -> bool {
        let Some(route) = &self.route else {
            return false;
        };
        names.into().iter().any(|name| name.matches(route.name()))
    }

    /// True when the route name matches one of the glob patterns.
    /// An unnamed route matches nothing, not even `"*"`.
    pub fn check_route_pattern<'a>(&self, patterns: impl Into<OneOrMany<&'a str>>) -> bool {
        let Some(name) = self.route.as_ref().and_then(RouteSnapshot::name) else {
            return false;
        };
        patterns.into().iter().any(|p| pattern::matches(p, name))
    }

    /// True when the bound route parameter `key` equals the probe value
    /// (numbers compare through their canonical string form).
    pub fn check_route_parameter<'a>(&self, key: &str, value: impl Into<Probe<'a>>) -> bool {
        let Some(route) = &self.route else {
            return false;
        };
        route.param(key) == Some(value.into().as_str())
    }

    /// True when the route name matches AND every probed `(key, value)`
    /// pair matches a bound parameter. Parameters not probed are ignored;
    /// a probed key the route did not bind is a failure.
    pub fn check_route_params<'a>(&self, name: &str, params: &[(&str, Probe<'a>)]) -> bool {
        let Some(route) = &self.route else {
            return false;
        };
        if route.name() != Some(name) {
            return false;
        }
        params
            .iter()
            .all(|(key, value)| route.param(key) == Some(value.as_str()))
    }

    /// True when the raw action identifier equals one of the given ones.
    pub fn check_action<'a>(&self, actions: impl Into<OneOrMany<&'a str>>) -> bool {
        let Some(route) = &self.route else {
            return false;
        };
        actions.into().iter().any(|action| route.action() == *action)
    }

    /// True when the controller extracted from the action identifier
    /// equals one of the given names (compared suffix-stripped, so probe
    /// with `"FooBar"`, not `"FooBarController"`).
    pub fn check_controller<'a>(&self, controllers: impl Into<OneOrMany<&'a str>>) -> bool {
        let controller = self.controller();
        if controller.is_empty() {
            return false;
        }
        controllers.into().iter().any(|c| controller == *c)
    }

    /// Like [`check_controller`](Self::check_controller), but false when
    /// the current handler method is one of `excluded_methods` (compared
    /// prefix-stripped, like [`method`](Self::method)).
    pub fn check_controller_except<'a>(
        &self,
        controllers: impl Into<OneOrMany<&'a str>>,
        excluded_methods: impl Into<OneOrMany<&'a str>>,
    ) -> bool {
        if !self.check_controller(controllers) {
            return false;
        }
        let method = self.method();
        !excluded_methods.into().iter().any(|m| method == *m)
    }

    // ── getters ─────────────────────────────────────────────────

    /// Raw action identifier of the current route; `""` without a route.
    pub fn action(&self) -> &str {
        self.route.as_ref().map_or("", |route| route.action())
    }

    /// Controller segment of the action identifier, with one trailing
    /// `Controller` stripped; `""` without a route.
    pub fn controller(&self) -> &str {
        ActionParts::parse(self.action()).controller
    }

    /// Method segment of the action identifier, with one leading verb
    /// prefix stripped; `""` without a route or for an action without `@`.
    pub fn method(&self) -> &str {
        ActionParts::parse(self.action()).method
    }

    // ── class mapping ───────────────────────────────────────────

    /// Map a boolean to the configured class pair.
    pub fn class_if(&self, condition: bool) -> &str {
        self.class_if_or(condition, &self.config.active_class, &self.config.inactive_class)
    }

    /// Map a boolean to an explicit class pair.
    pub fn class_if_or<'a>(&self, condition: bool, active: &'a str, inactive: &'a str) -> &'a str {
        if condition {
            active
        } else {
            inactive
        }
    }

    /// [`check_uri`](Self::check_uri) as a class.
    pub fn uri_class<'a>(&self, uris: impl Into<OneOrMany<&'a str>>) -> &str {
        self.class_if(self.check_uri(uris))
    }

    /// [`check_uri_pattern`](Self::check_uri_pattern) as a class.
    pub fn uri_pattern_class<'a>(&self, patterns: impl Into<OneOrMany<&'a str>>) -> &str {
        self.class_if(self.check_uri_pattern(patterns))
    }

    /// [`check_query`](Self::check_query) as a class.
    pub fn query_class<'a>(&self, key: &str, value: impl Into<QueryProbe<'a>>) -> &str {
        self.class_if(self.check_query(key, value))
    }

    /// [`check_route`](Self::check_route) as a class.
    pub fn route_class<'a>(&self, names: impl Into<OneOrMany<RouteName<'a>>>) -> &str {
        self.class_if(self.check_route(names))
    }

    /// [`check_route_pattern`](Self::check_route_pattern) as a class.
    pub fn route_pattern_class<'a>(&self, patterns: impl Into<OneOrMany<&'a str>>) -> &str {
        self.class_if(self.check_route_pattern(patterns))
    }

    /// [`check_action`](Self::check_action) as a class.
    pub fn action_class<'a>(&self, actions: impl Into<OneOrMany<&'a str>>) -> &str {
        self.class_if(self.check_action(actions))
    }

    /// [`check_controller`](Self::check_controller) as a class.
    pub fn controller_class<'a>(&self, controllers: impl Into<OneOrMany<&'a str>>) -> &str {
        self.class_if(self.check_controller(controllers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Active {
        Active::new(
            Some(
                RouteSnapshot::new()
                    .with_name("users.show")
                    .with_action("UsersController@getShow")
                    .with_param("id", "42"),
            ),
            Some(RequestSnapshot::new("/users/42").with_query_value("tab", "posts")),
        )
    }

    #[test]
    fn test_class_if_uses_configured_pair() {
        let active = Active::empty();
        assert_eq!(active.class_if(true), "active");
        assert_eq!(active.class_if(false), "");

        let active = Active::empty().with_config(ActiveConfig::new("selected", "normal"));
        assert_eq!(active.class_if(true), "selected");
        assert_eq!(active.class_if(false), "normal");
    }

    #[test]
    fn test_class_if_or_is_explicit() {
        let active = Active::empty();
        assert_eq!(active.class_if_or(true, "a", "b"), "a");
        assert_eq!(active.class_if_or(false, "a", "b"), "b");
    }

    #[test]
    fn test_update_replaces_state_wholesale() {
        let mut active = current();
        assert!(active.check_uri("/users/42"));

        active.update(None, Some(RequestSnapshot::new("/about")));
        assert!(!active.check_uri("/users/42"));
        assert!(active.check_uri("/about"));
        assert!(!active.check_route("users.show"));
        assert_eq!(active.action(), "");
    }

    #[test]
    fn test_route_only_state() {
        let active = Active::new(Some(RouteSnapshot::new().with_name("home")), None);
        assert!(active.check_route("home"));
        assert!(!active.check_uri("/"));
        assert!(!active.check_query("page", QueryProbe::Any));
    }

    #[test]
    fn test_check_controller_except() {
        let active = current();
        assert!(active.check_controller_except("Users", "Edit"));
        assert!(active.check_controller_except("Users", ["Edit", "Create"]));
        assert!(!active.check_controller_except("Users", ["Edit", "Show"]));
        assert!(!active.check_controller_except("Posts", "Edit"));
    }

    #[test]
    fn test_route_parameter_comparisons() {
        let active = current();
        assert!(active.check_route_parameter("id", "42"));
        assert!(active.check_route_parameter("id", 42));
        assert!(!active.check_route_parameter("id", 7));
        assert!(!active.check_route_parameter("missing", "42"));
    }

    #[test]
    fn test_unnamed_route_never_matches_patterns() {
        let active = Active::new(Some(RouteSnapshot::new()), None);
        assert!(!active.check_route_pattern("*"));
        assert!(active.check_route(RouteName::Unnamed));
        assert!(!active.check_route("home"));
    }
}
