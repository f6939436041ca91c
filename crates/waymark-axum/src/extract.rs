// File: src/extract.rs
// Purpose: Per-request assembly of the active-state evaluator from axum
// request parts

use axum::{
    async_trait,
    extract::{FromRequestParts, MatchedPath, RawPathParams},
    http::request::Parts,
};
use std::convert::Infallible;
use std::ops::Deref;
use waymark::{Active, RequestSnapshot, RouteSnapshot};

/// Route metadata an application attaches to a route with
/// `axum::Extension`.
///
/// Axum handlers are plain functions, so names and action identifiers
/// are opt-in: routes without a tag still match but carry the `Closure`
/// action sentinel and no name.
///
/// ```no_run
/// use axum::{routing::get, Extension, Router};
/// use waymark_axum::RouteTag;
///
/// async fn index() -> &'static str { "blog" }
///
/// let app: Router = Router::new().route(
///     "/blog",
///     get(index).layer(Extension(
///         RouteTag::named("blog.index").with_action("BlogController@getIndex"),
///     )),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTag {
    name: Option<String>,
    action: Option<String>,
}

impl RouteTag {
    /// A tag with no name and no action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `RouteTag::new().with_name(name)`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// Set the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the action identifier.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Route name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Action identifier, if set.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

/// Extractor that builds a fresh [`Active`] evaluator for the current
/// request.
///
/// Request-scoped by construction: every extraction assembles new
/// snapshots from the request parts, so nothing can leak between
/// requests in a long-lived server. Extracting twice within one request
/// yields the same state. Extraction never rejects; an unmatched request
/// simply carries no route and the evaluator degrades to false/empty
/// answers.
#[derive(Debug, Clone)]
pub struct ActiveState(pub Active);

impl ActiveState {
    /// Unwrap the evaluator.
    pub fn into_inner(self) -> Active {
        self.0
    }
}

impl Deref for ActiveState {
    type Target = Active;

    fn deref(&self) -> &Active {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActiveState
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Infallible> {
        let request = RequestSnapshot::from_encoded(parts.uri.path(), parts.uri.query());

        // MatchedPath is only present once the router has matched.
        let route = if parts.extensions.get::<MatchedPath>().is_some() {
            let tag = parts
                .extensions
                .get::<RouteTag>()
                .cloned()
                .unwrap_or_default();

            let mut snapshot = RouteSnapshot::new();
            if let Some(name) = tag.name {
                snapshot = snapshot.with_name(name);
            }
            if let Some(action) = tag.action {
                snapshot = snapshot.with_action(action);
            }
            if let Ok(params) = RawPathParams::from_request_parts(parts, state).await {
                for (key, value) in &params {
                    snapshot = snapshot.with_param(key, value);
                }
            }
            Some(snapshot)
        } else {
            None
        };

        tracing::debug!(
            path = %request.path(),
            matched = route.is_some(),
            "assembled active navigation state"
        );

        Ok(ActiveState(Active::new(route, Some(request))))
    }
}
