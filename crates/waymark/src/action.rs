// File: src/action.rs
// Purpose: Action identifier decomposition (controller / method segments)

/// Action identifier assigned to handlers without a declared action.
///
/// Rust handlers are plain functions or closures; only routes the
/// application tags carry a "Controller@method" style identifier.
pub const CLOSURE_ACTION: &str = "Closure";

/// HTTP-verb-style prefixes conventionally stripped from method names.
const METHOD_PREFIXES: [&str; 5] = ["show", "get", "post", "put", "delete"];

/// Controller and method segments of an action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionParts<'a> {
    /// Controller segment, with one trailing `Controller` stripped.
    pub controller: &'a str,
    /// Method segment, with one leading verb prefix stripped.
    pub method: &'a str,
}

impl<'a> ActionParts<'a> {
    /// Decompose an action identifier.
    ///
    /// `"Controller@method"` splits on the first `@`; an action without
    /// `@` (including the [`CLOSURE_ACTION`] sentinel) is all controller
    /// and has an empty method. Both segments are subslices of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::action::ActionParts;
    ///
    /// let parts = ActionParts::parse("FooBarController@getBaz");
    /// assert_eq!(parts.controller, "FooBar");
    /// assert_eq!(parts.method, "Baz");
    ///
    /// let parts = ActionParts::parse("Closure");
    /// assert_eq!(parts.controller, "Closure");
    /// assert_eq!(parts.method, "");
    /// ```
    pub fn parse(action: &'a str) -> Self {
        let (controller, method) = match action.split_once('@') {
            Some((controller, method)) => (controller, method),
            None => (action, ""),
        };

        Self {
            controller: strip_controller_suffix(controller),
            method: strip_method_prefix(method),
        }
    }
}

/// Strip one trailing `Controller` from a controller name.
///
/// Only the final occurrence counts: `SomethingControllerBazController`
/// becomes `SomethingControllerBaz`, `BazControllerFoo` is unchanged.
pub fn strip_controller_suffix(controller: &str) -> &str {
    controller.strip_suffix("Controller").unwrap_or(controller)
}

/// Strip one leading `show`/`get`/`post`/`put`/`delete` prefix from a
/// method name, but only when an ASCII uppercase letter follows.
///
/// `getBaz` becomes `Baz`; `show` and `doShowpost` stay as they are.
pub fn strip_method_prefix(method: &str) -> &str {
    for prefix in METHOD_PREFIXES {
        if let Some(rest) = method.strip_prefix(prefix) {
            if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
                return rest;
            }
        }
    }
    method
}
