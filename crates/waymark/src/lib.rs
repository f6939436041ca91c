// Waymark - active navigation state for web views
// Route, URI and query predicates mapped to CSS classes

pub mod action;
pub mod active;
pub mod config;
pub mod pattern;
pub mod snapshot;
pub mod value;

// Re-export the core API so applications can just `use waymark::*`
pub use action::{ActionParts, CLOSURE_ACTION};
pub use active::Active;
pub use config::ActiveConfig;
pub use snapshot::{RequestSnapshot, RouteSnapshot};
pub use value::{OneOrMany, Probe, QueryProbe, RouteName};
