// Waymark axum integration - request-scoped active state and nav helpers

pub mod extract;
pub mod nav;

// Re-export the core API so handlers can just `use waymark_axum::*`
pub use extract::{ActiveState, RouteTag};
pub use nav::{nav_link, nav_link_pattern};

// Re-export the core crate for convenience
pub use waymark;
pub use waymark::{Active, ActiveConfig, RequestSnapshot, RouteSnapshot};
