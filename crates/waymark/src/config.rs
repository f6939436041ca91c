// File: src/config.rs
// Purpose: Configurable active/inactive class pair

use serde::{Deserialize, Serialize};

/// The class pair `class_if` maps booleans onto.
///
/// Deserializable so host applications can embed an `[active]` table in
/// their existing TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveConfig {
    /// Class returned for a true condition (default: `"active"`)
    #[serde(default = "default_active_class")]
    pub active_class: String,

    /// Class returned for a false condition (default: `""`)
    #[serde(default = "default_inactive_class")]
    pub inactive_class: String,
}

// Default values
fn default_active_class() -> String {
    "active".to_string()
}

fn default_inactive_class() -> String {
    String::new()
}

impl Default for ActiveConfig {
    fn default() -> Self {
        Self {
            active_class: default_active_class(),
            inactive_class: default_inactive_class(),
        }
    }
}

impl ActiveConfig {
    /// A custom class pair.
    pub fn new(active_class: impl Into<String>, inactive_class: impl Into<String>) -> Self {
        Self {
            active_class: active_class.into(),
            inactive_class: inactive_class.into(),
        }
    }
}
