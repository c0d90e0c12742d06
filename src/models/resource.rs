//! Named API resource references.

use serde::{Deserialize, Serialize};

/// A reference to another PokeAPI resource by name and URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NamedResource {
    /// Resource name (e.g. "canalave-city")
    pub name: String,

    /// Full URL of the resource
    pub url: String,
}

impl NamedResource {
    /// Render the resource as `name: url`.
    pub fn listing(&self) -> String {
        format!("{}: {}", self.name, self.url)
    }
}
