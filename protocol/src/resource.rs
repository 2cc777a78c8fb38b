//! Resource references shared by every PokeAPI payload

use serde::{Deserialize, Serialize};

/// A `{ name, url }` pair pointing at another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded in the resource URL, if any
    pub fn id(&self) -> Option<i32> {
        resource_id(&self.url)
    }
}

/// A bare `{ url }` reference (used by species -> evolution chain)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

impl ApiResource {
    pub fn id(&self) -> Option<i32> {
        resource_id(&self.url)
    }
}

/// Extract the id from a canonical resource URL.
///
/// The id is the last non-empty path segment, so both
/// `.../pokemon/25/` and `.../pokemon/25` yield `Some(25)`.
pub fn resource_id(url: &str) -> Option<i32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
