//! `/pokemon-species` payload

use serde::{Deserialize, Serialize};

use crate::{ApiResource, NamedResource};

/// `GET /api/v2/pokemon-species/{idOrName}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

impl PokemonSpecies {
    /// First flavor text written in `language` (e.g. `"en"`)
    pub fn flavor_text(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
    }
}
