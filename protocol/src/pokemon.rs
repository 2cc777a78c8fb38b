//! `/pokemon` list and detail payloads

use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// One entry of a list page. Carries only the name and resource URL.
pub type PokemonListItem = NamedResource;

/// `GET /api/v2/pokemon?offset=O&limit=L`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<PokemonListItem>,
}

/// `GET /api/v2/pokemon/{idOrName}`
///
/// Only the fields the client consumes are modeled; everything else in the
/// (very large) payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    /// Decimeters
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<OfficialArtwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// The official artwork URL, when the API provides one
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
