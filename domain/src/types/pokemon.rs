//! Fully mapped Pokemon record

use super::stats::stat_abbreviation;

/// Max base stat used for bar scaling when a Pokemon has no stats at all
const DEFAULT_MAX_BASE_STAT: u32 = 100;

/// A Pokemon as fetched and mapped from the API.
///
/// Built once by the mapper and never mutated afterwards. Weight and height
/// stay in API units (hectograms / decimeters); use [`Pokemon::weight_kg`]
/// and [`Pokemon::height_m`] for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokemon {
    /// National dex id, or -1 when the resource URL carried no usable id
    pub id: i32,

    /// Lowercase canonical name (e.g. "mr-mime")
    pub name: String,

    pub image_url: String,

    pub description: String,

    /// Hectograms
    pub weight: u32,

    /// Decimeters
    pub height: u32,

    /// Base stats in API order
    pub stats: Vec<PokemonStat>,

    /// Type names in slot order
    pub types: Vec<String>,
}

impl Pokemon {
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Highest base stat, or 100 when there are none
    pub fn max_base_stat(&self) -> u32 {
        self.stats
            .iter()
            .map(|s| s.base_stat)
            .max()
            .unwrap_or(DEFAULT_MAX_BASE_STAT)
    }

    /// Look up a base stat by its API name
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.base_stat)
    }
}

/// A named base stat (e.g. "special-attack" = 65)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: u32,
}

impl PokemonStat {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
        }
    }

    /// Short label for stat bars ("SpAtk", "HP", ...)
    pub fn abbreviation(&self) -> String {
        stat_abbreviation(&self.name)
    }
}
