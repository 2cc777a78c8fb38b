//! Transfer object -> domain mapping
//!
//! Everything here is pure: no I/O, no failure. Missing or malformed ids
//! degrade to the `-1` sentinel instead of erroring, so a single odd list
//! item never sinks a whole page.

mod text;

pub use text::{clean_flavor_text, title_case};

use pokedex_protocol::{PokemonDetail, PokemonListItem, PokemonSpecies, resource_id};

use crate::types::{ListEntry, Pokemon, PokemonStat, SpeciesSummary};

/// Official artwork sprite directory (`{base}/{id}.png`)
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Id used when a resource URL carries no numeric id
pub const UNKNOWN_ID: i32 = -1;

/// Maps API payloads into domain types
#[derive(Debug, Clone)]
pub struct Mapper {
    artwork_base_url: String,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(ARTWORK_BASE_URL)
    }
}

impl Mapper {
    pub fn new(artwork_base_url: impl Into<String>) -> Self {
        Self {
            artwork_base_url: artwork_base_url.into(),
        }
    }

    /// Synthesized artwork URL for an id
    pub fn artwork_url(&self, id: i32) -> String {
        format!("{}/{}.png", self.artwork_base_url.trim_end_matches('/'), id)
    }

    /// Map a list page item. List items carry no detail, so description,
    /// weight, height, stats and types are left empty.
    pub fn list_item_to_entity(&self, item: &PokemonListItem) -> Pokemon {
        let id = resource_id(&item.url).unwrap_or(UNKNOWN_ID);
        Pokemon {
            id,
            name: item.name.clone(),
            image_url: self.artwork_url(id),
            description: String::new(),
            weight: 0,
            height: 0,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Map a full detail payload
    pub fn detail_to_entity(&self, detail: &PokemonDetail) -> Pokemon {
        let image_url = detail
            .sprites
            .official_artwork()
            .map(str::to_string)
            .unwrap_or_else(|| self.artwork_url(detail.id));

        Pokemon {
            id: detail.id,
            name: detail.name.clone(),
            image_url,
            description: format!("Pokemon {} #{}", detail.name, detail.id),
            weight: detail.weight,
            height: detail.height,
            stats: detail
                .stats
                .iter()
                .map(|s| PokemonStat::new(s.stat.name.clone(), s.base_stat))
                .collect(),
            types: detail.types.iter().map(|t| t.kind.name.clone()).collect(),
        }
    }

    /// Map a species payload, picking flavor text in `language`
    pub fn species_to_summary(&self, species: &PokemonSpecies, language: &str) -> SpeciesSummary {
        SpeciesSummary {
            id: species.id,
            name: species.name.clone(),
            flavor_text: species
                .flavor_text(language)
                .map(clean_flavor_text)
                .unwrap_or_default(),
            evolution_chain_id: species.evolution_chain.as_ref().and_then(|link| link.id()),
        }
    }
}

/// Project a Pokemon into its list row
pub fn entity_to_list_entry(pokemon: &Pokemon) -> ListEntry {
    ListEntry {
        pokemon_name: title_case(&pokemon.name),
        image_url: pokemon.image_url.clone(),
        number: pokemon.id,
    }
}
