//! Domain models and pure mapping for a PokeAPI browser.
//!
//! # Overview
//!
//! `pokedex-domain` sits between `pokedex-protocol` (wire payloads) and the
//! client (network + controllers):
//!
//! ```text
//! pokedex-protocol (transfer objects)
//!        │
//!        ▼
//! pokedex-domain (domain types + mapping) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-client (gateway, repository, controllers)
//! ```
//!
//! # Main Types
//!
//! - [`Pokemon`] - fully mapped record with stats and types
//! - [`ListEntry`] - display projection used by the paginated list
//! - [`UiState`] / [`EvolutionState`] - tagged Loading / Success / Error
//! - [`Mapper`] - DTO -> domain conversion
//! - [`evolution_names`] - evolution tree flattening

pub mod evolution;
pub mod mapper;
pub mod types;

pub use evolution::{distinct_names, evolution_names, flatten_chain};
pub use mapper::{ARTWORK_BASE_URL, Mapper, UNKNOWN_ID, entity_to_list_entry, title_case};
pub use types::{
    EvolutionState, ListEntry, Pokemon, PokemonStat, SpeciesSummary, StatKind, UiState,
    stat_abbreviation,
};
