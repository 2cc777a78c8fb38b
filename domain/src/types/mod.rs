//! Domain types handed to the UI layer

mod list_entry;
mod pokemon;
mod species;
mod stats;
mod ui_state;

pub use list_entry::ListEntry;
pub use pokemon::{Pokemon, PokemonStat};
pub use species::SpeciesSummary;
pub use stats::{StatKind, stat_abbreviation};
pub use ui_state::{EvolutionState, UiState};
