use thiserror::Error;

pub mod endpoint;
pub mod evolution;
pub mod parse;
pub mod pokemon;
pub mod resource;
pub mod species;

pub use endpoint::Endpoint;
pub use evolution::{ChainLink, EvolutionChain};
pub use parse::{
    parse_evolution_chain, parse_pokemon_detail, parse_pokemon_page, parse_species,
};
pub use pokemon::{
    OfficialArtwork, OtherSprites, PokemonDetail, PokemonListItem, PokemonPage, Sprites, StatSlot,
    TypeSlot,
};
pub use resource::{ApiResource, NamedResource, resource_id};
pub use species::{FlavorTextEntry, PokemonSpecies};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Empty response body")]
    EmptyBody,
}
