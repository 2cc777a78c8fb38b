
use serde::de::DeserializeOwned;

use crate::{ChainLink, EvolutionChain, ParseError, PokemonDetail, PokemonPage, PokemonSpecies};

/// Parse a `/pokemon` list page body
pub fn parse_pokemon_page(body: &str) -> Result<PokemonPage, ParseError> {
    parse_body(body)
}

/// Parse a `/pokemon/{idOrName}` body
pub fn parse_pokemon_detail(body: &str) -> Result<PokemonDetail, ParseError> {
    parse_body(body)
}

/// Parse a `/pokemon-species/{idOrName}` body
pub fn parse_species(body: &str) -> Result<PokemonSpecies, ParseError> {
    parse_body(body)
}

/// Parse an `/evolution-chain/{id}` body.
///
/// Beyond the JSON shape, every node must name its species.
pub fn parse_evolution_chain(body: &str) -> Result<EvolutionChain, ParseError> {
    let chain: EvolutionChain = parse_body(body)?;
    validate_link(&chain.chain)?;
    Ok(chain)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}

fn validate_link(link: &ChainLink) -> Result<(), ParseError> {
    if link.species.name.is_empty() {
        return Err(ParseError::InvalidFormat(
            "species name cannot be empty".to_string(),
        ));
    }
    link.evolves_to.iter().try_for_each(validate_link)
}
