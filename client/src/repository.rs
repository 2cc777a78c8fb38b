//! Gateway + mapper composition
//!
//! The repository is the only place transport errors are turned into
//! user-facing messages. Lookups by query never fail past this boundary:
//! every failure ends in [`UiState::Error`].

use pokedex_domain::{Mapper, Pokemon, SpeciesSummary, UiState};
use pokedex_protocol::EvolutionChain;

use crate::config::ClientConfig;
use crate::error::GatewayError;
use crate::gateway::PokeApi;

pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found";

pub const CHAIN_NOT_FOUND_MESSAGE: &str = "Evolution chain not found";

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

pub struct Repository<G> {
    api: G,
    mapper: Mapper,
    language: String,
}

impl<G: PokeApi> Repository<G> {
    pub fn new(api: G, config: &ClientConfig) -> Self {
        Self {
            api,
            mapper: Mapper::new(config.artwork_base_url.clone()),
            language: config.language.clone(),
        }
    }

    /// The underlying gateway
    pub fn api(&self) -> &G {
        &self.api
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// Fetch and map one list page. Never returns more than `limit` items.
    pub async fn list_page(&self, offset: u32, limit: u32) -> Result<Vec<Pokemon>, GatewayError> {
        tracing::debug!(offset, limit, "Fetching pokemon page");
        let page = self.api.pokemon_page(offset, limit).await?;

        Ok(page
            .results
            .iter()
            .take(limit as usize)
            .map(|item| self.mapper.list_item_to_entity(item))
            .collect())
    }

    /// Look a Pokemon up by user-entered name or id.
    ///
    /// The query is trimmed and lowercased first, so "Pikachu" and
    /// "  PIKACHU  " hit the same resource.
    pub async fn by_query(&self, query: &str) -> UiState<Pokemon> {
        match self.fetch_pokemon(query).await {
            Ok(pokemon) => UiState::Success(pokemon),
            Err(e) => {
                tracing::debug!(query, error = %e, "Pokemon lookup failed");
                UiState::Error(describe(&e))
            }
        }
    }

    /// Species information (flavor text, evolution chain id) by name or id
    pub async fn species(&self, query: &str) -> UiState<SpeciesSummary> {
        match self.fetch_species(query).await {
            Ok(summary) => UiState::Success(summary),
            Err(e) => {
                tracing::debug!(query, error = %e, "Species lookup failed");
                UiState::Error(describe(&e))
            }
        }
    }

    pub async fn fetch_pokemon(&self, query: &str) -> Result<Pokemon, GatewayError> {
        let key = normalize_query(query)?;
        let detail = self.api.pokemon(&key).await?;
        Ok(self.mapper.detail_to_entity(&detail))
    }

    pub async fn fetch_species(&self, query: &str) -> Result<SpeciesSummary, GatewayError> {
        let key = normalize_query(query)?;
        let species = self.api.species(&key).await?;
        Ok(self.mapper.species_to_summary(&species, &self.language))
    }

    pub async fn evolution_chain(&self, id: i32) -> Result<EvolutionChain, GatewayError> {
        tracing::debug!(chain = id, "Fetching evolution chain");
        self.api.evolution_chain(id).await
    }
}

/// Trim + lowercase. A blank query, or one that is a relative path
/// segment, can only ever be "not found", so it never reaches the network.
fn normalize_query(query: &str) -> Result<String, GatewayError> {
    let key = query.trim().to_lowercase();
    if key.is_empty() || key == "." || key == ".." {
        return Err(GatewayError::NotFound(query.to_string()));
    }
    Ok(key)
}

/// User-facing message for a failed Pokemon lookup
pub fn describe(error: &GatewayError) -> String {
    describe_as(error, NOT_FOUND_MESSAGE)
}

/// User-facing message for a gateway failure, with `not_found` standing in
/// for a 404 on whatever resource was requested
pub fn describe_as(error: &GatewayError, not_found: &str) -> String {
    if error.is_not_found() {
        return not_found.to_string();
    }

    let message = error.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
