//! Async PokeAPI client.
//!
//! Build one [`Pokedex`] at startup and hand out controllers from it:
//!
//! ```ignore
//! let dex = Pokedex::new(ClientConfig::from_env())?;
//!
//! let list = dex.list_controller();
//! list.load_next_page().await;
//! list.search("char");
//!
//! let detail = dex.detail_controller();
//! let pikachu = detail.get_detail("Pikachu").await;
//! detail.load_species_evolutions("pikachu", "pikachu").await;
//! ```

mod config;
mod detail;
mod error;
mod gateway;
mod list;
mod repository;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use config::{ClientConfig, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, POKEAPI_URL};
pub use detail::DetailController;
pub use error::GatewayError;
pub use gateway::{HttpGateway, PokeApi};
pub use list::{ListController, ListState, LoadOutcome};
pub use repository::{
    CHAIN_NOT_FOUND_MESSAGE, NOT_FOUND_MESSAGE, Repository, UNKNOWN_ERROR_MESSAGE, describe, describe_as,
};

pub use pokedex_domain::{EvolutionState, ListEntry, Pokemon, PokemonStat, SpeciesSummary, UiState};

/// Composition root: one gateway and repository shared by every controller
pub struct Pokedex<G = HttpGateway> {
    repository: Arc<Repository<G>>,
    config: ClientConfig,
}

impl Pokedex<HttpGateway> {
    /// Client for the HTTP API described by `config`
    pub fn new(config: ClientConfig) -> Result<Self, GatewayError> {
        let gateway = HttpGateway::new(&config)?;
        tracing::info!(base_url = %config.base_url, page_size = config.page_size, "Pokedex client ready");
        Ok(Self::with_gateway(gateway, config))
    }

    /// Client for the public API with default settings
    pub fn connect_default() -> Result<Self, GatewayError> {
        Self::new(ClientConfig::default())
    }
}

impl<G: PokeApi> Pokedex<G> {
    /// Client over any gateway implementation
    pub fn with_gateway(gateway: G, config: ClientConfig) -> Self {
        let repository = Arc::new(Repository::new(gateway, &config));
        Self { repository, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<Repository<G>> {
        &self.repository
    }

    /// A fresh list controller using the configured page size
    pub fn list_controller(&self) -> ListController<G> {
        ListController::new(Arc::clone(&self.repository), self.config.page_size)
    }

    pub fn detail_controller(&self) -> DetailController<G> {
        DetailController::new(Arc::clone(&self.repository))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[tokio::test]
    async fn test_controllers_share_repository() {
        let dex = Pokedex::with_gateway(
            FakeApi::with_names(&["bulbasaur", "ivysaur", "venusaur"]),
            ClientConfig::default().with_page_size(2),
        );

        let list = dex.list_controller();
        let other = dex.list_controller();
        assert_eq!(list.page_size(), 2);

        list.load_next_page().await;
        other.load_next_page().await;

        // Controllers own their state; the gateway sees both requests
        assert_eq!(list.state().entries().len(), 2);
        assert_eq!(other.state().entries().len(), 2);
        assert_eq!(dex.repository().api().calls(), vec!["page 0 2", "page 0 2"]);
        assert_eq!(Arc::strong_count(dex.repository()), 3);
    }

    #[test]
    fn test_http_client_builds() {
        let dex = Pokedex::connect_default().unwrap();
        assert_eq!(dex.config().base_url, POKEAPI_URL);
    }
}
