use std::sync::Arc;

use pokedex_domain::{EvolutionState, Pokemon, SpeciesSummary, UiState, evolution_names};
use tokio::sync::watch;

use crate::gateway::PokeApi;
use crate::repository::{CHAIN_NOT_FOUND_MESSAGE, Repository, describe, describe_as};

/// Detail screen controller: one Pokemon plus its evolution chain.
///
/// Evolution loads are re-entrant. Each call resets the published state to
/// `Loading` and the last call to finish wins; in-flight requests are
/// never cancelled.
pub struct DetailController<G> {
    repository: Arc<Repository<G>>,
    evolutions: watch::Sender<EvolutionState>,
}

impl<G: PokeApi> DetailController<G> {
    pub fn new(repository: Arc<Repository<G>>) -> Self {
        let (evolutions, _) = watch::channel(UiState::Success(Vec::new()));
        Self {
            repository,
            evolutions,
        }
    }

    pub async fn get_detail(&self, name_or_id: &str) -> UiState<Pokemon> {
        self.repository.by_query(name_or_id).await
    }

    pub async fn get_species(&self, name_or_id: &str) -> UiState<SpeciesSummary> {
        self.repository.species(name_or_id).await
    }

    pub fn evolutions(&self) -> EvolutionState {
        self.evolutions.borrow().clone()
    }

    pub fn subscribe_evolutions(&self) -> watch::Receiver<EvolutionState> {
        self.evolutions.subscribe()
    }

    /// Load evolution chain `id` and publish the names of its members other
    /// than `current_name`. Returns the published state.
    pub async fn load_evolutions(&self, id: i32, current_name: &str) -> EvolutionState {
        self.evolutions.send_replace(UiState::Loading);

        let state = match self.repository.evolution_chain(id).await {
            Ok(chain) => UiState::Success(evolution_names(&chain, current_name)),
            Err(e) => {
                tracing::warn!(chain = id, error = %e, "Failed to load evolutions");
                UiState::Error(describe_as(&e, CHAIN_NOT_FOUND_MESSAGE))
            }
        };

        self.publish(state)
    }

    /// Like [`load_evolutions`](Self::load_evolutions), but resolves the
    /// chain id from the species first. Chain ids are not dex ids, so this
    /// is the lookup to use when only the Pokemon is known.
    pub async fn load_species_evolutions(&self, query: &str, current_name: &str) -> EvolutionState {
        self.evolutions.send_replace(UiState::Loading);

        let chain_id = match self.repository.fetch_species(query).await {
            Ok(SpeciesSummary {
                evolution_chain_id: Some(id),
                ..
            }) => id,
            Ok(species) => {
                tracing::debug!(species = %species.name, "Species has no evolution chain");
                return self.publish(UiState::Success(Vec::new()));
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Failed to resolve species");
                return self.publish(UiState::Error(describe(&e)));
            }
        };

        self.load_evolutions(chain_id, current_name).await
    }

    fn publish(&self, state: EvolutionState) -> EvolutionState {
        self.evolutions.send_replace(state.clone());
        state
    }
}
