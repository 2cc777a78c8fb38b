mod http;

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_protocol::{EvolutionChain, PokemonDetail, PokemonPage, PokemonSpecies};

use crate::error::GatewayError;

pub use http::HttpGateway;

/// Typed access to the PokeAPI endpoints the client needs.
///
/// [`HttpGateway`] is the real implementation; tests and embedders can
/// supply their own (an in-memory dex, a recorded fixture set, ...).
///
/// # Example
///
/// ```ignore
/// struct Offline { dex: Vec<NamedResource> }
///
/// #[async_trait]
/// impl PokeApi for Offline {
///     async fn pokemon_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, GatewayError> {
///         // ...
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// `GET /api/v2/pokemon?offset=O&limit=L`
    async fn pokemon_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, GatewayError>;

    /// `GET /api/v2/pokemon/{idOrName}`. `id_or_name` is sent as given.
    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonDetail, GatewayError>;

    /// `GET /api/v2/pokemon-species/{idOrName}`
    async fn species(&self, id_or_name: &str) -> Result<PokemonSpecies, GatewayError>;

    /// `GET /api/v2/evolution-chain/{id}`
    async fn evolution_chain(&self, id: i32) -> Result<EvolutionChain, GatewayError>;
}

#[async_trait]
impl<T: PokeApi + ?Sized> PokeApi for Arc<T> {
    async fn pokemon_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, GatewayError> {
        (**self).pokemon_page(offset, limit).await
    }

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonDetail, GatewayError> {
        (**self).pokemon(id_or_name).await
    }

    async fn species(&self, id_or_name: &str) -> Result<PokemonSpecies, GatewayError> {
        (**self).species(id_or_name).await
    }

    async fn evolution_chain(&self, id: i32) -> Result<EvolutionChain, GatewayError> {
        (**self).evolution_chain(id).await
    }
}
