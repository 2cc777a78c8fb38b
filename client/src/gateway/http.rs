use async_trait::async_trait;
use pokedex_protocol::{
    Endpoint, EvolutionChain, PokemonDetail, PokemonPage, PokemonSpecies, parse_evolution_chain,
    parse_pokemon_detail, parse_pokemon_page, parse_species,
};
use reqwest::{StatusCode, Url};

use super::PokeApi;
use crate::config::ClientConfig;
use crate::error::GatewayError;

const USER_AGENT: &str = concat!("pokedex-client/", env!("CARGO_PKG_VERSION"));

/// [`PokeApi`] over HTTPS with reqwest
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GatewayError::network)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `endpoint`. Every path segment is percent-encoded, so a
    /// name can never escape its segment.
    fn endpoint_url(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(endpoint.path_segments());
        }

        let pairs = endpoint.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// Issue a GET and return the body of a 2xx response
    async fn get(&self, endpoint: Endpoint) -> Result<String, GatewayError> {
        let url = self.endpoint_url(&endpoint);
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(GatewayError::network)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Unexpected response status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(GatewayError::network)
    }
}

#[async_trait]
impl PokeApi for HttpGateway {
    async fn pokemon_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, GatewayError> {
        let body = self.get(Endpoint::PokemonPage { offset, limit }).await?;
        Ok(parse_pokemon_page(&body)?)
    }

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonDetail, GatewayError> {
        let body = self.get(Endpoint::Pokemon(id_or_name.to_string())).await?;
        Ok(parse_pokemon_detail(&body)?)
    }

    async fn species(&self, id_or_name: &str) -> Result<PokemonSpecies, GatewayError> {
        let body = self.get(Endpoint::Species(id_or_name.to_string())).await?;
        Ok(parse_species(&body)?)
    }

    async fn evolution_chain(&self, id: i32) -> Result<EvolutionChain, GatewayError> {
        let body = self.get(Endpoint::EvolutionChain(id)).await?;
        parse_evolution_chain(&body).map_err(|e| {
            tracing::warn!(chain = id, error = %e, "Failed to parse evolution chain");
            e.into()
        })
    }
}
