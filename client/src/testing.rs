//! In-memory gateway and a canned HTTP responder for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pokedex_protocol::{
    ApiResource, EvolutionChain, FlavorTextEntry, NamedResource, PokemonDetail, PokemonPage,
    PokemonSpecies, Sprites, StatSlot, TypeSlot, parse_evolution_chain,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

use crate::error::GatewayError;
use crate::gateway::PokeApi;

#[derive(Default)]
pub(crate) struct FakeApi {
    dex: Vec<NamedResource>,
    details: HashMap<String, PokemonDetail>,
    species: HashMap<String, PokemonSpecies>,
    /// Raw chain bodies, so malformed payloads can be scripted
    chains: HashMap<i32, String>,
    failing_pages: AtomicUsize,
    ignore_limit: bool,
    offline: bool,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

pub(crate) fn named(name: &str, url: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: url.to_string(),
    }
}

pub(crate) fn detail(id: i32, name: &str) -> PokemonDetail {
    PokemonDetail {
        id,
        name: name.to_string(),
        sprites: Sprites::default(),
        weight: 60,
        height: 4,
        stats: vec![StatSlot {
            base_stat: 35,
            effort: 0,
            stat: named("hp", "https://pokeapi.co/api/v2/stat/1/"),
        }],
        types: vec![TypeSlot {
            slot: 1,
            kind: named("electric", "https://pokeapi.co/api/v2/type/13/"),
        }],
    }
}

/// JSON body for a linear chain `names[0] -> names[1] -> ...`
pub(crate) fn linear_chain_body(id: i32, names: &[&str]) -> String {
    let mut link = String::new();
    for name in names.iter().rev() {
        let children = if link.is_empty() {
            String::new()
        } else {
            link.clone()
        };
        link = format!(
            r#"{{"species": {{"name": "{}", "url": ""}}, "evolves_to": [{}]}}"#,
            name, children
        );
    }
    format!(r#"{{"id": {}, "chain": {}}}"#, id, link)
}

impl FakeApi {
    /// A dex whose ids follow list order, starting at 1
    pub fn with_names(names: &[&str]) -> Self {
        let dex = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                named(name, &format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1))
            })
            .collect();
        Self {
            dex,
            ..Self::default()
        }
    }

    /// A dex of `count` generated names ("mon-1", "mon-2", ...)
    pub fn with_count(count: usize) -> Self {
        let names: Vec<String> = (1..=count).map(|n| format!("mon-{}", n)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        Self::with_names(&refs)
    }

    pub fn with_detail(mut self, detail: PokemonDetail) -> Self {
        self.details.insert(detail.id.to_string(), detail.clone());
        self.details.insert(detail.name.clone(), detail);
        self
    }

    pub fn with_chain(mut self, id: i32, body: impl Into<String>) -> Self {
        self.chains.insert(id, body.into());
        self
    }

    pub fn with_species_chain(mut self, id: i32, name: &str, flavor: &str, chain_id: i32) -> Self {
        let species = PokemonSpecies {
            id,
            name: name.to_string(),
            flavor_text_entries: vec![FlavorTextEntry {
                flavor_text: flavor.to_string(),
                language: named("en", ""),
                version: None,
            }],
            evolution_chain: Some(ApiResource {
                url: format!("https://pokeapi.co/api/v2/evolution-chain/{}/", chain_id),
            }),
        };
        self.species.insert(id.to_string(), species.clone());
        self.species.insert(name.to_string(), species);
        self
    }

    pub fn with_species(mut self, species: PokemonSpecies) -> Self {
        self.species.insert(species.name.clone(), species);
        self
    }

    /// Fail the next `count` page requests with a network error
    pub fn failing_pages(self, count: usize) -> Self {
        self.failing_pages.store(count, Ordering::SeqCst);
        self
    }

    /// Return the whole remaining dex regardless of `limit`
    pub fn ignoring_limit(mut self) -> Self {
        self.ignore_limit = true;
        self
    }

    /// Every request fails with a network error
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Page requests wait on `gate` before answering
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.offline {
            return Err(GatewayError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PokeApi for FakeApi {
    async fn pokemon_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, GatewayError> {
        self.record(format!("page {} {}", offset, limit))?;

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let failing = self.failing_pages.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_pages.store(failing - 1, Ordering::SeqCst);
            return Err(GatewayError::Network("connection reset".to_string()));
        }

        let take = if self.ignore_limit {
            usize::MAX
        } else {
            limit as usize
        };
        Ok(PokemonPage {
            count: Some(self.dex.len() as u32),
            next: None,
            previous: None,
            results: self
                .dex
                .iter()
                .skip(offset as usize)
                .take(take)
                .cloned()
                .collect(),
        })
    }

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonDetail, GatewayError> {
        self.record(format!("pokemon {}", id_or_name))?;
        self.details
            .get(id_or_name)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id_or_name.to_string()))
    }

    async fn species(&self, id_or_name: &str) -> Result<PokemonSpecies, GatewayError> {
        self.record(format!("species {}", id_or_name))?;
        self.species
            .get(id_or_name)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id_or_name.to_string()))
    }

    async fn evolution_chain(&self, id: i32) -> Result<EvolutionChain, GatewayError> {
        self.record(format!("chain {}", id))?;
        let body = self
            .chains
            .get(&id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;
        Ok(parse_evolution_chain(body)?)
    }
}

type Responder = dyn Fn(&str) -> (u16, String) + Send + Sync;

/// Plain HTTP/1.1 server on an ephemeral 127.0.0.1 port.
///
/// Every request gets `respond(target)` and closes the connection.
/// Request targets (path and query) are logged in arrival order.
pub(crate) struct TestServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                tokio::spawn(answer(socket, respond.clone(), log.clone()));
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn answer(mut socket: TcpStream, respond: Arc<Responder>, log: Arc<Mutex<Vec<String>>>) {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&head);
    let target = request.split_whitespace().nth(1).unwrap_or_default().to_string();
    log.lock().unwrap().push(target.clone());

    let (status, body) = respond(&target);
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
