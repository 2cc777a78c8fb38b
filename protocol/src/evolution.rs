//! `/evolution-chain` payload

use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// `GET /api/v2/evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i32,
    pub chain: ChainLink,
}

/// One node of the evolution tree.
///
/// `evolves_to` is required: a node without it is a malformed chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
}
