/// Requests the client can issue against the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// /api/v2/pokemon?offset=O&limit=L
    PokemonPage { offset: u32, limit: u32 },

    /// /api/v2/pokemon/ID_OR_NAME
    Pokemon(String),

    /// /api/v2/pokemon-species/ID_OR_NAME
    Species(String),

    /// /api/v2/evolution-chain/ID
    EvolutionChain(i32),
}

impl Endpoint {
    /// Path below the API host, one unescaped entry per segment.
    ///
    /// Caller-supplied names are always a single segment; escaping is left
    /// to whoever builds the URL.
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = vec!["api".to_string(), "v2".to_string()];
        match self {
            Self::PokemonPage { .. } => segments.push("pokemon".to_string()),
            Self::Pokemon(id_or_name) => {
                segments.push("pokemon".to_string());
                segments.push(id_or_name.clone());
            }
            Self::Species(id_or_name) => {
                segments.push("pokemon-species".to_string());
                segments.push(id_or_name.clone());
            }
            Self::EvolutionChain(id) => {
                segments.push("evolution-chain".to_string());
                segments.push(id.to_string());
            }
        }
        segments
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::PokemonPage { offset, limit } => {
                vec![("offset", offset.to_string()), ("limit", limit.to_string())]
            }
            _ => Vec::new(),
        }
    }
}
