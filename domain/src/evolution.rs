//! Evolution chain flattening
//!
//! A chain is a tree: each node names a species and lists the species it
//! can evolve into. The UI wants a flat list of "other" evolutions, so the
//! tree is walked pre-order (parent before children, children in API
//! order), deduplicated keeping first occurrences, and stripped of the
//! Pokemon currently on screen. Order matters: when a single name is left,
//! the UI navigates to it directly.

use std::collections::HashSet;

use pokedex_protocol::{ChainLink, EvolutionChain};

/// Species names of the whole tree, pre-order
pub fn flatten_chain(root: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(root, &mut names);
    names
}

fn collect_names(link: &ChainLink, names: &mut Vec<String>) {
    names.push(link.species.name.clone());
    for child in &link.evolves_to {
        collect_names(child, names);
    }
}

/// Drop repeated names, keeping the first occurrence of each
pub fn distinct_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// The other members of `chain`, as shown on `current_name`'s detail screen
pub fn evolution_names(chain: &EvolutionChain, current_name: &str) -> Vec<String> {
    let current = current_name.to_lowercase();
    distinct_names(flatten_chain(&chain.chain))
        .into_iter()
        .filter(|name| *name != current)
        .collect()
}
