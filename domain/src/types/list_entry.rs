/// Lightweight projection of a Pokemon for list rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListEntry {
    /// Title-cased display name ("Bulbasaur")
    pub pokemon_name: String,
    pub image_url: String,
    pub number: i32,
}

impl ListEntry {
    /// Search predicate: case-insensitive substring on the name, or an
    /// exact match against the number rendered as a string.
    ///
    /// `query` is expected to be trimmed already.
    pub fn matches(&self, query: &str) -> bool {
        self.pokemon_name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || self.number.to_string() == query
    }
}
