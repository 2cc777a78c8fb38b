/// Species-level information: flavor text and the evolution chain it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesSummary {
    pub id: i32,
    pub name: String,
    /// Flavor text with line/page breaks collapsed to single spaces.
    /// Empty when no entry exists for the requested language.
    pub flavor_text: String,
    pub evolution_chain_id: Option<i32>,
}
