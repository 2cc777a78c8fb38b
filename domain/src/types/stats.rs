//! Base stat names as used by the API

/// The six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// All stats in the order the API lists them
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Parse from API name (case-insensitive)
    pub fn from_api(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "hp" => Some(StatKind::Hp),
            "attack" => Some(StatKind::Attack),
            "defense" => Some(StatKind::Defense),
            "special-attack" => Some(StatKind::SpecialAttack),
            "special-defense" => Some(StatKind::SpecialDefense),
            "speed" => Some(StatKind::Speed),
            _ => None,
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::SpecialAttack => "special-attack",
            StatKind::SpecialDefense => "special-defense",
            StatKind::Speed => "speed",
        }
    }

    /// Short label for stat bars
    pub fn abbreviation(&self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "Atk",
            StatKind::Defense => "Def",
            StatKind::SpecialAttack => "SpAtk",
            StatKind::SpecialDefense => "SpDef",
            StatKind::Speed => "Spd",
        }
    }
}

/// Abbreviate any stat name. Unknown stats fall back to their first three
/// characters, uppercased.
pub fn stat_abbreviation(name: &str) -> String {
    match StatKind::from_api(name) {
        Some(kind) => kind.abbreviation().to_string(),
        None => name.chars().take(3).collect::<String>().to_uppercase(),
    }
}
