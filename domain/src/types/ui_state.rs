//! Tagged load result shared by the controllers

/// Outcome of an asynchronous load, as observed by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiState<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Names of the other members of an evolution chain
pub type EvolutionState = UiState<Vec<String>>;

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            UiState::Success(data) => Some(data),
            UiState::Loading | UiState::Error(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            UiState::Success(data) => Some(data),
            UiState::Loading | UiState::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            UiState::Loading | UiState::Success(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> UiState<U> {
        match self {
            UiState::Loading => UiState::Loading,
            UiState::Success(data) => UiState::Success(f(data)),
            UiState::Error(message) => UiState::Error(message),
        }
    }
}

impl UiState<Vec<String>> {
    /// The evolution to jump straight to, when exactly one remains
    pub fn next_evolution(&self) -> Option<&str> {
        match self.data().map(Vec::as_slice) {
            Some([only]) => Some(only.as_str()),
            _ => None,
        }
    }
}
