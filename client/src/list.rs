//! Paginated, searchable Pokemon list
//!
//! Pagination appends pages of [`ListEntry`] to an ever-growing list. Search
//! is purely client-side: the first non-empty query snapshots the loaded
//! list, every later keystroke filters that snapshot, and an empty query
//! ends the session.

use std::sync::Arc;

use pokedex_domain::{ListEntry, entity_to_list_entry};
use tokio::sync::watch;

use crate::gateway::PokeApi;
use crate::repository::{Repository, describe};

/// Observable list state. Published on every transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    /// Everything pagination has produced, in API order
    loaded: Vec<ListEntry>,
    /// Present while a search session is active
    search: Option<SearchSession>,
    /// Next page to request
    page: u32,
    end_reached: bool,
    is_loading: bool,
    load_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct SearchSession {
    /// `loaded` as it was when the session started
    snapshot: Vec<ListEntry>,
    results: Vec<ListEntry>,
}

impl ListState {
    /// Entries to display: search results while searching, the loaded list
    /// otherwise
    pub fn entries(&self) -> &[ListEntry] {
        match &self.search {
            Some(session) => &session.results,
            None => &self.loaded,
        }
    }

    /// Page cursor: number of pages loaded so far
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn end_reached(&self) -> bool {
        self.end_reached
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed load, cleared by the next successful one
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// The list captured when the current search session started
    pub fn snapshot(&self) -> Option<&[ListEntry]> {
        self.search.as_ref().map(|s| s.snapshot.as_slice())
    }

    /// Whether a UI showing rows up to `last_visible_index` should ask for
    /// the next page
    pub fn should_load_more(&self, last_visible_index: usize) -> bool {
        last_visible_index.saturating_add(1) >= self.entries().len()
            && !self.end_reached
            && !self.is_loading
            && !self.is_searching()
    }
}

/// What a call to [`ListController::load_next_page`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was appended
    Loaded { count: usize },
    /// A load was already in flight, or the end was reached
    Skipped,
    /// The page failed; the message is also in [`ListState::load_error`]
    Failed(String),
}

pub struct ListController<G> {
    repository: Arc<Repository<G>>,
    page_size: u32,
    state: watch::Sender<ListState>,
}

impl<G: PokeApi> ListController<G> {
    /// Create an idle controller. Nothing is fetched until the first
    /// [`load_next_page`](Self::load_next_page).
    pub fn new(repository: Arc<Repository<G>>, page_size: u32) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            repository,
            page_size: page_size.max(1),
            state,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Current state
    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Load the next page.
    ///
    /// No-op while another load is in flight or once the end was reached.
    /// On failure the cursor stays put, so calling again retries the same
    /// page.
    pub async fn load_next_page(&self) -> LoadOutcome {
        let mut page = 0;
        let started = self.state.send_if_modified(|state| {
            if state.is_loading || state.end_reached {
                return false;
            }
            state.is_loading = true;
            page = state.page;
            true
        });

        if !started {
            tracing::trace!("Page load skipped");
            return LoadOutcome::Skipped;
        }

        let _guard = LoadingGuard { state: &self.state };
        let limit = self.page_size;
        let Some(offset) = page_offset(page, limit) else {
            tracing::warn!(page, limit, "Page offset out of range");
            let message = format!("Page {} is beyond the addressable range", page);

            self.state.send_modify(|state| {
                state.load_error = Some(message.clone());
                state.is_loading = false;
            });

            return LoadOutcome::Failed(message);
        };

        match self.repository.list_page(offset, limit).await {
            Ok(pokemon) => {
                let count = pokemon.len();
                let entries: Vec<ListEntry> = pokemon.iter().map(entity_to_list_entry).collect();

                self.state.send_modify(|state| {
                    state.end_reached = count < limit as usize;
                    state.loaded.extend(entries);
                    state.page += 1;
                    state.load_error = None;
                    state.is_loading = false;
                });

                tracing::debug!(page, count, "Loaded page");
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Failed to load page");
                let message = describe(&e);

                self.state.send_modify(|state| {
                    state.load_error = Some(message.clone());
                    state.is_loading = false;
                });

                LoadOutcome::Failed(message)
            }
        }
    }

    /// Filter the list by name substring (case-insensitive) or exact number.
    ///
    /// The first non-empty query starts a session by snapshotting the
    /// loaded list; later queries filter that snapshot only. An empty
    /// query ends the session and shows the loaded list again.
    pub fn search(&self, query: &str) {
        self.state.send_if_modified(|state| {
            if query.is_empty() {
                return state.search.take().is_some();
            }

            let needle = query.trim();
            let loaded = &state.loaded;
            let session = state.search.get_or_insert_with(|| SearchSession {
                snapshot: loaded.clone(),
                results: Vec::new(),
            });
            session.results = session
                .snapshot
                .iter()
                .filter(|entry| entry.matches(needle))
                .cloned()
                .collect();
            true
        });
    }
}

/// Offset of the first item on `page`, if it fits the API's range
fn page_offset(page: u32, limit: u32) -> Option<u32> {
    page.checked_mul(limit)
}

/// Clears the loading flag if a load future is dropped mid-flight
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ListState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            let was_loading = state.is_loading;
            state.is_loading = false;
            was_loading
        });
    }
}
