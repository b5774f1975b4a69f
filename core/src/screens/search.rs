//! Global search screen
//!
//! Each query change schedules one search after a short delay; a newer query
//! replaces the pending one. Clearing the query clears results immediately.

use crate::config::TimingConfig;
use crate::error::{Error, Result};
use crate::models::Message;
use crate::navigation::{ChatParams, Navigator, Route};
use crate::screens::chat_list::chat_params;
use crate::search::{global_search, SearchResults};
use crate::store::DataStore;
use crate::timer::TaskSet;
use parking_lot::Mutex;
use std::sync::Arc;

const SEARCH_TASK: &str = "search";

struct SearchState {
    query: String,
    results: SearchResults,
    is_searching: bool,
    tasks: TaskSet,
}

pub struct GlobalSearchScreen {
    store: Arc<DataStore>,
    navigator: Navigator,
    timings: TimingConfig,
    state: Arc<Mutex<SearchState>>,
}

impl GlobalSearchScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator, timings: TimingConfig) -> Self {
        Self {
            store,
            navigator,
            timings,
            state: Arc::new(Mutex::new(SearchState {
                query: String::new(),
                results: SearchResults::default(),
                is_searching: false,
                tasks: TaskSet::new(),
            })),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let mut guard = self.state.lock();
        guard.query = query.clone();

        if query.trim().is_empty() {
            guard.tasks.cancel(SEARCH_TASK);
            guard.results = SearchResults::default();
            guard.is_searching = false;
            return;
        }

        guard.is_searching = true;
        let weak = Arc::downgrade(&self.state);
        let store = self.store.clone();
        guard
            .tasks
            .once(SEARCH_TASK, self.timings.search_delay(), move || {
                let results = global_search(
                    &store.get_chats(),
                    &store.get_users(),
                    &store.get_all_messages(),
                    &query,
                );
                log::debug!("Search {:?}: {} results", query, results.total());

                if let Some(state) = weak.upgrade() {
                    let mut guard = state.lock();
                    if guard.query == query {
                        guard.results = results;
                        guard.is_searching = false;
                    }
                }
            });
    }

    pub fn clear(&self) {
        self.set_query(String::new());
    }

    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    pub fn results(&self) -> SearchResults {
        self.state.lock().results.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.state.lock().is_searching
    }

    /// Whether the "no results" notice applies: a settled, non-blank query with
    /// all three sections empty.
    pub fn shows_no_results(&self) -> bool {
        let guard = self.state.lock();
        !guard.query.trim().is_empty() && !guard.is_searching && guard.results.is_empty()
    }

    pub fn open_chat(&self, chat_id: &str) -> Result<ChatParams> {
        let chat = self
            .store
            .get_chat(chat_id)
            .ok_or_else(|| Error::ChatNotFound(chat_id.to_string()))?;
        let params = chat_params(&self.store, &chat).ok_or_else(|| {
            Error::UserNotFound(chat.other_participant().unwrap_or_default().to_string())
        })?;

        self.navigator.navigate(Route::Chat(params.clone()));
        Ok(params)
    }

    pub fn open_contact(&self, contact_id: &str) {
        self.navigator.navigate(Route::ContactProfile {
            contact_id: contact_id.to_string(),
        });
    }

    pub fn open_message(&self, message: &Message) -> Result<ChatParams> {
        self.open_chat(&message.chat_id)
    }
}

impl Drop for GlobalSearchScreen {
    fn drop(&mut self) {
        self.state.lock().tasks.cancel_all();
    }
}
