//! Call history screen

use crate::error::{Error, Result};
use crate::models::{Call, CallStatus};
use crate::navigation::{CallParams, Navigator, Route};
use crate::search::{filter_calls, group_calls_by_day, CallTab, Section};
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};
use std::sync::Arc;

pub struct CallsScreen {
    store: Arc<DataStore>,
    navigator: Navigator,
    calls: Vec<Call>,
    tab: CallTab,
}

impl CallsScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator) -> Self {
        let calls = store.get_calls();
        Self {
            store,
            navigator,
            calls,
            tab: CallTab::All,
        }
    }

    pub fn select_tab(&mut self, tab: CallTab) {
        self.tab = tab;
    }

    pub fn visible(&self) -> Vec<Call> {
        filter_calls(&self.calls, self.tab)
    }

    pub fn sections<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<Section<Call>>
    where
        Tz::Offset: std::fmt::Display,
    {
        group_calls_by_day(self.visible(), now)
    }

    pub fn missed_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| c.status == CallStatus::Missed)
            .count()
    }

    /// Drops a call from this screen's history. The store keeps it.
    pub fn delete_call(&mut self, call_id: &str) -> bool {
        let before = self.calls.len();
        self.calls.retain(|c| c.id != call_id);
        self.calls.len() != before
    }

    /// Calls the other party back with the same call type.
    pub fn call_back(&self, call_id: &str) -> Result<CallParams> {
        let call = self
            .calls
            .iter()
            .find(|c| c.id == call_id)
            .ok_or_else(|| Error::CallNotFound(call_id.to_string()))?;

        let user = self.store.user_for_call(call).ok_or_else(|| {
            Error::UserNotFound(call.other_participant().unwrap_or_default().to_string())
        })?;

        let params = CallParams {
            name: user.name,
            avatar: user.avatar,
            call_type: call.call_type,
            is_incoming: false,
        };
        self.navigator.navigate(Route::for_call(params.clone()));
        Ok(params)
    }
}
