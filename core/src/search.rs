//! Filtering and grouping for the list screens
//!
//! Plain case-insensitive substring matching over in-memory collections. Every
//! query change recomputes the whole view.

use crate::format::day_label;
use crate::models::*;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

/// Titled bucket of a sectioned list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactTab {
    #[default]
    All,
    Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallTab {
    #[default]
    All,
    Missed,
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// Contacts
// ============================================================================

/// Contacts on the selected tab whose name (any case) or phone contains `query`.
pub fn filter_contacts(contacts: &[Contact], query: &str, tab: ContactTab) -> Vec<Contact> {
    let query = query.trim();
    contacts
        .iter()
        .filter(|c| tab == ContactTab::All || c.is_favorite)
        .filter(|c| {
            query.is_empty() || contains_ignore_case(&c.name, query) || c.phone.contains(query)
        })
        .cloned()
        .collect()
}

/// Buckets contacts by upper-cased first letter, buckets in ascending order.
/// Order inside a bucket follows the input.
pub fn group_contacts_by_letter(contacts: Vec<Contact>) -> Vec<Section<Contact>> {
    let mut grouped: BTreeMap<String, Vec<Contact>> = BTreeMap::new();

    for contact in contacts {
        let letter = contact
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "#".to_string());
        grouped.entry(letter).or_default().push(contact);
    }

    grouped
        .into_iter()
        .map(|(title, items)| Section { title, items })
        .collect()
}

// ============================================================================
// Calls
// ============================================================================

pub fn filter_calls(calls: &[Call], tab: CallTab) -> Vec<Call> {
    calls
        .iter()
        .filter(|c| tab == CallTab::All || c.status == CallStatus::Missed)
        .cloned()
        .collect()
}

/// Buckets calls by day relative to `now`. Buckets appear in the order their
/// first call appears in the input.
pub fn group_calls_by_day<Tz: TimeZone>(calls: Vec<Call>, now: &DateTime<Tz>) -> Vec<Section<Call>>
where
    Tz::Offset: std::fmt::Display,
{
    let tz = now.timezone();
    let mut sections: Vec<Section<Call>> = Vec::new();

    for call in calls {
        let title = day_label(&call.timestamp.with_timezone(&tz), now);
        match sections.iter_mut().find(|s| s.title == title) {
            Some(section) => section.items.push(call),
            None => sections.push(Section {
                title,
                items: vec![call],
            }),
        }
    }

    sections
}

// ============================================================================
// Users
// ============================================================================

/// Users matching name or username (any case) or phone. Blank query keeps all.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let query = query.trim();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || contains_ignore_case(&u.name, query)
                || contains_ignore_case(&u.username, query)
                || u.phone.contains(query)
        })
        .cloned()
        .collect()
}

// ============================================================================
// Global search
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub chats: Vec<Chat>,
    pub contacts: Vec<User>,
    pub messages: Vec<Message>,
}

impl SearchResults {
    /// The "no results" state: all three sections empty at once.
    pub fn is_empty(&self) -> bool {
        self.chats.is_empty() && self.contacts.is_empty() && self.messages.is_empty()
    }

    pub fn total(&self) -> usize {
        self.chats.len() + self.contacts.len() + self.messages.len()
    }
}

/// Searches chats, users and messages independently. A blank query yields
/// empty results rather than a default listing.
pub fn global_search(
    chats: &[Chat],
    users: &[User],
    messages: &[Message],
    query: &str,
) -> SearchResults {
    let query = query.trim();
    if query.is_empty() {
        return SearchResults::default();
    }

    let user_matches = |id: &str| {
        users
            .iter()
            .any(|u| u.id == id && contains_ignore_case(&u.name, query))
    };

    let chats = chats
        .iter()
        .filter(|chat| {
            chat.name
                .as_deref()
                .is_some_and(|name| contains_ignore_case(name, query))
                || chat.participants.iter().any(|p| user_matches(p))
        })
        .cloned()
        .collect();

    let contacts = users
        .iter()
        .filter(|u| {
            contains_ignore_case(&u.name, query)
                || contains_ignore_case(&u.username, query)
                || contains_ignore_case(&u.email, query)
        })
        .cloned()
        .collect();

    let messages = messages
        .iter()
        .filter(|m| contains_ignore_case(&m.text, query))
        .cloned()
        .collect();

    SearchResults {
        chats,
        contacts,
        messages,
    }
}
