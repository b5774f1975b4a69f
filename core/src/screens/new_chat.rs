//! New chat picker

use crate::error::{Error, Result};
use crate::models::{ChatType, User};
use crate::navigation::{ChatParams, Navigator, Route};
use crate::search::filter_users;
use crate::store::DataStore;
use std::sync::Arc;

const RECENT_CHAT_LIMIT: usize = 5;

pub struct NewChatScreen {
    store: Arc<DataStore>,
    navigator: Navigator,
    contacts: Vec<User>,
    recent: Vec<User>,
    query: String,
}

impl NewChatScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator) -> Self {
        let current = store.get_current_user();
        let contacts: Vec<User> = store
            .get_users()
            .into_iter()
            .filter(|u| u.id != current.id)
            .collect();

        let mut recent: Vec<User> = Vec::new();
        for chat in store.get_chats().iter().take(RECENT_CHAT_LIMIT) {
            let partner = contacts.iter().find(|u| chat.has_participant(&u.id));
            if let Some(user) = partner {
                if !recent.iter().any(|r| r.id == user.id) {
                    recent.push(user.clone());
                }
            }
        }

        Self {
            store,
            navigator,
            contacts,
            recent,
            query: String::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Recent partners, shown only while the query is empty.
    pub fn recent(&self) -> &[User] {
        if self.query.is_empty() {
            &self.recent
        } else {
            &[]
        }
    }

    pub fn filtered(&self) -> Vec<User> {
        filter_users(&self.contacts, &self.query)
    }

    /// Opens the existing private chat with `user_id`, creating it if needed.
    pub fn start_chat(&self, user_id: &str) -> Result<ChatParams> {
        let user = self
            .contacts
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;
        let chat = self
            .store
            .create_private_chat(&user.id)
            .ok_or_else(|| Error::UserNotFound(user.id.clone()))?;

        let params = ChatParams {
            chat_id: chat.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            is_online: user.is_online(),
            chat_type: ChatType::Private,
        };
        self.navigator.navigate(Route::Chat(params.clone()));
        Ok(params)
    }
}
