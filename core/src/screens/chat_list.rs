//! Chat list (home) screen

use crate::error::{Error, Result};
use crate::models::{Chat, ChatType};
use crate::navigation::{ChatParams, Navigator, Route};
use crate::store::DataStore;
use std::cmp::Reverse;
use std::sync::Arc;

/// Header data for a chat: group name and avatar, or the other member's.
///
/// `None` when a private chat's other member is unknown to the store.
pub fn chat_params(store: &DataStore, chat: &Chat) -> Option<ChatParams> {
    match chat.chat_type {
        ChatType::Group => Some(ChatParams {
            chat_id: chat.id.clone(),
            name: chat.name.clone().unwrap_or_else(|| "Group".to_string()),
            avatar: chat.avatar.clone().unwrap_or_default(),
            is_online: false,
            chat_type: ChatType::Group,
        }),
        ChatType::Private => {
            let user = store.get_user_by_id(chat.other_participant()?)?;
            Some(ChatParams {
                chat_id: chat.id.clone(),
                is_online: user.is_online(),
                name: user.name,
                avatar: user.avatar,
                chat_type: ChatType::Private,
            })
        }
    }
}

pub struct ChatListScreen {
    store: Arc<DataStore>,
    navigator: Navigator,
    chats: Vec<Chat>,
}

impl ChatListScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator) -> Self {
        let mut screen = Self {
            store,
            navigator,
            chats: Vec::new(),
        };
        screen.reload();
        screen
    }

    pub fn reload(&mut self) {
        self.chats = self.store.get_chats();
    }

    /// Non-archived chats, pinned first, then most recently updated.
    pub fn visible_chats(&self) -> Vec<&Chat> {
        let mut chats: Vec<&Chat> = self.chats.iter().filter(|c| !c.is_archived).collect();
        chats.sort_by_key(|c| (Reverse(c.is_pinned), Reverse(c.updated_at)));
        chats
    }

    pub fn total_unread(&self) -> Option<u32> {
        let total: u32 = self.chats.iter().map(|c| c.unread_count).sum();
        if total > 0 {
            Some(total)
        } else {
            None
        }
    }

    pub fn open_chat(&self, chat_id: &str) -> Result<ChatParams> {
        let chat = self
            .chats
            .iter()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| Error::ChatNotFound(chat_id.to_string()))?;

        let params = chat_params(&self.store, chat).ok_or_else(|| {
            Error::UserNotFound(chat.other_participant().unwrap_or_default().to_string())
        })?;

        self.navigator.navigate(Route::Chat(params.clone()));
        Ok(params)
    }
}
