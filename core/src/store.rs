//! In-memory mock data store
//!
//! Holds the seed collections for one app instance. Screens receive the store
//! as an `Arc<DataStore>` rather than reaching for a global. Every operation is
//! total: lookups that miss return `None`, mutations on unknown ids are no-ops.

use crate::models::*;
use crate::seed::{self, SeedData, LAST_MESSAGE_PHRASES};
use chrono::{Duration, Utc};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

struct StoreData {
    current_user: User,
    users: Vec<User>,
    chats: Vec<Chat>,
    calls: Vec<Call>,
    contacts: Vec<Contact>,
    notifications: Vec<Notification>,
    settings: Settings,
}

impl From<SeedData> for StoreData {
    fn from(seed: SeedData) -> Self {
        Self {
            current_user: seed.current_user,
            users: seed.users,
            chats: seed.chats,
            calls: seed.calls,
            contacts: seed.contacts,
            notifications: seed.notifications,
            settings: seed.settings,
        }
    }
}

pub struct DataStore {
    data: RwLock<StoreData>,
    rng: Mutex<StdRng>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore {
    /// Store whose synthesized data is drawn from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Store whose synthesized data is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let data = seed::sample_data(Utc::now(), &mut rng);
        log::debug!(
            "Seeded store: {} users, {} chats, {} calls, {} contacts",
            data.users.len(),
            data.chats.len(),
            data.calls.len(),
            data.contacts.len()
        );

        Self {
            data: RwLock::new(data.into()),
            rng: Mutex::new(rng),
        }
    }

    // ========================================================================
    // Chats & messages
    // ========================================================================

    /// All chats, each with a freshly synthesized last message.
    pub fn get_chats(&self) -> Vec<Chat> {
        let data = self.data.read();
        data.chats
            .iter()
            .map(|chat| {
                let mut chat = chat.clone();
                chat.last_message = Some(self.synthesize_last_message(&chat.id));
                chat
            })
            .collect()
    }

    pub fn get_chat(&self, chat_id: &str) -> Option<Chat> {
        let data = self.data.read();
        let mut chat = data.chats.iter().find(|c| c.id == chat_id)?.clone();
        chat.last_message = Some(self.synthesize_last_message(&chat.id));
        Some(chat)
    }

    /// Private chat between the current user and `user_id`, if one exists.
    pub fn find_private_chat(&self, user_id: &str) -> Option<Chat> {
        private_chat_with(&self.data.read().chats, user_id).cloned()
    }

    /// Returns the private chat with `user_id`, creating it when missing.
    ///
    /// `None` when `user_id` is not a known user (or is the current user).
    pub fn create_private_chat(&self, user_id: &str) -> Option<Chat> {
        if user_id == CURRENT_USER_ID {
            return None;
        }

        let mut data = self.data.write();
        if !data.users.iter().any(|u| u.id == user_id) {
            return None;
        }

        if let Some(existing) = private_chat_with(&data.chats, user_id) {
            return Some(existing.clone());
        }

        let now = Utc::now();
        let chat = Chat {
            id: format!("chat_{}", uuid::Uuid::new_v4().simple()),
            chat_type: ChatType::Private,
            name: None,
            participants: vec![CURRENT_USER_ID.to_string(), user_id.to_string()],
            last_message: None,
            unread_count: 0,
            created_at: now,
            updated_at: now,
            avatar: None,
            description: None,
            is_archived: false,
            is_muted: false,
            is_pinned: false,
        };

        log::info!("Created private chat {} with user {}", chat.id, user_id);
        data.chats.push(chat.clone());
        Some(chat)
    }

    /// Seed thread for a chat. The chat id is not validated and sent messages
    /// are not part of the result.
    pub fn get_messages(&self, chat_id: &str) -> Vec<Message> {
        seed::sample_thread(chat_id, Utc::now())
    }

    /// Seed threads of every chat, in chat order.
    pub fn get_all_messages(&self) -> Vec<Message> {
        let now = Utc::now();
        self.data
            .read()
            .chats
            .iter()
            .flat_map(|chat| seed::sample_thread(&chat.id, now))
            .collect()
    }

    /// Builds an outgoing message. Nothing is recorded.
    pub fn send_message(&self, chat_id: &str, text: &str) -> Message {
        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.to_string(),
            sender_id: CURRENT_USER_ID.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
            message_type: MessageType::Text,
            status: MessageStatus::Sent,
            reply_to: None,
            attachments: Vec::new(),
        };

        log::debug!("Message {} sent to chat {}", message.id, chat_id);
        message
    }

    // ========================================================================
    // Calls
    // ========================================================================

    pub fn get_calls(&self) -> Vec<Call> {
        self.data.read().calls.clone()
    }

    /// The other party of a call, resolved against the user collection.
    pub fn user_for_call(&self, call: &Call) -> Option<User> {
        let other = call.other_participant()?;
        self.data.read().users.iter().find(|u| u.id == other).cloned()
    }

    // ========================================================================
    // Users & contacts
    // ========================================================================

    pub fn get_users(&self) -> Vec<User> {
        self.data.read().users.clone()
    }

    pub fn get_current_user(&self) -> User {
        self.data.read().current_user.clone()
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        let data = self.data.read();
        if id == CURRENT_USER_ID {
            return Some(data.current_user.clone());
        }
        data.users.iter().find(|u| u.id == id).cloned()
    }

    /// Contacts ordered case-insensitively by name.
    pub fn get_contacts(&self) -> Vec<Contact> {
        let mut data = self.data.write();
        data.contacts.sort_by_cached_key(|c| c.name.to_lowercase());
        data.contacts.clone()
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> User {
        let mut data = self.data.write();
        update.apply_to(&mut data.current_user);
        log::info!("Profile updated for {}", data.current_user.username);
        data.current_user.clone()
    }

    pub fn block_user(&self, id: &str) -> Option<Contact> {
        let mut data = self.data.write();
        let StoreData {
            contacts, settings, ..
        } = &mut *data;

        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            log::debug!("block_user: no contact {}", id);
            return None;
        };

        contact.is_blocked = true;
        let blocked = &mut settings.privacy.blocked_users;
        if !blocked.iter().any(|b| b == id) {
            blocked.push(id.to_string());
        }

        log::info!("Blocked {}", id);
        Some(contact.clone())
    }

    pub fn unblock_user(&self, id: &str) -> Option<Contact> {
        let mut data = self.data.write();
        let StoreData {
            contacts, settings, ..
        } = &mut *data;

        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            log::debug!("unblock_user: no contact {}", id);
            return None;
        };

        contact.is_blocked = false;
        settings.privacy.blocked_users.retain(|b| b != id);

        log::info!("Unblocked {}", id);
        Some(contact.clone())
    }

    /// Users listed in `settings.privacy.blocked_users`.
    pub fn blocked_users(&self) -> Vec<User> {
        let data = self.data.read();
        let blocked = &data.settings.privacy.blocked_users;
        data.users
            .iter()
            .filter(|u| blocked.contains(&u.id))
            .cloned()
            .collect()
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn get_settings(&self) -> Settings {
        self.data.read().settings.clone()
    }

    pub fn update_settings(&self, update: SettingsUpdate) -> Settings {
        let mut data = self.data.write();
        update.apply_to(&mut data.settings);
        data.settings.clone()
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// In-app notifications, newest first.
    pub fn get_notifications(&self) -> Vec<Notification> {
        self.data.read().notifications.clone()
    }

    // ========================================================================
    // Synthesized data
    // ========================================================================

    /// Picks one phrase with the store's generator.
    pub fn pick<'a>(&self, phrases: &[&'a str]) -> &'a str {
        phrases.choose(&mut *self.rng.lock()).copied().unwrap_or_default()
    }

    fn synthesize_last_message(&self, chat_id: &str) -> Message {
        let mut rng = self.rng.lock();
        let text = LAST_MESSAGE_PHRASES
            .choose(&mut *rng)
            .copied()
            .unwrap_or_default();
        let sender_id = if rng.gen_bool(0.5) { CURRENT_USER_ID } else { "1" };
        let age = Duration::milliseconds(rng.gen_range(0..86_400_000));

        Message {
            id: format!("last-{chat_id}"),
            chat_id: chat_id.to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            timestamp: Utc::now() - age,
            message_type: MessageType::Text,
            status: MessageStatus::Read,
            reply_to: None,
            attachments: Vec::new(),
        }
    }
}

fn private_chat_with<'a>(chats: &'a [Chat], user_id: &str) -> Option<&'a Chat> {
    chats.iter().find(|c| {
        c.chat_type == ChatType::Private
            && c.has_participant(CURRENT_USER_ID)
            && c.has_participant(user_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(id: &str, chat_type: ChatType, participants: &[&str]) -> Chat {
        let now = Utc::now();
        Chat {
            id: id.to_string(),
            chat_type,
            name: None,
            participants: participants.iter().map(|p| p.to_string()).collect(),
            last_message: None,
            unread_count: 0,
            created_at: now,
            updated_at: now,
            avatar: None,
            description: None,
            is_archived: false,
            is_muted: false,
            is_pinned: false,
        }
    }

    #[test]
    fn test_private_chat_requires_current_user() {
        let chats = vec![
            chat("a", ChatType::Private, &["2", "4"]),
            chat("b", ChatType::Group, &[CURRENT_USER_ID, "4"]),
            chat("c", ChatType::Private, &[CURRENT_USER_ID, "4"]),
        ];

        assert_eq!(private_chat_with(&chats, "4").unwrap().id, "c");
        assert!(private_chat_with(&chats[..2], "4").is_none());
    }

    #[test]
    fn test_create_private_chat_ignores_chats_without_current_user() {
        let store = DataStore::with_seed(1);
        store
            .data
            .write()
            .chats
            .push(chat("foreign", ChatType::Private, &["2", "4"]));

        let created = store.create_private_chat("4").unwrap();
        assert_ne!(created.id, "foreign");
        assert!(created.has_participant(CURRENT_USER_ID));
        assert_eq!(store.find_private_chat("4").unwrap().id, created.id);
    }
}
