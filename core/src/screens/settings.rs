//! Settings screens: notifications, privacy, chat, security, blocked users

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::DataStore;
use std::sync::Arc;

pub struct SettingsScreen {
    store: Arc<DataStore>,
    settings: Settings,
    blocked: Vec<User>,
}

impl SettingsScreen {
    pub fn open(store: Arc<DataStore>) -> Self {
        let settings = store.get_settings();
        let blocked = store.blocked_users();
        Self {
            store,
            settings,
            blocked,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Edits one notification flag on top of the stored section, so the
    /// other notification flags survive the shallow store update.
    pub fn update_notifications(&mut self, f: impl FnOnce(&mut NotificationSettings)) {
        let mut notifications = self.store.get_settings().notifications;
        f(&mut notifications);
        self.apply(SettingsUpdate {
            notifications: Some(notifications),
            ..Default::default()
        });
    }

    pub fn update_privacy(&mut self, f: impl FnOnce(&mut PrivacySettings)) {
        let mut privacy = self.store.get_settings().privacy;
        f(&mut privacy);
        self.apply(SettingsUpdate {
            privacy: Some(privacy),
            ..Default::default()
        });
    }

    pub fn update_chat(&mut self, f: impl FnOnce(&mut ChatSettings)) {
        let mut chat = self.store.get_settings().chat;
        f(&mut chat);
        self.apply(SettingsUpdate {
            chat: Some(chat),
            ..Default::default()
        });
    }

    pub fn update_security(&mut self, f: impl FnOnce(&mut SecuritySettings)) {
        let mut security = self.store.get_settings().security;
        f(&mut security);
        self.apply(SettingsUpdate {
            security: Some(security),
            ..Default::default()
        });
    }

    pub fn blocked_users(&self) -> &[User] {
        &self.blocked
    }

    pub fn unblock(&mut self, user_id: &str) -> Result<()> {
        self.store
            .unblock_user(user_id)
            .ok_or_else(|| Error::ContactNotFound(user_id.to_string()))?;
        self.blocked.retain(|u| u.id != user_id);
        self.settings = self.store.get_settings();
        Ok(())
    }

    fn apply(&mut self, update: SettingsUpdate) {
        self.settings = self.store.update_settings(update);
        self.blocked = self.store.blocked_users();
    }
}
