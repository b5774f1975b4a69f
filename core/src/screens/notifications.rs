//! In-app notifications screen

use crate::error::{Error, Result};
use crate::models::{ChatType, Notification, NotificationKind};
use crate::navigation::{ChatParams, Navigator, Route};
use crate::store::DataStore;
use std::sync::Arc;

pub struct NotificationsScreen {
    navigator: Navigator,
    notifications: Vec<Notification>,
}

impl NotificationsScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator) -> Self {
        Self {
            navigator,
            notifications: store.get_notifications(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Marks the notification read and follows it: messages open their chat,
    /// missed calls open the call history. Invites and requests stay put.
    pub fn press(&mut self, id: &str) -> Result<Option<Route>> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotificationNotFound(id.to_string()))?;
        notification.read = true;

        let route = match notification.kind {
            NotificationKind::Message => notification.chat_id.as_ref().map(|chat_id| {
                Route::Chat(ChatParams {
                    chat_id: chat_id.clone(),
                    name: notification.from.clone(),
                    avatar: notification.avatar.clone(),
                    is_online: notification.is_online,
                    chat_type: ChatType::Private,
                })
            }),
            NotificationKind::MissedCall => Some(Route::Calls),
            NotificationKind::GroupInvite | NotificationKind::FriendRequest => None,
        };

        if let Some(route) = &route {
            self.navigator.navigate(route.clone());
        }
        Ok(route)
    }

    /// Accepts an invite or request and drops it from the list.
    pub fn accept(&mut self, id: &str) -> Result<String> {
        let kind = self.take_actionable(id)?;
        log::info!("Accepted {} {}", kind.request_label(), id);
        Ok(format!("You accepted the {}.", kind.request_label()))
    }

    pub fn decline(&mut self, id: &str) -> Result<String> {
        let kind = self.take_actionable(id)?;
        log::info!("Declined {} {}", kind.request_label(), id);
        Ok(format!("You declined the {}.", kind.request_label()))
    }

    pub fn clear_all(&mut self) {
        self.notifications.clear();
    }

    pub fn go_back(&self) {
        self.navigator.go_back();
    }

    fn take_actionable(&mut self, id: &str) -> Result<NotificationKind> {
        let index = self
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::NotificationNotFound(id.to_string()))?;
        if !self.notifications[index].actionable {
            return Err(Error::NotActionable(id.to_string()));
        }
        Ok(self.notifications.remove(index).kind)
    }
}
