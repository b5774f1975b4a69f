//! Contacts screen

use crate::error::{Error, Result};
use crate::models::{ChatType, Contact};
use crate::navigation::{ChatParams, Navigator, Route};
use crate::search::{filter_contacts, group_contacts_by_letter, ContactTab, Section};
use crate::store::DataStore;
use std::sync::Arc;

/// Outcome of tapping a contact.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    /// Registered contact: the private chat was opened.
    OpenedChat(ChatParams),
    /// Not on the platform yet: ask before sending an invitation.
    InvitePrompt { contact_id: String, name: String },
}

pub struct ContactsScreen {
    store: Arc<DataStore>,
    navigator: Navigator,
    contacts: Vec<Contact>,
    query: String,
    tab: ContactTab,
}

impl ContactsScreen {
    pub fn open(store: Arc<DataStore>, navigator: Navigator) -> Self {
        let contacts = store.get_contacts();
        Self {
            store,
            navigator,
            contacts,
            query: String::new(),
            tab: ContactTab::All,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select_tab(&mut self, tab: ContactTab) {
        self.tab = tab;
    }

    pub fn visible(&self) -> Vec<Contact> {
        filter_contacts(&self.contacts, &self.query, self.tab)
    }

    pub fn sections(&self) -> Vec<Section<Contact>> {
        group_contacts_by_letter(self.visible())
    }

    pub fn favorites_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.is_favorite).count()
    }

    /// Flips the favorite flag on this screen's copy only.
    pub fn toggle_favorite(&mut self, contact_id: &str) -> Result<bool> {
        let contact = self.find_mut(contact_id)?;
        contact.is_favorite = !contact.is_favorite;
        Ok(contact.is_favorite)
    }

    pub fn press(&self, contact_id: &str) -> Result<ContactAction> {
        let contact = self
            .contacts
            .iter()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| Error::ContactNotFound(contact_id.to_string()))?;

        if !contact.is_registered {
            return Ok(ContactAction::InvitePrompt {
                contact_id: contact.id.clone(),
                name: contact.name.clone(),
            });
        }

        let user = self
            .store
            .get_user_by_id(&contact.id)
            .ok_or_else(|| Error::UserNotFound(contact.id.clone()))?;
        let chat = self
            .store
            .create_private_chat(&user.id)
            .ok_or_else(|| Error::UserNotFound(user.id.clone()))?;

        let params = ChatParams {
            chat_id: chat.id,
            name: contact.name.clone(),
            avatar: contact.avatar.clone().unwrap_or_else(|| user.avatar.clone()),
            is_online: user.is_online(),
            chat_type: ChatType::Private,
        };
        self.navigator.navigate(Route::Chat(params.clone()));
        Ok(ContactAction::OpenedChat(params))
    }

    /// Confirmation shown after an invitation goes out.
    pub fn invite(&self, contact_id: &str) -> Result<String> {
        let contact = self
            .contacts
            .iter()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| Error::ContactNotFound(contact_id.to_string()))?;
        log::info!("Invitation sent to {}", contact.name);
        Ok(format!("Invitation sent to {}!", contact.name))
    }

    pub fn block(&mut self, contact_id: &str) -> Result<()> {
        let updated = self
            .store
            .block_user(contact_id)
            .ok_or_else(|| Error::ContactNotFound(contact_id.to_string()))?;
        self.find_mut(contact_id)?.is_blocked = updated.is_blocked;
        Ok(())
    }

    pub fn unblock(&mut self, contact_id: &str) -> Result<()> {
        let updated = self
            .store
            .unblock_user(contact_id)
            .ok_or_else(|| Error::ContactNotFound(contact_id.to_string()))?;
        self.find_mut(contact_id)?.is_blocked = updated.is_blocked;
        Ok(())
    }

    pub fn add_contact(&self) {
        self.navigator.navigate(Route::AddContact);
    }

    fn find_mut(&mut self, contact_id: &str) -> Result<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| Error::ContactNotFound(contact_id.to_string()))
    }
}
