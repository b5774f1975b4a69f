//! Profile screen and account detail changes

use crate::error::{Error, Result, ValidationError};
use crate::models::{ProfileUpdate, User, CURRENT_USER_ID};
use crate::store::DataStore;
use crate::validation::{validate_new_email, validate_new_phone};
use std::sync::Arc;

pub struct ProfileScreen {
    store: Arc<DataStore>,
    user: User,
    draft: Option<ProfileUpdate>,
}

impl ProfileScreen {
    pub fn open(store: Arc<DataStore>) -> Result<Self> {
        let user = store
            .get_user_by_id(CURRENT_USER_ID)
            .ok_or_else(|| Error::UserNotFound(CURRENT_USER_ID.to_string()))?;
        Ok(Self {
            store,
            user,
            draft: None,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn begin_edit(&mut self) {
        self.draft.get_or_insert_with(ProfileUpdate::default);
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Mutates the pending edit, starting one if needed.
    pub fn edit(&mut self, f: impl FnOnce(&mut ProfileUpdate)) {
        f(self.draft.get_or_insert_with(ProfileUpdate::default));
    }

    /// Writes the pending edit through the store. Without an edit this is a
    /// no-op returning the loaded profile.
    pub fn save(&mut self) -> Result<User> {
        let Some(draft) = self.draft.take() else {
            return Ok(self.user.clone());
        };

        if draft.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.draft = Some(draft);
            return Err(ValidationError::EmptyName.into());
        }

        self.user = self.store.update_profile(draft);
        Ok(self.user.clone())
    }
}

/// Change-email form.
pub struct ChangeEmailScreen {
    store: Arc<DataStore>,
    current_email: String,
    new_email: String,
}

impl ChangeEmailScreen {
    pub fn open(store: Arc<DataStore>) -> Self {
        let current_email = store.get_current_user().email;
        Self {
            store,
            current_email,
            new_email: String::new(),
        }
    }

    pub fn current_email(&self) -> &str {
        &self.current_email
    }

    pub fn set_new_email(&mut self, email: impl Into<String>) {
        self.new_email = email.into();
    }

    pub fn submit(&mut self) -> Result<User> {
        let email = validate_new_email(&self.new_email, &self.current_email)?;
        let user = self.store.update_profile(ProfileUpdate {
            email: Some(email),
            ..Default::default()
        });

        self.current_email = user.email.clone();
        self.new_email.clear();
        Ok(user)
    }
}

/// Change-phone form. Stores the number normalised to digits and `+`.
pub struct ChangePhoneScreen {
    store: Arc<DataStore>,
    current_phone: String,
    new_phone: String,
}

impl ChangePhoneScreen {
    pub fn open(store: Arc<DataStore>) -> Self {
        let current_phone = store.get_current_user().phone;
        Self {
            store,
            current_phone,
            new_phone: String::new(),
        }
    }

    pub fn current_phone(&self) -> &str {
        &self.current_phone
    }

    pub fn set_new_phone(&mut self, phone: impl Into<String>) {
        self.new_phone = phone.into();
    }

    pub fn submit(&mut self) -> Result<User> {
        let phone = validate_new_phone(&self.new_phone, &self.current_phone)?;
        let user = self.store.update_profile(ProfileUpdate {
            phone: Some(phone),
            ..Default::default()
        });

        self.current_phone = user.phone.clone();
        self.new_phone.clear();
        Ok(user)
    }
}
