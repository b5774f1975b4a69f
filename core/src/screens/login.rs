//! Login screen

use crate::error::ValidationError;
use crate::navigation::{Navigator, Route};
use crate::validation::validate_login;

pub struct LoginScreen {
    navigator: Navigator,
    username: String,
    password: String,
}

impl LoginScreen {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            username: String::new(),
            password: String::new(),
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Checks the form locally; any non-trivial credentials are accepted.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        validate_login(&self.username, &self.password)?;

        log::info!("Login successful: {}", self.username);
        self.password.clear();
        self.navigator.navigate(Route::ChatList);
        Ok(())
    }
}
