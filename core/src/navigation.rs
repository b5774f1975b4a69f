//! Routes between screens and the parameters each one receives

use crate::models::{CallType, ChatType};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    pub chat_id: String,
    pub name: String,
    pub avatar: String,
    pub is_online: bool,
    pub chat_type: ChatType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallParams {
    pub name: String,
    pub avatar: String,
    pub call_type: CallType,
    pub is_incoming: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    Login,
    ChatList,
    Chat(ChatParams),
    NewChat,
    Profile { user_id: Option<String> },
    ContactProfile { contact_id: String },
    Settings,
    BlockedUsers,
    ChangeEmail,
    ChangePhone,
    Contacts,
    AddContact,
    Calls,
    Call(CallParams),
    VideoCall(CallParams),
    GlobalSearch,
    Notifications,
}

impl Route {
    /// Voice or video call screen depending on the call type.
    pub fn for_call(params: CallParams) -> Self {
        match params.call_type {
            CallType::Voice => Route::Call(params),
            CallType::Video => Route::VideoCall(params),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    NavigateTo(Route),
    GoBack,
}

/// Sending half handed to screen controllers.
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavCommand>,
}

impl Navigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("Navigate to {:?}", route);
        self.send(NavCommand::NavigateTo(route));
    }

    pub fn go_back(&self) {
        log::debug!("Navigate back");
        self.send(NavCommand::GoBack);
    }

    fn send(&self, command: NavCommand) {
        // The shell may already be gone during shutdown.
        if self.tx.send(command).is_err() {
            log::debug!("Navigation receiver dropped");
        }
    }
}
