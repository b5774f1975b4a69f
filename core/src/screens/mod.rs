//! Screen controllers
//!
//! Each screen keeps its own transient state and talks to the shared
//! `DataStore`. Screens that start timers cancel them when dropped.

pub mod call;
pub mod calls;
pub mod chat;
pub mod chat_list;
pub mod contacts;
pub mod login;
pub mod new_chat;
pub mod notifications;
pub mod profile;
pub mod search;
pub mod settings;

pub use call::{CallPhase, CallScreen, CallSnapshot};
pub use calls::CallsScreen;
pub use chat::ChatScreen;
pub use chat_list::{chat_params, ChatListScreen};
pub use contacts::{ContactAction, ContactsScreen};
pub use login::LoginScreen;
pub use new_chat::NewChatScreen;
pub use notifications::NotificationsScreen;
pub use profile::{ChangeEmailScreen, ChangePhoneScreen, ProfileScreen};
pub use search::GlobalSearchScreen;
pub use settings::SettingsScreen;
