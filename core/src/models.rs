//! Data models for Stitch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved id that always resolves to the signed-in user.
pub const CURRENT_USER_ID: &str = "current-user";

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Online,
    Offline,
    Away,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub status: UserStatus,
    pub last_seen: Option<DateTime<Utc>>,
    pub bio: Option<String>,
}

impl User {
    pub fn is_online(&self) -> bool {
        self.status == UserStatus::Online
    }
}

/// Partial profile edit; `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<UserStatus>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Voice,
    Video,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
    pub status: MessageStatus,
    pub reply_to: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn is_own(&self) -> bool {
        self.sender_id == CURRENT_USER_ID
    }
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Private,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub chat_type: ChatType,
    pub name: Option<String>,
    pub participants: Vec<String>,
    pub last_message: Option<Message>,
    pub unread_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub is_archived: bool,
    pub is_muted: bool,
    pub is_pinned: bool,
}

impl Chat {
    /// First participant that is not the current user.
    pub fn other_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .map(String::as_str)
            .find(|id| *id != CURRENT_USER_ID)
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }
}

// ============================================================================
// Calls
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Voice,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Incoming,
    Outgoing,
    Missed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: String,
    pub call_type: CallType,
    pub status: CallStatus,
    pub participants: Vec<String>,
    /// Seconds; absent for missed calls.
    pub duration: Option<u32>,
    pub timestamp: DateTime<Utc>,
    pub is_group: bool,
}

impl Call {
    pub fn other_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .map(String::as_str)
            .find(|id| *id != CURRENT_USER_ID)
    }
}

// ============================================================================
// Contacts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub is_registered: bool,
    pub is_favorite: bool,
    pub is_blocked: bool,
    pub last_seen: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl Contact {
    /// Registered contact mirroring a platform user.
    pub fn from_user(user: &User, is_favorite: bool) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: Some(user.email.clone()),
            avatar: Some(user.avatar.clone()),
            is_registered: true,
            is_favorite,
            is_blocked: false,
            last_seen: user.last_seen,
            status: user.bio.clone(),
        }
    }
}

// ============================================================================
// In-app notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    MissedCall,
    GroupInvite,
    FriendRequest,
}

impl NotificationKind {
    /// Name used in accept/decline confirmations.
    pub fn request_label(&self) -> &'static str {
        match self {
            NotificationKind::GroupInvite => "group invite",
            _ => "friend request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    /// Display name of whoever the notification is about.
    pub from: String,
    pub subtitle: Option<String>,
    pub avatar: String,
    pub timestamp: DateTime<Utc>,
    pub is_online: bool,
    /// Invites and requests carry accept/decline actions.
    pub actionable: bool,
    pub read: bool,
    /// Thread a message notification opens, when it belongs to a known chat.
    pub chat_id: Option<String>,
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Everyone,
    Contacts,
    Nobody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub message_preview: bool,
    pub sound: bool,
    pub vibration: bool,
    pub group_notifications: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub last_seen: Visibility,
    pub profile_photo: Visibility,
    pub status: Visibility,
    pub read_receipts: bool,
    pub blocked_users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub font_size: FontSize,
    pub wallpaper: String,
    pub enter_to_send: bool,
    pub media_auto_download: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub screen_lock: bool,
    pub fingerprint: bool,
    pub two_factor_auth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub chat: ChatSettings,
    pub security: SecuritySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: NotificationSettings {
                enabled: true,
                message_preview: true,
                sound: true,
                vibration: true,
                group_notifications: true,
            },
            privacy: PrivacySettings {
                last_seen: Visibility::Contacts,
                profile_photo: Visibility::Everyone,
                status: Visibility::Contacts,
                read_receipts: true,
                blocked_users: Vec::new(),
            },
            chat: ChatSettings {
                font_size: FontSize::Medium,
                wallpaper: "default".to_string(),
                enter_to_send: false,
                media_auto_download: true,
            },
            security: SecuritySettings {
                screen_lock: false,
                fingerprint: false,
                two_factor_auth: false,
            },
        }
    }
}

/// Shallow settings patch: a present section replaces the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub notifications: Option<NotificationSettings>,
    pub privacy: Option<PrivacySettings>,
    pub chat: Option<ChatSettings>,
    pub security: Option<SecuritySettings>,
}

impl SettingsUpdate {
    pub fn apply_to(self, settings: &mut Settings) {
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
        if let Some(privacy) = self.privacy {
            settings.privacy = privacy;
        }
        if let Some(chat) = self.chat {
            settings.chat = chat;
        }
        if let Some(security) = self.security {
            settings.security = security;
        }
    }
}
