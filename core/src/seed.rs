//! Sample collections loaded into every new store

use crate::models::*;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Phrases used when synthesizing a chat's last message.
pub const LAST_MESSAGE_PHRASES: &[&str] = &[
    "Hey, are you free for a quick chat?",
    "The meeting is scheduled for 3 PM",
    "New mockups are ready for review",
    "Thanks for the help!",
    "Let's catch up soon",
    "How's the project going?",
];

/// Canned replies sent back after the user posts in a thread.
pub const AUTO_RESPONSES: &[&str] = &[
    "That sounds great!",
    "I agree with that.",
    "Thanks for letting me know.",
    "Perfect timing!",
    "I understand.",
];

const AVATAR_BASE: &str = "https://images.unsplash.com";

fn avatar(photo: &str) -> String {
    format!("{AVATAR_BASE}/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80")
}

pub(crate) struct SeedData {
    pub current_user: User,
    pub users: Vec<User>,
    pub chats: Vec<Chat>,
    pub calls: Vec<Call>,
    pub contacts: Vec<Contact>,
    pub notifications: Vec<Notification>,
    pub settings: Settings,
}

pub(crate) fn sample_data<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> SeedData {
    let users = sample_users(now);

    let mut contacts: Vec<Contact> = users
        .iter()
        .map(|user| Contact::from_user(user, rng.gen_bool(0.5)))
        .collect();
    contacts.push(Contact {
        id: "contact-1".to_string(),
        name: "Alex Johnson".to_string(),
        phone: "+1 (555) 789-0123".to_string(),
        email: Some("alex@example.com".to_string()),
        avatar: None,
        is_registered: false,
        is_favorite: false,
        is_blocked: false,
        last_seen: None,
        status: None,
    });
    contacts.push(Contact {
        id: "contact-2".to_string(),
        name: "Sarah Davis".to_string(),
        phone: "+1 (555) 890-1234".to_string(),
        email: None,
        avatar: None,
        is_registered: false,
        is_favorite: true,
        is_blocked: false,
        last_seen: None,
        status: None,
    });

    SeedData {
        current_user: User {
            id: CURRENT_USER_ID.to_string(),
            name: "You".to_string(),
            username: "you".to_string(),
            email: "you@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            avatar: avatar("photo-1472099645785-5658abf4ff4e"),
            status: UserStatus::Online,
            last_seen: None,
            bio: Some("Love coding and building amazing apps!".to_string()),
        },
        users,
        chats: sample_chats(now),
        calls: sample_calls(now),
        contacts,
        notifications: sample_notifications(now),
        settings: Settings::default(),
    }
}

fn sample_users(now: DateTime<Utc>) -> Vec<User> {
    let user = |id: &str,
                name: &str,
                username: &str,
                phone: &str,
                photo: &str,
                status: UserStatus,
                bio: &str,
                seen_minutes_ago: i64| User {
        id: id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
        phone: phone.to_string(),
        avatar: avatar(photo),
        status,
        last_seen: Some(now - Duration::minutes(seen_minutes_ago)),
        bio: Some(bio.to_string()),
    };

    vec![
        user(
            "1",
            "Sophia Bennett",
            "sophia_b",
            "+1 (555) 234-5678",
            "photo-1494790108755-2616b667d3",
            UserStatus::Online,
            "UX Designer & Digital Artist",
            0,
        ),
        user(
            "2",
            "Ethan Carter",
            "ethan_dev",
            "+1 (555) 345-6789",
            "photo-1507003211169-0a1dd7228f2d",
            UserStatus::Away,
            "Software Engineer at TechCorp",
            5,
        ),
        user(
            "3",
            "Liam Harper",
            "liam_h",
            "+1 (555) 456-7890",
            "photo-1472099645785-5658abf4ff4e",
            UserStatus::Offline,
            "Product Manager & Tech Enthusiast",
            60,
        ),
        user(
            "4",
            "Emma Wilson",
            "emma_w",
            "+1 (555) 567-8901",
            "photo-1438761681033-6461ffad8d80",
            UserStatus::Busy,
            "Marketing Director",
            30,
        ),
        user(
            "5",
            "Noah Foster",
            "noah_f",
            "+1 (555) 678-9012",
            "photo-1500648767791-00dcc994a43e",
            UserStatus::Online,
            "Graphic Designer & Photographer",
            0,
        ),
    ]
}

fn private_chat(id: &str, peer: &str, unread: u32, created: DateTime<Utc>, updated: DateTime<Utc>) -> Chat {
    Chat {
        id: id.to_string(),
        chat_type: ChatType::Private,
        name: None,
        participants: vec![CURRENT_USER_ID.to_string(), peer.to_string()],
        last_message: None,
        unread_count: unread,
        created_at: created,
        updated_at: updated,
        avatar: None,
        description: None,
        is_archived: false,
        is_muted: false,
        is_pinned: false,
    }
}

fn sample_chats(now: DateTime<Utc>) -> Vec<Chat> {
    let mut pinned = private_chat("1", "1", 0, now - Duration::days(1), now - Duration::hours(1));
    pinned.is_pinned = true;

    vec![
        pinned,
        private_chat("2", "2", 2, now - Duration::days(2), now - Duration::hours(2)),
        Chat {
            id: "3".to_string(),
            chat_type: ChatType::Group,
            name: Some("Design Team".to_string()),
            participants: ["current-user", "1", "3", "5"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            last_message: None,
            unread_count: 5,
            created_at: now - Duration::days(3),
            updated_at: now - Duration::minutes(30),
            avatar: Some(avatar("photo-1522071820081-009f0129c71c")),
            description: Some("Team chat for design discussions".to_string()),
            is_archived: false,
            is_muted: false,
            is_pinned: false,
        },
    ]
}

fn sample_calls(now: DateTime<Utc>) -> Vec<Call> {
    let call = |id: &str, call_type, status, peer: &str, duration, hours_ago| Call {
        id: id.to_string(),
        call_type,
        status,
        participants: vec![CURRENT_USER_ID.to_string(), peer.to_string()],
        duration,
        timestamp: now - Duration::hours(hours_ago),
        is_group: false,
    };

    vec![
        call("1", CallType::Video, CallStatus::Incoming, "1", Some(1245), 1),
        call("2", CallType::Voice, CallStatus::Outgoing, "2", Some(625), 2),
        call("3", CallType::Video, CallStatus::Missed, "3", None, 3),
    ]
}

fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let notification = |id: &str,
                        kind: NotificationKind,
                        title: &str,
                        from: &str,
                        photo: &str,
                        age: Duration,
                        read: bool| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        from: from.to_string(),
        subtitle: None,
        avatar: avatar(photo),
        timestamp: now - age,
        is_online: false,
        actionable: matches!(
            kind,
            NotificationKind::GroupInvite | NotificationKind::FriendRequest
        ),
        read,
        chat_id: None,
    };

    let mut from_sophia = notification(
        "1",
        NotificationKind::Message,
        "New message from Sophia",
        "Sophia Bennett",
        "photo-1494790108755-2616b667d3",
        Duration::minutes(30),
        false,
    );
    from_sophia.subtitle = Some("\"Hey, are you free for a call later?\"".to_string());
    from_sophia.is_online = true;
    from_sophia.chat_id = Some("1".to_string());

    let mut from_olivia = notification(
        "5",
        NotificationKind::Message,
        "New message from Olivia",
        "Olivia",
        "photo-1438761681033-6461ffad8d80",
        Duration::days(4),
        true,
    );
    from_olivia.subtitle = Some("\"See you soon!\"".to_string());

    vec![
        from_sophia,
        notification(
            "2",
            NotificationKind::MissedCall,
            "Missed call from Ethan",
            "Ethan Carter",
            "photo-1507003211169-0a1dd7228f2d",
            Duration::days(1),
            false,
        ),
        notification(
            "3",
            NotificationKind::GroupInvite,
            "Group invite from Friends",
            "Friends",
            "photo-1522071820081-009f0129c71c",
            Duration::days(2),
            false,
        ),
        notification(
            "4",
            NotificationKind::FriendRequest,
            "Friend request from Liam",
            "Liam Harper",
            "photo-1472099645785-5658abf4ff4e",
            Duration::days(3),
            false,
        ),
        from_olivia,
        notification(
            "6",
            NotificationKind::MissedCall,
            "Missed call from Noah",
            "Noah Foster",
            "photo-1500648767791-00dcc994a43e",
            Duration::days(5),
            true,
        ),
    ]
}

/// The two-message thread every chat opens with.
pub(crate) fn sample_thread(chat_id: &str, now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: "1".to_string(),
            chat_id: chat_id.to_string(),
            sender_id: "1".to_string(),
            text: "Hey, are you free for a quick chat?".to_string(),
            timestamp: now - Duration::minutes(10),
            message_type: MessageType::Text,
            status: MessageStatus::Read,
            reply_to: None,
            attachments: Vec::new(),
        },
        Message {
            id: "2".to_string(),
            chat_id: chat_id.to_string(),
            sender_id: CURRENT_USER_ID.to_string(),
            text: "Hi! Yes, I am. What's up?".to_string(),
            timestamp: now - Duration::minutes(9),
            message_type: MessageType::Text,
            status: MessageStatus::Read,
            reply_to: None,
            attachments: Vec::new(),
        },
    ]
}
