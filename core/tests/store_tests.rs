//! Data store behaviour

use stitch_core::seed::LAST_MESSAGE_PHRASES;
use stitch_core::*;

fn store() -> DataStore {
    DataStore::with_seed(7)
}

#[test]
fn test_contacts_sorted_case_insensitively() {
    let contacts = store().get_contacts();

    assert_eq!(contacts.len(), 7);
    for pair in contacts.windows(2) {
        assert!(
            pair[0].name.to_lowercase() <= pair[1].name.to_lowercase(),
            "{} should sort before {}",
            pair[0].name,
            pair[1].name
        );
    }
    assert_eq!(contacts[0].name, "Alex Johnson");
}

#[test]
fn test_contacts_mirror_users_plus_unregistered() {
    let store = store();
    let contacts = store.get_contacts();

    for user in store.get_users() {
        let contact = contacts.iter().find(|c| c.id == user.id).unwrap();
        assert!(contact.is_registered);
        assert_eq!(contact.name, user.name);
        assert_eq!(contact.phone, user.phone);
    }
    assert_eq!(contacts.iter().filter(|c| !c.is_registered).count(), 2);
}

#[test]
fn test_get_user_by_id() {
    let store = store();

    let me = store.get_user_by_id(CURRENT_USER_ID).unwrap();
    assert_eq!(me, store.get_current_user());

    assert_eq!(store.get_user_by_id("1").unwrap().name, "Sophia Bennett");
    assert!(store.get_user_by_id("42").is_none());
    assert!(store.get_user_by_id("").is_none());
}

#[test]
fn test_block_then_unblock_restores_state() {
    let store = store();
    let before = store
        .get_contacts()
        .into_iter()
        .find(|c| c.id == "2")
        .unwrap();

    let blocked = store.block_user("2").unwrap();
    assert!(blocked.is_blocked);
    assert_eq!(store.get_settings().privacy.blocked_users, vec!["2"]);

    // Blocking twice keeps a single entry
    store.block_user("2").unwrap();
    assert_eq!(store.get_settings().privacy.blocked_users, vec!["2"]);

    let unblocked = store.unblock_user("2").unwrap();
    assert_eq!(unblocked.is_blocked, before.is_blocked);
    assert!(store.get_settings().privacy.blocked_users.is_empty());

    // Unblocking again is a quiet no-op
    let again = store.unblock_user("2").unwrap();
    assert!(!again.is_blocked);
    assert!(store.get_settings().privacy.blocked_users.is_empty());
}

#[test]
fn test_block_unknown_contact_is_noop() {
    let store = store();
    let settings = store.get_settings();

    assert!(store.block_user("nobody").is_none());
    assert!(store.unblock_user("nobody").is_none());
    assert_eq!(store.get_settings(), settings);
}

#[test]
fn test_blocked_users_resolves_platform_users_only() {
    let store = store();
    store.block_user("2").unwrap();
    store.block_user("contact-1").unwrap();

    let blocked = store.blocked_users();
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].name, "Ethan Carter");
    assert_eq!(store.get_settings().privacy.blocked_users.len(), 2);
}

#[test]
fn test_send_message_builds_outgoing_message() {
    let store = store();

    let first = store.send_message("2", "On my way");
    assert_eq!(first.chat_id, "2");
    assert_eq!(first.text, "On my way");
    assert_eq!(first.sender_id, CURRENT_USER_ID);
    assert_eq!(first.status, MessageStatus::Sent);
    assert_eq!(first.message_type, MessageType::Text);
    assert!(first.is_own());

    let second = store.send_message("2", "On my way");
    assert_ne!(first.id, second.id);

    // Sent messages are not recorded
    assert_eq!(store.get_messages("2").len(), 2);
}

#[test]
fn test_get_messages_echoes_any_chat_id() {
    let messages = store().get_messages("missing");

    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m.chat_id == "missing"));
    assert!(messages[0].timestamp < messages[1].timestamp);
    assert!(!messages[0].is_own());
    assert!(messages[1].is_own());
}

#[test]
fn test_get_chats_synthesizes_last_message() {
    let chats = store().get_chats();

    assert_eq!(chats.len(), 3);
    for chat in &chats {
        let last = chat.last_message.as_ref().unwrap();
        assert_eq!(last.id, format!("last-{}", chat.id));
        assert_eq!(last.chat_id, chat.id);
        assert!(LAST_MESSAGE_PHRASES.contains(&last.text.as_str()));
    }
}

#[test]
fn test_seeded_stores_are_reproducible() {
    let a = DataStore::with_seed(99);
    let b = DataStore::with_seed(99);

    let texts = |s: &DataStore| -> Vec<(String, String)> {
        s.get_chats()
            .into_iter()
            .map(|c| {
                let m = c.last_message.unwrap();
                (m.text, m.sender_id)
            })
            .collect()
    };
    assert_eq!(texts(&a), texts(&b));

    let favorites = |s: &DataStore| -> Vec<bool> {
        s.get_contacts().iter().map(|c| c.is_favorite).collect()
    };
    assert_eq!(favorites(&a), favorites(&b));
}

#[test]
fn test_private_chats_have_two_participants() {
    let chats = store().get_chats();

    for chat in chats.iter().filter(|c| c.chat_type == ChatType::Private) {
        assert_eq!(chat.participants.len(), 2);
        assert!(chat.has_participant(CURRENT_USER_ID));
    }

    let mut ids: Vec<_> = chats.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), chats.len());
}

#[test]
fn test_create_private_chat_reuses_or_inserts() {
    let store = store();

    assert_eq!(store.create_private_chat("1").unwrap().id, "1");

    let created = store.create_private_chat("4").unwrap();
    assert_eq!(created.chat_type, ChatType::Private);
    assert_eq!(created.participants, vec![CURRENT_USER_ID, "4"]);
    assert_eq!(store.get_chats().len(), 4);

    let again = store.create_private_chat("4").unwrap();
    assert_eq!(again.id, created.id);
    assert_eq!(store.get_chats().len(), 4);
    assert_eq!(store.find_private_chat("4").unwrap().id, created.id);

    assert!(store.create_private_chat("42").is_none());
    assert!(store.create_private_chat(CURRENT_USER_ID).is_none());
}

#[test]
fn test_update_profile_merges_fields() {
    let store = store();
    let before = store.get_current_user();

    let updated = store.update_profile(ProfileUpdate {
        bio: Some("Shipping things".to_string()),
        status: Some(UserStatus::Busy),
        ..Default::default()
    });

    assert_eq!(updated.bio.as_deref(), Some("Shipping things"));
    assert_eq!(updated.status, UserStatus::Busy);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.email, before.email);
    assert_eq!(store.get_user_by_id(CURRENT_USER_ID).unwrap(), updated);
}

#[test]
fn test_update_settings_replaces_sections_wholesale() {
    let store = store();
    let before = store.get_settings();

    let updated = store.update_settings(SettingsUpdate {
        notifications: Some(NotificationSettings {
            enabled: false,
            message_preview: false,
            sound: false,
            vibration: false,
            group_notifications: false,
        }),
        ..Default::default()
    });

    assert!(!updated.notifications.enabled);
    assert!(!updated.notifications.group_notifications);
    assert_eq!(updated.privacy, before.privacy);
    assert_eq!(updated.chat, before.chat);
    assert_eq!(updated.security, before.security);
}

#[test]
fn test_user_for_call() {
    let store = store();
    let calls = store.get_calls();

    assert_eq!(calls.len(), 3);
    assert_eq!(store.user_for_call(&calls[0]).unwrap().name, "Sophia Bennett");

    let mut orphan = calls[0].clone();
    orphan.participants = vec![CURRENT_USER_ID.to_string(), "99".to_string()];
    assert!(store.user_for_call(&orphan).is_none());
}

#[test]
fn test_missed_call_has_no_duration() {
    let calls = store().get_calls();

    for call in calls {
        match call.status {
            CallStatus::Missed => assert!(call.duration.is_none()),
            _ => assert!(call.duration.is_some()),
        }
    }
}

#[test]
fn test_all_messages_cover_every_chat() {
    let store = store();
    let messages = store.get_all_messages();

    assert_eq!(messages.len(), store.get_chats().len() * 2);
}

#[test]
fn test_notifications_seed() {
    let notifications = store().get_notifications();

    assert_eq!(notifications.len(), 6);
    for pair in notifications.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    for n in &notifications {
        let is_request = matches!(
            n.kind,
            NotificationKind::GroupInvite | NotificationKind::FriendRequest
        );
        assert_eq!(n.actionable, is_request);
    }
}
