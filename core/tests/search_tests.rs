//! Filtering, grouping and global search

use chrono::{Duration, TimeZone, Utc};
use stitch_core::search::*;
use stitch_core::*;

fn contact(id: &str, name: &str, phone: &str, is_favorite: bool) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: None,
        avatar: None,
        is_registered: false,
        is_favorite,
        is_blocked: false,
        last_seen: None,
        status: None,
    }
}

fn call(id: &str, status: CallStatus, timestamp: chrono::DateTime<Utc>) -> Call {
    Call {
        id: id.to_string(),
        call_type: CallType::Voice,
        status,
        participants: vec![CURRENT_USER_ID.to_string(), "1".to_string()],
        duration: None,
        timestamp,
        is_group: false,
    }
}

#[test]
fn test_group_contacts_by_first_letter() {
    let contacts = vec![
        contact("1", "Bob", "1", false),
        contact("2", "alice", "2", false),
        contact("3", "Amy", "3", false),
    ];

    let sections = group_contacts_by_letter(contacts);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "A");
    let a_names: Vec<_> = sections[0].items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(a_names, vec!["alice", "Amy"]);
    assert_eq!(sections[1].title, "B");
    assert_eq!(sections[1].items[0].name, "Bob");
}

#[test]
fn test_group_contacts_handles_empty_name() {
    let sections = group_contacts_by_letter(vec![contact("1", "", "1", false)]);
    assert_eq!(sections[0].title, "#");
}

#[test]
fn test_filter_contacts_by_name_phone_and_tab() {
    let contacts = vec![
        contact("1", "Sophia Bennett", "+1 (555) 234-5678", true),
        contact("2", "Ethan Carter", "+1 (555) 345-6789", false),
        contact("3", "Sarah Davis", "+1 (555) 890-1234", true),
    ];

    let by_name = filter_contacts(&contacts, "SOPH", ContactTab::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "1");

    let by_phone = filter_contacts(&contacts, "345-67", ContactTab::All);
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].id, "2");

    let favorites = filter_contacts(&contacts, "", ContactTab::Favorites);
    assert_eq!(favorites.len(), 2);

    let favorite_match = filter_contacts(&contacts, "ethan", ContactTab::Favorites);
    assert!(favorite_match.is_empty());

    assert_eq!(filter_contacts(&contacts, "   ", ContactTab::All).len(), 3);
}

#[test]
fn test_filter_calls_by_tab() {
    let now = Utc::now();
    let calls = vec![
        call("1", CallStatus::Incoming, now),
        call("2", CallStatus::Missed, now),
        call("3", CallStatus::Outgoing, now),
    ];

    assert_eq!(filter_calls(&calls, CallTab::All).len(), 3);
    let missed = filter_calls(&calls, CallTab::Missed);
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].id, "2");
}

#[test]
fn test_group_calls_by_day_keeps_input_order() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 18, 0, 0).unwrap();
    let calls = vec![
        call("1", CallStatus::Incoming, now - Duration::hours(1)),
        call("2", CallStatus::Missed, now - Duration::hours(20)),
        call("3", CallStatus::Outgoing, now - Duration::hours(2)),
        call("4", CallStatus::Outgoing, now - Duration::days(6)),
    ];

    let sections = group_calls_by_day(calls, &now);
    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles, vec!["Today", "Yesterday", "Tuesday, Oct 13"]);
    let today: Vec<_> = sections[0].items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(today, vec!["1", "3"]);
}

#[test]
fn test_filter_users() {
    let users = DataStore::with_seed(1).get_users();

    assert_eq!(filter_users(&users, "").len(), users.len());
    assert_eq!(filter_users(&users, "ethan_dev")[0].name, "Ethan Carter");
    assert_eq!(filter_users(&users, "567-8901")[0].name, "Emma Wilson");
    assert!(filter_users(&users, "zz").is_empty());
}

#[test]
fn test_global_search_empty_query_returns_nothing() {
    let store = DataStore::with_seed(1);
    let chats = store.get_chats();
    let users = store.get_users();
    let messages = store.get_all_messages();

    for query in ["", "   "] {
        let results = global_search(&chats, &users, &messages, query);
        assert!(results.is_empty());
        assert_eq!(results, SearchResults::default());
    }
}

#[test]
fn test_global_search_sections_are_independent() {
    let store = DataStore::with_seed(1);
    let chats = store.get_chats();
    let users = store.get_users();
    let messages = store.get_all_messages();

    let results = global_search(&chats, &users, &messages, "sophia");
    let chat_ids: Vec<_> = results.chats.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(chat_ids, vec!["1", "3"]);
    assert_eq!(results.contacts.len(), 1);
    assert!(results.messages.is_empty());
    assert!(!results.is_empty());

    let results = global_search(&chats, &users, &messages, "QUICK chat");
    assert!(results.chats.is_empty());
    assert!(results.contacts.is_empty());
    assert_eq!(results.messages.len(), chats.len());

    let results = global_search(&chats, &users, &messages, "design");
    assert_eq!(results.chats.len(), 1);
    assert_eq!(results.chats[0].name.as_deref(), Some("Design Team"));

    let results = global_search(&chats, &users, &messages, "example.com");
    assert_eq!(results.contacts.len(), users.len());

    assert!(global_search(&chats, &users, &messages, "no such thing").is_empty());
}

#[test]
fn test_contains_ignore_case() {
    assert!(contains_ignore_case("Design Team", "team"));
    assert!(contains_ignore_case("anything", ""));
    assert!(!contains_ignore_case("Team", "teams"));
}
