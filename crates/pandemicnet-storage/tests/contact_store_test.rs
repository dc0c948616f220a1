//! In-memory contact store behavior: inserts, lookups, uniqueness, both-role queries.

use chrono::NaiveDate;
use pandemicnet_core::errors::ErrorCode;
use pandemicnet_core::models::{ContactSnapshot, NewContact, NewIndividual};
use pandemicnet_core::traits::IContactStore;
use pandemicnet_core::PandemicError;
use pandemicnet_storage::StorageEngine;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn person(store: &StorageEngine, handle: &str) -> i64 {
    store
        .insert_individual(&NewIndividual::new(handle, None).unwrap())
        .unwrap()
        .id
}

fn contact(a: i64, b: i64, date: &str) -> NewContact {
    NewContact::new(a, b, day(date)).unwrap()
}

#[test]
fn fresh_store_is_migrated_and_empty() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert_eq!(store.schema_version().unwrap(), 1);
    assert!(store.list_individuals().unwrap().is_empty());
    assert!(store.list_contact_events().unwrap().is_empty());
}

#[test]
fn insert_and_lookup_individual() {
    let store = StorageEngine::open_in_memory().unwrap();
    let stored = store
        .insert_individual(&NewIndividual::new("user1", Some("1234567801")).unwrap())
        .unwrap();

    let by_id = store.get_individual(stored.id).unwrap().unwrap();
    let by_handle = store.get_individual_by_handle("user1").unwrap().unwrap();
    assert_eq!(by_id, stored);
    assert_eq!(by_handle, stored);
    assert_eq!(stored.phone.as_deref(), Some("1234567801"));

    assert!(store.get_individual(stored.id + 100).unwrap().is_none());
    assert!(store.get_individual_by_handle("nobody").unwrap().is_none());
}

#[test]
fn duplicate_handle_is_conflict() {
    let store = StorageEngine::open_in_memory().unwrap();
    person(&store, "user1");
    let err = store
        .insert_individual(&NewIndividual::new("user1", None).unwrap())
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.error_code(), "CONFLICT");
    assert!(err.to_string().contains("Sorry, 'user1' is already taken"));
    assert_eq!(store.count_individuals().unwrap(), 1);
}

#[test]
fn individuals_list_in_id_order() {
    let store = StorageEngine::open_in_memory().unwrap();
    for h in ["zed", "amy", "bob"] {
        person(&store, h);
    }
    let handles: Vec<_> = store
        .list_individuals()
        .unwrap()
        .into_iter()
        .map(|i| i.handle)
        .collect();
    assert_eq!(handles, ["zed", "amy", "bob"]);
}

#[test]
fn contact_with_unknown_party_is_not_found() {
    let store = StorageEngine::open_in_memory().unwrap();
    let a = person(&store, "user1");

    let err = store.insert_contact(&contact(a, 999, "2025-03-15")).unwrap_err();
    match err {
        PandemicError::NotFound { key, .. } => assert_eq!(key, "999"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    // individual_id is checked first.
    let err = store.insert_contact(&contact(998, 999, "2025-03-15")).unwrap_err();
    assert!(matches!(err, PandemicError::NotFound { ref key, .. } if key == "998"));
}

#[test]
fn same_pair_same_day_is_conflict_in_either_direction() {
    let store = StorageEngine::open_in_memory().unwrap();
    let a = person(&store, "user1");
    let b = person(&store, "user2");

    store.insert_contact(&contact(a, b, "2025-03-15")).unwrap();

    let err = store.insert_contact(&contact(a, b, "2025-03-15")).unwrap_err();
    assert!(err.is_conflict());
    assert!(err.to_string().contains("already logged"));

    let err = store.insert_contact(&contact(b, a, "2025-03-15")).unwrap_err();
    assert!(err.is_conflict());

    // A different day is a new event.
    store.insert_contact(&contact(b, a, "2025-03-16")).unwrap();
    assert_eq!(store.count_contacts().unwrap(), 2);
}

#[test]
fn contacts_of_matches_both_roles_in_insertion_order() {
    let store = StorageEngine::open_in_memory().unwrap();
    let a = person(&store, "user1");
    let b = person(&store, "user2");
    let c = person(&store, "user3");

    let e1 = store.insert_contact(&contact(a, b, "2025-03-15")).unwrap();
    let e2 = store.insert_contact(&contact(c, a, "2025-03-10")).unwrap();
    store.insert_contact(&contact(b, c, "2025-03-11")).unwrap();

    let of_a = store.contacts_of(a).unwrap();
    assert_eq!(of_a, vec![e1.clone(), e2]);
    assert!(of_a.iter().all(|e| e.involves(a)));

    let all = store.list_contact_events().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], e1);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn dates_round_trip_as_calendar_days() {
    let store = StorageEngine::open_in_memory().unwrap();
    let a = person(&store, "user1");
    let b = person(&store, "user2");
    store.insert_contact(&contact(a, b, "2024-02-29")).unwrap();
    let events = store.list_contact_events().unwrap();
    assert_eq!(events[0].date, day("2024-02-29"));
}

#[test]
fn snapshot_matches_separate_scans() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert_eq!(store.snapshot().unwrap(), ContactSnapshot::default());

    let a = person(&store, "user1");
    let b = person(&store, "user2");
    let c = person(&store, "user3");
    store.insert_contact(&contact(a, b, "2025-03-01")).unwrap();
    store.insert_contact(&contact(c, b, "2025-03-02")).unwrap();

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.individuals, store.list_individuals().unwrap());
    assert_eq!(snapshot.events, store.list_contact_events().unwrap());
    assert_eq!(snapshot.events.len(), 2);
}
