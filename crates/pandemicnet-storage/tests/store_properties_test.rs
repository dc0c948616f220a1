//! Property tests: handle registration is once-only, direct-event count
//! equals the events involving a person.

use chrono::NaiveDate;
use proptest::prelude::*;

use pandemicnet_core::models::{NewContact, NewIndividual};
use pandemicnet_core::traits::IContactStore;
use pandemicnet_storage::StorageEngine;

proptest! {
    #[test]
    fn prop_handle_registers_once(handle in "[a-z][a-zA-Z0-9]{0,15}") {
        let store = StorageEngine::open_in_memory().unwrap();
        let new = NewIndividual::new(&handle, None).unwrap();
        prop_assert!(store.insert_individual(&new).is_ok());
        let err = store.insert_individual(&new).unwrap_err();
        prop_assert!(err.is_conflict());
    }

    #[test]
    fn prop_contacts_of_counts_both_roles(
        pairs in prop::collection::vec((0usize..6, 0usize..6, 1u32..28), 0..30)
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let ids: Vec<i64> = (0..6)
            .map(|i| {
                store
                    .insert_individual(&NewIndividual::new(&format!("p{i}"), None).unwrap())
                    .unwrap()
                    .id
            })
            .collect();

        for (a, b, d) in pairs {
            if a == b {
                continue;
            }
            let date = NaiveDate::from_ymd_opt(2025, 2, d).unwrap();
            // Duplicates are expected to conflict; anything else is a bug.
            if let Err(e) = store.insert_contact(&NewContact::new(ids[a], ids[b], date).unwrap()) {
                prop_assert!(e.is_conflict());
            }
        }

        let all = store.list_contact_events().unwrap();
        for &id in &ids {
            let expected = all.iter().filter(|e| e.involves(id)).count();
            prop_assert_eq!(store.contacts_of(id).unwrap().len(), expected);
        }
    }
}
