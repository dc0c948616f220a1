//! Property tests over random populations registered through the service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::models::{ContactRequest, PersonRequest};
use pandemicnet_core::traits::IContactStore;
use pandemicnet_prediction::reference_classifier;
use pandemicnet_storage::StorageEngine;
use pandemicnet_tracer::ContactTracer;
use proptest::prelude::*;

const PEOPLE: i64 = 6;

fn populated(pairs: &[(i64, i64, u32)]) -> (ContactTracer<StorageEngine>, usize) {
    let tracer = ContactTracer::new(
        StorageEngine::open_in_memory().unwrap(),
        Arc::new(reference_classifier()),
        PredictionConfig::default(),
    );
    for i in 1..=PEOPLE {
        tracer
            .register_person(PersonRequest::new(&format!("p{i}"), ""))
            .unwrap();
    }
    let mut stored = 0;
    for &(a, b, d) in pairs {
        let date = format!("2025-03-{d:02}");
        match tracer.register_contact(ContactRequest::new(a, b, &date)) {
            Ok(_) => stored += 1,
            Err(e) => assert!(e.is_conflict() || a == b, "{e}"),
        }
    }
    (tracer, stored)
}

fn pairs() -> impl Strategy<Value = Vec<(i64, i64, u32)>> {
    prop::collection::vec((1..=PEOPLE, 1..=PEOPLE, 1u32..=5), 0..15)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn direct_count_matches_stored_events(pairs in pairs()) {
        let (tracer, stored) = populated(&pairs);
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let mut total = 0;
        for i in 1..=PEOPLE {
            let handle = format!("p{i}");
            let report = tracer.trace_on(&handle, today).unwrap();
            let involving = tracer.store().contacts_of(i).unwrap().len();
            prop_assert_eq!(report.direct.len(), involving);
            total += report.direct.len();
        }
        // Every stored event shows up once for each party.
        prop_assert_eq!(total, stored * 2);
    }

    #[test]
    fn predictions_exclude_self_and_direct(pairs in pairs()) {
        let (tracer, _) = populated(&pairs);
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        for i in 1..=PEOPLE {
            let handle = format!("p{i}");
            let report = tracer.trace_on(&handle, today).unwrap();
            let direct: HashSet<&str> = report.direct.iter().map(|d| d.handle.as_str()).collect();
            for p in &report.predicted {
                prop_assert_ne!(&p.handle, &handle);
                prop_assert!(!direct.contains(p.handle.as_str()));
                prop_assert!((0.0..=1.0).contains(&p.confidence));
                prop_assert!(report.explanations.contains_key(&p.handle));
            }
        }
    }
}
