//! Demo population seeding.

use std::sync::Arc;

use chrono::NaiveDate;
use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::traits::IContactStore;
use pandemicnet_prediction::reference_classifier;
use pandemicnet_storage::StorageEngine;
use pandemicnet_tracer::seed::{demo_person, DEMO_CONTACTS};
use pandemicnet_tracer::{demo_population, ContactTracer, SeedSummary};

#[test]
fn seeds_ten_people_and_six_contacts() {
    let store = StorageEngine::open_in_memory().unwrap();
    let summary = demo_population(&store).unwrap();
    assert_eq!(summary, SeedSummary { people: 10, contacts: 6 });
    assert_eq!(store.count_individuals().unwrap(), 10);
    assert_eq!(store.count_contacts().unwrap(), DEMO_CONTACTS.len());

    let user1 = store.get_individual_by_handle("user1").unwrap().unwrap();
    assert_eq!(user1.phone.as_deref(), Some("1234567801"));
    let user10 = store.get_individual_by_handle("user10").unwrap().unwrap();
    assert_eq!(user10.phone.as_deref(), Some("1234567810"));
}

#[test]
fn seeding_twice_inserts_nothing_new() {
    let store = StorageEngine::open_in_memory().unwrap();
    demo_population(&store).unwrap();
    let again = demo_population(&store).unwrap();
    assert_eq!(again, SeedSummary::default());
    assert_eq!(store.count_individuals().unwrap(), 10);
    assert_eq!(store.count_contacts().unwrap(), 6);
}

#[test]
fn seeding_skips_people_already_present() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.insert_individual(&demo_person(3).unwrap()).unwrap();
    let summary = demo_population(&store).unwrap();
    assert_eq!(summary.people, 9);
    assert_eq!(summary.contacts, 6);
}

#[test]
fn seeded_strong_cluster_predicts_around_user2() {
    let store = StorageEngine::open_in_memory().unwrap();
    demo_population(&store).unwrap();
    let tracer = ContactTracer::new(store, Arc::new(reference_classifier()), PredictionConfig::default());

    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let report = tracer.trace_on("user1", today).unwrap();
    assert!(report.is_predicted("user3"));
    assert!(report.is_predicted("user4"));
    assert_eq!(report.predicted.len(), 2);

    let report = tracer.trace_on("user10", today).unwrap();
    assert!(report.direct.is_empty());
    assert!(report.predicted.is_empty());
}
