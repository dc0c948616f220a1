//! Traces running while other threads register people and contacts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::models::{ContactRequest, PersonRequest};
use pandemicnet_prediction::reference_classifier;
use pandemicnet_storage::StorageEngine;
use pandemicnet_tracer::ContactTracer;

#[test]
fn trace_during_registration_never_reports_integrity_failure() {
    let dir = tempfile::tempdir().unwrap();
    let tracer = ContactTracer::new(
        StorageEngine::open(&dir.path().join("busy.db")).unwrap(),
        Arc::new(reference_classifier()),
        PredictionConfig::default(),
    );
    let anchor = tracer
        .register_person(PersonRequest::new("anchor", ""))
        .unwrap()
        .id;
    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..120 {
                let p = tracer
                    .register_person(PersonRequest::new(&format!("w{i}"), ""))
                    .unwrap();
                tracer
                    .register_contact(ContactRequest::new(anchor, p.id, "2025-03-15"))
                    .unwrap();
            }
            done.store(true, Ordering::SeqCst);
        });

        let mut traces = 0;
        while !done.load(Ordering::SeqCst) || traces < 10 {
            let report = match tracer.trace_on("anchor", today) {
                Ok(report) => report,
                Err(e) => panic!("trace {traces} failed: {e}"),
            };
            assert_eq!(report.graph.edges.len(), report.direct.len());
            traces += 1;
        }
    });

    let report = tracer.trace_on("anchor", today).unwrap();
    assert_eq!(report.direct.len(), 120);
    assert!(report.predicted.is_empty());
}
