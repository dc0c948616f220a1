use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::models::{ContactEvent, Individual};
use pandemicnet_graph::GraphBuilder;
use pandemicnet_prediction::{reference_classifier, PredictionEngine};

/// 500 people, each meeting the next 6 on a rotating day: ~3K events.
fn synthetic_population() -> (Vec<Individual>, Vec<ContactEvent>) {
    let n = 500;
    let people: Vec<Individual> = (1..=n)
        .map(|id| Individual {
            id,
            handle: format!("p{id}"),
            phone: None,
        })
        .collect();
    let mut events = Vec::new();
    for a in 1..=n {
        for step in 1..=6 {
            let b = (a + step - 1) % n + 1;
            if a == b {
                continue;
            }
            let day = u32::try_from((a + step) % 28 + 1).unwrap();
            events.push(ContactEvent {
                id: events.len() as i64 + 1,
                individual_id: a,
                contact_id: b,
                date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            });
        }
    }
    (people, events)
}

fn bench_graph_build(c: &mut Criterion) {
    let (people, events) = synthetic_population();
    c.bench_function("graph_build_500_people_3k_events", |b| {
        b.iter(|| GraphBuilder::build(&people, &events).unwrap());
    });
}

fn bench_predict(c: &mut Criterion) {
    let (people, events) = synthetic_population();
    let graph = GraphBuilder::build(&people, &events).unwrap();
    let engine = PredictionEngine::new(Arc::new(reference_classifier()), PredictionConfig::default());
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    c.bench_function("predict_one_person_500_people", |b| {
        b.iter(|| engine.predict(&graph, &events, "p250", today).unwrap());
    });
}

criterion_group!(benches, bench_graph_build, bench_predict);
criterion_main!(benches);
