//! Structured log events for registration and tracing.
//!
//! Each function emits a `tracing` event with structured fields.

use chrono::NaiveDate;

/// Log a person registration.
pub fn person_registered(id: i64, handle: &str) {
    tracing::info!(
        event = "person_registered",
        id = id,
        handle = %handle,
        "person registered"
    );
}

/// Log a contact registration.
pub fn contact_registered(event_id: i64, individual_id: i64, contact_id: i64, date: NaiveDate) {
    tracing::info!(
        event = "contact_registered",
        event_id = event_id,
        individual_id = individual_id,
        contact_id = contact_id,
        date = %date,
        "contact registered"
    );
}

/// Log one scored candidate together with its explanation.
pub fn candidate_scored(traced: &str, candidate: &str, bridge: &str, confidence: f64, explanation: &str) {
    tracing::debug!(
        event = "candidate_scored",
        traced = %traced,
        candidate = %candidate,
        bridge = %bridge,
        confidence = confidence,
        explanation = %explanation,
        "candidate scored"
    );
}

/// Log the end of a trace.
pub fn trace_completed(handle: &str, direct: usize, predicted: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "trace_completed",
        handle = %handle,
        direct = direct,
        predicted = predicted,
        elapsed_ms = elapsed_ms as u64,
        "trace completed"
    );
}

/// Log a store/graph disagreement. Always surfaced to the caller as well.
pub fn integrity_violation(detail: &str) {
    tracing::error!(
        event = "integrity_violation",
        detail = %detail,
        "graph integrity violated"
    );
}

/// Log which classifier the runtime loaded.
pub fn classifier_loaded(kind: &str, source: &str) {
    tracing::info!(
        event = "classifier_loaded",
        kind = %kind,
        source = %source,
        "classifier loaded"
    );
}

/// Log a summary of demo seeding.
pub fn demo_seeded(people: usize, contacts: usize) {
    tracing::info!(
        event = "demo_seeded",
        people = people,
        contacts = contacts,
        "demo population seeded"
    );
}
