//! ContactTracer: the registration and trace operations over a contact store.

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate};

use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::errors::{PandemicError, PandemicResult};
use pandemicnet_core::models::{ContactEvent, ContactRequest, ContactSnapshot, Individual, PersonRequest};
use pandemicnet_core::traits::{ContactClassifier, IContactStore};
use pandemicnet_graph::{GraphBuilder, GraphSnapshot};
use pandemicnet_prediction::PredictionEngine;

use crate::report::{PredictedContact, TraceReport};
use crate::tracing_setup::events;

/// Registration and tracing over any [`IContactStore`].
///
/// Every trace rebuilds the graph from one snapshot read of the store, so
/// registrations running alongside a trace are either wholly in it or
/// wholly absent, and there is no cache to invalidate.
pub struct ContactTracer<S: IContactStore> {
    store: S,
    engine: PredictionEngine,
}

impl<S: IContactStore> ContactTracer<S> {
    pub fn new(store: S, classifier: Arc<dyn ContactClassifier>, config: PredictionConfig) -> Self {
        Self::with_engine(store, PredictionEngine::new(classifier, config))
    }

    pub fn with_engine(store: S, engine: PredictionEngine) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &PredictionEngine {
        &self.engine
    }

    /// Validate and store a person.
    pub fn register_person(&self, request: PersonRequest) -> PandemicResult<Individual> {
        let new = request.into_new()?;
        let person = self.store.insert_individual(&new)?;
        events::person_registered(person.id, &person.handle);
        Ok(person)
    }

    /// Validate and store a contact event. Both parties must already exist.
    pub fn register_contact(&self, request: ContactRequest) -> PandemicResult<ContactEvent> {
        let new = request.into_new()?;
        let event = self.store.insert_contact(&new)?;
        events::contact_registered(event.id, event.individual_id, event.contact_id, event.date);
        Ok(event)
    }

    pub fn get_person(&self, handle: &str) -> PandemicResult<Individual> {
        self.store
            .get_individual_by_handle(handle)?
            .ok_or_else(|| PandemicError::not_found("individual", handle))
    }

    /// Trace `handle` as of the local calendar day.
    pub fn trace(&self, handle: &str) -> PandemicResult<TraceReport> {
        self.trace_on(handle, Local::now().date_naive())
    }

    /// Trace `handle` with `today` as the reference day for recency.
    pub fn trace_on(&self, handle: &str, today: NaiveDate) -> PandemicResult<TraceReport> {
        let started = Instant::now();
        let person = self.get_person(handle)?;

        let ContactSnapshot {
            individuals,
            events: contact_events,
        } = self.store.snapshot()?;
        let graph = GraphBuilder::build(&individuals, &contact_events)
            .map_err(|e| log_integrity(PandemicError::from(e)))?;

        let prediction = self
            .engine
            .predict(&graph, &contact_events, &person.handle, today)
            .map_err(log_integrity)?;

        for candidate in &prediction.candidates {
            events::candidate_scored(
                &person.handle,
                &candidate.handle,
                &candidate.bridge,
                candidate.confidence,
                &candidate.explanation.to_string(),
            );
        }

        let predicted: Vec<PredictedContact> = prediction
            .ranked()
            .into_iter()
            .map(|c| PredictedContact {
                handle: c.handle.clone(),
                confidence: c.confidence,
            })
            .collect();
        let explanations = prediction.explanations();
        let snapshot = GraphSnapshot::capture(&graph, &contact_events);

        events::trace_completed(
            &person.handle,
            prediction.direct.len(),
            predicted.len(),
            started.elapsed().as_millis(),
        );

        Ok(TraceReport {
            person,
            today,
            direct: prediction.direct,
            predicted,
            explanations,
            graph: snapshot,
        })
    }
}

fn log_integrity(err: PandemicError) -> PandemicError {
    if let PandemicError::Integrity(ref violation) = err {
        events::integrity_violation(&violation.to_string());
    }
    err
}
