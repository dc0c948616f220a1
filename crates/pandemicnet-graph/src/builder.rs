//! Individuals + contact events → ContactGraph.

use pandemicnet_core::errors::GraphError;
use pandemicnet_core::models::{ContactEvent, Individual};

use crate::graph::{ContactEdge, ContactGraph};

/// Builds the contact graph from a full store snapshot.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Every individual becomes a node, including those with no contacts.
    /// Every event connects its two parties; a repeated pair keeps the date
    /// of the event connected last.
    ///
    /// An event naming an id missing from `individuals` fails the whole build.
    pub fn build(
        individuals: &[Individual],
        events: &[ContactEvent],
    ) -> Result<ContactGraph, GraphError> {
        let mut graph = ContactGraph::new();

        for person in individuals {
            if graph.get_node(&person.handle).is_some() {
                return Err(GraphError::DuplicateHandle {
                    handle: person.handle.clone(),
                });
            }
            graph.ensure_node(person.id, &person.handle);
        }

        for event in events {
            let resolve = |individual_id: i64| {
                graph
                    .get_node_by_id(individual_id)
                    .ok_or(GraphError::UnknownIndividual {
                        event_id: event.id,
                        individual_id,
                    })
            };
            let a = resolve(event.individual_id)?;
            let b = resolve(event.contact_id)?;
            graph.connect(
                a,
                b,
                ContactEdge {
                    date: event.date,
                    event_id: event.id,
                },
            );
        }

        Ok(graph)
    }
}
