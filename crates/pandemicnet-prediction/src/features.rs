//! Feature derivation for one (traced person, bridge, candidate) triple.

use std::collections::HashMap;

use chrono::NaiveDate;
use petgraph::stable_graph::NodeIndex;

use pandemicnet_core::config::PredictionConfig;
use pandemicnet_core::models::{ContactEvent, FeatureVector};
use pandemicnet_graph::traversal::mutual_contacts;
use pandemicnet_graph::ContactGraph;

/// Computes [`FeatureVector`]s against one graph and event snapshot.
///
/// Pure: reads the graph and events, never mutates them.
pub struct FeatureExtractor<'a> {
    graph: &'a ContactGraph,
    today: NaiveDate,
    /// Most recent event date per individual id, over every event they are part of.
    latest_contact: HashMap<i64, NaiveDate>,
    default_days_since: u32,
    days_since_cap: Option<u32>,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(
        graph: &'a ContactGraph,
        events: &[ContactEvent],
        today: NaiveDate,
        config: &PredictionConfig,
    ) -> Self {
        let mut latest_contact: HashMap<i64, NaiveDate> = HashMap::new();
        for event in events {
            for party in [event.individual_id, event.contact_id] {
                latest_contact
                    .entry(party)
                    .and_modify(|d| *d = (*d).max(event.date))
                    .or_insert(event.date);
            }
        }
        Self {
            graph,
            today,
            latest_contact,
            default_days_since: config.default_days_since,
            days_since_cap: config.days_since_cap,
        }
    }

    /// `[degree(bridge), days_since_last(bridge), |N(origin) ∩ N(candidate)|]`.
    pub fn extract(&self, origin: NodeIndex, bridge: NodeIndex, candidate: NodeIndex) -> FeatureVector {
        FeatureVector::new(
            to_u32(self.graph.degree(bridge)),
            self.days_since_last(bridge),
            to_u32(mutual_contacts(self.graph, origin, candidate)),
        )
    }

    /// Smallest `today - date` over every event of `node`, i.e. days since its
    /// latest event. Future dates count as 0; no events yields the default.
    pub fn days_since_last(&self, node: NodeIndex) -> u32 {
        let latest = self
            .graph
            .node(node)
            .and_then(|n| self.latest_contact.get(&n.id));
        let days = match latest {
            Some(&date) => {
                let elapsed = (self.today - date).num_days().max(0);
                u32::try_from(elapsed).unwrap_or(u32::MAX)
            }
            None => self.default_days_since,
        };
        match self.days_since_cap {
            Some(cap) => days.min(cap),
            None => days,
        }
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandemicnet_core::models::Individual;
    use pandemicnet_graph::GraphBuilder;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn setup(events: &[ContactEvent]) -> ContactGraph {
        let people: Vec<Individual> = (1..=3)
            .map(|id| Individual {
                id,
                handle: format!("u{id}"),
                phone: None,
            })
            .collect();
        GraphBuilder::build(&people, events).unwrap()
    }

    fn event(id: i64, a: i64, b: i64, date: NaiveDate) -> ContactEvent {
        ContactEvent {
            id,
            individual_id: a,
            contact_id: b,
            date,
        }
    }

    #[test]
    fn future_dates_count_as_today() {
        let events = [event(1, 1, 2, day(25))];
        let graph = setup(&events);
        let fx = FeatureExtractor::new(&graph, &events, day(20), &PredictionConfig::default());
        assert_eq!(fx.days_since_last(graph.get_node("u1").unwrap()), 0);
    }

    #[test]
    fn no_events_uses_default() {
        let graph = setup(&[]);
        let fx = FeatureExtractor::new(&graph, &[], day(20), &PredictionConfig::default());
        assert_eq!(fx.days_since_last(graph.get_node("u3").unwrap()), 30);
    }

    #[test]
    fn cap_applies_when_configured() {
        let events = [event(1, 1, 2, day(1))];
        let graph = setup(&events);
        let config = PredictionConfig {
            days_since_cap: Some(10),
            ..PredictionConfig::default()
        };
        let fx = FeatureExtractor::new(&graph, &events, day(31), &config);
        assert_eq!(fx.days_since_last(graph.get_node("u2").unwrap()), 10);
    }
}
