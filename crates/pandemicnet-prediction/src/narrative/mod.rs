//! Human-readable sentences for predicted candidates.

pub mod templates;

use std::collections::BTreeMap;

use crate::explanation::PredictionExplanation;

/// Turns a prediction explanation into prose. Implemented by the built-in
/// [`TemplateNarrator`]; a model-backed narrator plugs in here.
pub trait Narrator: Send + Sync {
    fn narrate(&self, explanation: &PredictionExplanation) -> String;

    /// handle → sentence for every explanation.
    fn narrate_all(&self, explanations: &[PredictionExplanation]) -> BTreeMap<String, String> {
        explanations
            .iter()
            .map(|e| (e.candidate.clone(), self.narrate(e)))
            .collect()
    }
}

/// Picks one of three templates per handle. The pick is a pure function of
/// the handle, so the same candidate always reads the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn new() -> Self {
        Self
    }
}

impl Narrator for TemplateNarrator {
    fn narrate(&self, explanation: &PredictionExplanation) -> String {
        let template = templates::template_for(&explanation.candidate);
        templates::render(template, explanation)
    }
}
