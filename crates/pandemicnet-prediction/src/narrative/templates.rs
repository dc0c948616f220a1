//! Narrative templates and their rendering.

use crate::explanation::PredictionExplanation;

/// Placeholders: `{id}`, `{contacts}`, `{days}`, `{mutuals}`, `{confidence}`,
/// `{level}`, `{Level}` (capitalized), `{LEVEL}` (upper case).
pub const TEMPLATES: [&str; 3] = [
    "{Level} tip: {id} might've crossed paths! {contacts} moves, {days}. Odds: {confidence}.",
    "Check it: {contacts} hits in {days} tie {id} to you. {mutuals}, {level} shot at {confidence}!",
    "{LEVEL} ALERT: {id}'s {contacts} links {days}, {mutuals}. Confidence: {confidence}!",
];

/// Template index for a handle, from the first byte of its blake3 hash.
pub fn template_index(handle: &str) -> usize {
    let hash = blake3::hash(handle.as_bytes());
    usize::from(hash.as_bytes()[0]) % TEMPLATES.len()
}

pub fn template_for(handle: &str) -> &'static str {
    TEMPLATES[template_index(handle)]
}

/// "1 day ago", "5 days ago".
pub fn days_ago(days: u32) -> String {
    format!("{days} day{} ago", plural(days))
}

/// "1 shared connection", "0 shared connections".
pub fn shared_connections(mutuals: u32) -> String {
    format!("{mutuals} shared connection{}", plural(mutuals))
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render(template: &str, explanation: &PredictionExplanation) -> String {
    let level = explanation.level.as_str();
    let features = &explanation.features;
    template
        .replace("{id}", &explanation.candidate)
        .replace("{contacts}", &features.neighbor_contacts.to_string())
        .replace("{days}", &days_ago(features.days_since_last))
        .replace("{mutuals}", &shared_connections(features.mutual_contacts))
        .replace("{confidence}", &format!("{:.2}", explanation.confidence))
        .replace("{LEVEL}", &level.to_uppercase())
        .replace("{Level}", &capitalize(level))
        .replace("{level}", level)
}
