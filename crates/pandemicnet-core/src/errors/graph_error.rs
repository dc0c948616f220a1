use super::error_code::{self, ErrorCode};

/// Graph assembly errors. These indicate the store and the core disagree
/// about which individuals exist.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("contact event {event_id} references unknown individual {individual_id}")]
    UnknownIndividual { event_id: i64, individual_id: i64 },

    #[error("duplicate handle {handle} in individual list")]
    DuplicateHandle { handle: String },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::INTEGRITY_ERROR
    }
}
