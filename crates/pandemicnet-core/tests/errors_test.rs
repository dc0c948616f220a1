use pandemicnet_core::errors::*;

#[test]
fn validation_error_carries_field_and_message() {
    let err = PandemicError::validation("phone", "too short");
    let msg = err.to_string();
    assert!(msg.contains("phone"));
    assert!(msg.contains("too short"));
    assert_eq!(err.error_code(), error_code::VALIDATION_ERROR);
}

#[test]
fn not_found_carries_key() {
    let err = PandemicError::not_found("individual", 42);
    assert!(err.to_string().contains("42"));
    assert_eq!(err.error_code(), error_code::NOT_FOUND);
}

#[test]
fn conflict_is_distinguishable() {
    let err = PandemicError::conflict("Sorry, 'user1' is already taken");
    assert!(err.is_conflict());
    assert_eq!(err.error_code(), error_code::CONFLICT);
    assert!(!PandemicError::validation("handle", "bad").is_conflict());
}

// --- From impls ---

#[test]
fn prediction_error_converts() {
    let err: PandemicError = PredictionError::OutOfRange {
        candidate: "user3".into(),
        value: 1.5,
    }
    .into();
    assert!(matches!(err, PandemicError::Prediction(_)));
    assert_eq!(err.error_code(), error_code::PREDICTION_ERROR);
    assert!(err.to_string().contains("user3"));
}

#[test]
fn graph_error_converts_to_integrity() {
    let err: PandemicError = GraphError::UnknownIndividual {
        event_id: 7,
        individual_id: 99,
    }
    .into();
    assert!(matches!(err, PandemicError::Integrity(_)));
    assert_eq!(err.error_code(), error_code::INTEGRITY_ERROR);
}

#[test]
fn storage_and_config_errors_convert() {
    let err: PandemicError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::STORAGE_ERROR);

    let err: PandemicError = ConfigError::ValidationFailed {
        field: "storage.read_pool_size".into(),
        message: "must be at least 1".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}
