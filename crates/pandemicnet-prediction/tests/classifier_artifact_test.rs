//! Loading classifiers from JSON artifacts.

use pandemicnet_core::errors::PredictionError;
use pandemicnet_core::models::FeatureVector;
use pandemicnet_prediction::{reference_classifier, ClassifierArtifact};
use pandemicnet_core::traits::ContactClassifier;

#[test]
fn forest_fixture_loads_and_averages_trees() {
    let artifact = ClassifierArtifact::from_json(&test_fixtures::load_fixture_str(
        "classifiers/forest_small.json",
    ))
    .unwrap();
    assert_eq!(artifact.kind(), "forest");
    let clf = artifact.into_classifier().unwrap();
    assert_eq!(clf.name(), "forest");

    // Tree 1: contacts 2 > 1.5, days 0 <= 10.5 → 0.9. Tree 2: mutuals 1 > 0.5 → 0.8.
    let p = clf.predict_probability(&FeatureVector::new(2, 0, 1)).unwrap();
    assert!((p - 0.85).abs() < 1e-12);

    // Tree 1: contacts 1 <= 1.5 → 0.2. Tree 2: mutuals 0 → 0.3.
    let p = clf.predict_probability(&FeatureVector::new(1, 0, 0)).unwrap();
    assert!((p - 0.25).abs() < 1e-12);
}

#[test]
fn logistic_fixture_matches_reference_model() {
    let clf = ClassifierArtifact::from_file(&test_fixtures::fixture_path(
        "classifiers/logistic_reference.json",
    ))
    .unwrap()
    .into_classifier()
    .unwrap();
    let reference = reference_classifier();
    for fv in [
        FeatureVector::new(0, 0, 0),
        FeatureVector::new(3, 4, 2),
        FeatureVector::new(10, 30, 5),
    ] {
        assert_eq!(
            clf.predict_probability(&fv).unwrap(),
            reference.predict_probability(&fv).unwrap()
        );
    }
}

#[test]
fn structurally_invalid_forest_is_rejected() {
    let artifact = ClassifierArtifact::from_json(&test_fixtures::load_fixture_str(
        "classifiers/forest_bad_child.json",
    ))
    .unwrap();
    let err = artifact.into_classifier().err().unwrap();
    assert!(matches!(err, PredictionError::InvalidArtifact { .. }));
}

#[test]
fn unknown_kind_and_missing_file_are_invalid_artifacts() {
    let err = ClassifierArtifact::from_json(r#"{"kind": "svm"}"#).unwrap_err();
    assert!(matches!(err, PredictionError::InvalidArtifact { .. }));

    let dir = tempfile::tempdir().unwrap();
    let err = ClassifierArtifact::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PredictionError::InvalidArtifact { .. }));
}

#[test]
fn artifact_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let artifact = ClassifierArtifact::Logistic {
        weights: [0.5, -0.1, 0.2],
        bias: 0.0,
    };
    std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();
    assert_eq!(ClassifierArtifact::from_file(&path).unwrap(), artifact);
}
