//! Loading the bundled model artifact and rejecting broken ones

mod common;

use common::demo_model_path;
use scam_rs::analysis::{normalize, Analyzer, Category, RiskLevel};
use scam_rs::error::ScamError;
use scam_rs::model::{load_model, Classifier};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_artifact(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_demo_model() {
    let model = load_model(demo_model_path()).unwrap();

    assert_eq!(model.labels(), vec!["ham".to_string(), "spam".to_string()]);
    assert_eq!(model.model_name(), "spam_model_demo");
    assert!(model.vocabulary_size() > 0);
}

#[test]
fn test_demo_model_probabilities_cover_all_labels() {
    let model = load_model(demo_model_path()).unwrap();

    for text in ["", "hey are we meeting for lunch tomorrow", "urgent claim your prize"] {
        let probabilities = model.predict_probabilities(text).unwrap();
        assert_eq!(probabilities.len(), 2);
        let sum: f64 = probabilities.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);

        let result = model.classify(text).unwrap();
        assert!(result.validate().is_ok());
    }
}

#[test]
fn test_demo_model_is_deterministic() {
    let model = load_model(demo_model_path()).unwrap();
    let text = normalize("FREE iPhone! Text YES to claim your prize!");

    let first = model.predict_probabilities(&text).unwrap();
    for _ in 0..5 {
        assert_eq!(model.predict_probabilities(&text).unwrap(), first);
        assert_eq!(model.predict(&text).unwrap(), "spam");
    }
}

#[test]
fn test_demo_model_end_to_end() {
    let model = load_model(demo_model_path()).unwrap();
    let analyzer = Analyzer::new(Arc::new(model), "spam");

    let scam = analyzer
        .analyze("Congratulations! You've won a $1000 gift card! Click here to claim!")
        .unwrap();
    assert!(scam.is_scam);
    assert_eq!(scam.risk_level, RiskLevel::High);
    assert_eq!(scam.detected_category, Category::LotteryPrize);
    assert!(scam.confidence > 90.0);

    let benign = analyzer.analyze("Can you pick up some groceries?").unwrap();
    assert!(!benign.is_scam);
    assert_eq!(benign.risk_level, RiskLevel::Low);
    assert_eq!(benign.detected_category, Category::Legitimate);
    assert!(benign.confidence > 90.0);
}

#[test]
fn test_unknown_text_falls_back_to_intercept() {
    let model = load_model(demo_model_path()).unwrap();

    // no vocabulary terms: zero row, probability comes from the intercept alone
    let probabilities = model.predict_probabilities("qwerty zxcvb").unwrap();
    let expected = 1.0 / (1.0 + 1.2f64.exp());
    assert!((probabilities.probability_of("spam") - expected).abs() < 1e-9);
    assert_eq!(model.predict("qwerty zxcvb").unwrap(), "ham");
}

#[test]
fn test_missing_model_file() {
    let err = load_model("/nonexistent/spam_model.json").err().unwrap();
    assert!(matches!(err, ScamError::ModelUnavailable(_)));
    assert!(err.to_string().starts_with("Model loading failed: "));
}

#[test]
fn test_malformed_model_file() {
    let file = write_artifact("{ not json");
    let err = load_model(file.path()).err().unwrap();
    assert!(matches!(err, ScamError::ModelUnavailable(_)));
}

#[test]
fn test_inconsistent_model_shapes() {
    // coefficient row shorter than the vocabulary
    let file = write_artifact(
        r#"{
            "vectorizer": { "vocabulary": { "free": 0, "prize": 1 }, "idf": [1.0, 1.0] },
            "classifier": { "classes": ["ham", "spam"], "coef": [[1.0]], "intercept": [0.0] }
        }"#,
    );
    let err = load_model(file.path()).err().unwrap();
    assert!(matches!(err, ScamError::ModelUnavailable(_)));

    // single class
    let file = write_artifact(
        r#"{
            "vectorizer": { "vocabulary": { "free": 0 }, "idf": [1.0] },
            "classifier": { "classes": ["spam"], "coef": [[1.0]], "intercept": [0.0] }
        }"#,
    );
    assert!(load_model(file.path()).is_err());
}

#[test]
fn test_multiclass_artifact_without_spam_label() {
    let file = write_artifact(
        r#"{
            "name": "three_way",
            "vectorizer": { "vocabulary": { "free": 0, "lunch": 1 }, "idf": [1.0, 1.0], "norm": "none" },
            "classifier": {
                "classes": ["legitimate", "promo", "fraud"],
                "coef": [[0.0, 2.0], [2.0, 0.0], [1.0, 0.0]],
                "intercept": [0.0, 0.0, 0.0]
            }
        }"#,
    );
    let model = load_model(file.path()).unwrap();
    assert_eq!(model.predict("free").unwrap(), "promo");

    // a spam label the model never learned: probability 0, never a scam
    let analyzer = Analyzer::new(Arc::new(model), "spam");
    let result = analyzer.analyze("FREE stuff").unwrap();
    assert!(!result.is_scam);
    assert_eq!(result.confidence, 100.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
}
