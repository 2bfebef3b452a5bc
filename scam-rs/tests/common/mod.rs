//! Shared helpers for integration tests

#![allow(dead_code)]

use scam_rs::analysis::Analyzer;
use scam_rs::error::Result;
use scam_rs::model::{ClassProbabilities, Classifier};
use std::path::PathBuf;
use std::sync::Arc;

/// Classifier double returning a fixed spam probability
pub struct StubClassifier {
    spam_probability: f64,
}

impl StubClassifier {
    pub fn new(spam_probability: f64) -> Self {
        Self { spam_probability }
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, _text: &str) -> Result<String> {
        let label = if self.spam_probability > 0.5 { "spam" } else { "ham" };
        Ok(label.to_string())
    }

    fn predict_probabilities(&self, _text: &str) -> Result<ClassProbabilities> {
        Ok(ClassProbabilities::new(vec![
            ("ham".to_string(), 1.0 - self.spam_probability),
            ("spam".to_string(), self.spam_probability),
        ]))
    }

    fn model_name(&self) -> &str {
        "stub"
    }

    fn labels(&self) -> Vec<String> {
        vec!["ham".to_string(), "spam".to_string()]
    }
}

/// Analyzer over a stub with the given spam probability (0..1)
pub fn stub_analyzer(spam_probability: f64) -> Analyzer {
    Analyzer::new(Arc::new(StubClassifier::new(spam_probability)), "spam")
}

/// Path of the demonstration model shipped with the crate
pub fn demo_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/spam_model.json")
}

/// Classifier double that always errors, as a broken feature pipeline would
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _text: &str) -> Result<String> {
        Err(scam_rs::ScamError::Analysis("vectorizer rejected input".to_string()))
    }

    fn predict_probabilities(&self, _text: &str) -> Result<ClassProbabilities> {
        Err(scam_rs::ScamError::Analysis("vectorizer rejected input".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing"
    }

    fn labels(&self) -> Vec<String> {
        Vec::new()
    }
}
