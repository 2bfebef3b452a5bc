//! Classifier contract and the bundled TF-IDF + logistic regression model
//!
//! The analysis pipeline only depends on [`Classifier`]. A fitted model is
//! loaded once at startup and shared read-only behind an `Arc`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScamError};

pub mod artifact;
pub mod logistic;
pub mod tfidf;

pub use artifact::{load_model, ModelArtifact, TextModel};
pub use logistic::LogisticRegression;
pub use tfidf::TfidfVectorizer;

/// Allowed drift of a probability distribution's sum away from 1.0
const SUM_TOLERANCE: f64 = 1e-6;

/// Fitted text classifier.
///
/// Implementations must be deterministic for a fixed model and must report
/// every class they were trained on in [`Classifier::predict_probabilities`],
/// even at probability zero.
pub trait Classifier: Send + Sync {
    /// Most likely label for normalized text
    fn predict(&self, text: &str) -> Result<String>;

    /// Probability of every known label for normalized text
    fn predict_probabilities(&self, text: &str) -> Result<ClassProbabilities>;

    /// Model name reported by health checks
    fn model_name(&self) -> &str;

    /// Labels in model order
    fn labels(&self) -> Vec<String>;

    /// Run both predictions
    fn classify(&self, text: &str) -> Result<ClassificationResult> {
        Ok(ClassificationResult {
            label: self.predict(text)?,
            probabilities: self.predict_probabilities(text)?,
        })
    }
}

/// Probability per label, kept in model order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    entries: Vec<(String, f64)>,
}

impl ClassProbabilities {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Probability of `label`, 0.0 when the model has no such class
    pub fn probability_of(&self, label: &str) -> f64 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    /// Highest probability in the distribution
    pub fn max_probability(&self) -> f64 {
        self.entries.iter().map(|(_, p)| *p).fold(0.0, f64::max)
    }

    /// First label holding the highest probability
    pub fn argmax(&self) -> Option<&str> {
        let mut best: Option<&(String, f64)> = None;
        for entry in &self.entries {
            match best {
                Some((_, p)) if entry.1 <= *p => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classifier output for one message
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub probabilities: ClassProbabilities,
}

impl ClassificationResult {
    /// Check the distribution is finite, non-negative, sums to 1 and
    /// contains the predicted label.
    pub fn validate(&self) -> Result<()> {
        if self.probabilities.is_empty() {
            return Err(ScamError::Analysis(
                "classifier returned an empty probability distribution".to_string(),
            ));
        }

        let mut sum = 0.0;
        for (label, p) in self.probabilities.iter() {
            if !p.is_finite() || p < 0.0 {
                return Err(ScamError::Analysis(format!(
                    "invalid probability {} for label '{}'",
                    p, label
                )));
            }
            sum += p;
        }

        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ScamError::Analysis(format!(
                "class probabilities sum to {} instead of 1",
                sum
            )));
        }

        if !self.probabilities.contains(&self.label) {
            return Err(ScamError::Analysis(format!(
                "predicted label '{}' is missing from the probability distribution",
                self.label
            )));
        }

        Ok(())
    }
}
