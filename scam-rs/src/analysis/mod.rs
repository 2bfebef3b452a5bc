//! Message risk analysis
//!
//! Pipeline: normalize the message, classify it, derive the verdict and
//! risk tier, evaluate heuristic indicators and the scam category on the
//! raw text, then assemble the result.

pub mod category;
pub mod indicators;
pub mod normalizer;
pub mod response;
pub mod risk;
pub mod types;

pub use normalizer::normalize;
pub use risk::RiskAssessor;
pub use types::*;

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{Result, ScamError};
use crate::model::Classifier;

/// Immutable analysis context: the loaded classifier and its spam label.
///
/// Cheap to clone and safe to share between concurrent requests; every
/// call builds its own intermediate values.
#[derive(Clone)]
pub struct Analyzer {
    classifier: Arc<dyn Classifier>,
    risk: Arc<RiskAssessor>,
}

impl Analyzer {
    pub fn new(classifier: Arc<dyn Classifier>, spam_label: impl Into<String>) -> Self {
        Self {
            classifier,
            risk: Arc::new(RiskAssessor::new(spam_label)),
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn spam_label(&self) -> &str {
        self.risk.spam_label()
    }

    /// Analyze one message
    pub fn analyze(&self, content: &str) -> Result<AnalysisResult> {
        if content.is_empty() {
            return Err(ScamError::EmptyContent);
        }

        let normalized = normalize(content);
        let classification = self.classifier.classify(&normalized)?;
        classification.validate()?;

        let assessment = self.risk.assess(&classification);
        debug!(
            "Classified message ({} bytes): label={}, scam_probability={:.2}, risk={:?}",
            content.len(),
            classification.label,
            assessment.scam_probability,
            assessment.risk_level
        );

        let content_lower = content.to_lowercase();
        let indicators = indicators::detect_lowered(&content_lower, assessment.is_scam);
        let category = category::classify(&content_lower, assessment.is_scam);

        debug!(
            "{} of {} indicators found, category: {}",
            indicators.iter().filter(|i| i.found).count(),
            indicators.len(),
            category
        );

        Ok(response::assemble(&assessment, category, indicators))
    }

    /// Pipeline boundary: never fails, errors become error objects
    pub fn respond(&self, content: Option<&str>) -> AnalysisResponse {
        let content = content.unwrap_or_default();

        match self.analyze(content) {
            Ok(result) => AnalysisResponse::Analysis(Box::new(result)),
            Err(e) => {
                let message = error_message(&e);
                match e {
                    ScamError::EmptyContent => debug!("Rejected request: {}", message),
                    _ => warn!("{}", message),
                }
                AnalysisResponse::Error(ErrorResponse::new(message))
            }
        }
    }

    /// Raw classifier output for a message, without heuristics
    pub fn predict(&self, content: &str) -> Result<Prediction> {
        if content.trim().is_empty() {
            return Err(ScamError::EmptyContent);
        }

        let classification = self.classifier.classify(&normalize(content))?;
        classification.validate()?;

        let probabilities = &classification.probabilities;
        Ok(Prediction {
            is_scam: classification.label == self.spam_label(),
            confidence: probabilities.max_probability(),
            all_probabilities: probabilities
                .iter()
                .map(|(label, p)| (label.to_string(), p))
                .collect(),
            prediction: classification.label,
        })
    }
}

/// Text of the error object for a failed analysis
pub fn error_message(error: &ScamError) -> String {
    match error {
        ScamError::EmptyContent | ScamError::Analysis(_) | ScamError::ModelUnavailable(_) => {
            error.to_string()
        }
        other => ScamError::Analysis(other.to_string()).to_string(),
    }
}
