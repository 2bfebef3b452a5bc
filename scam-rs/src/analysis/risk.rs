//! Verdict and risk tier from classifier output

use crate::model::ClassificationResult;

use super::types::{RiskAssessment, RiskLevel};

/// Scam probability (percent) strictly above which risk is high
pub const HIGH_RISK_ABOVE: f64 = 80.0;
/// Scam probability (percent) strictly above which risk is medium
pub const MEDIUM_RISK_ABOVE: f64 = 60.0;

/// Map a scam probability percentage to a risk tier
pub fn risk_level(scam_probability: f64) -> RiskLevel {
    if scam_probability > HIGH_RISK_ABOVE {
        RiskLevel::High
    } else if scam_probability > MEDIUM_RISK_ABOVE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub struct RiskAssessor {
    spam_label: String,
}

impl RiskAssessor {
    pub fn new(spam_label: impl Into<String>) -> Self {
        Self {
            spam_label: spam_label.into(),
        }
    }

    pub fn spam_label(&self) -> &str {
        &self.spam_label
    }

    /// The tier always comes from the spam-label probability, never from
    /// the highest class probability. The two differ when the predicted
    /// label is not the arg-max of the distribution.
    pub fn assess(&self, result: &ClassificationResult) -> RiskAssessment {
        let is_scam = result.label == self.spam_label;
        let scam_probability = result.probabilities.probability_of(&self.spam_label) * 100.0;
        let confidence = if is_scam {
            scam_probability
        } else {
            100.0 - scam_probability
        };

        RiskAssessment {
            is_scam,
            scam_probability,
            confidence,
            model_confidence: result.probabilities.max_probability() * 100.0,
            risk_level: risk_level(scam_probability),
        }
    }
}
