//! Analysis types and data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Indicator severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Risk tier derived from the scam probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Human-readable scam category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Lottery/Prize Scam")]
    LotteryPrize,
    #[serde(rename = "Financial Phishing")]
    FinancialPhishing,
    #[serde(rename = "Free Offer Scam")]
    FreeOffer,
    #[serde(rename = "Suspicious Spam")]
    SuspiciousSpam,
    #[serde(rename = "Legitimate Message")]
    Legitimate,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LotteryPrize => "Lottery/Prize Scam",
            Category::FinancialPhishing => "Financial Phishing",
            Category::FreeOffer => "Free Offer Scam",
            Category::SuspiciousSpam => "Suspicious Spam",
            Category::Legitimate => "Legitimate Message",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated heuristic signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(rename = "type")]
    pub indicator_type: String,
    pub description: String,
    pub severity: Severity,
    pub found: bool,
}

/// Verdict derived from the classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub is_scam: bool,
    /// Spam-label probability as a percentage
    pub scam_probability: f64,
    /// `scam_probability` for scams, its complement otherwise
    pub confidence: f64,
    /// Highest class probability as a percentage
    pub model_confidence: f64,
    pub risk_level: RiskLevel,
}

/// Full analysis returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_scam: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub detected_category: Category,
    pub indicators: Vec<Indicator>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

/// Error object returned in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Either an analysis or an error object, serialized without a wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Analysis(Box<AnalysisResult>),
    Error(ErrorResponse),
}

impl AnalysisResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResponse::Error(_))
    }
}

/// Raw classifier output without risk tiers or heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    /// Highest class probability in [0, 1]
    pub confidence: f64,
    pub is_scam: bool,
    pub all_probabilities: BTreeMap<String, f64>,
}
