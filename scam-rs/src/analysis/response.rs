//! Final result assembly: summary text and recommendations

use super::types::{AnalysisResult, Category, Indicator, RiskAssessment};

pub const SCAM_RECOMMENDATIONS: [&str; 5] = [
    "Do not respond to this message",
    "Do not click any links or download attachments",
    "Do not share personal or financial information",
    "Block the sender if possible",
    "Report as spam to your service provider",
];

pub const LEGITIMATE_RECOMMENDATIONS: [&str; 4] = [
    "Message appears safe, but remain vigilant",
    "Verify the sender's identity if unsure",
    "Avoid sharing sensitive information",
    "Contact the organization directly if claiming to be from a company",
];

/// Summary sentence for a verdict.
///
/// Scams quote the spam-label probability; legitimate messages quote the
/// model's own confidence in its top class.
pub fn summary(assessment: &RiskAssessment, category: Category) -> String {
    if assessment.is_scam {
        format!(
            "This message has been classified as {} with {:.1}% confidence. It shows characteristics commonly associated with scams.",
            category.as_str().to_lowercase(),
            assessment.scam_probability
        )
    } else {
        format!(
            "This message appears to be legitimate with {:.1}% confidence. However, always exercise caution with unsolicited messages.",
            assessment.model_confidence
        )
    }
}

pub fn recommendations(is_scam: bool) -> Vec<String> {
    let items: &[&str] = if is_scam {
        &SCAM_RECOMMENDATIONS
    } else {
        &LEGITIMATE_RECOMMENDATIONS
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Compose the externally visible result
pub fn assemble(
    assessment: &RiskAssessment,
    category: Category,
    indicators: Vec<Indicator>,
) -> AnalysisResult {
    AnalysisResult {
        is_scam: assessment.is_scam,
        confidence: assessment.confidence,
        risk_level: assessment.risk_level,
        detected_category: category,
        indicators,
        summary: summary(assessment, category),
        recommendations: recommendations(assessment.is_scam),
    }
}
