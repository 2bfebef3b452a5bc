//! Heuristic indicators evaluated independently of the classifier
//!
//! Keyword checks are unanchored substring tests on the lower-cased raw
//! message, so "winner" also fires inside "winnery". Indicators run on the
//! raw text rather than the normalized text because URL and phone patterns
//! need the punctuation and digits normalization strips.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Indicator, Severity};

static LINK_OR_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://|www\.|\+?\d{10,}").expect("link pattern is valid")
});

/// How an indicator decides whether it fired
#[derive(Debug, Clone, Copy)]
pub enum IndicatorRule {
    /// Mirrors the classifier verdict
    ModelVerdict,
    /// Any keyword occurs as a substring
    Keywords(&'static [&'static str]),
    /// URL prefix or a run of 10+ digits
    LinkOrPhone,
}

/// Severity reported for an indicator
#[derive(Debug, Clone, Copy)]
pub enum SeverityPolicy {
    Fixed(Severity),
    /// One severity when found, another when not
    ByOutcome { found: Severity, absent: Severity },
}

/// Catalog entry
#[derive(Debug, Clone, Copy)]
pub struct IndicatorDefinition {
    pub indicator_type: &'static str,
    pub description: &'static str,
    pub severity: SeverityPolicy,
    pub rule: IndicatorRule,
}

/// Fixed indicator catalog, in output order
pub const INDICATORS: [IndicatorDefinition; 6] = [
    IndicatorDefinition {
        indicator_type: "AI Model Detection",
        description: "Machine learning model classification",
        severity: SeverityPolicy::ByOutcome {
            found: Severity::High,
            absent: Severity::Low,
        },
        rule: IndicatorRule::ModelVerdict,
    },
    IndicatorDefinition {
        indicator_type: "Suspicious Keywords",
        description: "Contains common scam terminology",
        severity: SeverityPolicy::Fixed(Severity::Medium),
        rule: IndicatorRule::Keywords(&[
            "win",
            "won",
            "prize",
            "free",
            "cash",
            "reward",
            "lottery",
        ]),
    },
    IndicatorDefinition {
        indicator_type: "Urgent Language",
        description: "Uses pressure tactics or urgent requests",
        severity: SeverityPolicy::Fixed(Severity::Medium),
        rule: IndicatorRule::Keywords(&[
            "urgent",
            "immediately",
            "now",
            "quick",
            "hurry",
            "limited",
        ]),
    },
    IndicatorDefinition {
        indicator_type: "Financial Requests",
        description: "Asks for money or financial information",
        severity: SeverityPolicy::Fixed(Severity::High),
        rule: IndicatorRule::Keywords(&[
            "money",
            "payment",
            "fee",
            "account",
            "bank",
            "card",
            "transfer",
        ]),
    },
    IndicatorDefinition {
        indicator_type: "Prize Claims",
        description: "Claims you've won something",
        severity: SeverityPolicy::Fixed(Severity::High),
        rule: IndicatorRule::Keywords(&["winner", "won", "prize", "award", "reward"]),
    },
    IndicatorDefinition {
        indicator_type: "Links or Contact Info",
        description: "Contains URLs or phone numbers",
        severity: SeverityPolicy::Fixed(Severity::Low),
        rule: IndicatorRule::LinkOrPhone,
    },
];

impl IndicatorDefinition {
    /// Evaluate against an already lower-cased message
    pub fn evaluate(&self, message_lower: &str, is_scam: bool) -> Indicator {
        let found = match self.rule {
            IndicatorRule::ModelVerdict => is_scam,
            IndicatorRule::Keywords(words) => contains_any(message_lower, words),
            IndicatorRule::LinkOrPhone => LINK_OR_PHONE.is_match(message_lower),
        };

        let severity = match self.severity {
            SeverityPolicy::Fixed(severity) => severity,
            SeverityPolicy::ByOutcome { found: hit, absent } => {
                if found {
                    hit
                } else {
                    absent
                }
            }
        };

        Indicator {
            indicator_type: self.indicator_type.to_string(),
            description: self.description.to_string(),
            severity,
            found,
        }
    }
}

/// Unanchored substring test for any of `words`
pub fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|word| haystack.contains(word))
}

/// Evaluate the whole catalog against a raw message
pub fn detect_indicators(raw_message: &str, is_scam: bool) -> Vec<Indicator> {
    detect_lowered(&raw_message.to_lowercase(), is_scam)
}

/// Evaluate the whole catalog against a lower-cased message
pub fn detect_lowered(message_lower: &str, is_scam: bool) -> Vec<Indicator> {
    INDICATORS
        .iter()
        .map(|definition| definition.evaluate(message_lower, is_scam))
        .collect()
}
