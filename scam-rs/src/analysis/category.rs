//! Scam category from ordered keyword groups
//!
//! Groups are tried top to bottom and the first match wins, so a message
//! mentioning both a lottery and a bank is a lottery scam.

use super::indicators::contains_any;
use super::types::Category;

/// Keyword groups in precedence order
pub const CATEGORY_GROUPS: [(&[&str], Category); 3] = [
    (&["win", "won", "prize", "lottery"], Category::LotteryPrize),
    (&["bank", "account", "card", "security"], Category::FinancialPhishing),
    (&["free", "gift", "offer"], Category::FreeOffer),
];

/// Categorize a lower-cased message. Non-scams are always legitimate.
pub fn classify(message_lower: &str, is_scam: bool) -> Category {
    if !is_scam {
        return Category::Legitimate;
    }

    CATEGORY_GROUPS
        .iter()
        .find(|(words, _)| contains_any(message_lower, words))
        .map(|(_, category)| *category)
        .unwrap_or(Category::SuspiciousSpam)
}
