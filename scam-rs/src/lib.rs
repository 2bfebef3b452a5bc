//! scam-rs: message scam/spam risk analysis
//!
//! Classifies short SMS or email-like messages with a fitted text model and
//! enriches the verdict with keyword heuristics, a scam category and
//! human-readable guidance.
//!
//! # Example
//!
//! ```no_run
//! use scam_rs::analysis::Analyzer;
//! use scam_rs::model::load_model;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = load_model("models/spam_model.json")?;
//!     let analyzer = Analyzer::new(Arc::new(model), "spam");
//!
//!     let result = analyzer.analyze("You have WON a prize! Call +441234567890 now")?;
//!     println!("{} ({:?})", result.detected_category, result.risk_level);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`analysis`]: normalization, indicators, risk tiers, categories, result assembly
//! - [`model`]: classifier contract and the bundled TF-IDF + logistic regression model
//! - [`api`]: HTTP surface
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`logging`]: tracing setup

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use analysis::{AnalysisResponse, AnalysisResult, Analyzer};
pub use config::Config;
pub use error::{Result, ScamError};
pub use model::{load_model, Classifier};
