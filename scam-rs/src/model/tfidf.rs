//! TF-IDF feature extraction for a fitted vocabulary
//!
//! Mirrors the transform of a word-level TF-IDF vectorizer: tokens are runs
//! of two or more word characters, stop words and unknown terms are dropped,
//! term counts are weighted by idf and the row is normalized.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Result, ScamError};

/// Sparse feature row as `(feature index, weight)` sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Row normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    stop_words: HashSet<String>,
    sublinear_tf: bool,
    norm: Norm,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Build a vectorizer from fitted state
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
        stop_words: impl IntoIterator<Item = String>,
        sublinear_tf: bool,
        norm: Norm,
    ) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(ScamError::ModelUnavailable("vectorizer vocabulary is empty".to_string()));
        }

        if idf.len() != vocabulary.len() {
            return Err(ScamError::ModelUnavailable(format!(
                "vectorizer has {} idf weights for {} vocabulary terms",
                idf.len(),
                vocabulary.len()
            )));
        }

        let mut seen = vec![false; idf.len()];
        for (term, &index) in &vocabulary {
            if index >= idf.len() {
                return Err(ScamError::ModelUnavailable(format!(
                    "vocabulary term '{}' has out-of-range index {}",
                    term, index
                )));
            }
            if seen[index] {
                return Err(ScamError::ModelUnavailable(format!(
                    "vocabulary index {} is assigned to more than one term",
                    index
                )));
            }
            seen[index] = true;
        }

        if let Some(bad) = idf.iter().find(|w| !w.is_finite()) {
            return Err(ScamError::ModelUnavailable(format!("non-finite idf weight {}", bad)));
        }

        let token_pattern = Regex::new(r"\b\w\w+\b")
            .map_err(|e| ScamError::ModelUnavailable(format!("token pattern: {}", e)))?;

        Ok(Self {
            vocabulary,
            idf,
            stop_words: stop_words.into_iter().collect(),
            sublinear_tf,
            norm,
            token_pattern,
        })
    }

    /// Number of features produced by [`TfidfVectorizer::transform`]
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Split text into candidate terms, stop words removed
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect()
    }

    /// Transform one document into a weighted, normalized feature row
    pub fn transform(&self, text: &str) -> SparseVector {
        let lowered = text.to_lowercase();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.tokenize(&lowered) {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (index, tf * self.idf[index])
            })
            .collect();

        let length = match self.norm {
            Norm::L2 => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Norm::L1 => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };

        if length > 0.0 {
            for (_, weight) in row.iter_mut() {
                *weight /= length;
            }
        }

        row
    }
}
