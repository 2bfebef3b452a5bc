//! Fitted logistic regression over sparse TF-IDF rows

use crate::error::{Result, ScamError};

use super::tfidf::SparseVector;

pub struct LogisticRegression {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LogisticRegression {
    /// Build from fitted weights.
    ///
    /// Two classes use a single coefficient row scoring `classes[1]`;
    /// three or more classes need one row per class (softmax).
    pub fn new(
        classes: Vec<String>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
        n_features: usize,
    ) -> Result<Self> {
        if classes.len() < 2 {
            return Err(ScamError::ModelUnavailable(format!(
                "classifier needs at least two classes, found {}",
                classes.len()
            )));
        }

        for (i, class) in classes.iter().enumerate() {
            if classes[..i].contains(class) {
                return Err(ScamError::ModelUnavailable(format!("duplicate class '{}'", class)));
            }
        }

        let expected_rows = if classes.len() == 2 { 1 } else { classes.len() };
        if coef.len() != expected_rows {
            return Err(ScamError::ModelUnavailable(format!(
                "{} classes need {} coefficient row(s), found {}",
                classes.len(),
                expected_rows,
                coef.len()
            )));
        }

        if intercept.len() != expected_rows {
            return Err(ScamError::ModelUnavailable(format!(
                "expected {} intercept value(s), found {}",
                expected_rows,
                intercept.len()
            )));
        }

        for (i, row) in coef.iter().enumerate() {
            if row.len() != n_features {
                return Err(ScamError::ModelUnavailable(format!(
                    "coefficient row {} has {} columns, vectorizer produces {} features",
                    i,
                    row.len(),
                    n_features
                )));
            }
        }

        let all_finite = coef.iter().flatten().chain(intercept.iter()).all(|w| w.is_finite());
        if !all_finite {
            return Err(ScamError::ModelUnavailable("non-finite classifier weight".to_string()));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Raw decision value per coefficient row
    pub fn decision_function(&self, x: &SparseVector) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| x.iter().map(|&(i, w)| row[i] * w).sum::<f64>() + b)
            .collect()
    }

    /// Probability per class, in class order
    pub fn predict_proba(&self, x: &SparseVector) -> Vec<f64> {
        let scores = self.decision_function(x);

        if self.classes.len() == 2 {
            let positive = sigmoid(scores[0]);
            return vec![1.0 - positive, positive];
        }

        softmax(&scores)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
