//! JSON model artifact and the classifier built from it

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ScamError};

use super::logistic::LogisticRegression;
use super::tfidf::{Norm, TfidfVectorizer};
use super::{ClassProbabilities, Classifier};

/// On-disk form of a fitted vectorizer + classifier pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub vectorizer: VectorizerArtifact,
    pub classifier: ClassifierArtifact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

fn default_model_name() -> String {
    "spam_model".to_string()
}

/// TF-IDF vectorizer feeding a logistic regression
pub struct TextModel {
    name: String,
    vectorizer: TfidfVectorizer,
    regression: LogisticRegression,
}

impl TextModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let ModelArtifact {
            name,
            vectorizer,
            classifier,
        } = artifact;

        let vectorizer = TfidfVectorizer::new(
            vectorizer.vocabulary,
            vectorizer.idf,
            vectorizer.stop_words,
            vectorizer.sublinear_tf,
            vectorizer.norm,
        )?;

        let regression = LogisticRegression::new(
            classifier.classes,
            classifier.coef,
            classifier.intercept,
            vectorizer.n_features(),
        )?;

        Ok(Self {
            name,
            vectorizer,
            regression,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_features()
    }

    fn probabilities(&self, text: &str) -> Vec<(String, f64)> {
        let row = self.vectorizer.transform(text);
        self.regression
            .classes()
            .iter()
            .cloned()
            .zip(self.regression.predict_proba(&row))
            .collect()
    }
}

impl Classifier for TextModel {
    fn predict(&self, text: &str) -> Result<String> {
        let probabilities = ClassProbabilities::new(self.probabilities(text));
        probabilities
            .argmax()
            .map(str::to_string)
            .ok_or_else(|| ScamError::Analysis("model produced no classes".to_string()))
    }

    fn predict_probabilities(&self, text: &str) -> Result<ClassProbabilities> {
        Ok(ClassProbabilities::new(self.probabilities(text)))
    }

    fn model_name(&self) -> &str {
        &self.name
    }

    fn labels(&self) -> Vec<String> {
        self.regression.classes().to_vec()
    }
}

/// Load and validate a model artifact. Every failure is reported as
/// [`ScamError::ModelUnavailable`].
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TextModel> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .map_err(|e| ScamError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;

    let artifact: ModelArtifact = serde_json::from_str(&content)
        .map_err(|e| ScamError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;

    let model = TextModel::from_artifact(artifact)?;

    info!(
        "Loaded model '{}' from {} ({} terms, classes: {:?})",
        model.name,
        path.display(),
        model.vocabulary_size(),
        model.regression.classes()
    );

    Ok(model)
}
