//! Gradient-boosted tree ensembles in the XGBoost JSON model format.
//!
//! Artifacts are produced by `Booster.save_model("model.json")` (or the
//! scikit-learn wrapper's `save_model`). Only the parts needed for
//! inference are read: the objective, the base score, and the node arrays
//! of each tree. The structure is validated up front so that evaluation can
//! never index out of bounds or loop.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DiabriskError, Result};
use crate::indicator::{INDICATOR_COUNT, MODEL_ORDER};
use crate::input::FeatureVector;

use super::artifact::{ArtifactBytes, ArtifactMetadata};
use super::provider::{ClassifierConfig, RiskClassifier};

/// Format identifier recorded in [`ArtifactMetadata::format`].
pub const XGBOOST_JSON_FORMAT: &str = "xgboost-json";

// ---------------------------------------------------------------------------
// On-disk layout
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawModel {
    learner: RawLearner,
    #[serde(default)]
    version: Vec<u32>,
}

#[derive(Deserialize)]
struct RawLearner {
    #[serde(default)]
    feature_names: Vec<String>,
    gradient_booster: RawBooster,
    learner_model_param: RawLearnerParam,
    objective: RawObjective,
}

#[derive(Deserialize)]
struct RawBooster {
    name: String,
    #[serde(default)]
    model: Option<RawTreeModel>,
}

#[derive(Deserialize)]
struct RawTreeModel {
    trees: Vec<RawTree>,
    #[serde(default)]
    tree_info: Vec<i64>,
}

#[derive(Deserialize)]
struct RawTree {
    left_children: Vec<i64>,
    right_children: Vec<i64>,
    split_indices: Vec<i64>,
    split_conditions: Vec<f32>,
    default_left: Vec<Flag>,
    #[serde(default)]
    split_type: Vec<u8>,
}

/// `default_left` is written as booleans by some versions and 0/1 by others.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(u8),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Int(i) => *i != 0,
        }
    }
}

#[derive(Deserialize)]
struct RawLearnerParam {
    base_score: String,
    num_feature: String,
    #[serde(default)]
    num_class: Option<String>,
}

#[derive(Deserialize)]
struct RawObjective {
    name: String,
}

// ---------------------------------------------------------------------------
// Validated model
// ---------------------------------------------------------------------------

/// How the summed margin is turned into a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    /// `binary:logistic` / `reg:logistic`: base score is a probability.
    Logistic,
    /// `binary:logitraw`: base score is already a margin.
    LogitRaw,
}

impl Objective {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "binary:logistic" | "reg:logistic" => Some(Objective::Logistic),
            "binary:logitraw" => Some(Objective::LogitRaw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
        default_left: bool,
    },
    Leaf(f32),
}

#[derive(Debug, Clone)]
struct RegTree {
    nodes: Vec<Node>,
}

impl RegTree {
    fn from_raw(raw: RawTree, num_features: usize) -> std::result::Result<Self, String> {
        let n = raw.left_children.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if raw.right_children.len() != n
            || raw.split_indices.len() != n
            || raw.split_conditions.len() != n
            || raw.default_left.len() != n
        {
            return Err("tree node arrays have different lengths".to_string());
        }
        if raw.split_type.iter().any(|t| *t != 0) {
            return Err("categorical splits are not supported".to_string());
        }

        let mut nodes = Vec::with_capacity(n);
        for id in 0..n {
            let left = raw.left_children[id];
            if left == -1 {
                nodes.push(Node::Leaf(raw.split_conditions[id]));
                continue;
            }

            let right = raw.right_children[id];
            // Children are always allocated after their parent; requiring it
            // guarantees evaluation terminates.
            let child_ok = |c: i64| c > id as i64 && (c as usize) < n;
            if !child_ok(left) || !child_ok(right) {
                return Err(format!("node {} has invalid children ({}, {})", id, left, right));
            }

            let feature = raw.split_indices[id];
            if feature < 0 || feature as usize >= num_features {
                return Err(format!(
                    "node {} splits on feature {} but the model has {} features",
                    id, feature, num_features
                ));
            }

            nodes.push(Node::Split {
                feature: feature as usize,
                threshold: raw.split_conditions[id],
                left: left as usize,
                right: right as usize,
                default_left: raw.default_left[id].is_set(),
            });
        }

        Ok(Self { nodes })
    }

    /// Walk from the root to a leaf and return its value.
    fn leaf_value(&self, features: &[f64]) -> f32 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    // Split conditions are single precision in the model.
                    let x = features[feature] as f32;
                    id = if x.is_nan() {
                        if default_left { left } else { right }
                    } else if x < threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// A binary XGBoost tree ensemble loaded from a JSON artifact.
#[derive(Debug, Clone)]
pub struct XgbClassifier {
    trees: Vec<RegTree>,
    base_margin: f64,
    objective: Objective,
    config: ClassifierConfig,
    metadata: ArtifactMetadata,
}

impl XgbClassifier {
    /// Load an artifact with the default configuration.
    ///
    /// Fails with [`DiabriskError::ArtifactLoad`] if the file is missing,
    /// unreadable, not valid JSON, or describes a model this crate cannot
    /// evaluate faithfully.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, ClassifierConfig::default())
    }

    /// Load an artifact with a custom configuration.
    pub fn load_with_config(path: impl AsRef<Path>, config: ClassifierConfig) -> Result<Self> {
        let path = path.as_ref();
        validate_threshold(config.threshold)?;

        let bytes = ArtifactBytes::read(path)?;
        let classifier = Self::from_artifact(bytes, config)?;

        info!(
            path = %path.display(),
            trees = classifier.trees.len(),
            objective = %classifier.metadata.objective,
            hash = %classifier.metadata.hash,
            "Loaded model artifact"
        );

        Ok(classifier)
    }

    fn from_artifact(bytes: ArtifactBytes, config: ClassifierConfig) -> Result<Self> {
        let fail = |reason: String| DiabriskError::artifact(&bytes.path, reason);

        let raw: RawModel = serde_json::from_slice(&bytes.contents)
            .map_err(|e| fail(format!("not an XGBoost JSON model: {}", e)))?;
        let learner = raw.learner;

        let objective = Objective::parse(&learner.objective.name).ok_or_else(|| {
            fail(format!(
                "unsupported objective '{}' (expected a binary logistic model)",
                learner.objective.name
            ))
        })?;

        let num_class = learner
            .learner_model_param
            .num_class
            .as_deref()
            .map(parse_param)
            .transpose()
            .map_err(|e| fail(format!("invalid num_class: {}", e)))?
            .unwrap_or(0.0);
        if num_class > 1.0 {
            return Err(fail(format!(
                "multi-class models are not supported (num_class = {})",
                num_class
            )));
        }

        let num_features = parse_param(&learner.learner_model_param.num_feature)
            .map_err(|e| fail(format!("invalid num_feature: {}", e)))? as usize;
        if num_features != INDICATOR_COUNT {
            return Err(fail(format!(
                "model expects {} features but there are {} indicators",
                num_features, INDICATOR_COUNT
            )));
        }

        if !learner.feature_names.is_empty() {
            let expected: Vec<&str> = MODEL_ORDER.iter().map(|i| i.name()).collect();
            if learner.feature_names != expected {
                return Err(fail(format!(
                    "feature names {:?} do not match the indicator order {:?}",
                    learner.feature_names, expected
                )));
            }
        }

        let base_score = parse_param(&learner.learner_model_param.base_score)
            .map_err(|e| fail(format!("invalid base_score: {}", e)))?;
        let base_margin = match objective {
            Objective::Logistic => {
                if base_score <= 0.0 || base_score >= 1.0 {
                    return Err(fail(format!(
                        "base_score {} must be a probability strictly between 0 and 1",
                        base_score
                    )));
                }
                (base_score / (1.0 - base_score)).ln()
            }
            Objective::LogitRaw => base_score,
        };

        if learner.gradient_booster.name != "gbtree" {
            return Err(fail(format!(
                "unsupported booster '{}' (expected gbtree)",
                learner.gradient_booster.name
            )));
        }
        let model = learner
            .gradient_booster
            .model
            .ok_or_else(|| fail("booster has no model section".to_string()))?;
        if model.tree_info.iter().any(|group| *group != 0) {
            return Err(fail("trees belong to more than one output group".to_string()));
        }

        let trees = model
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                RegTree::from_raw(raw, num_features).map_err(|e| fail(format!("tree {}: {}", i, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        if trees.is_empty() {
            return Err(fail("model contains no trees".to_string()));
        }

        let writer_version = (!raw.version.is_empty()).then(|| {
            raw.version
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(".")
        });
        let metadata = bytes.metadata(
            XGBOOST_JSON_FORMAT,
            &learner.objective.name,
            trees.len(),
            num_features,
            writer_version,
        );

        Ok(Self {
            trees,
            base_margin,
            objective,
            config,
            metadata,
        })
    }

    /// Replace the decision threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_threshold(threshold)?;
        self.config.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.metadata
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Raw ensemble output: base margin plus the sum of tree leaves.
    pub fn margin(&self, features: &FeatureVector) -> f64 {
        let values = features.as_slice();
        self.trees
            .iter()
            .map(|tree| f64::from(tree.leaf_value(values)))
            .sum::<f64>()
            + self.base_margin
    }

    /// Positive-class probability.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        sigmoid(self.margin(features))
    }
}

impl RiskClassifier for XgbClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<u8> {
        let probability = self.score(features);
        let label = u8::from(probability > self.config.threshold);
        debug!(probability, label, "Classified feature vector");
        Ok(label)
    }

    fn probability(&self, features: &FeatureVector) -> Result<Option<f64>> {
        Ok(Some(self.score(features)))
    }

    fn name(&self) -> &str {
        match self.objective {
            Objective::Logistic => "xgboost",
            Objective::LogitRaw => "xgboost-logitraw",
        }
    }
}

/// Learner parameters are stored as strings such as `"5E-1"`, and newer
/// writers wrap them in brackets (`"[5E-1]"`).
fn parse_param(raw: &str) -> std::result::Result<f64, String> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']').trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| format!("'{}': {}", raw, e))
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(DiabriskError::Config(format!(
            "Decision threshold must be between 0 and 1 (exclusive), got {}",
            threshold
        )));
    }
    Ok(())
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
