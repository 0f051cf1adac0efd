//! Naive Bayes classification over mixed categorical and continuous features.
//!
//! [`NaiveBayes`] holds the estimator parameters; [`NaiveBayes::fit`]
//! returns an immutable [`NaiveBayesModel`] that scores rows by maximum
//! a-posteriori estimation under a conditional-independence assumption.
//! Each feature column is modeled either as a per-class frequency table or
//! as a per-class Gaussian, decided once at fit time from the full training
//! column.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::data::{Frame, Value};
use crate::error::{InferirError, Result};
use crate::metrics::accuracy;

/// Probability assigned to a categorical value never observed for a class.
pub const UNSEEN_VALUE_FLOOR: f64 = 1e-6;

/// Substitute for a zero or negative variance in Gaussian scoring.
pub const VARIANCE_FLOOR: f64 = 1e-6;

/// Default distinct-value count below which a fully numeric column is
/// still modeled as categorical.
pub const DEFAULT_CARDINALITY_THRESHOLD: usize = 10;

/// Conditional distribution learned for one feature within one class.
///
/// The variant is decided per column at fit time and is the same across
/// all classes, so scoring never inspects value types on the hot path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureModel {
    /// Frequency table over the values observed for the class, normalized
    /// to sum to 1. Values unseen for the class are absent, not zero.
    Categorical(HashMap<Value, f64>),
    /// Gaussian estimated from the class's rows. A single-row class stores
    /// variance 0.0; scoring substitutes [`VARIANCE_FLOOR`].
    Gaussian {
        /// Sample mean of the class's values.
        mean: f64,
        /// Sample variance (`n-1` denominator) of the class's values.
        variance: f64,
    },
}

/// Learned state for a single class label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassModel {
    label: String,
    prior: f64,
    features: HashMap<String, FeatureModel>,
}

impl ClassModel {
    /// Returns the class label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the class prior probability.
    #[must_use]
    pub fn prior(&self) -> f64 {
        self.prior
    }

    /// Returns the learned distribution for a feature column, if present.
    #[must_use]
    pub fn feature(&self, column: &str) -> Option<&FeatureModel> {
        self.features.get(column)
    }
}

/// Hybrid naive Bayes estimator parameters.
///
/// A column is modeled as categorical when any training value is
/// non-numeric, or when the column's distinct-value count is below the
/// cardinality threshold. Otherwise it is modeled as a per-class Gaussian.
///
/// # Example
///
/// ```
/// use inferir::classification::NaiveBayes;
/// use inferir::data::Frame;
///
/// let x = Frame::new(vec![(
///     "shape".to_string(),
///     vec!["x".into(), "x".into(), "y".into(), "y".into()],
/// )]).expect("columns are aligned");
/// let y: Vec<String> = ["A", "A", "B", "B"].iter().map(ToString::to_string).collect();
///
/// let model = NaiveBayes::new().fit(&x, &y).expect("valid training data");
/// assert_eq!(model.predict(&x), y);
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    cardinality_threshold: usize,
}

impl NaiveBayes {
    /// Creates a new hybrid naive Bayes estimator with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cardinality_threshold: DEFAULT_CARDINALITY_THRESHOLD,
        }
    }

    /// Sets the distinct-value count below which a numeric column is
    /// treated as categorical.
    ///
    /// # Example
    ///
    /// ```
    /// use inferir::classification::NaiveBayes;
    ///
    /// let estimator = NaiveBayes::new().with_cardinality_threshold(4);
    /// ```
    #[must_use]
    pub fn with_cardinality_threshold(mut self, threshold: usize) -> Self {
        self.cardinality_threshold = threshold;
        self
    }

    /// Trains a model: one [`ClassModel`] per distinct label, holding the
    /// class prior and one [`FeatureModel`] per column.
    ///
    /// Classes are stored sorted by label, which makes prediction's
    /// tie-break deterministic (lexicographically smallest label wins).
    ///
    /// # Errors
    ///
    /// Returns an error if the frame has no rows or if `y` is not aligned
    /// with the frame's rows.
    pub fn fit(&self, x: &Frame, y: &[String]) -> Result<NaiveBayesModel> {
        let n_rows = x.n_rows();

        if n_rows == 0 {
            return Err(InferirError::empty_input("training frame"));
        }
        if y.len() != n_rows {
            return Err(InferirError::dimension_mismatch("rows", n_rows, y.len()));
        }

        // Column kind is decided once, from the full training column.
        let categorical: HashMap<&str, bool> = x
            .iter_columns()
            .map(|(name, values)| (name, self.is_categorical(values)))
            .collect();

        let mut labels: Vec<&String> = y.iter().collect();
        labels.sort_unstable();
        labels.dedup();

        let mut classes = Vec::with_capacity(labels.len());

        for label in labels {
            let rows: Vec<usize> = y
                .iter()
                .enumerate()
                .filter_map(|(i, l)| if l == label { Some(i) } else { None })
                .collect();

            let prior = rows.len() as f64 / n_rows as f64;

            let mut features = HashMap::new();
            for (name, values) in x.iter_columns() {
                let feature = if categorical[name] {
                    FeatureModel::Categorical(frequency_table(values, &rows))
                } else {
                    let (mean, variance) = gaussian_stats(values, &rows);
                    FeatureModel::Gaussian { mean, variance }
                };
                features.insert(name.to_string(), feature);
            }

            classes.push(ClassModel {
                label: label.clone(),
                prior,
                features,
            });
        }

        Ok(NaiveBayesModel { classes })
    }

    fn is_categorical(&self, values: &[Value]) -> bool {
        if values.iter().any(|v| !v.is_numeric()) {
            return true;
        }
        let distinct: HashSet<&Value> = values.iter().collect();
        distinct.len() < self.cardinality_threshold
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

/// Empirical frequency of each distinct value within the class's rows.
fn frequency_table(values: &[Value], rows: &[usize]) -> HashMap<Value, f64> {
    let mut counts: HashMap<Value, usize> = HashMap::new();
    for &i in rows {
        *counts.entry(values[i].clone()).or_insert(0) += 1;
    }

    let total = rows.len() as f64;
    counts
        .into_iter()
        .map(|(value, count)| (value, count as f64 / total))
        .collect()
}

/// Sample mean and variance over the class's rows for a numeric column.
fn gaussian_stats(values: &[Value], rows: &[usize]) -> (f64, f64) {
    // Continuous columns contain only numeric values by construction.
    let samples: Vec<f64> = rows.iter().filter_map(|&i| values[i].as_f64()).collect();
    let n = samples.len() as f64;

    let mean = samples.iter().sum::<f64>() / n;
    let variance = if samples.len() > 1 {
        samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };

    (mean, variance)
}

/// A fitted hybrid naive Bayes model.
///
/// Immutable after [`NaiveBayes::fit`]: every method takes `&self`, so one
/// model may score many frames concurrently. Scoring is a pure function of
/// (row, model) with no cross-row state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    classes: Vec<ClassModel>,
}

impl NaiveBayesModel {
    /// Returns the per-class learned state, sorted by label.
    #[must_use]
    pub fn classes(&self) -> &[ClassModel] {
        &self.classes
    }

    /// Returns the class labels, sorted.
    #[must_use]
    pub fn class_labels(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.label.as_str()).collect()
    }

    /// Predicts one class label per row, in row order.
    ///
    /// Columns never seen at fit time are skipped in scoring, as is a
    /// non-numeric value in a column modeled as Gaussian. Ties between
    /// class scores resolve to the lexicographically smallest label.
    #[must_use]
    pub fn predict(&self, x: &Frame) -> Vec<String> {
        (0..x.n_rows())
            .map(|row| {
                let scores = self.score_row(x, row);
                let mut best = 0;
                for (idx, &score) in scores.iter().enumerate() {
                    if score > scores[best] {
                        best = idx;
                    }
                }
                self.classes[best].label.clone()
            })
            .collect()
    }

    /// Returns the raw per-class log-joint scores for each row, in
    /// class-label order (see [`Self::class_labels`]).
    #[must_use]
    pub fn predict_log_scores(&self, x: &Frame) -> Vec<Vec<f64>> {
        (0..x.n_rows()).map(|row| self.score_row(x, row)).collect()
    }

    /// Returns posterior probability estimates for each row, normalized
    /// over classes with the log-sum-exp trick. Each row sums to 1.
    #[must_use]
    pub fn predict_proba(&self, x: &Frame) -> Vec<Vec<f64>> {
        (0..x.n_rows())
            .map(|row| {
                let log_scores = self.score_row(x, row);
                let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let exp: Vec<f64> = log_scores.iter().map(|&s| (s - max).exp()).collect();
                let sum: f64 = exp.iter().sum();
                exp.iter().map(|p| p / sum).collect()
            })
            .collect()
    }

    /// Predicts labels for the frame, compares them element-wise against
    /// `y_true`, prints the accuracy to standard output as a percentage,
    /// and returns the accuracy with the raw predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if `y_true` is empty or not aligned with the
    /// frame's rows.
    pub fn evaluate(&self, x: &Frame, y_true: &[String]) -> Result<Evaluation> {
        if y_true.len() != x.n_rows() {
            return Err(InferirError::dimension_mismatch(
                "rows",
                x.n_rows(),
                y_true.len(),
            ));
        }
        if y_true.is_empty() {
            return Err(InferirError::empty_input("evaluation labels"));
        }

        let predictions = self.predict(x);
        let accuracy = accuracy(&predictions, y_true);

        println!("Accuracy: {:.2}%", accuracy * 100.0);

        Ok(Evaluation {
            accuracy,
            predictions,
        })
    }

    /// Log-joint score of one row under each class, in class order.
    fn score_row(&self, x: &Frame, row: usize) -> Vec<f64> {
        self.classes
            .iter()
            .map(|class| {
                let mut score = class.prior.ln();

                for (name, values) in x.iter_columns() {
                    let feature = match class.features.get(name) {
                        Some(feature) => feature,
                        // Column never seen at fit time.
                        None => continue,
                    };

                    match feature {
                        FeatureModel::Categorical(table) => {
                            let p = table
                                .get(&values[row])
                                .copied()
                                .unwrap_or(UNSEEN_VALUE_FLOOR);
                            score += p.ln();
                        }
                        FeatureModel::Gaussian { mean, variance } => {
                            if let Some(v) = values[row].as_f64() {
                                let var = if *variance > 0.0 {
                                    *variance
                                } else {
                                    VARIANCE_FLOOR
                                };
                                score += -0.5 * (2.0 * std::f64::consts::PI * var).ln()
                                    - (v - mean).powi(2) / (2.0 * var);
                            }
                        }
                    }
                }

                score
            })
            .collect()
    }
}

/// Result of [`NaiveBayesModel::evaluate`].
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Fraction of predictions equal to the true label, in [0, 1].
    pub accuracy: f64,
    /// Predicted labels, index-aligned with the evaluated frame.
    pub predictions: Vec<String>,
}


#[cfg(test)]
mod tests_nb_contract;
