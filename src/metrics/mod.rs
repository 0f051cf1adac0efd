//! Evaluation metrics for classification output.

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// Comparison is element-wise and position-aligned.
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
///
/// # Returns
///
/// Accuracy score between 0.0 and 1.0
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use inferir::metrics::accuracy;
///
/// let y_true = vec!["a".to_string(), "b".to_string(), "a".to_string()];
/// let y_pred = vec!["a".to_string(), "a".to_string(), "a".to_string()];
/// let acc = accuracy(&y_pred, &y_true);
/// assert!((acc - 2.0 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[String], y_true: &[String]) -> f64 {
    assert_eq!(
        y_pred.len(),
        y_true.len(),
        "Label slices must have same length"
    );
    assert!(!y_true.is_empty(), "Label slices cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f64 / y_true.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_accuracy_perfect() {
        let y = labels(&["a", "b", "c"]);
        assert!((accuracy(&y, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_none_correct() {
        let y_true = labels(&["a", "a"]);
        let y_pred = labels(&["b", "b"]);
        assert!(accuracy(&y_pred, &y_true).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_partial() {
        let y_true = labels(&["a", "b", "a", "b"]);
        let y_pred = labels(&["a", "a", "a", "b"]);
        assert!((accuracy(&y_pred, &y_true) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_position_aligned() {
        // Same multiset of labels, different positions: not a match.
        let y_true = labels(&["a", "b"]);
        let y_pred = labels(&["b", "a"]);
        assert!(accuracy(&y_pred, &y_true).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_accuracy_length_mismatch_panics() {
        let _ = accuracy(&labels(&["a"]), &labels(&["a", "b"]));
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn test_accuracy_empty_panics() {
        let _ = accuracy(&[], &[]);
    }
}
