//! Train/test splitting for model evaluation.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::Frame;
use crate::error::{InferirError, Result};

/// Validates inputs for `train_test_split`.
fn validate_split_inputs(x: &Frame, y: &[String], test_size: f64) -> Result<(usize, usize)> {
    if test_size <= 0.0 || test_size >= 1.0 {
        return Err(InferirError::InvalidHyperparameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: "between 0 and 1 exclusive".to_string(),
        });
    }

    let n_samples = x.n_rows();
    if n_samples != y.len() {
        return Err(InferirError::dimension_mismatch("rows", n_samples, y.len()));
    }

    let n_test = (n_samples as f64 * test_size).round() as usize;
    let n_train = n_samples - n_test;

    if n_test == 0 || n_train == 0 {
        return Err(InferirError::Other(format!(
            "split would leave an empty side (n_train={n_train}, n_test={n_test})"
        )));
    }

    Ok((n_train, n_test))
}

/// Shuffles indices with optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n_samples).collect();

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }

    indices
}

/// Splits a frame and its aligned labels into train and test portions.
///
/// Rows are shuffled before splitting; pass a `random_state` seed for a
/// reproducible split.
///
/// # Errors
///
/// Returns an error if `test_size` is outside (0, 1), the labels are not
/// aligned with the frame's rows, or the split would leave either side
/// empty.
///
/// # Example
///
/// ```
/// use inferir::data::{Frame, Value};
/// use inferir::model_selection::train_test_split;
///
/// let x = Frame::new(vec![(
///     "measure".to_string(),
///     (0..10).map(|i| Value::from(f64::from(i))).collect(),
/// )]).expect("columns are aligned");
/// let y: Vec<String> = (0..10).map(|i| (i % 2).to_string()).collect();
///
/// let (x_train, x_test, y_train, y_test) =
///     train_test_split(&x, &y, 0.2, Some(42)).expect("valid split");
/// assert_eq!(x_train.n_rows(), 8);
/// assert_eq!(x_test.n_rows(), 2);
/// assert_eq!(y_train.len(), 8);
/// assert_eq!(y_test.len(), 2);
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    x: &Frame,
    y: &[String],
    test_size: f64,
    random_state: Option<u64>,
) -> Result<(Frame, Frame, Vec<String>, Vec<String>)> {
    let (n_train, _) = validate_split_inputs(x, y, test_size)?;

    let indices = shuffle_indices(x.n_rows(), random_state);
    let train_indices = &indices[..n_train];
    let test_indices = &indices[n_train..];

    let y_train = train_indices.iter().map(|&i| y[i].clone()).collect();
    let y_test = test_indices.iter().map(|&i| y[i].clone()).collect();

    Ok((x.take(train_indices), x.take(test_indices), y_train, y_test))
}
