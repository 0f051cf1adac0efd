//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use inferir::prelude::*;
//! ```

pub use crate::classification::{Evaluation, FeatureModel, NaiveBayes, NaiveBayesModel};
pub use crate::data::{Frame, Value};
pub use crate::error::{InferirError, Result};
pub use crate::metrics::accuracy;
pub use crate::model_selection::train_test_split;
