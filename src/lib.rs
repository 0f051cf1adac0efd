//! Inferir: hybrid naive Bayes classification in pure Rust.
//!
//! Inferir learns per-class priors and per-feature conditional
//! distributions from labeled tabular data, then labels new rows by
//! maximum a-posteriori estimation under a conditional-independence
//! assumption. Columns are modeled per-feature as either a categorical
//! frequency table or a Gaussian, decided once at fit time.
//!
//! # Quick Start
//!
//! ```
//! use inferir::prelude::*;
//!
//! // Two classes perfectly separated by one categorical feature.
//! let x = Frame::new(vec![(
//!     "shape".to_string(),
//!     vec!["x".into(), "x".into(), "y".into(), "y".into()],
//! )]).unwrap();
//! let y: Vec<String> = ["A", "A", "B", "B"].iter().map(ToString::to_string).collect();
//!
//! let model = NaiveBayes::new().fit(&x, &y).unwrap();
//! assert_eq!(model.predict(&x), y);
//! ```
//!
//! # Modules
//!
//! - [`data`]: the [`Value`] cell type and the [`Frame`] named-column container
//! - [`classification`]: the naive Bayes estimator and fitted model
//! - [`metrics`]: evaluation metrics (accuracy)
//! - [`model_selection`]: train/test splitting

pub mod classification;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod prelude;

pub use classification::{NaiveBayes, NaiveBayesModel};
pub use data::{Frame, Value};
pub use error::{InferirError, Result};
