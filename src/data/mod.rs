//! Named-column containers for mixed categorical and numeric data.
//!
//! Provides the [`Value`] cell type and a minimal [`Frame`] of named
//! columns. Labels are not part of a `Frame`; they travel beside it as an
//! index-aligned slice.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single cell of a tabular dataset: numeric or text.
///
/// Numeric values compare and hash by IEEE-754 bit pattern, so a `Value`
/// can key a frequency table and be counted as a distinct value.
///
/// # Examples
///
/// ```
/// use inferir::data::Value;
///
/// let v = Value::from(3.5);
/// assert!(v.is_numeric());
/// assert_eq!(v.as_f64(), Some(3.5));
/// assert_eq!(Value::from("red").as_f64(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// A numeric value.
    Num(f64),
    /// A text value.
    Text(String),
}

impl Value {
    /// Returns true for numeric values.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Num(_))
    }

    /// Returns the numeric content, or `None` for text values.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Num(a), Value::Num(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Num(n) => {
                state.write_u8(0);
                state.write_u64(n.to_bits());
            }
            Value::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Num(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Num(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// An ordered collection of named, equal-length columns.
///
/// This is a thin wrapper around `Vec<(String, Vec<Value>)>` with
/// validation and convenience accessors for classification workflows.
///
/// # Examples
///
/// ```
/// use inferir::data::{Frame, Value};
///
/// let columns = vec![
///     ("size".to_string(), vec![Value::from(1.0), Value::from(2.0)]),
///     ("color".to_string(), vec![Value::from("red"), Value::from("blue")]),
/// ];
/// let frame = Frame::new(columns).expect("columns are aligned");
/// assert_eq!(frame.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<(String, Vec<Value>)>,
    n_rows: usize,
}

impl Frame {
    /// Creates a new `Frame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, column lengths differ,
    /// or a column name is empty or duplicated.
    pub fn new(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("Frame must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err("All columns must have the same length".into());
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let names: HashSet<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        if names.len() != columns.len() {
            return Err("Duplicate column names not allowed".into());
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a column's values by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| "Column not found".into())
    }

    /// Returns an iterator over columns as (name, values) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Returns a new `Frame` holding the given rows, in index order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn take(&self, indices: &[usize]) -> Frame {
        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                (
                    name.clone(),
                    indices.iter().map(|&i| values[i].clone()).collect(),
                )
            })
            .collect();

        Frame {
            columns,
            n_rows: indices.len(),
        }
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
