//! Column-oriented in-memory dataset.

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec
};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// A named column of numeric values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    pub name:   String,
    pub values: Vec<f32>
}

/// # Overview
///
/// Ordered, equally sized numeric columns. Every row has the full column set,
/// and columns keep insertion order.
///
/// # Examples
///
/// ```
/// use gate_perceptron::Dataset;
///
/// let df = Dataset::from_columns([
///     ("x1", vec![0.0, 0.0, 1.0, 1.0]),
///     ("x2", vec![0.0, 1.0, 0.0, 1.0]),
///     ("y", vec![0.0, 0.0, 0.0, 1.0]),
/// ])
/// .unwrap();
///
/// assert_eq!(df.len(), 4);
/// assert_eq!(df.column_names().collect::<Vec<_>>(), ["x1", "x2", "y"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    columns: Vec<Column>
}

impl Dataset {
    /// # Overview
    ///
    /// Creates an empty dataset with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Overview
    ///
    /// Builds a dataset from `(name, values)` pairs in order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>
    {
        columns
            .into_iter()
            .try_fold(Self::new(), |df, (name, values)| df.with_column(name, values))
    }

    /// Wraps columns already known to be distinct and equally sized.
    pub(crate) fn from_valid_columns(columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == columns[0].values.len()));
        Self { columns }
    }

    /// # Overview
    ///
    /// Appends a column. Fails if the name is taken or the length differs
    /// from the existing columns.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f32>) -> Result<Self> {
        let name = name.into();

        if self.column(&name).is_some() {
            return Err(Error::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.first()
            && first.values.len() != values.len()
        {
            return Err(Error::RaggedColumns {
                name,
                expected: first.values.len(),
                got: values.len()
            });
        }

        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// # Overview
    ///
    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// # Overview
    ///
    /// Values of row `i` in column order, or `None` past the end.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<Vec<f32>> {
        (i < self.len()).then(|| self.columns.iter().map(|c| c.values[i]).collect())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.len().max(1).to_string().len();
        write!(f, "{:>index_width$}", "")?;
        for column in &self.columns {
            write!(f, "  {:>6}", column.name)?;
        }
        for i in 0..self.len() {
            writeln!(f)?;
            write!(f, "{i:>index_width$}")?;
            for column in &self.columns {
                write!(f, "  {:>6}", column.values[i])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn and_table() -> Dataset {
        Dataset::from_columns([
            ("x1", vec![0.0, 0.0, 1.0, 1.0]),
            ("x2", vec![0.0, 1.0, 0.0, 1.0]),
            ("y", vec![0.0, 0.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn builds_in_insertion_order() {
        let df = and_table();
        assert_eq!(df.len(), 4);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column_names().collect::<Vec<_>>(), ["x1", "x2", "y"]);
        assert_eq!(df.row(3), Some(vec![1.0, 1.0, 1.0]));
        assert_eq!(df.row(4), None);
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = Dataset::new()
            .with_column("x1", vec![0.0, 1.0])
            .and_then(|df| df.with_column("y", vec![1.0]));

        assert!(matches!(
            result,
            Err(Error::RaggedColumns {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let result = Dataset::from_columns([("x1", vec![0.0]), ("x1", vec![1.0])]);
        assert!(matches!(result, Err(Error::DuplicateColumn(name)) if name == "x1"));
    }

    #[test]
    fn empty_dataset() {
        let df = Dataset::new();
        assert!(df.is_empty());
        assert_eq!(df.width(), 0);
        assert!(df.column("y").is_none());
    }

    #[test]
    fn display_renders_table() {
        let rendered = and_table().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("x1") && lines[0].contains("y"));
        assert!(lines[4].starts_with('3'));
    }
}
