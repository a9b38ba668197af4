//! Splits a dataset into a feature matrix and a label vector.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::{
    Dataset,
    error::{Error, Result}
};

/// Label column used by [`split_default`].
pub const TARGET_COLUMN: &str = "y";

/// # Overview
///
/// Projects `dataset` onto every column except `target` (the feature matrix,
/// one row per record) and onto `target` alone (the labels). Row and column
/// order are preserved.
///
/// Labels must be exactly `0` or `1`.
///
/// # Examples
///
/// ```
/// use gate_perceptron::{Dataset, adapter::split};
///
/// let df = Dataset::from_columns([
///     ("x1", vec![0.0, 1.0]),
///     ("x2", vec![1.0, 1.0]),
///     ("y", vec![0.0, 1.0]),
/// ])
/// .unwrap();
///
/// let (x, y) = split(&df, "y").unwrap();
/// assert_eq!(x, vec![vec![0.0, 1.0], vec![1.0, 1.0]]);
/// assert_eq!(y, vec![0, 1]);
/// ```
pub fn split(dataset: &Dataset, target: &str) -> Result<(Vec<Vec<f32>>, Vec<u8>)> {
    let labels = dataset
        .column(target)
        .ok_or_else(|| Error::MissingColumn(target.to_string()))?;

    let y = labels
        .values
        .iter()
        .enumerate()
        .map(|(row, &value)| match value {
            v if v == 0.0 => Ok(0),
            v if v == 1.0 => Ok(1),
            _ => Err(Error::InvalidLabel { row, value })
        })
        .collect::<Result<Vec<u8>>>()?;

    let features: Vec<_> = dataset.columns().iter().filter(|c| c.name != target).collect();
    let x = (0..dataset.len())
        .map(|i| features.iter().map(|c| c.values[i]).collect())
        .collect();

    Ok((x, y))
}

/// # Overview
///
/// [`split`] with the conventional `"y"` label column.
#[inline]
pub fn split_default(dataset: &Dataset) -> Result<(Vec<Vec<f32>>, Vec<u8>)> {
    split(dataset, TARGET_COLUMN)
}
