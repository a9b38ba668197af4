//! Two-input logic gate truth tables.

#[cfg(not(feature = "std"))]
use alloc::vec;
use core::fmt;

use crate::{Dataset, dataset::Column};

/// # Overview
///
/// A two-input boolean gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
    Nand,
    Xor,
    Xnor
}

impl Gate {
    pub const ALL: [Gate; 5] = [Gate::And, Gate::Or, Gate::Nand, Gate::Xor, Gate::Xnor];

    /// # Overview
    ///
    /// Output for inputs (0,0), (0,1), (1,0), (1,1).
    #[must_use]
    pub const fn outputs(self) -> [u8; 4] {
        match self {
            Self::And => [0, 0, 0, 1],
            Self::Or => [0, 1, 1, 1],
            Self::Nand => [1, 1, 1, 0],
            Self::Xor => [0, 1, 1, 0],
            Self::Xnor => [1, 0, 0, 1]
        }
    }

    /// # Overview
    ///
    /// The four-row table with columns `x1`, `x2`, `y`.
    ///
    /// ```
    /// use gate_perceptron::Gate;
    ///
    /// let table = Gate::Nand.truth_table();
    /// assert_eq!(table.column("y").unwrap().values, vec![1.0, 1.0, 1.0, 0.0]);
    /// ```
    #[must_use]
    pub fn truth_table(self) -> Dataset {
        let column = |name: &str, values: [f32; 4]| Column {
            name:   name.into(),
            values: values.to_vec()
        };
        Dataset::from_valid_columns(vec![
            column("x1", [0.0, 0.0, 1.0, 1.0]),
            column("x2", [0.0, 1.0, 0.0, 1.0]),
            column("y", self.outputs().map(f32::from)),
        ])
    }

    /// Lower-case name used for artifact files.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Nand => "nand",
            Self::Xor => "xor",
            Self::Xnor => "xnor"
        }
    }

    /// Human-readable name, e.g. `AND Gate`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::And => "AND Gate",
            Self::Or => "OR Gate",
            Self::Nand => "NAND Gate",
            Self::Xor => "XOR Gate",
            Self::Xnor => "XNOR Gate"
        }
    }

    /// Whether a single line can separate the two classes.
    #[must_use]
    pub const fn is_linearly_separable(self) -> bool {
        !matches!(self, Self::Xor | Self::Xnor)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
