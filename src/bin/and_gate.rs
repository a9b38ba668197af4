//! Trains a perceptron on the AND truth table.
//!
//! Writes `model/and.model`, `plots/and.png` and appends to
//! `logs/running_logs.log` under the current directory.

use std::process::ExitCode;

use gate_perceptron::{Gate, runner::main_for};

fn main() -> ExitCode {
    main_for(Gate::And)
}
