//! Trains a perceptron on the OR truth table.
//!
//! Writes `model/or.model`, `plots/or.png` and appends to
//! `logs/running_logs.log` under the current directory.

use std::process::ExitCode;

use gate_perceptron::{Gate, runner::main_for};

fn main() -> ExitCode {
    main_for(Gate::Or)
}
