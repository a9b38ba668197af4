//! Trains a perceptron on the NAND truth table.
//!
//! Writes `model/nand.model`, `plots/nand.png` and appends to
//! `logs/running_logs.log` under the current directory.

use std::process::ExitCode;

use gate_perceptron::{Gate, runner::main_for};

fn main() -> ExitCode {
    main_for(Gate::Nand)
}
