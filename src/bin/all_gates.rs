//! Trains every gate in one run (concurrently with the `parallel` feature).

use std::process::ExitCode;

use gate_perceptron::{
    context::TrainingContext,
    runner::{RunConfig, print_report, run_all}
};

fn main() -> ExitCode {
    let outcome = TrainingContext::in_dir(".").and_then(|ctx| run_all(&RunConfig::default(), &ctx));

    match outcome {
        Ok(reports) => {
            for report in &reports {
                print_report(report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("training failed: {err}");
            ExitCode::FAILURE
        }
    }
}
