//! Trains, persists, and plots one perceptron per logic gate.

use std::path::PathBuf;

use crate::{
    Config, Gate, Perceptron,
    adapter::split_default,
    context::TrainingContext,
    error::Result,
    plot::render_decision_surface
};

const TARGET: &str = "runner";

/// # Overview
///
/// Hyperparameters shared by every gate run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub eta:    f32,
    pub epochs: usize
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            eta:    crate::config::DEFAULT_ETA,
            epochs: crate::config::DEFAULT_EPOCHS
        }
    }
}

/// # Overview
///
/// Outcome of a successful gate run.
#[derive(Debug, Clone)]
pub struct GateReport {
    pub gate:       Gate,
    pub model:      Perceptron,
    pub total_loss: usize,
    pub accuracy:   f32,
    pub model_path: PathBuf,
    pub plot_path:  PathBuf
}

/// # Overview
///
/// Runs the full flow for `gate`: train on its truth table, save the model
/// as `<gate>.model` in the model directory and the plot as `<gate>.png` in
/// the plot directory, logging each milestone.
///
/// Any failure is logged and returned; nothing is retried.
pub fn run_gate(gate: Gate, run: &RunConfig, ctx: &TrainingContext) -> Result<GateReport> {
    ctx.log.info(TARGET, format_args!("------>>>>>> Starting Training for {gate} <<<<<<------"))?;

    match train_gate(gate, run, ctx) {
        Ok(report) => {
            ctx.log.info(TARGET, format_args!("<<<<<<------ Training ended for {gate} ------>>>>>>"))?;
            Ok(report)
        }
        Err(err) => {
            // The original error wins over a failure to log it.
            let _ = ctx.log.error(TARGET, format_args!("{gate} failed: {err}"));
            Err(err)
        }
    }
}

fn train_gate(gate: Gate, run: &RunConfig, ctx: &TrainingContext) -> Result<GateReport> {
    let df = gate.truth_table();
    ctx.log.info(TARGET, format_args!("This is the raw dataset:\n{df}"))?;

    let (x, y) = split_default(&df)?;
    let config = Config::builder().eta(run.eta).epochs(run.epochs).build()?;
    let mut model = Perceptron::new(config);

    let mut epoch_log = Ok(());
    model.fit_with_callback(&x, &y, |epoch, errors| {
        if epoch_log.is_ok() {
            epoch_log = ctx.log.info(
                TARGET,
                format_args!("{gate}: epoch {epoch}/{} errors {errors}", run.epochs)
            );
        }
    })?;
    epoch_log?;

    let total_loss = model.total_loss()?;
    let accuracy = model.evaluate(&x, &y);
    ctx.log.info(
        TARGET,
        format_args!(
            "{gate}: total loss {total_loss}, accuracy {:.1}%, weights {:?}, bias {}",
            accuracy * 100.0,
            model.weights(),
            model.bias()
        )
    )?;

    let model_file = format!("{}.model", gate.stem());
    let model_path = model.save(&model_file, &ctx.model_dir)?;
    ctx.log.info(TARGET, format_args!("saved model to {}", model_path.display()))?;

    let plot_path = ctx.plot_dir.join(format!("{}.png", gate.stem()));
    render_decision_surface(&df, |xi| model.predict(xi), &plot_path)?;
    ctx.log.info(TARGET, format_args!("saved plot to {}", plot_path.display()))?;

    Ok(GateReport {
        gate,
        model,
        total_loss,
        accuracy,
        model_path,
        plot_path
    })
}

/// # Overview
///
/// Runs every gate, stopping at the first failure.
#[cfg(not(feature = "parallel"))]
pub fn run_all(run: &RunConfig, ctx: &TrainingContext) -> Result<Vec<GateReport>> {
    Gate::ALL.iter().map(|&gate| run_gate(gate, run, ctx)).collect()
}

/// # Overview
///
/// Runs every gate concurrently. Each gate writes distinct artifacts, so the
/// runs share only the log sink.
#[cfg(feature = "parallel")]
pub fn run_all(run: &RunConfig, ctx: &TrainingContext) -> Result<Vec<GateReport>> {
    use rayon::prelude::*;

    Gate::ALL.par_iter().map(|&gate| run_gate(gate, run, ctx)).collect()
}

/// # Overview
///
/// Entry point shared by the gate binaries: runs `gate` with default
/// hyperparameters under the current directory and prints a summary.
pub fn main_for(gate: Gate) -> std::process::ExitCode {
    let outcome = TrainingContext::in_dir(".").and_then(|ctx| run_gate(gate, &RunConfig::default(), &ctx));
    match outcome {
        Ok(report) => {
            print_report(&report);
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{gate}: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

/// Prints predictions and artifacts of a finished run.
pub fn print_report(report: &GateReport) {
    println!("{}", report.gate);
    for (xi, &yi) in [[0.0f32, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]
        .iter()
        .zip(report.gate.outputs().iter())
    {
        let pred = report.model.predict(xi);
        let status = if pred == yi { "OK" } else { "WRONG" };
        println!("  {xi:?} -> {pred} (expected: {yi}) {status}");
    }
    println!("  total loss: {}", report.total_loss);
    println!("  accuracy:   {:.1}%", report.accuracy * 100.0);
    println!("  model:      {}", report.model_path.display());
    println!("  plot:       {}", report.plot_path.display());
}
