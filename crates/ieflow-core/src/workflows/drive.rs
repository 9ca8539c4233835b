use crate::core::io::summary::TargetTable;
use crate::core::io::traits::TableReader;
use crate::core::models::entry::ModelTarget;
use crate::engine::config::DriverConfig;
use crate::engine::error::EngineError;
use crate::engine::invocation::Invocation;
use crate::engine::outcome::{Execution, InvocationOutcome, InvocationStatus, RunSummary};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::runner::CommandRunner;
use tracing::{debug, error, info, instrument, warn};

/// Number of trailing stderr lines echoed to the log when an invocation fails.
const STDERR_TAIL_LINES: usize = 20;

/// Loads `config.table_path` and runs the external workflow once per row.
///
/// Only setup problems (unreadable table, output root not creatable) are returned as
/// errors. Per-row failures are recorded in the returned [`RunSummary`] and never stop
/// the loop.
#[instrument(skip_all, name = "driver_workflow")]
pub fn run(
    config: &DriverConfig,
    runner: &dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<RunSummary, EngineError> {
    let targets = TargetTable::read_from_path(&config.table_path)?;
    info!(
        "Loaded {} model(s) from {:?}",
        targets.len(),
        config.table_path
    );
    run_targets(&targets, config, runner, reporter)
}

/// Same as [`run`], for targets that are already in memory.
///
/// The output root is created first unless the runner never executes anything.
pub fn run_targets(
    targets: &[ModelTarget],
    config: &DriverConfig,
    runner: &dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<RunSummary, EngineError> {
    if runner.executes() {
        std::fs::create_dir_all(&config.output_root).map_err(|source| {
            EngineError::OutputDirectory {
                path: config.output_root.clone(),
                source,
            }
        })?;
    }

    reporter.report(Progress::PhaseStart {
        name: "Running interaction-energy workflow",
    });
    reporter.report(Progress::TaskStart {
        total_steps: targets.len() as u64,
    });

    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        reporter.report(Progress::ItemStart {
            label: target.structure_path().display().to_string(),
        });
        let outcome = drive_one(target, config, runner);
        log_outcome(&outcome);
        reporter.report(Progress::ItemFinish {
            succeeded: outcome.status().is_success(),
        });
        outcomes.push(outcome);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let summary = RunSummary { outcomes };
    info!(
        "Driver finished: {} succeeded, {} failed, {} skipped (of {}).",
        summary.succeeded(),
        summary.failed(),
        summary.skipped(),
        summary.total()
    );
    Ok(summary)
}

fn drive_one(
    target: &ModelTarget,
    config: &DriverConfig,
    runner: &dyn CommandRunner,
) -> InvocationOutcome {
    match Invocation::for_target(target, config) {
        Ok(invocation) => {
            let execution = runner.run(&invocation);
            InvocationOutcome {
                target: target.clone(),
                invocation: Some(invocation),
                execution,
            }
        }
        Err(e) => InvocationOutcome {
            target: target.clone(),
            invocation: None,
            execution: Execution::without_output(InvocationStatus::Rejected {
                reason: e.to_string(),
            }),
        },
    }
}

fn log_outcome(outcome: &InvocationOutcome) {
    let structure = outcome.target.structure_path();
    for line in outcome.execution.stdout.lines() {
        debug!("[stdout] {}", line);
    }
    match outcome.status() {
        InvocationStatus::Succeeded => {
            for line in outcome.execution.stderr.lines() {
                debug!("[stderr] {}", line);
            }
            info!("✓ {:?}", structure);
        }
        InvocationStatus::Skipped => {}
        InvocationStatus::Failed { code } => {
            match code {
                Some(code) => warn!("✗ {:?}: workflow exited with code {}", structure, code),
                None => warn!("✗ {:?}: workflow terminated by signal", structure),
            }
            let stderr = &outcome.execution.stderr;
            let tail: Vec<&str> = stderr.lines().rev().take(STDERR_TAIL_LINES).collect();
            for line in tail.into_iter().rev() {
                warn!("    {}", line);
            }
        }
        InvocationStatus::SpawnFailed { message } => error!("✗ {:?}: {}", structure, message),
        InvocationStatus::Rejected { reason } => error!("✗ {:?}: {}", structure, reason),
    }
}
