use crate::cli::DriveArgs;
use crate::config::builder::build_drive_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ieflow::engine::outcome::{InvocationStatus, RunSummary};
use ieflow::engine::progress::ProgressReporter;
use ieflow::engine::runner::{CommandRunner, DryRunRunner, ProcessRunner};
use ieflow::workflows;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: DriveArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let app = build_drive_config(&args)?;
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let runner: &dyn CommandRunner = if app.dry_run {
        info!("Dry run: commands are printed, not executed.");
        &DryRunRunner
    } else {
        &ProcessRunner
    };

    info!(
        "Driving {:?} profile from {:?} into {:?}",
        args.profile, app.driver.table_path, app.driver.output_root
    );
    let summary = workflows::drive::run(&app.driver, runner, &reporter)?;
    write_summary(&summary, app.dry_run, &mut io::stdout().lock())?;

    if app.strict && !summary.all_succeeded() {
        return Err(CliError::RunFailed {
            failed: summary.failed(),
            total: summary.total(),
        });
    }
    Ok(())
}

/// Writes the per-run report. A dry run lists every command line before the counts.
fn write_summary(summary: &RunSummary, dry_run: bool, out: &mut impl Write) -> io::Result<()> {
    if dry_run {
        for invocation in summary.outcomes.iter().filter_map(|o| o.invocation.as_ref()) {
            writeln!(out, "{}", invocation.command_line())?;
        }
    }
    writeln!(
        out,
        "Workflow runs: {} total, {} succeeded, {} failed, {} skipped.",
        summary.total(),
        summary.succeeded(),
        summary.failed(),
        summary.skipped()
    )?;
    for outcome in summary.failures() {
        let reason = match outcome.status() {
            InvocationStatus::Failed { code: Some(code) } => format!("exit code {}", code),
            InvocationStatus::Failed { code: None } => "terminated by signal".to_string(),
            InvocationStatus::SpawnFailed { message } => message.clone(),
            InvocationStatus::Rejected { reason } => reason.clone(),
            InvocationStatus::Succeeded | InvocationStatus::Skipped => continue,
        };
        writeln!(
            out,
            "  ✗ {}: {}",
            outcome.target.structure_path().display(),
            reason
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Profile;
    use ieflow::core::models::entry::ModelTarget;
    use ieflow::engine::config::DriverConfigBuilder;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn args(table: &Path, output_root: &Path, interpreter: &str) -> DriveArgs {
        DriveArgs {
            profile: Profile::Peptide,
            table: Some(table.to_path_buf()),
            output_root: Some(output_root.to_path_buf()),
            threads: None,
            script: Some(PathBuf::from("grinn_workflow.py")),
            interpreter: Some(interpreter.to_string()),
            dry_run: false,
            strict: false,
            config: None,
            set_values: Vec::new(),
        }
    }

    fn one_row_table(dir: &Path) -> PathBuf {
        let table = dir.join("best_models_10mers.csv");
        fs::write(&table, "folder,best_model,molpdf\nA,model_7.pdb,198.4\n").unwrap();
        table
    }

    fn dry_run_summary(output_root: &Path) -> RunSummary {
        let config = DriverConfigBuilder::new()
            .table_path(PathBuf::from("unused.csv"))
            .output_root(output_root.to_path_buf())
            .interpreter("python")
            .script_path(PathBuf::from("wf.py"))
            .param_dir(PathBuf::from("mdp/"))
            .pair_filter_cutoff(10)
            .gmxrc_path(PathBuf::from("GMXRC"))
            .threads(12)
            .source_selection("chain C")
            .target_selection("all")
            .build()
            .unwrap();
        workflows::drive::run_targets(
            &[ModelTarget::new("A", "model_7.pdb")],
            &config,
            &DryRunRunner,
            &ProgressReporter::new(),
        )
        .unwrap()
    }

    fn render(summary: &RunSummary, dry_run: bool) -> String {
        let mut buf = Vec::new();
        write_summary(summary, dry_run, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn dry_run_report_lists_each_command_line() {
        let summary = dry_run_summary(Path::new("out"));
        let text = render(&summary, true);
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "python wf.py A/model_7.pdb mdp/ out/A --initpairfiltercutoff 10 \
             --gmxrc_path GMXRC --nt 12 --source_sel 'chain C' --target_sel all"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Workflow runs: 1 total, 0 succeeded, 0 failed, 1 skipped."
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn regular_report_omits_command_lines() {
        let summary = dry_run_summary(Path::new("out"));
        assert_eq!(
            render(&summary, false),
            "Workflow runs: 1 total, 0 succeeded, 0 failed, 1 skipped.\n"
        );
    }

    #[test]
    fn dry_run_command_creates_nothing() {
        let dir = tempdir().unwrap();
        let table = one_row_table(dir.path());
        let out = dir.path().join("output_ie_10mers");
        let mut args = args(&table, &out, "python");
        args.dry_run = true;

        assert!(run(args, CliProgressHandler::hidden()).is_ok());
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn strict_run_fails_when_an_invocation_fails() {
        let dir = tempdir().unwrap();
        let table = one_row_table(dir.path());
        let mut args = args(&table, &dir.path().join("out"), "false");
        args.strict = true;

        let result = run(args, CliProgressHandler::hidden());
        assert!(matches!(
            result,
            Err(CliError::RunFailed {
                failed: 1,
                total: 1
            })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn lenient_run_succeeds_despite_failed_invocation() {
        let dir = tempdir().unwrap();
        let table = one_row_table(dir.path());
        let out = dir.path().join("out");

        let result = run(args(&table, &out, "false"), CliProgressHandler::hidden());
        assert!(result.is_ok());
        assert!(out.is_dir());
    }
}
