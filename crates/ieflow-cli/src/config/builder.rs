use super::defaults::{DriveDefaults, SelectDefaults};
use super::file::FileConfig;
use super::models::DriveAppConfig;
use crate::cli::{DriveArgs, SelectArgs};
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use ieflow::engine::config::{
    DriverConfigBuilder, ScoreFilePolicy, SelectionConfig, SelectionConfigBuilder,
};
use std::path::PathBuf;
use tracing::debug;

pub fn build_select_config(args: &SelectArgs) -> Result<SelectionConfig> {
    let defaults = SelectDefaults::default();
    let file_config = FileConfig::load_optional(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let file = file_config.select.take().unwrap_or_default();

    let root = args.root.clone().or(file.root).ok_or_else(|| {
        CliError::Config(
            "A root directory is required, either via --root or `select.root` in the config file."
                .to_string(),
        )
    })?;

    let policy = if args.all_matches {
        ScoreFilePolicy::AllMatches
    } else {
        match file.policy.as_deref() {
            Some(name) => parser::parse_policy(name).map_err(argument_error)?,
            None => ScoreFilePolicy::default(),
        }
    };

    let config = SelectionConfigBuilder::new()
        .root(root)
        .output_path(
            args.output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(defaults.output)),
        )
        .marker(
            args.marker
                .clone()
                .or(file.marker)
                .unwrap_or_else(|| defaults.marker.to_string()),
        )
        .extension(
            args.extension
                .clone()
                .or(file.extension)
                .unwrap_or_else(|| defaults.extension.to_string()),
        )
        .policy(policy)
        .build()?;

    debug!("Resolved selection config: {:?}", config);
    Ok(config)
}

pub fn build_drive_config(args: &DriveArgs) -> Result<DriveAppConfig> {
    let defaults = DriveDefaults::for_profile(args.profile);
    let file_config = FileConfig::load_optional(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let file = file_config.drive.take().unwrap_or_default();

    let driver = DriverConfigBuilder::new()
        .table_path(
            args.table
                .clone()
                .or(file.table)
                .unwrap_or_else(|| PathBuf::from(defaults.table)),
        )
        .output_root(
            args.output_root
                .clone()
                .or(file.output_root)
                .unwrap_or_else(|| PathBuf::from(defaults.output_root)),
        )
        .interpreter(
            args.interpreter
                .clone()
                .or(file.interpreter)
                .unwrap_or_else(|| defaults.interpreter.to_string()),
        )
        .script_path(
            args.script
                .clone()
                .or(file.script)
                .unwrap_or_else(|| PathBuf::from(defaults.script)),
        )
        .param_dir(
            file.param_dir
                .unwrap_or_else(|| PathBuf::from(defaults.param_dir)),
        )
        .pair_filter_cutoff(file.cutoff.unwrap_or(defaults.cutoff))
        .gmxrc_path(
            file.gmxrc_path
                .unwrap_or_else(|| PathBuf::from(defaults.gmxrc_path)),
        )
        .threads(args.threads.or(file.threads).unwrap_or(defaults.threads))
        .source_selection(
            file.source_sel
                .unwrap_or_else(|| defaults.source_sel.to_string()),
        )
        .target_selection(
            file.target_sel
                .unwrap_or_else(|| defaults.target_sel.to_string()),
        )
        .build()?;

    debug!("Resolved driver config: {:?}", driver);
    Ok(DriveAppConfig {
        driver,
        dry_run: args.dry_run,
        strict: args.strict,
    })
}

fn argument_error(e: ParseError) -> CliError {
    CliError::Argument(e.to_string())
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair).map_err(argument_error)?;

        match key.split_once('.') {
            Some(("select", field)) => {
                let select = config.select.get_or_insert_with(Default::default);
                match field {
                    "root" => select.root = Some(PathBuf::from(value)),
                    "output" => select.output = Some(PathBuf::from(value)),
                    "marker" => select.marker = Some(value.to_string()),
                    "extension" => select.extension = Some(value.to_string()),
                    "policy" => {
                        parser::parse_policy(value).map_err(argument_error)?;
                        select.policy = Some(value.trim().to_string());
                    }
                    _ => return Err(unsupported_key(key)),
                }
            }
            Some(("drive", field)) => {
                let drive = config.drive.get_or_insert_with(Default::default);
                match field {
                    "table" => drive.table = Some(PathBuf::from(value)),
                    "output-root" => drive.output_root = Some(PathBuf::from(value)),
                    "interpreter" => drive.interpreter = Some(value.to_string()),
                    "script" => drive.script = Some(PathBuf::from(value)),
                    "param-dir" => drive.param_dir = Some(PathBuf::from(value)),
                    "cutoff" => {
                        drive.cutoff = Some(
                            parser::parse_number(key, value, "a non-negative integer")
                                .map_err(argument_error)?,
                        )
                    }
                    "gmxrc-path" => drive.gmxrc_path = Some(PathBuf::from(value)),
                    "threads" => {
                        drive.threads = Some(
                            parser::parse_number(key, value, "a positive integer")
                                .map_err(argument_error)?,
                        )
                    }
                    "source-sel" => drive.source_sel = Some(value.to_string()),
                    "target-sel" => drive.target_sel = Some(value.to_string()),
                    _ => return Err(unsupported_key(key)),
                }
            }
            _ => return Err(unsupported_key(key)),
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!(
        "Unsupported configuration key for --set: '{}'",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Profile;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::tempdir;

    fn select_args() -> SelectArgs {
        SelectArgs {
            root: None,
            output: None,
            marker: None,
            extension: None,
            all_matches: false,
            config: None,
            set_values: vec![],
        }
    }

    fn drive_args(profile: Profile) -> DriveArgs {
        DriveArgs {
            profile,
            table: None,
            output_root: None,
            threads: None,
            script: None,
            interpreter: None,
            dry_run: false,
            strict: false,
            config: None,
            set_values: vec![],
        }
    }

    #[test]
    fn select_requires_root() {
        let result = build_select_config(&select_args());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn select_uses_defaults_for_the_rest() {
        let mut args = select_args();
        args.root = Some(PathBuf::from("models"));
        let config = build_select_config(&args).unwrap();
        assert_eq!(config.root, PathBuf::from("models"));
        assert_eq!(config.output_path, PathBuf::from("best_models.csv"));
        assert_eq!(config.marker, "molpdf");
        assert_eq!(config.extension, "tsv");
        assert_eq!(config.policy, ScoreFilePolicy::FirstMatch);
    }

    #[test]
    fn select_cli_overrides_set_overrides_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("ieflow.toml");
        fs::write(
            &cfg_path,
            r#"
            [select]
            root = "from_file"
            marker = "dope"
            output = "file.csv"
            policy = "all-matches"
            "#,
        )
        .unwrap();

        let mut args = select_args();
        args.config = Some(cfg_path);
        args.output = Some(PathBuf::from("cli.csv"));
        args.set_values = vec!["select.marker=molpdf".to_string()];

        let config = build_select_config(&args).unwrap();
        assert_eq!(config.root, PathBuf::from("from_file"));
        assert_eq!(config.output_path, PathBuf::from("cli.csv"));
        assert_eq!(config.marker, "molpdf");
        assert_eq!(config.policy, ScoreFilePolicy::AllMatches);
    }

    #[test]
    fn select_rejects_unknown_policy() {
        let mut args = select_args();
        args.root = Some(PathBuf::from("models"));
        args.set_values = vec!["select.policy=best".to_string()];
        assert!(matches!(
            build_select_config(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn peptide_profile_defaults() {
        let app = build_drive_config(&drive_args(Profile::Peptide)).unwrap();
        let cfg = app.driver;
        assert_eq!(cfg.table_path, PathBuf::from("best_models_10mers.csv"));
        assert_eq!(cfg.output_root, PathBuf::from("output_ie_10mers"));
        assert_eq!(cfg.workflow.threads, 12);
        assert_eq!(cfg.workflow.pair_filter_cutoff, 10);
        assert_eq!(cfg.selections.source, "chain C");
        assert_eq!(cfg.selections.target, "all");
        assert!(!app.dry_run);
    }

    #[test]
    fn full_profile_defaults() {
        let cfg = build_drive_config(&drive_args(Profile::Full)).unwrap().driver;
        assert_eq!(cfg.table_path, PathBuf::from("best_models.csv"));
        assert_eq!(cfg.output_root, PathBuf::from("output_ie_all"));
        assert_eq!(
            cfg.workflow.script_path,
            PathBuf::from("/mnt/e/repos/structbio_workflows/grinn_workflow.py")
        );
        assert_eq!(cfg.workflow.threads, 18);
        assert_eq!(cfg.selections.source, "all");
        assert_eq!(cfg.selections.target, "all");
    }

    #[test]
    fn peptide_invocation_for_table_row() {
        let cfg = build_drive_config(&drive_args(Profile::Peptide))
            .unwrap()
            .driver;
        let target = ieflow::core::models::entry::ModelTarget::new("A", "model_7.pdb");
        let invocation =
            ieflow::engine::invocation::Invocation::for_target(&target, &cfg).unwrap();

        assert_eq!(invocation.args[1], OsString::from("A/model_7.pdb"));
        let n = invocation.args.len();
        assert_eq!(invocation.args[n - 4], OsString::from("--source_sel"));
        assert_eq!(invocation.args[n - 3], OsString::from("chain C"));
        assert_eq!(invocation.args[n - 2], OsString::from("--target_sel"));
        assert_eq!(invocation.args[n - 1], OsString::from("all"));
    }

    #[test]
    fn drive_layers_file_set_and_cli() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("ieflow.toml");
        fs::write(
            &cfg_path,
            r#"
            [drive]
            threads = 8
            cutoff = 15
            source-sel = "chain A"
            param-dir = "/srv/mdp/"
            "#,
        )
        .unwrap();

        let mut args = drive_args(Profile::Peptide);
        args.config = Some(cfg_path);
        args.threads = Some(2);
        args.dry_run = true;
        args.set_values = vec![
            "drive.cutoff=20".to_string(),
            "drive.target-sel=chain B".to_string(),
        ];

        let app = build_drive_config(&args).unwrap();
        let cfg = app.driver;
        assert_eq!(cfg.workflow.threads, 2);
        assert_eq!(cfg.workflow.pair_filter_cutoff, 20);
        assert_eq!(cfg.workflow.param_dir, PathBuf::from("/srv/mdp/"));
        assert_eq!(cfg.selections.source, "chain A");
        assert_eq!(cfg.selections.target, "chain B");
        assert!(app.dry_run);
    }

    #[test]
    fn drive_rejects_zero_threads() {
        let mut args = drive_args(Profile::Full);
        args.threads = Some(0);
        assert!(matches!(build_drive_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn set_values_reject_bad_input() {
        let mut args = drive_args(Profile::Full);
        args.set_values = vec!["drive.threads=lots".to_string()];
        assert!(matches!(
            build_drive_config(&args),
            Err(CliError::Argument(_))
        ));

        args.set_values = vec!["drive.num-threads=4".to_string()];
        assert!(matches!(build_drive_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["threads".to_string()];
        assert!(matches!(
            build_drive_config(&args),
            Err(CliError::Argument(_))
        ));
    }
}
