use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ieflow - pick the best-scoring model per folder and run the interaction-energy workflow on each.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan `ROOT/*/*` folders and write the best (lowest-score) model of each to a CSV table.
    Select(SelectArgs),
    /// Run the external interaction-energy workflow once per row of a best-model table.
    Drive(DriveArgs),
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Root directory; model folders are expected two levels below it.
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Path of the summary table to write.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Substring a score file name must contain.
    #[arg(short, long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Extension of score files.
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Take the minimum across every qualifying score file of a folder instead of only the first.
    #[arg(long)]
    pub all_matches: bool,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S select.marker=dope
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Built-in driver parameter sets.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Peptide (chain C) against the whole structure.
    Peptide,
    /// Whole structure against itself.
    Full,
}

/// Arguments for the `drive` subcommand.
#[derive(Args, Debug)]
pub struct DriveArgs {
    /// Which built-in parameter set to start from.
    #[arg(short, long, value_enum)]
    pub profile: Profile,

    /// Override the best-model table to read.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Override the directory that per-folder outputs are nested under.
    #[arg(short, long, value_name = "PATH")]
    pub output_root: Option<PathBuf>,

    /// Override the thread count passed to the workflow (--nt).
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Override the workflow script path.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Override the interpreter used to launch the workflow script.
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Print the commands that would run without starting any process.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any invocation did not succeed.
    #[arg(long)]
    pub strict: bool,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S drive.cutoff=12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
