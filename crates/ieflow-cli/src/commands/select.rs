use crate::cli::SelectArgs;
use crate::config::builder::build_select_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ieflow::engine::progress::ProgressReporter;
use ieflow::workflows;
use tracing::{info, warn};

pub fn run(args: SelectArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let config = build_select_config(&args)?;
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Selecting best models under {:?}", config.root);
    let entries = workflows::select::run(&config, &reporter)?;

    if entries.is_empty() {
        warn!(
            "No folder under {:?} contained a '{}' score file.",
            config.root, config.marker
        );
        println!(
            "Warning: no qualifying score files found; wrote an empty table to {}",
            config.output_path.display()
        );
    } else {
        println!(
            "Selected {} best model(s); table written to {}",
            entries.len(),
            config.output_path.display()
        );
    }
    Ok(())
}
