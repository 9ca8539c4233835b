use crate::core::io::error::IoError;
use crate::core::io::score_file::ScoreFile;
use crate::core::io::summary::SummaryTable;
use crate::core::io::traits::{TableReader, TableWriter};
use crate::core::models::entry::BestModelEntry;
use crate::core::models::score::{ScoreRecord, lowest_score};
use crate::engine::config::{ScoreFilePolicy, SelectionConfig};
use crate::engine::discovery;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Scans the folder tree and writes the summary table to `config.output_path`.
///
/// Returns the entries that were written, in folder order.
#[instrument(skip_all, name = "selection_workflow")]
pub fn run(
    config: &SelectionConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<BestModelEntry>, EngineError> {
    let entries = scan(config, reporter)?;

    if let Some(parent) = config
        .output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|source| EngineError::OutputDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    SummaryTable::write_to_path(&entries, &config.output_path)?;
    info!(
        "Wrote {} best-model entr{} to {:?}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        config.output_path
    );
    Ok(entries)
}

/// Selects the best model of every folder without writing anything.
///
/// Folders without a qualifying score file are skipped. The first malformed score file
/// aborts the whole scan.
pub fn scan(
    config: &SelectionConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<BestModelEntry>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Selecting best models",
    });
    let folders = discovery::model_folders(&config.root)?;
    info!("Scanning {} folder(s) under {:?}", folders.len(), config.root);
    reporter.report(Progress::TaskStart {
        total_steps: folders.len() as u64,
    });

    let mut entries = Vec::with_capacity(folders.len());
    for folder in &folders {
        reporter.report(Progress::ItemStart {
            label: folder.display().to_string(),
        });
        // A folder without a score file is a normal skip; errors abort before this point.
        entries.extend(select_in_folder(folder, config)?);
        reporter.report(Progress::ItemFinish { succeeded: true });
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(entries)
}

fn select_in_folder(
    folder: &Path,
    config: &SelectionConfig,
) -> Result<Option<BestModelEntry>, EngineError> {
    let files = discovery::score_files(folder, &config.extension)?;
    debug!("{:?}: {:?}", folder, files);

    let qualifying = discovery::qualifying_files(&files, &config.marker);
    let Some(first) = qualifying.first() else {
        debug!("No '{}' score file in {:?}, skipping", config.marker, folder);
        return Ok(None);
    };

    let scanned: Vec<&PathBuf> = match config.policy {
        ScoreFilePolicy::FirstMatch => {
            if qualifying.len() > 1 {
                warn!(
                    "{:?} has {} '{}' score files; only {:?} is scanned",
                    folder,
                    qualifying.len(),
                    config.marker,
                    first.file_name().unwrap_or_default()
                );
            }
            vec![*first]
        }
        ScoreFilePolicy::AllMatches => qualifying.clone(),
    };

    let mut records: Vec<ScoreRecord> = Vec::new();
    for path in &scanned {
        records.extend(ScoreFile::read_from_path(path)?);
    }

    let best = lowest_score(&records).ok_or_else(|| IoError::EmptyScoreFile {
        path: scanned[0].clone(),
    })?;
    info!("{:?} -> {} ({})", folder, best.identifier, best.score);

    Ok(Some(BestModelEntry {
        folder: folder.to_path_buf(),
        best_model: best.identifier.clone(),
        score: best.score,
    }))
}
