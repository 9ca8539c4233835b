use super::error::IoError;
use super::traits::{TableReader, TableWriter};
use crate::core::models::entry::{BestModelEntry, ModelTarget};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const FOLDER_COLUMN: &str = "folder";
pub const BEST_MODEL_COLUMN: &str = "best_model";
pub const SCORE_COLUMN: &str = "molpdf";

/// The selector's output: comma-separated, `folder,best_model,molpdf` header.
///
/// The header is always written, even when there are no entries.
pub struct SummaryTable;

impl TableWriter for SummaryTable {
    type Record = BestModelEntry;

    fn write_to(records: &[BestModelEntry], writer: &mut impl Write) -> Result<(), IoError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer
            .write_record([FOLDER_COLUMN, BEST_MODEL_COLUMN, SCORE_COLUMN])
            .map_err(IoError::csv)?;
        for entry in records {
            csv_writer.serialize(entry).map_err(IoError::csv)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Read-only view of a summary table for the drivers.
///
/// Only `folder` and `best_model` are required; other columns are ignored.
pub struct TargetTable;

impl TableReader for TargetTable {
    type Record = ModelTarget;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ModelTarget>, IoError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        require_columns(&mut csv_reader, &[FOLDER_COLUMN, BEST_MODEL_COLUMN])?;
        csv_reader
            .deserialize::<ModelTarget>()
            .map(|r| r.map_err(IoError::csv))
            .collect()
    }
}

fn require_columns<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    columns: &[&'static str],
) -> Result<(), IoError> {
    let headers = reader.headers().map_err(IoError::csv)?;
    for &column in columns {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(IoError::MissingColumn {
                path: PathBuf::from(super::error::STREAM_PATH),
                column,
            });
        }
    }
    Ok(())
}
