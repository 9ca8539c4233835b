use super::error::IoError;
use super::traits::TableReader;
use crate::core::models::score::ScoreRecord;
use std::io::BufRead;
use std::path::PathBuf;

/// Headerless, tab-separated `identifier<TAB>score` listing.
///
/// Columns past the second are ignored. Blank lines are skipped and fields are trimmed.
/// Any row with fewer than two columns or a non-numeric score makes the whole file invalid.
pub struct ScoreFile;

impl TableReader for ScoreFile {
    type Record = ScoreRecord;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ScoreRecord>, IoError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result.map_err(IoError::csv)?;
            let line = row.position().map_or(0, |p| p.line());

            let (Some(identifier), Some(raw_score)) = (row.get(0), row.get(1)) else {
                return Err(IoError::MalformedRow {
                    path: PathBuf::from(super::error::STREAM_PATH),
                    line,
                    message: format!("expected 2 tab-separated columns, found {}", row.len()),
                });
            };

            let score = raw_score.parse::<f64>().map_err(|e| IoError::MalformedRow {
                path: PathBuf::from(super::error::STREAM_PATH),
                line,
                message: format!("score '{}' is not a number: {}", raw_score, e),
            })?;

            records.push(ScoreRecord::new(identifier, score));
        }

        if records.is_empty() {
            return Err(IoError::EmptyScoreFile {
                path: PathBuf::from(super::error::STREAM_PATH),
            });
        }
        Ok(records)
    }
}
