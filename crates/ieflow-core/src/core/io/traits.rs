use super::error::IoError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading a row-oriented table format.
///
/// Implementors handle the format-specific parsing; the path-based helper opens the file,
/// delegates, and attaches the path to any error raised.
pub trait TableReader {
    /// The record type produced when reading the table.
    type Record;

    /// Reads all records from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, IoError>;

    /// Reads all records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails. The error carries
    /// `path`.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, IoError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IoError::from(e).at(path))?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader).map_err(|e| e.at(path))
    }
}

/// Defines the interface for serializing records into a row-oriented table format.
pub trait TableWriter {
    /// The record type consumed when writing the table.
    type Record;

    /// Writes all records to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(records: &[Self::Record], writer: &mut impl Write) -> Result<(), IoError>;

    /// Writes all records to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails. The error carries
    /// `path`.
    fn write_to_path<P: AsRef<Path>>(records: &[Self::Record], path: P) -> Result<(), IoError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| IoError::from(e).at(path))?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer).map_err(|e| e.at(path))?;
        writer.flush().map_err(|e| IoError::from(e).at(path))
    }
}
