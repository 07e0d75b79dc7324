//! Flat file writer
//!
//! Provides CSV and JSON Lines writers for [`FlatRecord`]s.

use super::record::FlatRecord;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

/// Output file format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jsonl" | "ndjson") => Self::Jsonl,
            _ => Self::Csv,
        }
    }
}

/// Writes records of type `R` as CSV or JSON Lines
pub struct RecordWriter<W: Write, R: FlatRecord> {
    out: W,
    format: OutputFormat,
    header_written: bool,
    rows_written: usize,
    _record: PhantomData<fn(&R)>,
}

impl<W: Write, R: FlatRecord> RecordWriter<W, R> {
    /// Create a writer over `out`
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            header_written: false,
            rows_written: 0,
            _record: PhantomData,
        }
    }

    /// The format being written
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a single record
    pub fn write(&mut self, record: &R) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                self.write_header()?;
                write_csv_row(&mut self.out, &record.values())?;
            }
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.out, record)?;
                self.out.write_all(b"\n")?;
            }
        }

        self.rows_written += 1;
        Ok(())
    }

    /// Write every record from an iterator
    pub fn write_all<'r>(&mut self, records: impl IntoIterator<Item = &'r R>) -> Result<usize>
    where
        R: 'r,
    {
        let before = self.rows_written;
        for record in records {
            self.write(record)?;
        }
        Ok(self.rows_written - before)
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush the output and return the number of rows written
    ///
    /// A CSV file with no rows still gets its header.
    pub fn finish(mut self) -> Result<usize> {
        if self.format == OutputFormat::Csv {
            self.write_header()?;
        }
        self.out
            .flush()
            .map_err(|e| Error::output(format!("Failed to flush output: {e}")))?;
        Ok(self.rows_written)
    }

    /// Consume the writer, returning the underlying output
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            let header: Vec<String> = R::columns().iter().map(ToString::to_string).collect();
            write_csv_row(&mut self.out, &header)?;
            self.header_written = true;
        }
        Ok(())
    }
}

/// Open `path` for writing, creating parent directories as needed
pub fn create_writer<R: FlatRecord>(
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<RecordWriter<BufWriter<File>, R>> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::output(format!(
                "Failed to create directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        Error::output(format!("Failed to create file '{}': {e}", path.display()))
    })?;

    Ok(RecordWriter::new(BufWriter::new(file), format))
}

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// Write one CSV row, quoting fields per RFC 4180
fn write_csv_row<W: Write>(out: &mut W, row: &[String]) -> Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        if needs_quotes(cell) {
            write!(out, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            out.write_all(cell.as_bytes())?;
        }
    }
    out.write_all(b"\r\n")?;
    Ok(())
}
