//! Reading delimited text files into table documents.

pub mod cell;
pub mod delimited;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use csv::ReaderBuilder;

pub use cell::DataCell;
pub use delimited::Delimiter;

/// The parsed content of one delimited file. Read fresh from disk at startup
/// and on every reload; carries no sort or scroll state of its own.
#[derive(Clone, Debug)]
pub struct Document {
    /// The file stem, used as the table title.
    pub title: String,

    /// Trimmed column labels from the header row.
    pub headers: Vec<String>,

    /// Body rows in document order. Every row has exactly `headers.len()`
    /// cells; short rows are padded with empty cells and long rows truncated.
    pub rows: Vec<Vec<DataCell>>,
}

impl Document {
    /// Reads and parses a single file. If no delimiter is given, it is
    /// sniffed from the file's first line.
    pub fn from_path(path: &Path, delimiter: Option<Delimiter>) -> Result<Document> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read '{}'.", path.display()))?;
        let delimiter = delimiter.unwrap_or_else(|| Delimiter::sniff(&contents));

        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Document::parse(title, &contents, delimiter)
            .with_context(|| format!("Unable to parse '{}'.", path.display()))
    }

    fn parse(title: String, contents: &str, delimiter: Delimiter) -> Result<Document> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .context("The file has no readable header row.")?
            .iter()
            .map(|label| label.trim().to_owned())
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("The file contains a malformed record.")?;
            let mut row: Vec<DataCell> = record
                .iter()
                .take(width)
                .map(DataCell::new)
                .collect();
            row.resize(width, DataCell::new(""));
            rows.push(row);
        }

        Ok(Document {
            title,
            headers,
            rows,
        })
    }
}

/// Loads every given file, in order. Any failure aborts the whole load so
/// startup errors surface before the terminal is touched.
pub fn load_documents(paths: &[std::path::PathBuf], delimiter: Option<Delimiter>) -> Result<Vec<Document>> {
    paths
        .iter()
        .map(|path| Document::from_path(path, delimiter))
        .collect()
}
