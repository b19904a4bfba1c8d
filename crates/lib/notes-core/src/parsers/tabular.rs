use std::{error::Error, ffi::OsStr, fmt, path::{Path, PathBuf}};

use calamine::{Data, Reader, open_workbook_auto};
use notes_store::models::{CellValue, RowRecord};
use tracing::debug;

/// File formats accepted by the tabular parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Spreadsheet,
}

impl FileKind {
    /// Classifies a path by its extension without touching the filesystem.
    ///
    /// # Errors
    /// Returns `TabularParseError::UnsupportedFileType` for any extension other
    /// than csv or a spreadsheet format.
    pub fn from_path(path: &Path) -> Result<Self, TabularParseError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx" | "xls" | "xlsm" | "xlsb" | "ods") => Ok(Self::Spreadsheet),
            _ => Err(TabularParseError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }
}

/// Error type for tabular parse failures.
#[derive(Debug)]
pub enum TabularParseError {
    UnsupportedFileType(String),
    Csv(csv::Error),
    Spreadsheet(String),
    EmptyWorkbook(String),
    Join(String),
}

impl TabularParseError {
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFileType(_))
    }
}

impl fmt::Display for TabularParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFileType(path) => write!(f, "unsupported file type: {path}"),
            Self::Csv(err) => write!(f, "CSV parse error: {err}"),
            Self::Spreadsheet(message) => write!(f, "spreadsheet parse error: {message}"),
            Self::EmptyWorkbook(path) => write!(f, "workbook has no sheets: {path}"),
            Self::Join(message) => write!(f, "parse task failed: {message}"),
        }
    }
}

impl Error for TabularParseError {}

impl From<csv::Error> for TabularParseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<calamine::Error> for TabularParseError {
    fn from(err: calamine::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TabularParseError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}

/// Parser for delimited and spreadsheet files.
pub struct TabularParser;

impl TabularParser {
    /// Parses a tabular file into row records keyed by its header row.
    ///
    /// CSV input is read record by record; spreadsheets load the first sheet.
    ///
    /// # Errors
    /// Returns `TabularParseError` if the extension is unsupported, the file
    /// cannot be read, or any row fails to decode. No partial output is
    /// returned on failure.
    pub fn parse(path: impl AsRef<Path>) -> Result<Vec<RowRecord>, TabularParseError> {
        let path = path.as_ref();
        let rows = match FileKind::from_path(path)? {
            FileKind::Csv => parse_csv(path)?,
            FileKind::Spreadsheet => parse_spreadsheet(path)?,
        };
        debug!(path = %path.display(), rows = rows.len(), "parsed tabular file");
        Ok(rows)
    }

    /// Parses a tabular file on the blocking thread pool.
    ///
    /// # Errors
    /// Returns `TabularParseError` for the same reasons as [`Self::parse`], or
    /// if the blocking task panics.
    pub async fn parse_async(path: impl Into<PathBuf>) -> Result<Vec<RowRecord>, TabularParseError> {
        let path = path.into();
        tokio::task::spawn_blocking(move || Self::parse(&path)).await?
    }
}

fn parse_csv(path: &Path) -> Result<Vec<RowRecord>, TabularParseError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RowRecord::new();
        for (index, field) in record.iter().enumerate() {
            row.insert(column_name(&headers, index), CellValue::from(field));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn parse_spreadsheet(path: &Path) -> Result<Vec<RowRecord>, TabularParseError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TabularParseError::EmptyWorkbook(path.display().to_string()))??;
    Ok(records_from_cells(range.rows()))
}

/// Maps spreadsheet rows to records using the first non-empty row as header.
///
/// Empty cells are left out of each record and rows without any value are
/// skipped.
pub fn records_from_cells<'a, I>(rows: I) -> Vec<RowRecord>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter().filter(|row| !is_blank_row(row));
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    rows.map(|cells| {
        cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !matches!(cell, Data::Empty))
            .map(|(index, cell)| (column_name(&headers, index), cell_value(cell)))
            .collect()
    })
    .collect()
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(value) => value.trim().is_empty(),
        _ => false,
    })
}

fn column_name(headers: &[String], index: usize) -> String {
    match headers.get(index) {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => format!("column_{}", index + 1),
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Bool(value) => CellValue::Bool(*value),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::String(value) => CellValue::Text(value.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
