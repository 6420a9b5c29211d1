use std::path::Path;

use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_INPUT: &str = "data.xlsx";

/// Header row plus string-coerced data rows, all padded to the header width.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported input format: {0:?} (expected xlsx, xlsm, xlsb, xls, ods or csv)")]
    UnsupportedFormat(String),
    #[error("sheet {sheet:?} not found (available: {available})")]
    SheetNotFound { sheet: String, available: String },
    #[error("workbook has no sheets")]
    NoSheets,
    #[error(transparent)]
    Workbook(#[from] calamine::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Read the roster table from a spreadsheet or CSV file.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<RawTable, SourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, sheet)?,
        "csv" => read_csv(path)?,
        _ => return Err(SourceError::UnsupportedFormat(ext)),
    };

    info!(
        "Read {} rows x {} columns from {}",
        table.rows.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<RawTable, SourceError> {
    let mut wb = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            let names = wb.sheet_names();
            if !names.iter().any(|n| n == name) {
                return Err(SourceError::SheetNotFound {
                    sheet: name.to_string(),
                    available: names.join(", "),
                });
            }
            wb.worksheet_range(name)?
        }
        None => wb.worksheet_range_at(0).ok_or(SourceError::NoSheets)??,
    };
    debug!("Used range {:?}..{:?}", range.start(), range.end());

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| cell_to_string(c).trim().to_string()).collect(),
        None => return Ok(RawTable::default()),
    };
    let rows = rows
        .map(|row| pad(row.iter().map(cell_to_string).collect(), headers.len()))
        .collect();

    Ok(RawTable { headers, rows })
}

fn read_csv(path: &Path) -> Result<RawTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(pad(record.iter().map(str::to_string).collect(), headers.len()));
    }

    Ok(RawTable { headers, rows })
}

fn pad(mut row: Vec<String>, width: usize) -> Vec<String> {
    if row.len() < width {
        row.resize(width, String::new());
    }
    row
}

/// Coerce a cell to the string shown on the page. Empty and error cells become "".
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_string(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => datetime_to_string(dt),
    }
}

/// Dates print as `YYYY-MM-DD HH:MM:SS`; durations keep the raw serial.
fn datetime_to_string(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(naive) if !dt.is_duration() => naive.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => dt.to_string(),
    }
}

// Phone numbers typed as numbers come back as floats; keep them integral.
fn float_to_string(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

// ── Tests ──
