//! CSV loading and numeric column discovery.
//!
//! Cells are kept as text; a column is numeric when every non-missing cell
//! parses as `f64` and at least one cell is present. Missing cells become
//! `NaN` in the extracted sample.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use outlier_core::errors::LoadError;

/// Cell spellings treated as missing, compared case-insensitively.
const MISSING_TOKENS: [&str; 6] = ["", "na", "n/a", "nan", "null", "none"];

/// Parsed view of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text,
}

pub fn classify(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Cell::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(v) => Cell::Number(v),
        Err(_) => Cell::Text,
    }
}

/// An in-memory CSV table with a header row.
#[derive(Debug, Clone)]
pub struct Table {
    /// Where the table came from, for messages.
    pub source: String,
    pub headers: Vec<String>,
    /// Rows padded to `headers.len()` with empty cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| LoadError::Io {
            path: source.clone(),
            message: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file), source)
    }

    pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> Result<Self, LoadError> {
        let source = source.into();
        let csv_err = |e: csv::Error| LoadError::Csv {
            path: source.clone(),
            message: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len().max(row.len()), String::new());
            rows.push(row);
        }

        tracing::info!(source = %source, columns = headers.len(), rows = rows.len(), "loaded table");

        Ok(Self {
            source,
            headers,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_numeric(&self, col: usize) -> bool {
        let mut seen_number = false;
        for row in 0..self.rows.len() {
            match classify(self.cell(row, col)) {
                Cell::Number(_) => seen_number = true,
                Cell::Missing => {}
                Cell::Text => return false,
            }
        }
        seen_number
    }

    /// Indices of numeric columns, in header order.
    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.headers.len())
            .filter(|&col| self.is_numeric(col))
            .collect()
    }

    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.numeric_columns()
            .into_iter()
            .map(|col| self.headers[col].as_str())
            .collect()
    }

    /// Resolve a column by header name (preferred) or index. With no
    /// selector, the first numeric column.
    pub fn resolve_column(&self, selector: Option<&str>) -> Result<usize, LoadError> {
        let col = match selector {
            Some(name) => self
                .headers
                .iter()
                .position(|h| h == name)
                .or_else(|| name.parse::<usize>().ok().filter(|&i| i < self.headers.len()))
                .ok_or_else(|| LoadError::ColumnNotFound(name.to_string()))?,
            None => {
                return self
                    .numeric_columns()
                    .first()
                    .copied()
                    .ok_or_else(|| LoadError::NoNumericColumns {
                        path: self.source.clone(),
                    })
            }
        };

        if !self.is_numeric(col) {
            return Err(LoadError::NotNumeric(self.headers[col].clone()));
        }
        Ok(col)
    }

    /// Extract a numeric column; missing cells become `NaN`.
    pub fn column_values(&self, col: usize) -> Result<Vec<f64>, LoadError> {
        let name = || {
            self.headers
                .get(col)
                .cloned()
                .unwrap_or_else(|| col.to_string())
        };
        if col >= self.headers.len() {
            return Err(LoadError::ColumnNotFound(name()));
        }

        (0..self.rows.len())
            .map(|row| match classify(self.cell(row, col)) {
                Cell::Number(v) => Ok(v),
                Cell::Missing => Ok(f64::NAN),
                Cell::Text => Err(LoadError::NotNumeric(name())),
            })
            .collect()
    }
}
