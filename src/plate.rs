//! Plate map substrate extraction
//!
//! A plate map page arrives as a grid of text cells. Each filled cell holds
//! a well coordinate and a compound name separated by a line break, e.g.
//! `"A2\nL-Arabinose"`. The grid is read row-major; the first well of a
//! PM plate is the negative control and is dropped.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Failed to read plate grid '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// A parsed page: rows of optional text cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateGrid {
    pub rows: Vec<Vec<Option<String>>>,
}

impl PlateGrid {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Load a grid from a header-less CSV file
    ///
    /// Rows may have different lengths; empty fields become `None`.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, PlateError> {
        let path = path.as_ref();
        let to_err = |source| PlateError::Csv {
            path: path.display().to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(to_err)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(to_err)?;
            rows.push(
                record
                    .iter()
                    .map(|field| (!field.is_empty()).then(|| field.to_string()))
                    .collect(),
            );
        }

        Ok(Self { rows })
    }

    /// Non-empty cells in row-major order
    ///
    /// A cell holding only whitespace is still a cell.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|cell| cell.as_deref())
            .filter(|cell| !cell.is_empty())
    }
}

/// Strip the well coordinate from a cell and tidy the compound name
///
/// A whitespace-only cell yields an empty name so that extracted entries
/// stay aligned with the wells they came from.
pub fn cell_substrate(cell: &str) -> String {
    let cell = cell.trim();
    let name = match cell.split_once('\n') {
        Some((_well, name)) => name,
        None => cell,
    };

    name.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Extract the ordered substrate names from a plate grid
pub fn extract_substrates(grid: &PlateGrid) -> Vec<String> {
    let mut substrates: Vec<String> = grid.cells().map(cell_substrate).collect();

    if substrates
        .first()
        .is_some_and(|first| first.to_lowercase().starts_with("negative"))
    {
        let control = substrates.remove(0);
        tracing::debug!(control = %control, "Dropping negative control well");
    }

    substrates
}
