//! Load monthly price-change sequences from CSV
//!
//! Expected layout: a header row with a `change_pct` column, one row per
//! month in simulation order. Other columns (e.g. `month`) are ignored.
//!
//! ```text
//! month,change_pct
//! 1,2.5
//! 2,-1.0
//! ```

use csv::Reader;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ProjectionError, Result};

/// Header of the column holding percentage changes
pub const CHANGE_COLUMN: &str = "change_pct";

#[derive(Debug, Deserialize)]
struct PriceRow {
    change_pct: f64,
}

/// Load a price path from a CSV file
pub fn load_price_changes<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ProjectionError::PricePath(format!("cannot open {}: {}", path.display(), e))
    })?;
    load_price_changes_from_reader(file)
}

/// Load a price path from any reader (e.g. string buffer, stdin)
pub fn load_price_changes_from_reader<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut csv_reader = Reader::from_reader(reader);

    let has_column = csv_reader.headers()?.iter().any(|h| h == CHANGE_COLUMN);
    if !has_column {
        return Err(ProjectionError::PricePath(format!(
            "missing '{}' column",
            CHANGE_COLUMN
        )));
    }

    let mut changes = Vec::new();
    for (line, result) in csv_reader.deserialize().enumerate() {
        let row: PriceRow = result
            .map_err(|e| ProjectionError::PricePath(format!("row {}: {}", line + 1, e)))?;
        changes.push(row.change_pct);
    }

    debug!("Loaded {} monthly price changes", changes.len());
    Ok(changes)
}
