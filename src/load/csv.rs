use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use rust_decimal::Decimal;

use super::LoadError;
use crate::schedule::{Cell, RawGrid};

pub fn read_raw(path: &Path) -> Result<RawGrid, LoadError> {
    let mut reader = reader(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    let field = field.trim();
                    (!field.is_empty()).then(|| field.to_string())
                })
                .collect(),
        );
    }
    Ok(RawGrid { rows })
}

pub fn read_table(path: &Path, header_row: usize) -> Result<(Vec<Cell>, Vec<Vec<Cell>>), LoadError> {
    let mut reader = reader(path)?;
    let mut labels = None;
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        if index < header_row {
            continue;
        }
        let record = record?;
        let cells = record.iter().map(typed_cell).collect();
        if index == header_row {
            labels = Some(cells);
        } else {
            rows.push(cells);
        }
    }
    let labels = labels.ok_or(LoadError::HeaderRowOutOfBounds { row: header_row })?;
    Ok((labels, rows))
}

fn reader(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // rows before the header are free-form, so widths vary
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

/// CSV has no types; recognize numbers so amount cells become comparable.
fn typed_cell(field: &str) -> Cell {
    let field = field.trim();
    if field.is_empty() {
        Cell::Empty
    } else if let Ok(number) = Decimal::from_str_exact(field) {
        Cell::Number(number)
    } else {
        Cell::Text(field.to_string())
    }
}
