use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader as _};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::LoadError;
use crate::schedule::{Cell, RawGrid};

pub fn read_raw(path: &Path) -> Result<RawGrid, LoadError> {
    let range = first_sheet(path)?;
    let rows = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|data| match data {
                    Data::Empty => None,
                    other => {
                        let text = other.to_string();
                        let text = text.trim();
                        (!text.is_empty()).then(|| text.to_string())
                    }
                })
                .collect()
        })
        .collect();
    Ok(RawGrid { rows })
}

pub fn read_table(path: &Path, header_row: usize) -> Result<(Vec<Cell>, Vec<Vec<Cell>>), LoadError> {
    let range = first_sheet(path)?;
    let mut labels = None;
    let mut rows = Vec::new();
    for (index, row) in range.rows().enumerate() {
        if index < header_row {
            continue;
        }
        let cells = row.iter().map(typed_cell).collect();
        if index == header_row {
            labels = Some(cells);
        } else {
            rows.push(cells);
        }
    }
    let labels = labels.ok_or(LoadError::HeaderRowOutOfBounds { row: header_row })?;
    Ok((labels, rows))
}

/// Schedules live on the first sheet of the workbook.
fn first_sheet(path: &Path) -> Result<Range<Data>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::EmptyWorkbook)?;
    Ok(workbook.worksheet_range(&sheet_name)?)
}

fn typed_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(text.to_string())
            }
        }
        Data::Int(value) => Cell::Number(Decimal::from(*value)),
        Data::Float(value) => Decimal::from_f64_retain(*value)
            .map(Cell::Number)
            .unwrap_or(Cell::Empty),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::DateTime(datetime) => datetime
            .as_datetime()
            .map(|datetime| Cell::Date(datetime.date()))
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(text) => text
            .parse::<NaiveDateTime>()
            .map(|datetime| datetime.date())
            .or_else(|_| text.parse::<NaiveDate>())
            .map(Cell::Date)
            .unwrap_or_else(|_| Cell::Text(text.clone())),
        Data::DurationIso(text) => Cell::Text(text.clone()),
        Data::Error(error) => Cell::Text(error.to_string()),
    }
}
