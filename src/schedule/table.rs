use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

use super::month::{self, MonthKey};
use super::ScheduleError;
use crate::load::SourceFile;

/// The file as first read: no header semantics, every cell as raw text.
/// Only used to locate the header row, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    pub rows: Vec<Vec<Option<String>>>,
}

/// A typed cell from the second parse pass. Spreadsheet sources keep native
/// dates and numbers; CSV sources get numbers recognized from text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Decimal),
    Date(NaiveDate),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) | Cell::Date(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Date(date) => write!(f, "{}", date.format("%d/%m/%Y")),
        }
    }
}

/// A column header together with its classification result. The original
/// label is kept as-is; month columns additionally carry their canonical key.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub key: Option<MonthKey>,
}

/// The normalized schedule: one row per amortizable item, descriptive columns
/// plus one column per month. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    item_column: usize,
    invoice_column: Option<usize>,
}

impl ScheduleTable {
    /// Re-parse the source with the located header row and normalize the
    /// result. This is a second parse pass; the first one (the raw grid) was
    /// all-text and headerless.
    pub fn normalize(source: &SourceFile, header_row: usize) -> Result<Self, ScheduleError> {
        let (labels, rows) = source.read_table(header_row)?;
        Self::from_cells(labels, rows)
    }

    /// Normalize an already-materialized table: classify every column label,
    /// drop fully-empty rows and rows without an item name (summary/total
    /// rows), and pad short rows to the header width.
    pub fn from_cells(labels: Vec<Cell>, rows: Vec<Vec<Cell>>) -> Result<Self, ScheduleError> {
        let columns: Vec<Column> = labels
            .iter()
            .map(|cell| Column {
                label: cell.to_string(),
                key: month::classify_cell(cell),
            })
            .collect();

        let item_column = columns
            .iter()
            .position(|column| column.key.is_none() && contains_ignore_case(&column.label, "item"))
            .ok_or(ScheduleError::ItemColumnMissing)?;
        let invoice_column = columns
            .iter()
            .position(|column| column.key.is_none() && contains_ignore_case(&column.label, "invoice"));

        let rows = rows
            .into_iter()
            .filter(|row| !row.iter().all(Cell::is_empty))
            .filter(|row| row.get(item_column).is_some_and(|cell| !cell.is_empty()))
            .map(|mut row| {
                row.resize(columns.len(), Cell::Empty);
                row
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            item_column,
            invoice_column,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn item_column(&self) -> usize {
        self.item_column
    }

    pub fn invoice_column(&self) -> Option<usize> {
        self.invoice_column
    }

    /// Index of the column holding the given month, if the schedule covers it.
    pub fn column_for_month(&self, key: MonthKey) -> Option<usize> {
        self.columns.iter().position(|column| column.key == Some(key))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
