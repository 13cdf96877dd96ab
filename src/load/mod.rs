use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::schedule::{Cell, RawGrid};

mod csv;
mod sheet;

/// Errors from the file-reading boundary. These all surface to the user as
/// "the input file could not be read", with the cause chain attached.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV data")]
    Csv(#[from] ::csv::Error),

    #[error("failed to read spreadsheet")]
    Spreadsheet(#[from] calamine::Error),

    #[error("the workbook contains no sheets")]
    EmptyWorkbook,

    #[error("header row {row} is past the end of the file")]
    HeaderRowOutOfBounds { row: usize },

    #[error("unsupported file type {extension:?}: expected a .xls, .xlsx or .csv file")]
    UnsupportedExtension { extension: String },
}

/// An input file, dispatched on extension. Reading happens in two passes:
/// [SourceFile::read_raw] materializes everything as text for header
/// detection, [SourceFile::read_table] re-reads below the detected header
/// with native types kept where the format has them.
#[derive(Debug, Clone)]
pub enum SourceFile {
    Csv(PathBuf),
    Spreadsheet(PathBuf),
}

impl SourceFile {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .map(|extension| extension.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv(path.to_path_buf())),
            "xlsx" | "xls" => Ok(Self::Spreadsheet(path.to_path_buf())),
            _ => Err(LoadError::UnsupportedExtension { extension }),
        }
    }

    pub fn read_raw(&self) -> Result<RawGrid, LoadError> {
        match self {
            Self::Csv(path) => csv::read_raw(path),
            Self::Spreadsheet(path) => sheet::read_raw(path),
        }
    }

    pub fn read_table(&self, header_row: usize) -> Result<(Vec<Cell>, Vec<Vec<Cell>>), LoadError> {
        match self {
            Self::Csv(path) => csv::read_table(path, header_row),
            Self::Spreadsheet(path) => sheet::read_table(path, header_row),
        }
    }
}
