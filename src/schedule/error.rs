use thiserror::Error;

use crate::load::LoadError;

/// Structural failures of the normalization pipeline. Each of these aborts
/// processing; a column that merely fails month classification is not an
/// error, it stays in the table as a descriptive column.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("could not detect a header row in the input file")]
    HeaderNotFound,

    #[error("failed to read the input file")]
    SourceUnreadable(#[from] LoadError),

    #[error("no month-formatted columns found in the header")]
    NoMonthColumns,

    #[error("the detected header has no item-name column")]
    ItemColumnMissing,
}
