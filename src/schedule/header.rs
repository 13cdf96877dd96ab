use super::table::RawGrid;

/// A row counts as the header when any of its cells mentions one of these.
pub const HEADER_KEYWORDS: [&str; 3] = ["items", "invoice", "amount"];

/// Scan the raw grid top to bottom for the first row that looks like a column
/// header. Returns None when no row matches; the caller has to surface that
/// as an error, there is nothing to process without a header.
pub fn locate_header(grid: &RawGrid) -> Option<usize> {
    grid.rows.iter().position(|row| {
        row.iter().flatten().any(|cell| {
            let cell = cell.to_lowercase();
            HEADER_KEYWORDS.iter().any(|keyword| cell.contains(keyword))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> RawGrid {
        RawGrid {
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                        .collect()
                })
                .collect(),
        }
    }

    #[test]
    fn header_is_not_the_first_row() {
        let grid = grid(&[
            &["Prepayment schedule 2024", ""],
            &["", ""],
            &["Items", "Invoice number", "Jan24", "Feb24"],
            &["Office rent", "1001", "100", "100"],
        ]);
        assert_eq!(Some(2), locate_header(&grid));
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        assert_eq!(
            Some(0),
            locate_header(&grid(&[&["Total AMOUNT per month"]]))
        );
        assert_eq!(Some(1), locate_header(&grid(&[&["Schedule"], &["Invoice number"]])));
    }

    #[test]
    fn first_matching_row_wins() {
        let grid = grid(&[
            &["", "invoice list"],
            &["Items", "Invoice number"],
        ]);
        assert_eq!(Some(0), locate_header(&grid));
    }

    #[test]
    fn no_keyword_anywhere() {
        assert_eq!(None, locate_header(&grid(&[&["a", "b"], &["c", "d"]])));
    }

    #[test]
    fn blank_grid() {
        assert_eq!(None, locate_header(&grid(&[])));
        assert_eq!(None, locate_header(&grid(&[&["", ""], &["", ""]])));
    }
}
