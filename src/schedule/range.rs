use super::{ScheduleError, ScheduleTable};

/// First and last month column in table order. This reflects the source
/// layout, not chronological order; schedules are laid out left to right and
/// the range is reported back to the user the same way.
pub fn resolve_range(table: &ScheduleTable) -> Result<(usize, usize), ScheduleError> {
    let mut indices = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| column.key.is_some())
        .map(|(index, _)| index);
    let first = indices.next().ok_or(ScheduleError::NoMonthColumns)?;
    let last = indices.last().unwrap_or(first);
    Ok((first, last))
}

#[cfg(test)]
mod tests {
    use super::super::table::Cell;
    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn range_in_table_order() {
        let table = ScheduleTable::from_cells(
            vec![
                text("Items"),
                text("Invoice number"),
                text("Jan24"),
                text("Feb24"),
                text("Mar24"),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!((2, 4), resolve_range(&table).unwrap());
    }

    #[test]
    fn descriptive_column_between_months_is_excluded() {
        let table = ScheduleTable::from_cells(
            vec![text("Items"), text("Jan24"), text("Notes"), text("Feb24")],
            vec![],
        )
        .unwrap();
        let (first, last) = resolve_range(&table).unwrap();
        assert_eq!((1, 3), (first, last));
        assert!(table.columns()[2].key.is_none());
    }

    #[test]
    fn single_month_column() {
        let table =
            ScheduleTable::from_cells(vec![text("Items"), text("Jan24")], vec![]).unwrap();
        assert_eq!((1, 1), resolve_range(&table).unwrap());
    }

    #[test]
    fn no_month_columns_is_an_error() {
        let table =
            ScheduleTable::from_cells(vec![text("Items"), text("Notes")], vec![]).unwrap();
        assert!(matches!(
            resolve_range(&table),
            Err(ScheduleError::NoMonthColumns)
        ));
    }
}
