use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::schedule::{Cell, MonthKey, ScheduleTable};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// One line of the export file, in the column layout the bookkeeping software
/// imports. Every amortization produces two of these: a debit on the expense
/// account and an offsetting credit on the prepayments account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalLine {
    #[serde(rename = "Date", serialize_with = "serialize_date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

fn serialize_date<S: serde::Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

/// A schedule row with an amount to post in the target month.
#[derive(Debug, Clone, PartialEq)]
pub struct Amortization {
    pub item: String,
    pub reference: String,
    pub amount: Decimal,
}

/// Select the rows that amortize in the given month: the month cell must hold
/// a number other than zero. Amounts are posted as absolute values rounded to
/// two decimal places.
pub fn amortizations_for_month(table: &ScheduleTable, month: MonthKey) -> Vec<Amortization> {
    let Some(column) = table.column_for_month(month) else {
        return Vec::new();
    };
    table
        .rows()
        .iter()
        .filter_map(|row| {
            let amount = row.get(column)?.as_number()?;
            if amount.is_zero() {
                return None;
            }
            Some(Amortization {
                item: title_case(&row[table.item_column()].to_string()),
                reference: table
                    .invoice_column()
                    .and_then(|index| row.get(index))
                    .map(reference_text)
                    .unwrap_or_default(),
                amount: amount.round_dp(2).abs(),
            })
        })
        .collect()
}

pub fn lines_for(
    amortization: &Amortization,
    date: NaiveDate,
    expense_account: &str,
    prepayments_account: &str,
) -> [JournalLine; 2] {
    let description = format!("Prepayment amortization for {}", amortization.item);
    [
        JournalLine {
            date,
            description: description.clone(),
            reference: amortization.reference.clone(),
            account: expense_account.to_string(),
            amount: amortization.amount,
        },
        JournalLine {
            date,
            description,
            reference: amortization.reference.clone(),
            account: prepayments_account.to_string(),
            amount: -amortization.amount,
        },
    ]
}

/// Invoice numbers often come through as floats ("1001.0"); strip the noise.
fn reference_text(cell: &Cell) -> String {
    match cell {
        Cell::Number(number) => number.normalize().to_string(),
        other => other.to_string(),
    }
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut start_of_word = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if start_of_word {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            start_of_word = false;
        } else {
            result.push(c);
            start_of_word = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Cell;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn amount(value: &str) -> Cell {
        Cell::Number(Decimal::from_str_exact(value).unwrap())
    }

    fn table() -> ScheduleTable {
        ScheduleTable::from_cells(
            vec![
                text("Items"),
                text("Invoice number"),
                text("Jan24"),
                text("Feb24"),
            ],
            vec![
                vec![text("office RENT"), amount("1001"), amount("100"), amount("100")],
                vec![text("insurance"), amount("1002.0"), Cell::Empty, amount("49.504")],
                vec![text("software"), amount("1003"), amount("0"), amount("-12.50")],
            ],
        )
        .unwrap()
    }

    fn month(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn selects_only_nonzero_numeric_cells() {
        let january = amortizations_for_month(&table(), month(2024, 1));
        assert_eq!(1, january.len());
        assert_eq!("Office Rent", january[0].item);
        assert_eq!("1001", january[0].reference);
        assert_eq!(Decimal::from(100), january[0].amount);
    }

    #[test]
    fn amounts_are_absolute_and_rounded() {
        let february = amortizations_for_month(&table(), month(2024, 2));
        assert_eq!(3, february.len());
        assert_eq!(Decimal::from_str_exact("49.50").unwrap(), february[1].amount);
        assert_eq!(Decimal::from_str_exact("12.50").unwrap(), february[2].amount);
    }

    #[test]
    fn float_invoice_numbers_lose_the_trailing_zero() {
        let february = amortizations_for_month(&table(), month(2024, 2));
        assert_eq!("1002", february[1].reference);
    }

    #[test]
    fn month_outside_the_schedule_selects_nothing() {
        assert!(amortizations_for_month(&table(), month(2024, 12)).is_empty());
    }

    #[test]
    fn debit_and_credit_offset_each_other() {
        let amortization = Amortization {
            item: "Office Rent".to_string(),
            reference: "1001".to_string(),
            amount: Decimal::from(100),
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let [debit, credit] = lines_for(&amortization, date, "6000", "1400");
        assert_eq!("6000", debit.account);
        assert_eq!(Decimal::from(100), debit.amount);
        assert_eq!("1400", credit.account);
        assert_eq!(Decimal::from(-100), credit.amount);
        assert_eq!(Decimal::ZERO, debit.amount + credit.amount);
        assert_eq!("Prepayment amortization for Office Rent", debit.description);
        assert_eq!(debit.description, credit.description);
        assert_eq!(debit.reference, credit.reference);
    }

    #[test]
    fn journal_line_serializes_in_import_layout() {
        let line = JournalLine {
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            description: "Prepayment amortization for Office Rent".to_string(),
            reference: "1001".to_string(),
            account: "6000".to_string(),
            amount: Decimal::from(100),
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&line).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            "Date,Description,Reference,Account,Amount\n\
             31/01/2024,Prepayment amortization for Office Rent,1001,6000,100\n",
            output
        );
    }

    #[test]
    fn title_cases_like_the_schedule_authors_expect() {
        assert_eq!("Office Rent", title_case("office RENT"));
        assert_eq!("It Support (Monthly)", title_case("IT support (monthly)"));
    }
}
