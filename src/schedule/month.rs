use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::table::Cell;

/// Two-digit years below the pivot belong to the 2000s, the rest to the 1900s.
/// "May-69" parses as 2069, "May-70" as 1970.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 70;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Compact month labels like "May24" or "January2024".
static COMPACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]{3,9})(\d{2,4})$").unwrap());

/// Full date labels like "01-May-2024", "01/05/24" or "01May2024".
static FULL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/\s]?(\d{1,2}|[A-Za-z]{3,9})[-/\s]?(\d{2,4})$").unwrap());

/// A calendar month used as an equality/order key. Two labels that denote the
/// same month compare equal no matter how they were written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated on construction")
    }

    /// Journal entries are dated on the last day of the amortization month.
    pub fn last_day(self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("month is validated on construction")
            .pred_opt()
            .expect("the day before the first of a month always exists")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format("%b %y"))
    }
}

/// Decide whether a header cell denotes a calendar month. Native date cells
/// are taken at face value, text goes through [classify_label].
pub fn classify_cell(cell: &Cell) -> Option<MonthKey> {
    match cell {
        Cell::Date(date) => Some(MonthKey::from_date(*date)),
        Cell::Text(text) => classify_label(text),
        Cell::Empty | Cell::Number(_) => None,
    }
}

/// Decide whether a free-text label denotes a calendar month. Returns None for
/// anything unrecognized; most columns of a schedule are not months and that
/// is not an error.
///
/// Ambiguous numeric day/month pairs are resolved day-first, so "01/05/2024"
/// is May, not January.
pub fn classify_label(label: &str) -> Option<MonthKey> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(captures) = FULL_DATE.captures(trimmed) {
        // A bare digit run only counts as a date in DDMMYY or DDMMYYYY shape;
        // anything else ("12345", "0524") is ambiguous and rejected.
        let all_digits = trimmed.chars().all(|c| c.is_ascii_digit());
        if !all_digits || trimmed.len() == 6 || trimmed.len() == 8 {
            if let Some(key) = day_month_year(&captures[1], &captures[2], &captures[3]) {
                return Some(key);
            }
            // "05-2024" matches the pattern but has no valid day/month split;
            // it still reads as a month-year label below.
        }
    }

    let cleaned = trimmed.replace([' ', '/'], "-");
    let cleaned = match COMPACT.captures(&cleaned) {
        Some(captures) => format!("{}-{}", &captures[1], &captures[2]),
        None => cleaned,
    };

    // No day component; the first of the month is implied.
    let mut segments = cleaned.split('-').filter(|segment| !segment.is_empty());
    let month = segments.next()?;
    let year = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    day_month_year("1", month, year)
}

fn day_month_year(day: &str, month: &str, year: &str) -> Option<MonthKey> {
    let day: u32 = day.parse().ok()?;
    let key = MonthKey::new(parse_year(year)?, parse_month(month)?)?;
    // The day is only used to validate the date, the key keeps (year, month).
    NaiveDate::from_ymd_opt(key.year(), key.month(), day)?;
    Some(key)
}

/// A month segment is either numeric ("5", "05") or a case-insensitive prefix
/// of at least three letters of the English month name ("may", "Sept").
fn parse_month(segment: &str) -> Option<u32> {
    if segment.chars().all(|c| c.is_ascii_digit()) {
        let month: u32 = segment.parse().ok()?;
        return (1..=12).contains(&month).then_some(month);
    }
    let segment = segment.to_ascii_lowercase();
    if segment.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&segment))
        .map(|index| index as u32 + 1)
}

fn parse_year(segment: &str) -> Option<i32> {
    if !segment.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = segment.parse().ok()?;
    match segment.len() {
        2 => Some(if year < TWO_DIGIT_YEAR_PIVOT {
            2000 + year
        } else {
            1900 + year
        }),
        4 => Some(year),
        _ => None,
    }
}
