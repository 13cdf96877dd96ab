use std::path::Path;

use anyhow::Result;
use console::style;

use crate::args::Args;
use crate::export;
use crate::journal;
use crate::load::SourceFile;
use crate::schedule::{self, month, MonthKey, ScheduleTable};
use crate::terminal;

pub fn main(args: Args) -> Result<()> {
    let table = load_table(&args.path)?;
    let (first, last) = schedule::resolve_range(&table)?;
    let target = prompt_target_month(&table, first, last)?;

    let amortizations = journal::amortizations_for_month(&table, target);
    if amortizations.is_empty() {
        println!("No amortizations to post for {target}");
    }

    let prepayments_account = terminal::input_code("Please enter your prepayments ledger code")?;
    let date = target.last_day();
    let mut lines = Vec::with_capacity(amortizations.len() * 2);
    for amortization in &amortizations {
        let expense_account = terminal::input_code(&format!(
            "Please enter the expense ledger code for {}",
            style(&amortization.item).cyan(),
        ))?;
        lines.extend(journal::lines_for(
            amortization,
            date,
            &expense_account,
            &prepayments_account,
        ));
    }

    let path = export::write_journal(&lines, Path::new(export::OUTPUT_DIR))?;
    println!("Entries written to {}", style(path.display()).green());
    Ok(())
}

fn load_table(path: &Path) -> Result<ScheduleTable> {
    log::info!("Loading schedule...");
    let source = SourceFile::from_path(path)?;
    let grid = source.read_raw()?;
    let header_row =
        schedule::locate_header(&grid).ok_or(schedule::ScheduleError::HeaderNotFound)?;
    let table = ScheduleTable::normalize(&source, header_row)?;
    log::info!("Loading schedule...done");
    Ok(table)
}

fn prompt_target_month(table: &ScheduleTable, first: usize, last: usize) -> Result<MonthKey> {
    loop {
        let input = terminal::input("Please enter the month and year to process (MMM-YY)")?;
        let Some(target) = month::classify_label(&input) else {
            println!(
                "Sorry, {} is not a valid month. Please use a format like May-24, May-2024 or May24.",
                style(&input).red(),
            );
            continue;
        };
        if table.column_for_month(target).is_some() {
            return Ok(target);
        }
        let span = |index: usize| {
            table.columns()[index]
                .key
                .expect("range indices always point at month columns")
        };
        println!(
            "Sorry, the schedule only has amortizations from {} to {}. Please enter a month within that range.",
            style(span(first)).bold(),
            style(span(last)).bold(),
        );
    }
}
