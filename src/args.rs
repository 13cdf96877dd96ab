use clap::Parser;

/// Convert a prepayment amortization schedule into double-entry journal lines.
#[derive(Parser, Debug)]
pub struct Args {
    /// Path to the schedule file (.xls, .xlsx or .csv)
    #[clap(short, long)]
    pub path: std::path::PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
