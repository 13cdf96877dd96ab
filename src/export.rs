use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::journal::JournalLine;

pub const OUTPUT_DIR: &str = "outputs";

/// Write the journal lines to the next free `<N>.csv` in the output
/// directory. Past exports are never overwritten; numbering continues from
/// the highest existing index.
pub fn write_journal(lines: &[JournalLine], output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    let path = output_dir.join(format!("{}.csv", next_output_index(output_dir)?));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for line in lines {
        writer.serialize(line)?;
    }
    writer.flush()?;
    Ok(path)
}

fn next_output_index(output_dir: &Path) -> Result<u32> {
    let mut next = 0;
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|extension| extension.to_str()) != Some("csv") {
            continue;
        }
        let index = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u32>().ok());
        if let Some(index) = index {
            next = next.max(index + 1);
        }
    }
    Ok(next)
}
