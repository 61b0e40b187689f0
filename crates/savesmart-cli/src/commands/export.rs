//! CSV export command implementations

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use savesmart_core::db::Database;

fn write_output(csv: &str, output: Option<PathBuf>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(csv.as_bytes())?;

            let lines = csv.lines().count().saturating_sub(1); // Subtract header
            println!("✅ Exported {} {} to {}", lines, what, path.display());
        }
        None => {
            // Write to stdout
            print!("{}", csv);
        }
    }

    Ok(())
}

pub fn cmd_export_goals(db: &Database, output: Option<PathBuf>) -> Result<()> {
    let csv = db.export_goals_csv()?;
    write_output(&csv, output, "goals")
}

pub fn cmd_export_savings(db: &Database, output: Option<PathBuf>) -> Result<()> {
    let csv = db.export_savings_csv()?;
    write_output(&csv, output, "saving records")
}
