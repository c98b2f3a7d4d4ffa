use crate::core::history::History;
use anyhow::Context;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// save_history writes the complete history to the given file (the file is replaced). Missing
/// parent directories are created.
pub fn save_history(filepath: &Path, history: &History) -> anyhow::Result<()> {
    if let Some(dir) = filepath.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create data directory {}!", dir.display()))?;
        }
    }

    let fh = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filepath)
        .context(format!(
            "Failed to open history file {}!",
            filepath.display()
        ))?;

    write_history(fh, history).context(format!(
        "Failed to write history file {}!",
        filepath.display()
    ))?;

    info!(
        "saved {} result(s) to {}",
        history.names().len(),
        filepath.display()
    );

    Ok(())
}

/// write_history encodes the history as CSV: the athlete names as header, followed by one row
/// per lap with the lap times rounded to two decimals.
pub fn write_history<W: Write>(wtr: W, history: &History) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(wtr);

    csv_writer.write_record(history.names())?;

    for row in history.to_lap_major().iter() {
        csv_writer.write_record(row.iter().map(|t| format!("{:.2}", t)))?;
    }

    csv_writer.flush()?;
    Ok(())
}
