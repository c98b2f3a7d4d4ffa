use crate::core::category::Category;
use crate::core::history::History;
use anyhow::Context;
use log::info;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

/// read_history opens the history file of the category and decodes its content.
pub fn read_history(filepath: &Path, category: &Category) -> anyhow::Result<History> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open history file {}!",
            filepath.display()
        ))?;

    // read and parse history file content
    let history = parse_history(fh, category.nr_laps()).context(format!(
        "Failed to parse history file {}!",
        filepath.display()
    ))?;

    info!(
        "loaded {} result(s) of the {} from {}",
        history.names().len(),
        category,
        filepath.display()
    );

    Ok(history)
}

/// parse_history decodes history CSV data: a header with the athlete names followed by one row
/// of lap times per lap.
pub fn parse_history<R: Read>(rdr: R, nr_laps: usize) -> anyhow::Result<History> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let names: Vec<String> = csv_reader
        .headers()
        .context("Failed to read the athlete names!")?
        .iter()
        .map(|name| name.to_owned())
        .collect();

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(nr_laps);

    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row: Vec<f64> = record
            .deserialize(None)
            .context(format!("Failed to read the lap times of lap {}!", i + 1))?;
        rows.push(row);
    }

    Ok(History::from_lap_major(names, rows, nr_laps)?)
}
