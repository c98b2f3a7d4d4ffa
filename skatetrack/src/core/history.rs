use crate::core::best_times::BestTimesTable;
use crate::core::errors::TrackerError;
use crate::core::lap_record::LapRecord;
use crate::post::race_result::RaceResult;

/// History holds all saved results of a category. Every athlete of every race is one column, so
/// the same name can occur several times.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    nr_laps: usize,
    names: Vec<String>,
    laprecords: Vec<LapRecord>,
}

impl History {
    pub fn new(nr_laps: usize) -> History {
        History {
            nr_laps,
            names: vec![],
            laprecords: vec![],
        }
    }

    /// from_lap_major creates a history from rows that contain one lap each (columns are the
    /// athletes), which is the orientation used in the history files.
    pub fn from_lap_major(
        names: Vec<String>,
        rows: Vec<Vec<f64>>,
        nr_laps: usize,
    ) -> Result<History, TrackerError> {
        if rows.len() != nr_laps || rows.iter().any(|row| row.len() != names.len()) {
            return Err(TrackerError::HistoryShape {
                expected: nr_laps,
                found: rows.len(),
                nr_athletes: names.len(),
            });
        }

        // lap times of a history file must be valid the same way as operator input
        for (lap_idx, row) in rows.iter().enumerate() {
            if let Some(i) = row.iter().position(|t| !t.is_finite() || *t < 0.0) {
                return Err(TrackerError::HistoryValue {
                    lap: lap_idx + 1,
                    athlete: names[i].to_owned(),
                    value: row[i].to_string(),
                });
            }
        }

        let laprecords = (0..names.len())
            .map(|i| LapRecord::from_laptimes(rows.iter().map(|row| row[i]).collect()))
            .collect();

        Ok(History {
            nr_laps,
            names,
            laprecords,
        })
    }

    /// to_lap_major returns the lap times with one row per lap and one column per athlete.
    pub fn to_lap_major(&self) -> Vec<Vec<f64>> {
        (0..self.nr_laps)
            .map(|lap_idx| {
                self.laprecords
                    .iter()
                    .map(|x| x.get_laptime(lap_idx))
                    .collect()
            })
            .collect()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn nr_laps(&self) -> usize {
        self.nr_laps
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// append adds all athletes of a finished race to the history.
    pub fn append(&mut self, race_result: &RaceResult) {
        for (name, laprecord) in race_result.entries() {
            self.names.push(name.to_owned());
            self.laprecords.push(laprecord.to_owned());
        }
    }

    /// as_race_result returns the complete history as a single race result such that it can be
    /// merged into a best times table.
    pub fn as_race_result(&self) -> RaceResult {
        RaceResult::new(self.names.to_owned(), self.laprecords.to_owned())
    }

    /// best_times ranks the whole history into a new best times table.
    pub fn best_times(&self) -> BestTimesTable {
        BestTimesTable::new(self.nr_laps).merge(&self.as_race_result())
    }
}
