use std::cmp::Ordering;

/// LapRecord holds the lap times (s) of one athlete in one race. A lap time of 0.0 marks a lap
/// that was not run (yet).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LapRecord {
    laptimes: Vec<f64>,
}

impl LapRecord {
    /// unset creates a record with all nr_laps laps not run yet.
    pub fn unset(nr_laps: usize) -> LapRecord {
        LapRecord {
            laptimes: vec![0.0; nr_laps],
        }
    }

    pub fn from_laptimes(laptimes: Vec<f64>) -> LapRecord {
        LapRecord { laptimes }
    }

    pub fn laptimes(&self) -> &[f64] {
        &self.laptimes
    }

    pub fn nr_laps(&self) -> usize {
        self.laptimes.len()
    }

    /// The method returns the lap time of the given lap, 0.0 if the lap is unset or unknown.
    pub fn get_laptime(&self, lap_idx: usize) -> f64 {
        self.laptimes.get(lap_idx).copied().unwrap_or(0.0)
    }

    pub(crate) fn set_laptime(&mut self, lap_idx: usize, laptime: f64) {
        self.laptimes[lap_idx] = laptime
    }

    /// total returns the sum of all lap times, unset laps contribute 0.0.
    pub fn total(&self) -> f64 {
        self.laptimes.iter().sum()
    }

    /// is_unset returns true if the total time is exactly zero, i.e. no lap was recorded.
    pub fn is_unset(&self) -> bool {
        self.total() == 0.0
    }

    /// racetimes returns the cumulative race time after each lap. Laps that are not run yet are
    /// reported as 0.0 such that they can be told apart from completed laps.
    pub fn racetimes(&self) -> Vec<f64> {
        let mut racetime = 0.0;

        self.laptimes
            .iter()
            .map(|&t_lap| {
                racetime += t_lap;
                if t_lap > 0.0 {
                    racetime
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// cmp_total orders two records ascending by total time. A record without any recorded lap
    /// (total of zero) is ranked behind every record with a positive total, as if its total was
    /// infinite. Two unset records are equal.
    pub fn cmp_total(&self, other: &LapRecord) -> Ordering {
        match (self.is_unset(), other.is_unset()) {
            (false, false) => self.total().total_cmp(&other.total()),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        }
    }
}
