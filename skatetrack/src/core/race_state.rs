use crate::core::best_times::BestTimesTable;
use crate::core::errors::TrackerError;
use crate::core::lap_record::LapRecord;
use crate::post::race_result::RaceResult;

/// parse_laptimes converts an operator input line such as "20.1, 21.3" into lap times. Spaces are
/// ignored and the times are separated by commas. Every token must be a finite, non-negative
/// number and there must be exactly one token per athlete.
pub fn parse_laptimes(input: &str, no_athletes: usize) -> Result<Vec<f64>, TrackerError> {
    let compact: String = input.split_whitespace().collect();

    let laptimes = compact
        .split(',')
        .map(|token| parse_laptime(token))
        .collect::<Result<Vec<f64>, TrackerError>>()?;

    if laptimes.len() != no_athletes {
        return Err(TrackerError::InputCardinality {
            expected: no_athletes,
            received: laptimes.len(),
        });
    }

    Ok(laptimes)
}

fn parse_laptime(token: &str) -> Result<f64, TrackerError> {
    match token.parse::<f64>() {
        Ok(t) if t.is_finite() && t >= 0.0 => Ok(t),
        _ => Err(TrackerError::InputFormat {
            token: token.to_owned(),
        }),
    }
}

/// RaceState holds the lap times of all athletes of the race that is currently tracked.
#[derive(Debug, Clone)]
pub struct RaceState {
    names: Vec<String>,
    nr_laps: usize,
    laprecords: Vec<LapRecord>,
    laps_recorded: Vec<bool>,
}

impl RaceState {
    pub fn new(names: Vec<String>, nr_laps: usize) -> RaceState {
        let laprecords = vec![LapRecord::unset(nr_laps); names.len()];

        RaceState {
            names,
            nr_laps,
            laprecords,
            laps_recorded: vec![false; nr_laps],
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn no_athletes(&self) -> usize {
        self.names.len()
    }

    pub fn nr_laps(&self) -> usize {
        self.nr_laps
    }

    pub fn laprecords(&self) -> &[LapRecord] {
        &self.laprecords
    }

    /// The method sets the lap times of all athletes for the given lap (zero-based). The times
    /// must be given in athlete order. An already recorded lap is overwritten. If the input is
    /// rejected, the state is left untouched.
    pub fn record_lap(&mut self, lap_idx: usize, laptimes: &[f64]) -> Result<(), TrackerError> {
        if lap_idx >= self.nr_laps {
            return Err(TrackerError::LapIndexOutOfRange {
                lap_idx,
                nr_laps: self.nr_laps,
            });
        }

        if laptimes.len() != self.no_athletes() {
            return Err(TrackerError::InputCardinality {
                expected: self.no_athletes(),
                received: laptimes.len(),
            });
        }

        if let Some(t) = laptimes.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(TrackerError::InputFormat {
                token: t.to_string(),
            });
        }

        for (laprecord, &t_lap) in self.laprecords.iter_mut().zip(laptimes.iter()) {
            laprecord.set_laptime(lap_idx, t_lap);
        }
        self.laps_recorded[lap_idx] = true;

        Ok(())
    }

    /// The method parses an operator input line (e.g. "20.1, 21.3") and records it for the given
    /// lap, see record_lap.
    pub fn record_lap_input(&mut self, lap_idx: usize, input: &str) -> Result<(), TrackerError> {
        let laptimes = parse_laptimes(input, self.no_athletes())?;
        self.record_lap(lap_idx, &laptimes)
    }

    /// cumulative_totals returns the sum of all lap times per athlete (unset laps count as 0.0).
    pub fn cumulative_totals(&self) -> Vec<f64> {
        self.laprecords.iter().map(|x| x.total()).collect()
    }

    /// cumulative_racetimes returns the race time after every lap per athlete, 0.0 for laps that
    /// were not run yet.
    pub fn cumulative_racetimes(&self) -> Vec<Vec<f64>> {
        self.laprecords.iter().map(|x| x.racetimes()).collect()
    }

    /// deltas_to_reference returns, per athlete and lap, the difference between the athlete's lap
    /// time and the lap time of the fastest entry of the reference table. The delta is None if
    /// either of both lap times is not set.
    pub fn deltas_to_reference(&self, reference: &BestTimesTable) -> Vec<Vec<Option<f64>>> {
        let ref_laprecord = &reference.fastest().laprecord;

        self.laprecords
            .iter()
            .map(|laprecord| {
                (0..self.nr_laps)
                    .map(|lap_idx| {
                        let t_own = laprecord.get_laptime(lap_idx);
                        let t_ref = ref_laprecord.get_laptime(lap_idx);

                        if t_own == 0.0 || t_ref == 0.0 {
                            None
                        } else {
                            Some(t_own - t_ref)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// get_compl_laps returns the number of laps for which lap times were accepted.
    pub fn get_compl_laps(&self) -> usize {
        self.laps_recorded.iter().filter(|&&x| x).count()
    }

    /// get_next_lap returns the first lap (zero-based) without recorded lap times, None if all laps
    /// are recorded.
    pub fn get_next_lap(&self) -> Option<usize> {
        self.laps_recorded.iter().position(|&x| !x)
    }

    pub fn get_all_finished(&self) -> bool {
        self.laps_recorded.iter().all(|&x| x)
    }

    /// get_race_result returns a race result struct of the race.
    pub fn get_race_result(&self) -> RaceResult {
        RaceResult::new(self.names.to_owned(), self.laprecords.to_owned())
    }
}
