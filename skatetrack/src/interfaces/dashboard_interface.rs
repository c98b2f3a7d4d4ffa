use crate::core::best_times::BestTimesTable;
use crate::core::category::Category;
use crate::core::race_state::RaceState;

/// AthleteView contains everything the dashboard shows about one athlete of the current race.
#[derive(Debug, Clone, Default)]
pub struct AthleteView {
    pub name: String,
    pub laptimes: Vec<f64>,
    pub racetimes: Vec<f64>,
    pub deltas: Vec<Option<f64>>,
    pub total: f64,
}

/// BestView is one row of the best times table.
#[derive(Debug, Clone, Default)]
pub struct BestView {
    pub name: String,
    pub laptimes: Vec<f64>,
    pub total: f64,
    pub placeholder: bool,
}

/// RaceView is a snapshot of the tracker state that is handed to the dashboard after every lap.
#[derive(Debug, Clone)]
pub struct RaceView {
    pub category: Category,
    pub nr_laps: usize,
    pub compl_laps: usize,
    pub athletes: Vec<AthleteView>,
    pub best: Vec<BestView>,
}

impl RaceView {
    pub fn new(category: Category, race_state: &RaceState, best_times: &BestTimesTable) -> RaceView {
        let deltas = race_state.deltas_to_reference(best_times);
        let totals = race_state.cumulative_totals();
        let racetimes = race_state.cumulative_racetimes();

        let athletes = race_state
            .names()
            .iter()
            .zip(race_state.laprecords().iter())
            .zip(deltas.into_iter().zip(totals.into_iter().zip(racetimes.into_iter())))
            .map(|((name, laprecord), (deltas, (total, racetimes)))| AthleteView {
                name: name.to_owned(),
                laptimes: laprecord.laptimes().to_vec(),
                racetimes,
                deltas,
                total,
            })
            .collect();

        let best = best_times
            .entries()
            .iter()
            .map(|entry| BestView {
                name: entry.name.to_owned(),
                laptimes: entry.laprecord.laptimes().to_vec(),
                total: entry.total(),
                placeholder: entry.is_placeholder(),
            })
            .collect();

        RaceView {
            category,
            nr_laps: race_state.nr_laps(),
            compl_laps: race_state.get_compl_laps(),
            athletes,
            best,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.athletes.iter().map(|x| x.name.as_str()).collect()
    }
}
