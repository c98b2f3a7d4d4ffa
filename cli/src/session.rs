use crate::prompt::{prompt_line, prompt_names, prompt_yes_no};
use dashboard::core::dashboard::Dashboard;
use helpers::general::ordinal;
use log::{debug, info, warn};
use skatetrack::core::best_times::BestTimesTable;
use skatetrack::core::category::Category;
use skatetrack::core::history::History;
use skatetrack::core::race_state::RaceState;
use skatetrack::interfaces::dashboard_interface::RaceView;
use skatetrack::post::race_result::RaceResult;
use skatetrack::post::save_history::save_history;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// SessionOutcome is what remains after the operator stopped tracking.
#[derive(Debug)]
pub struct SessionOutcome {
    pub best_times: BestTimesTable,
    pub history: History,
    pub last_race: RaceResult,
}

/// Session tracks races of one category until the operator quits. It owns the current best
/// times and the history of the category.
#[derive(Debug)]
pub struct Session {
    pub category: Category,
    pub dashboard: Dashboard,
    pub best_times: BestTimesTable,
    pub history: History,
    pub history_path: Option<PathBuf>,
    pub clear_screen: bool,
}

impl Session {
    /// The method redraws the race view of the current state.
    fn redraw<W: Write>(&self, wtr: &mut W, race_state: &RaceState) -> anyhow::Result<()> {
        if self.clear_screen {
            write!(wtr, "{}", CLEAR_SCREEN)?;
        }
        let race_view = RaceView::new(self.category, race_state, &self.best_times);
        writeln!(wtr, "{}", self.dashboard.render_race(&race_view))?;
        Ok(())
    }

    /// track_race asks for the lap times of every lap until they are valid and shows the updated
    /// race view after every input. It returns the state after the last lap.
    pub fn track_race<R: BufRead, W: Write>(
        &self,
        rdr: &mut R,
        wtr: &mut W,
        names: Vec<String>,
    ) -> anyhow::Result<RaceState> {
        let mut race_state = RaceState::new(names, self.category.nr_laps());
        self.redraw(wtr, &race_state)?;

        for lap_idx in 0..race_state.nr_laps() {
            loop {
                let msg = format!("Lap times of {} lap: ", ordinal(lap_idx as u32 + 1));
                let input = prompt_line(rdr, wtr, &msg)?;

                match race_state.record_lap_input(lap_idx, &input) {
                    Ok(()) => {
                        debug!("recorded lap {}: {}", lap_idx + 1, input.trim());
                        self.redraw(wtr, &race_state)?;
                        break;
                    }
                    Err(e) if e.is_retryable() => {
                        warn!("rejected input for lap {}: {}", lap_idx + 1, e);
                        self.redraw(wtr, &race_state)?;
                        writeln!(wtr, "ERROR: {}!", e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Ok(race_state)
    }

    /// finish_race merges the finished race into the best times and saves the history if a file
    /// was given.
    pub fn finish_race(&mut self, race_result: &RaceResult) -> anyhow::Result<()> {
        self.best_times = self.best_times.merge(race_result);
        info!(
            "merged race of {} into the {} best times",
            race_result.names().join(", "),
            self.category
        );

        self.history.append(race_result);
        if let Some(filepath) = &self.history_path {
            save_history(filepath, &self.history)?;
        }

        Ok(())
    }

    /// run tracks races until the operator does not want to track another one.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        rdr: &mut R,
        wtr: &mut W,
    ) -> anyhow::Result<SessionOutcome> {
        let last_race = loop {
            let names = prompt_names(rdr, wtr)?;
            let race_state = self.track_race(rdr, wtr, names)?;
            let race_result = race_state.get_race_result();

            self.finish_race(&race_result)?;

            if !prompt_yes_no(
                rdr,
                wtr,
                "Do you want to start tracking the next race? [y/n]: ",
            )? {
                // show the final state one last time, now with the updated best times
                self.redraw(wtr, &race_state)?;
                break race_result;
            }
        };

        Ok(SessionOutcome {
            best_times: self.best_times,
            history: self.history,
            last_race,
        })
    }
}
