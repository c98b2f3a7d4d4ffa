use crate::core::lap_record::LapRecord;

/// RaceResult contains the names and lap times of all athletes of a finished race, in the order
/// in which the athletes were entered.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    names: Vec<String>,
    laprecords: Vec<LapRecord>,
}

impl RaceResult {
    pub fn new(names: Vec<String>, laprecords: Vec<LapRecord>) -> RaceResult {
        debug_assert_eq!(names.len(), laprecords.len());
        RaceResult { names, laprecords }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn laprecords(&self) -> &[LapRecord] {
        &self.laprecords
    }

    pub fn no_athletes(&self) -> usize {
        self.names.len()
    }

    pub fn nr_laps(&self) -> usize {
        self.laprecords.first().map_or(0, |x| x.nr_laps())
    }

    /// entries returns the (name, lap record) pairs of the race.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &LapRecord)> {
        self.names.iter().zip(self.laprecords.iter())
    }

    /// fmt_lap_and_race_times creates the lap time and race time listing that is printed at the
    /// end of a tracking session.
    pub fn fmt_lap_and_race_times(&self) -> String {
        let racetimes: Vec<Vec<f64>> = self.laprecords.iter().map(|x| x.racetimes()).collect();

        // create string for lap times and race times
        let mut tmp_string_laptime = String::new();
        let mut tmp_string_racetime = String::new();

        for lap_idx in 0..self.nr_laps() {
            let cells_laptime: Vec<String> = self
                .laprecords
                .iter()
                .map(|x| format!("{:8.2}s", x.get_laptime(lap_idx)))
                .collect();
            let cells_racetime: Vec<String> = racetimes
                .iter()
                .map(|x| format!("{:8.2}s", x[lap_idx]))
                .collect();

            tmp_string_laptime.push_str(&format!(
                "{:3}, {}\n",
                lap_idx + 1,
                cells_laptime.join(", ")
            ));
            tmp_string_racetime.push_str(&format!(
                "{:3}, {}\n",
                lap_idx + 1,
                cells_racetime.join(", ")
            ));
        }

        // create string with athlete info
        let tmp_string_athlete_info = format!("lap, {}", self.names.join(", "));

        // put everything together
        format!(
            "RESULT: Lap times\n{info}\n{laps}\nRESULT: Race times\n{info}\n{races}\n",
            info = tmp_string_athlete_info,
            laps = tmp_string_laptime,
            races = tmp_string_racetime
        )
    }
}
