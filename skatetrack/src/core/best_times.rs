use crate::core::lap_record::LapRecord;
use crate::post::race_result::RaceResult;
use log::debug;

/// Number of entries of a best times table.
pub const NO_BEST_ENTRIES: usize = 3;

/// Name shown for an empty slot of the best times table.
pub const PLACEHOLDER_NAME: &str = "None";

/// BestEntry is one of the fastest performances of all time in a category.
#[derive(Debug, Clone, PartialEq)]
pub struct BestEntry {
    pub name: String,
    pub laprecord: LapRecord,
}

impl BestEntry {
    pub fn placeholder(nr_laps: usize) -> BestEntry {
        BestEntry {
            name: PLACEHOLDER_NAME.to_owned(),
            laprecord: LapRecord::unset(nr_laps),
        }
    }

    pub fn total(&self) -> f64 {
        self.laprecord.total()
    }

    /// is_placeholder returns true if the entry holds no recorded lap.
    pub fn is_placeholder(&self) -> bool {
        self.laprecord.is_unset()
    }
}

/// BestTimesTable contains the top 3 performances of a category, sorted ascending by total time.
/// It always holds exactly NO_BEST_ENTRIES entries, empty slots are filled with placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTimesTable {
    entries: Vec<BestEntry>,
}

impl BestTimesTable {
    /// new creates a table that only contains placeholders.
    pub fn new(nr_laps: usize) -> BestTimesTable {
        BestTimesTable {
            entries: vec![BestEntry::placeholder(nr_laps); NO_BEST_ENTRIES],
        }
    }

    pub fn entries(&self) -> &[BestEntry] {
        &self.entries
    }

    /// fastest returns the entry ranked first, which serves as reference for lap time deltas.
    pub fn fastest(&self) -> &BestEntry {
        &self.entries[0]
    }

    pub fn nr_laps(&self) -> usize {
        self.entries[0].laprecord.nr_laps()
    }

    /// merge returns the new best times table after the finished race. Candidates are the current
    /// entries followed by the athletes of the finished race in their race order. They are sorted
    /// ascending by total time with a stable sort, so on exactly equal totals a current entry keeps
    /// its place in front of a new one. A candidate without recorded laps ranks behind every
    /// candidate with a positive total time.
    ///
    /// Every finished race must be merged exactly once, merging it again adds its athletes a second
    /// time.
    pub fn merge(&self, finished_race: &RaceResult) -> BestTimesTable {
        let nr_laps = self.nr_laps();

        let mut candidates: Vec<BestEntry> =
            Vec::with_capacity(self.entries.len() + finished_race.no_athletes());
        candidates.extend(self.entries.iter().cloned());
        candidates.extend(finished_race.entries().map(|(name, laprecord)| BestEntry {
            name: name.to_owned(),
            laprecord: laprecord.to_owned(),
        }));

        candidates.sort_by(|a, b| a.laprecord.cmp_total(&b.laprecord));
        candidates.truncate(NO_BEST_ENTRIES);

        while candidates.len() < NO_BEST_ENTRIES {
            candidates.push(BestEntry::placeholder(nr_laps))
        }

        debug!(
            "best times after merging {} athlete(s): {}",
            finished_race.no_athletes(),
            candidates
                .iter()
                .map(|x| format!("{} ({:.2}s)", x.name, x.total()))
                .collect::<Vec<String>>()
                .join(", ")
        );

        BestTimesTable {
            entries: candidates,
        }
    }
}

/// merge is the free-standing form of BestTimesTable::merge.
pub fn merge(current_top3: &BestTimesTable, finished_race: &RaceResult) -> BestTimesTable {
    current_top3.merge(finished_race)
}
