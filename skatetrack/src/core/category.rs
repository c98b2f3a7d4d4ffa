use crate::core::errors::TrackerError;
use std::fmt;
use std::str::FromStr;

/// Length of a speed skating oval lap in meters.
pub const LAP_LENGTH: u32 = 400;

/// Race distances (m) that are skated in competitions.
pub const DISTANCES: [u32; 6] = [500, 1000, 1500, 3000, 5000, 10000];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    M, // men
    F, // women
}

impl Gender {
    pub fn name(&self) -> &'static str {
        match self {
            Gender::M => "Men",
            Gender::F => "Women",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::M => write!(f, "M"),
            Gender::F => write!(f, "F"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Gender::M),
            "F" | "f" => Ok(Gender::F),
            other => Err(format!("'{}' is not a gender, use M or F", other)),
        }
    }
}

/// Category is the (gender, distance) pair that partitions the best times rankings. It can only
/// be created for races that actually exist (no men's 3000m, no women's 10000m).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    gender: Gender,
    distance: u32,
}

impl Category {
    pub fn new(gender: Gender, distance: u32) -> Result<Category, TrackerError> {
        let valid = DISTANCES.contains(&distance)
            && !matches!((gender, distance), (Gender::M, 3000) | (Gender::F, 10000));

        if !valid {
            return Err(TrackerError::CategoryRejected {
                gender: gender.name().to_owned(),
                distance,
            });
        }

        Ok(Category { gender, distance })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// nr_laps returns the number of (possibly partial) laps of the race, e.g. 500m -> 2 laps.
    pub fn nr_laps(&self) -> usize {
        ((self.distance + LAP_LENGTH - 1) / LAP_LENGTH) as usize
    }

    /// history_file_name returns the name of the file the category's results are saved in.
    pub fn history_file_name(&self, tournament: Option<&str>) -> String {
        match tournament {
            Some(t) if !t.trim().is_empty() => format!(
                "{}_race_{}_{}m_data.csv",
                t.trim().replace(' ', "_"),
                self.gender.name(),
                self.distance
            ),
            _ => format!("race_{}_{}m_data.csv", self.gender.name(), self.distance),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}'s {}m", self.gender.name(), self.distance)
    }
}
