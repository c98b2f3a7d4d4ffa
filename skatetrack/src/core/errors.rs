use thiserror::Error;

/// TrackerError collects everything that can go wrong while feeding the tracker with operator
/// input or persisted history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("could not read lap time '{token}', you need to enter non-negative numbers")]
    InputFormat { token: String },

    #[error("expected {expected} lap time(s), one per athlete, but received {received}")]
    InputCardinality { expected: usize, received: usize },

    #[error("{gender}'s {distance}m is not a valid race")]
    CategoryRejected { gender: String, distance: u32 },

    #[error("lap index {lap_idx} is outside of the race with {nr_laps} laps")]
    LapIndexOutOfRange { lap_idx: usize, nr_laps: usize },

    #[error("history contains {found} lap row(s) with {nr_athletes} athlete(s), but the race has {expected} laps")]
    HistoryShape {
        expected: usize,
        found: usize,
        nr_athletes: usize,
    },

    #[error("history lap {lap} of {athlete} holds the invalid lap time '{value}'")]
    HistoryValue {
        lap: usize,
        athlete: String,
        value: String,
    },
}

impl TrackerError {
    /// is_retryable returns true for errors caused by malformed operator input, i.e. errors that
    /// are resolved by asking the operator again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TrackerError::InputFormat { .. } | TrackerError::InputCardinality { .. }
        )
    }
}
