use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("prize table has no tiers")]
    EmptyPrizeTable,
    #[error("prize tier `{label}` has no slices")]
    EmptyTier { label: String },
    #[error("prize tier `{label}` is defined more than once")]
    DuplicateTier { label: String },
    #[error("prize distribution has no entries")]
    EmptyDistribution,
    #[error("bound {bound} for `{label}` does not exceed the previous bound {previous}")]
    NonIncreasingBound { label: String, bound: f64, previous: f64 },
    #[error("prize distribution only covers [0, {last}), expected at least [0, 100)")]
    IncompleteCoverage { last: f64 },
    #[error("prize `{label}` is not present on the wheel")]
    UnknownPrize { label: String },
    #[error("invalid wheel configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
    #[error("stored spin result is malformed: {0}")]
    MalformedResult(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
}
