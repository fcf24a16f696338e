use thiserror::Error;

/// A landmark batch that breaks the detector's contract. The frame carrying it
/// is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("hand observation has {0} landmarks, expected 21")]
    HandLength(usize),
    #[error("face observation has {0} landmarks, expected at least 468")]
    FaceLength(usize),
    #[error("flat landmark buffer of {0} floats is not a whole number of xyz triples")]
    Ragged(usize),
    #[error("{labels} hand labels for {hands} landmark sets")]
    BatchMismatch { labels: usize, hands: usize },
    #[error("unknown hand label {0:?}")]
    UnknownLabel(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color {0:?}, expected #RRGGBB")]
    Color(String),
    #[error("unknown spark shape {0:?}")]
    SparkShape(String),
}
