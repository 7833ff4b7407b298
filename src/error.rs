use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors surfaced while feeding training data.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    #[error("hyperparameter file error: {0}")]
    Hps(#[from] serde_json::Error),

    #[error("speaker partition file {path}: {reason}")]
    PartitionFormat { path: String, reason: String },

    #[error("speaker {0} not present under the train split")]
    UnknownSpeaker(String),

    #[error("speaker {0} has no utterances")]
    NoUtterances(String),

    #[error("utterance {speaker}/{utterance} has {frames} frame(s), need at least {min_frames}")]
    UtteranceTooShort {
        speaker: String,
        utterance: String,
        frames: usize,
        min_frames: usize,
    },

    #[error("invalid sampler option: {0}")]
    InvalidOption(String),

    #[error("batch shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
