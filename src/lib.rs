pub mod data;
pub mod error;
pub mod hps;
pub mod rng;

pub use data::{BatchSampler, SpeakerPartition, SpectrogramStore, TripletBatch};
pub use error::{FeedError, Result};
pub use hps::{HyperparameterStore, Hyperparameters};
