pub mod container;
pub mod partition;
pub mod sampler;

pub use container::SpectrogramStore;
pub use partition::SpeakerPartition;
pub use sampler::{BatchSampler, TripletBatch};
