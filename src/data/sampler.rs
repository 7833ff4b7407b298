use std::collections::HashMap;
use std::path::Path;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::container::SpectrogramStore;
use super::partition::SpeakerPartition;
use crate::error::{FeedError, Result};
use crate::rng::rng_from_env;

pub const DEFAULT_MAX_STEP: usize = 5;
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// One training batch: three `(batch_size, 1)` arrays of channel-0 values.
///
/// `x_t` and `x_tk` come from the same female speaker at frame indices at
/// most `max_step` apart (the positive pair); `x_j` comes from a male
/// speaker with no temporal relation (the contrastive example).
#[derive(Debug, Clone, PartialEq)]
pub struct TripletBatch {
    pub x_t: Array2<f32>,
    pub x_tk: Array2<f32>,
    pub x_j: Array2<f32>,
}

/// Endless source of [`TripletBatch`]es over a spectrogram store.
///
/// Construction opens the store, parses the speaker partition and builds the
/// speaker-to-utterances index for the whole train split once; per-draw cost
/// is then independent of corpus size. Single-threaded; draws are i.i.d. and
/// the sequence never terminates on its own.
#[derive(Debug)]
pub struct BatchSampler {
    store: SpectrogramStore,
    partition: SpeakerPartition,
    speaker2utts: HashMap<String, Vec<String>>,
    max_step: usize,
    batch_size: usize,
    rng: StdRng,
}

impl BatchSampler {
    /// Open a sampler with the default `max_step` and `batch_size`.
    pub fn new<P, Q>(h5_path: P, partition_path: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self::with_options(h5_path, partition_path, DEFAULT_MAX_STEP, DEFAULT_BATCH_SIZE)
    }

    /// Open a sampler with explicit `max_step` and `batch_size`.
    ///
    /// Speaker ids listed in the partition are not checked against the store
    /// here; a stale id only fails once it is drawn.
    pub fn with_options<P, Q>(
        h5_path: P,
        partition_path: Q,
        max_step: usize,
        batch_size: usize,
    ) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        if max_step == 0 {
            return Err(FeedError::InvalidOption("max_step must be positive".into()));
        }
        if batch_size == 0 {
            return Err(FeedError::InvalidOption("batch_size must be positive".into()));
        }
        let store = SpectrogramStore::open(h5_path)?;
        let partition = SpeakerPartition::from_path(partition_path)?;
        let mut speaker2utts = HashMap::new();
        for speaker in store.speakers()? {
            let utts = store.utterances(&speaker)?;
            speaker2utts.insert(speaker, utts);
        }
        Ok(Self {
            store,
            partition,
            speaker2utts,
            max_step,
            batch_size,
            rng: rng_from_env(),
        })
    }

    /// Pin the random stream so a sequence of draws can be reproduced.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Draw one `(x_t, x_tk, x_j)` channel-0 triplet.
    ///
    /// `x_t` and `x_tk` are frames `t` and `t_k` of one utterance of a
    /// random female speaker, with `t <= t_k <= min(ta - 1, t + max_step)`;
    /// `x_j` is a uniform frame of a random male speaker's utterance.
    pub fn sample(&mut self) -> Result<(f32, f32, f32)> {
        let ids = &self.partition.female_ids;
        let speaker_a = ids[self.rng.gen_range(0..ids.len())].clone();
        let ids = &self.partition.male_ids;
        let speaker_b = ids[self.rng.gen_range(0..ids.len())].clone();

        let utt_a = self.pick_utterance(&speaker_a)?;
        let spec_a = self.store.utterance(&speaker_a, &utt_a)?;
        let ta = spec_a.num_frames();
        if ta < 2 {
            return Err(FeedError::UtteranceTooShort {
                speaker: speaker_a,
                utterance: utt_a,
                frames: ta,
                min_frames: 2,
            });
        }
        let t = self.rng.gen_range(0..=ta - 2);
        let t_k = self.rng.gen_range(t..=(ta - 1).min(t + self.max_step));

        let utt_b = self.pick_utterance(&speaker_b)?;
        let spec_b = self.store.utterance(&speaker_b, &utt_b)?;
        let tb = spec_b.num_frames();
        if tb == 0 {
            return Err(FeedError::UtteranceTooShort {
                speaker: speaker_b,
                utterance: utt_b,
                frames: 0,
                min_frames: 1,
            });
        }
        let j = self.rng.gen_range(0..tb);

        Ok((spec_a.channel0(t)?, spec_a.channel0(t_k)?, spec_b.channel0(j)?))
    }

    /// Assemble the next batch from `batch_size` independent draws.
    pub fn next_batch(&mut self) -> Result<TripletBatch> {
        let n = self.batch_size;
        let mut x_t = Vec::with_capacity(n);
        let mut x_tk = Vec::with_capacity(n);
        let mut x_j = Vec::with_capacity(n);
        for _ in 0..n {
            let (a, ak, b) = self.sample()?;
            x_t.push(a);
            x_tk.push(ak);
            x_j.push(b);
        }
        Ok(TripletBatch {
            x_t: Array2::from_shape_vec((n, 1), x_t)?,
            x_tk: Array2::from_shape_vec((n, 1), x_tk)?,
            x_j: Array2::from_shape_vec((n, 1), x_j)?,
        })
    }

    fn pick_utterance(&mut self, speaker: &str) -> Result<String> {
        let utts = self
            .speaker2utts
            .get(speaker)
            .ok_or_else(|| FeedError::UnknownSpeaker(speaker.to_string()))?;
        if utts.is_empty() {
            return Err(FeedError::NoUtterances(speaker.to_string()));
        }
        Ok(utts[self.rng.gen_range(0..utts.len())].clone())
    }
}

/// The sampler never runs out; every call yields a fresh batch and the
/// caller decides when to stop consuming.
impl Iterator for BatchSampler {
    type Item = Result<TripletBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }
}
