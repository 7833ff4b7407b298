use std::path::Path;

use ndarray::s;

use crate::error::Result;

const TRAIN_SPLIT: &str = "train";

/// Read-only handle on an HDF5 spectrogram store.
///
/// Expected layout: a top-level `train` group, one subgroup per speaker id,
/// one 2-D `f32` dataset per utterance with shape `(num_frames, channels)`.
/// The file stays open for the lifetime of the store and closes when the
/// store is dropped.
#[derive(Debug)]
pub struct SpectrogramStore {
    file: hdf5::File,
}

impl SpectrogramStore {
    /// Open the store at `path`. Fails if the file is missing or not HDF5.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = hdf5::File::open(path)?;
        Ok(Self { file })
    }

    /// Speaker ids found under the train split.
    pub fn speakers(&self) -> Result<Vec<String>> {
        Ok(self.file.group(TRAIN_SPLIT)?.member_names()?)
    }

    /// Utterance ids recorded for one speaker.
    pub fn utterances(&self, speaker: &str) -> Result<Vec<String>> {
        let group = self.file.group(&format!("{TRAIN_SPLIT}/{speaker}"))?;
        Ok(group.member_names()?)
    }

    /// Handle on one utterance's spectrogram.
    pub fn utterance(&self, speaker: &str, utt: &str) -> Result<Utterance> {
        let dataset = self
            .file
            .dataset(&format!("{TRAIN_SPLIT}/{speaker}/{utt}"))?;
        Ok(Utterance { dataset })
    }
}

/// One utterance's `(num_frames, channels)` spectrogram.
pub struct Utterance {
    dataset: hdf5::Dataset,
}

impl Utterance {
    /// Number of time frames (dimension 0).
    pub fn num_frames(&self) -> usize {
        self.dataset.shape()[0]
    }

    /// Channel-0 value of frame `t`, read without loading the full array.
    pub fn channel0(&self, t: usize) -> Result<f32> {
        let cell = self.dataset.read_slice_1d::<f32, _>(s![t, 0..1])?;
        Ok(cell[0])
    }
}
