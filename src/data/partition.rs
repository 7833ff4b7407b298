use std::fs;
use std::path::Path;

use crate::error::{FeedError, Result};

/// Speaker ids split into a female and a male set.
///
/// Parsed once from a four-line file (label, female ids, label, male ids;
/// ids whitespace-separated) and held immutable afterwards.
#[derive(Debug, Clone)]
pub struct SpeakerPartition {
    pub female_ids: Vec<String>,
    pub male_ids: Vec<String>,
}

impl SpeakerPartition {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < 4 {
            return Err(format_err(path, format!("expected 4 lines, found {}", lines.len())));
        }
        let female_ids = split_ids(lines[1]);
        let male_ids = split_ids(lines[3]);
        // An empty set would otherwise only blow up on the first draw.
        if female_ids.is_empty() {
            return Err(format_err(path, "female id list is empty".into()));
        }
        if male_ids.is_empty() {
            return Err(format_err(path, "male id list is empty".into()));
        }
        Ok(Self {
            female_ids,
            male_ids,
        })
    }
}

fn split_ids(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn format_err(path: &Path, reason: String) -> FeedError {
    FeedError::PartitionFormat {
        path: path.display().to_string(),
        reason,
    }
}
