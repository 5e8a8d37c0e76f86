//! Best-score persistence: one integer, stored as JSON under a fixed
//! file name in a caller-supplied data directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const BEST_SCORE_FILE: &str = "best_score.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
}

/// Handle on the best-score file in a data directory.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    dir: PathBuf,
}

impl BestScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(BEST_SCORE_FILE)
    }

    /// Read the stored best. An absent or unreadable file means no
    /// score has been recorded yet, which is zero, not an error.
    pub fn load(&self) -> u32 {
        let json = match fs::read_to_string(self.path()) {
            Ok(json) => json,
            Err(_) => return 0,
        };
        match serde_json::from_str::<BestScoreRecord>(&json) {
            Ok(record) => record.best,
            Err(err) => {
                log::warn!("ignoring corrupt best-score file: {err}");
                0
            }
        }
    }

    /// Persist `score` if it beats the stored best. Returns whether a
    /// write happened; the stored value never decreases.
    pub fn record(&self, score: u32) -> Result<bool, String> {
        if score <= self.load() {
            return Ok(false);
        }
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Failed to create data directory: {e}"))?;
        let json = serde_json::to_string_pretty(&BestScoreRecord { best: score })
            .map_err(|e| format!("Failed to serialize best score: {e}"))?;
        fs::write(self.path(), json).map_err(|e| format!("Failed to write best score: {e}"))?;
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gridfire_test_{name}"))
}
