use lru::LruCache;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::RawMessage;

/// Errors that can occur while loading a capture file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read capture file: {0}")]
    Io(#[from] std::io::Error),
}

/// Seconds within which a repeated ad from the same author is dropped.
pub const DEFAULT_DEDUP_WINDOW_SECS: i64 = 120;

const DEFAULT_DEDUP_CACHE_SIZE: usize = 4096;

/// Loads the collector's `messages.jsonl` feed: one JSON payload per line.
///
/// Malformed lines are skipped with a warning, mirroring the collector's
/// own tolerance when re-reading its output. Brokers re-post the same ad in
/// bursts across groups, so near-duplicates from one author inside the
/// dedup window are dropped.
pub struct JsonlIngestor {
    dedup_window_secs: i64,
    dedup_cache_size: usize,
}

impl Default for JsonlIngestor {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_WINDOW_SECS, DEFAULT_DEDUP_CACHE_SIZE)
    }
}

impl JsonlIngestor {
    pub fn new(dedup_window_secs: i64, dedup_cache_size: usize) -> Self {
        Self {
            dedup_window_secs,
            dedup_cache_size: dedup_cache_size.max(1),
        }
    }

    /// Read, parse and dedup one capture file into a materialized batch.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawMessage>, IngestError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let capacity = NonZeroUsize::new(self.dedup_cache_size).unwrap_or(NonZeroUsize::MIN);
        let mut seen: LruCache<String, i64> = LruCache::new(capacity);
        let mut messages = Vec::new();
        let mut skipped_malformed = 0usize;
        let mut skipped_duplicates = 0usize;

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let message: RawMessage = match serde_json::from_str(&line) {
                Ok(message) => message,
                Err(error) => {
                    skipped_malformed += 1;
                    warn!(line = line_number + 1, %error, "skipping malformed capture line");
                    continue;
                }
            };

            let key = dedup_key(&message);
            if let Some(&last_seen) = seen.get(&key) {
                if message.timestamp - last_seen < self.dedup_window_secs {
                    skipped_duplicates += 1;
                    continue;
                }
            }

            seen.put(key, message.timestamp);
            messages.push(message);
        }

        debug!(
            loaded = messages.len(),
            skipped_malformed, skipped_duplicates, "capture file ingested"
        );

        Ok(messages)
    }
}

/// Same author plus the whitespace-stripped lowercased body identifies a
/// re-posted ad.
fn dedup_key(message: &RawMessage) -> String {
    let author = if message.author_id.is_empty() {
        message.author_name()
    } else {
        &message.author_id
    };

    let squashed: String = message
        .message
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    format!("{}|{}", author, squashed)
}
