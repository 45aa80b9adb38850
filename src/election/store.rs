//! Append-only vote log
//!
//! The original persisted the log with a whole-file read-modify-write on
//! every submission, so two racing submissions could silently drop one
//! record. This store writes line-delimited JSON in append mode instead:
//! one record per line, no rewrite of prior records.

use crate::config::Config;
use crate::types::VoteRecord;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Durable store for submitted ballots
#[derive(Debug, Clone)]
pub struct VoteStore {
    path: PathBuf,
    allow_repeat_voting: bool,
}

impl VoteStore {
    /// Create a store over the vote log named by the config
    pub fn open(config: &Config) -> Self {
        Self {
            path: config.storage.votes_path(),
            allow_repeat_voting: config.voting.allow_repeat_voting,
        }
    }

    /// Append one ballot to the log, stamped with the current time
    ///
    /// Selections are persisted as given; they are not validated against the
    /// catalog (stale selections are excluded at tally time instead). When
    /// repeat voting is disabled, a voter identifier already present in the
    /// log is rejected with [`Error::DuplicateVote`]. I/O failures propagate
    /// as storage errors, fatal for this operation.
    pub fn append(
        &self,
        voter_id: &str,
        selections: BTreeMap<String, String>,
    ) -> Result<VoteRecord> {
        if !self.allow_repeat_voting && self.has_voted(voter_id)? {
            return Err(Error::DuplicateVote {
                voter_id: voter_id.to_string(),
            });
        }

        let record = VoteRecord::new(voter_id, selections);
        let line = serde_json::to_string(&record)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        tracing::debug!(voter_id, selections = record.votes.len(), "vote recorded");
        Ok(record)
    }

    /// Load the full vote log in append order
    ///
    /// A missing file is an empty log. Unparseable lines are skipped with a
    /// warning rather than failing the read, so a fully corrupt file yields
    /// an empty sequence.
    pub fn load_all(&self) -> Result<Vec<VoteRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut records = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(line = index + 1, %err, "skipping unparseable vote log line");
                }
            }
        }
        Ok(records)
    }

    /// Whether this voter identifier already appears in the log
    pub fn has_voted(&self, voter_id: &str) -> Result<bool> {
        Ok(self
            .load_all()?
            .iter()
            .any(|record| record.voter_id == voter_id))
    }
}
