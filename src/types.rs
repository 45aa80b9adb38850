//! # Core Types for the Voting Core
//!
//! The fundamental data structures shared by the catalog, the vote store and
//! the tally engine.
//!
//! ## Type Categories
//!
//! ### Persisted Entities
//! - [`Catalog`]: position name → ordered candidate list
//! - [`VoteRecord`]: one voter's complete set of selections plus metadata
//!
//! ### Derived Results
//! - [`TallyResult`]: per-position, per-candidate counts plus the raw total
//! - [`CandidateStanding`]: one results row with an optional percentage
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use ballot::types::VoteRecord;
//!
//! let mut selections = BTreeMap::new();
//! selections.insert("President".to_string(), "Alex Smith".to_string());
//!
//! let record = VoteRecord::new("voter-1", selections);
//! assert_eq!(record.voter_id, "voter-1");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The position catalog: position name → ordered candidate list
///
/// Candidate order within a position is display and tie-break order and is
/// preserved exactly as persisted. Position iteration order is deterministic
/// (sorted by name). The catalog is created once at bootstrap and is never
/// mutated by this crate afterwards; out-of-band edits to the persisted file
/// are the only way it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, Vec<String>>);

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position with its ordered candidate list
    ///
    /// Replaces the candidate list if the position already exists.
    pub fn insert(&mut self, position: impl Into<String>, candidates: Vec<String>) {
        self.0.insert(position.into(), candidates);
    }

    /// The ordered candidate list for a position, if the position is known
    pub fn candidates(&self, position: &str) -> Option<&[String]> {
        self.0.get(position).map(Vec::as_slice)
    }

    /// Whether the catalog currently recognizes this (position, candidate) pair
    pub fn contains(&self, position: &str, candidate: &str) -> bool {
        self.0
            .get(position)
            .is_some_and(|candidates| candidates.iter().any(|c| c == candidate))
    }

    /// Iterate positions with their candidate lists, sorted by position name
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no positions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One ballot submission: voter identifier, capture time, and selections
///
/// Immutable once created. A well-formed record's selection keys are a subset
/// of the catalog's positions and each value is a member of that position's
/// candidate list, but the store does not enforce this against later catalog
/// edits — stale selections are excluded at tally time, not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Opaque per-session voter identifier
    ///
    /// Generated by the session layer (UUID v4 string). Not authenticated,
    /// and not unique across the log: the demo reset path deliberately
    /// issues a fresh identifier.
    pub voter_id: String,

    /// Capture time of the submission (serialized as RFC 3339 / ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Position name → chosen candidate name, one entry per position voted
    pub votes: BTreeMap<String, String>,
}

impl VoteRecord {
    /// Create a record for the given selections, stamped with the current time
    pub fn new(voter_id: impl Into<String>, votes: BTreeMap<String, String>) -> Self {
        Self {
            voter_id: voter_id.into(),
            timestamp: Utc::now(),
            votes,
        }
    }
}

/// Aggregated counts derived from the vote log
///
/// Seeded with zero for every (position, candidate) pair in the catalog, so
/// candidates with no votes still appear. `total_votes` is the raw record
/// count: records whose selections were all stale still count toward it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallyResult {
    /// Position name → candidate name → vote count
    pub counts: BTreeMap<String, BTreeMap<String, u64>>,

    /// Raw number of records in the log, stale or not
    pub total_votes: u64,
}

impl TallyResult {
    /// Votes for one (position, candidate) pair; zero if the pair is unknown
    pub fn votes_for(&self, position: &str, candidate: &str) -> u64 {
        self.counts
            .get(position)
            .and_then(|candidates| candidates.get(candidate))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of counted votes for one position
    ///
    /// May be less than `total_votes` when stale selections were excluded.
    pub fn position_total(&self, position: &str) -> u64 {
        self.counts
            .get(position)
            .map(|candidates| candidates.values().sum())
            .unwrap_or(0)
    }
}

/// One row of a per-position results view
///
/// # Examples
///
/// ```rust
/// use ballot::types::CandidateStanding;
///
/// let row = CandidateStanding {
///     candidate: "Alex Smith".to_string(),
///     votes: 2,
///     percentage: Some(66.7),
/// };
/// assert_eq!(row.display(), "2 (66.7%)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateStanding {
    /// Candidate display name
    pub candidate: String,

    /// Absolute vote count for this candidate
    pub votes: u64,

    /// Share of the raw total, rounded to one decimal place
    ///
    /// `None` when no votes have been cast at all: the division is never
    /// performed, and display falls back to the raw count alone.
    pub percentage: Option<f64>,
}

impl CandidateStanding {
    /// Build a row, deriving the percentage from the raw total
    pub fn new(candidate: impl Into<String>, votes: u64, total_votes: u64) -> Self {
        Self {
            candidate: candidate.into(),
            votes,
            percentage: percentage(votes, total_votes),
        }
    }

    /// Format as the results table shows it: `"2 (66.7%)"`, or `"0"` when
    /// there is no total to divide by
    pub fn display(&self) -> String {
        match self.percentage {
            Some(pct) => format!("{} ({pct:.1}%)", self.votes),
            None => self.votes.to_string(),
        }
    }
}

/// Percentage of `total`, rounded to one decimal place
///
/// Returns `None` when `total` is zero so callers never divide by zero.
pub fn percentage(votes: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((votes as f64 / total as f64 * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "President",
            vec!["Alex Smith".to_string(), "Jamie Johnson".to_string()],
        );

        assert!(catalog.contains("President", "Alex Smith"));
        assert!(!catalog.contains("President", "Nobody"));
        assert!(!catalog.contains("Treasurer", "Alex Smith"));
        assert_eq!(
            catalog.candidates("President").unwrap(),
            &["Alex Smith".to_string(), "Jamie Johnson".to_string()]
        );
        assert_eq!(catalog.candidates("Treasurer"), None);
    }

    #[test]
    fn test_catalog_preserves_candidate_order() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Secretary",
            vec!["Zoe".to_string(), "Amy".to_string(), "Mel".to_string()],
        );

        // Candidate order is display order, not sorted
        assert_eq!(
            catalog.candidates("Secretary").unwrap(),
            &["Zoe".to_string(), "Amy".to_string(), "Mel".to_string()]
        );
    }

    #[test]
    fn test_vote_record_serialization_shape() {
        let mut votes = BTreeMap::new();
        votes.insert("President".to_string(), "Alex Smith".to_string());
        let record = VoteRecord::new("voter-1", votes);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["voter_id"], "voter-1");
        assert_eq!(json["votes"]["President"], "Alex Smith");
        // Timestamp is an ISO-8601 string
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(2, 3), Some(66.7));
        assert_eq!(percentage(1, 3), Some(33.3));
        assert_eq!(percentage(3, 3), Some(100.0));
        assert_eq!(percentage(0, 3), Some(0.0));
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(5, 0), None);
    }

    #[test]
    fn test_standing_display() {
        let with_votes = CandidateStanding::new("Alex Smith", 2, 3);
        assert_eq!(with_votes.display(), "2 (66.7%)");

        let no_total = CandidateStanding::new("Alex Smith", 0, 0);
        assert_eq!(no_total.display(), "0");
    }
}
