//! Vote tallying
//!
//! Aggregates the vote log into per-position, per-candidate counts seeded
//! from the catalog. Selections referencing positions or candidates no
//! longer in the catalog are excluded from per-candidate counts but still
//! count toward the raw total.

use super::{PositionCatalog, VoteStore};
use crate::Result;
use crate::types::{Catalog, CandidateStanding, TallyResult, VoteRecord};
use serde::Serialize;

/// Sorted per-position results, ready for a results view
#[derive(Debug, Clone, Serialize)]
pub struct PositionStanding {
    /// Position name
    pub position: String,

    /// Rows sorted by votes descending; ties keep catalog candidate order
    pub standings: Vec<CandidateStanding>,
}

/// Full results view: raw total plus sorted standings for every position
#[derive(Debug, Clone, Serialize)]
pub struct ElectionReport {
    /// Raw number of ballots in the log
    pub total_votes: u64,

    /// One entry per catalog position
    pub positions: Vec<PositionStanding>,
}

/// Read-side aggregation over the catalog and the vote log
#[derive(Debug, Clone)]
pub struct TallyEngine<'a> {
    catalog: &'a PositionCatalog,
    store: &'a VoteStore,
}

impl<'a> TallyEngine<'a> {
    /// Create an engine over the given catalog and store
    pub fn new(catalog: &'a PositionCatalog, store: &'a VoteStore) -> Self {
        Self { catalog, store }
    }

    /// Aggregate the full vote log into per-position, per-candidate counts
    ///
    /// Every (position, candidate) pair in the catalog starts at zero. Each
    /// record is scanned once, in log order; a selection increments its
    /// count only if the catalog currently recognizes both the position and
    /// the candidate.
    pub fn count(&self) -> Result<TallyResult> {
        let catalog = self.catalog.load()?;
        let records = self.store.load_all()?;
        Ok(tally_records(&catalog, &records))
    }

    /// Build the full results view: counts, percentages, and sort order
    ///
    /// Percentages are shares of the raw total and are omitted entirely when
    /// no ballots exist, so the view never divides by zero. Rows are sorted
    /// by votes descending with catalog order breaking ties.
    pub fn results(&self) -> Result<ElectionReport> {
        let catalog = self.catalog.load()?;
        let records = self.store.load_all()?;
        let tally = tally_records(&catalog, &records);

        let positions = catalog
            .iter()
            .map(|(position, candidates)| {
                let mut standings: Vec<CandidateStanding> = candidates
                    .iter()
                    .map(|candidate| {
                        CandidateStanding::new(
                            candidate.clone(),
                            tally.votes_for(position, candidate),
                            tally.total_votes,
                        )
                    })
                    .collect();
                // Stable sort: equal counts keep catalog candidate order
                standings.sort_by(|a, b| b.votes.cmp(&a.votes));
                PositionStanding {
                    position: position.clone(),
                    standings,
                }
            })
            .collect();

        Ok(ElectionReport {
            total_votes: tally.total_votes,
            positions,
        })
    }
}

fn tally_records(catalog: &Catalog, records: &[VoteRecord]) -> TallyResult {
    let mut tally = TallyResult {
        counts: catalog
            .iter()
            .map(|(position, candidates)| {
                (
                    position.clone(),
                    candidates.iter().map(|c| (c.clone(), 0)).collect(),
                )
            })
            .collect(),
        total_votes: records.len() as u64,
    };

    for record in records {
        for (position, candidate) in &record.votes {
            match tally
                .counts
                .get_mut(position)
                .and_then(|candidates| candidates.get_mut(candidate))
            {
                Some(count) => *count += 1,
                None => {
                    tracing::debug!(position, candidate, "stale vote excluded from tally");
                }
            }
        }
    }

    tally
}
