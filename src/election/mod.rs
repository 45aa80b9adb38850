//! Election core: position catalog, vote store, and tally engine

pub mod catalog;
pub mod store;
pub mod tally;

pub use catalog::PositionCatalog;
pub use store::VoteStore;
pub use tally::{ElectionReport, PositionStanding, TallyEngine};

use crate::Result;
use crate::session::VoterSession;
use crate::session_error;
use crate::types::VoteRecord;
use std::collections::BTreeMap;

/// Submit a ballot for a session: the single `NotVoted → Voted` transition
///
/// Appends the record under the session's voter identifier and marks the
/// session voted, in that order. If the append fails the session stays in
/// `NotVoted` and the submission can be retried. A session that has already
/// voted is refused before anything is written.
pub fn submit_ballot(
    session: &mut VoterSession,
    store: &VoteStore,
    selections: BTreeMap<String, String>,
) -> Result<VoteRecord> {
    if session.has_voted() {
        return Err(session_error!(
            "session {} has already voted",
            session.token()
        ));
    }

    let record = store.append(session.voter_id(), selections)?;
    session.mark_voted()?;
    Ok(record)
}
