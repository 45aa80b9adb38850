//! End-to-end integration tests for the voting core
//!
//! Exercises the full path a presentation layer takes: catalog bootstrap,
//! session issuance, ballot submission, and the admin results view.

use ballot::{
    Result,
    config::Config,
    election::{PositionCatalog, TallyEngine, VoteStore, submit_ballot},
    session::{SessionRegistry, VoterSession},
};
use std::collections::BTreeMap;
use tempfile::tempdir;

fn selections(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(p, c)| (p.to_string(), c.to_string()))
        .collect()
}

/// Write a catalog file directly, standing in for an out-of-band edit
fn write_catalog(config: &Config, json: &str) {
    std::fs::create_dir_all(&config.storage.data_dir).unwrap();
    std::fs::write(config.storage.catalog_path(), json).unwrap();
}

#[test]
fn test_full_election_workflow() -> Result<()> {
    let dir = tempdir().unwrap();
    let config = Config::for_testing(dir.path());

    let catalog_store = PositionCatalog::open(&config.storage);
    let store = VoteStore::open(&config);
    let catalog = catalog_store.load()?;

    // Five voters, each voting a straight first-candidate ticket
    let mut registry = SessionRegistry::new();
    for _ in 0..5 {
        let token = registry.issue();
        let session = registry.get_mut(&token).unwrap();
        let ballot: BTreeMap<String, String> = catalog
            .iter()
            .map(|(position, candidates)| (position.clone(), candidates[0].clone()))
            .collect();
        submit_ballot(session, &store, ballot)?;
    }

    let engine = TallyEngine::new(&catalog_store, &store);
    let tally = engine.count()?;
    assert_eq!(tally.total_votes, 5);

    // Per-position counts sum to the number of ballots
    for (position, candidates) in catalog.iter() {
        assert_eq!(tally.position_total(position), 5);
        assert_eq!(tally.votes_for(position, &candidates[0]), 5);
        assert_eq!(tally.votes_for(position, &candidates[1]), 0);
    }

    Ok(())
}

#[test]
fn test_concrete_tally_scenario() -> Result<()> {
    // Catalog {President: [A, B]}; ballots A, A, B.
    let dir = tempdir().unwrap();
    let config = Config::for_testing(dir.path());
    write_catalog(&config, r#"{"President": ["A", "B"]}"#);

    let catalog_store = PositionCatalog::open(&config.storage);
    let store = VoteStore::open(&config);

    for candidate in ["A", "A", "B"] {
        let mut session = VoterSession::new();
        submit_ballot(&mut session, &store, selections(&[("President", candidate)]))?;
    }

    let engine = TallyEngine::new(&catalog_store, &store);
    let tally = engine.count()?;
    assert_eq!(tally.total_votes, 3);
    assert_eq!(tally.votes_for("President", "A"), 2);
    assert_eq!(tally.votes_for("President", "B"), 1);

    // Results view: sorted descending, percentages of the raw total
    let report = engine.results()?;
    assert_eq!(report.total_votes, 3);
    let president = &report.positions[0];
    assert_eq!(president.position, "President");

    let rows = &president.standings;
    assert_eq!(rows[0].candidate, "A");
    assert_eq!(rows[0].votes, 2);
    assert_eq!(rows[0].percentage, Some(66.7));
    assert_eq!(rows[0].display(), "2 (66.7%)");
    assert_eq!(rows[1].candidate, "B");
    assert_eq!(rows[1].votes, 1);
    assert_eq!(rows[1].percentage, Some(33.3));

    Ok(())
}

#[test]
fn test_results_tie_keeps_catalog_order() -> Result<()> {
    // Z before A in the candidate list; with equal votes, Z stays first
    let dir = tempdir().unwrap();
    let config = Config::for_testing(dir.path());
    write_catalog(&config, r#"{"President": ["Z", "A"]}"#);

    let catalog_store = PositionCatalog::open(&config.storage);
    let store = VoteStore::open(&config);

    let engine = TallyEngine::new(&catalog_store, &store);
    let report = engine.results()?;
    let rows = &report.positions[0].standings;
    assert_eq!(rows[0].candidate, "Z");
    assert_eq!(rows[1].candidate, "A");

    Ok(())
}

#[test]
fn test_vote_again_demo_path() -> Result<()> {
    let dir = tempdir().unwrap();
    let config = Config::for_testing(dir.path());
    write_catalog(&config, r#"{"President": ["A", "B"]}"#);

    let catalog_store = PositionCatalog::open(&config.storage);
    let store = VoteStore::open(&config);

    // Vote, reset, vote again: two records under two different identifiers
    let mut session = VoterSession::new();
    let first = submit_ballot(&mut session, &store, selections(&[("President", "A")]))?;
    session.reset(&config.voting)?;
    let second = submit_ballot(&mut session, &store, selections(&[("President", "B")]))?;

    assert_ne!(first.voter_id, second.voter_id);

    let engine = TallyEngine::new(&catalog_store, &store);
    let tally = engine.count()?;
    assert_eq!(tally.total_votes, 2);
    assert_eq!(tally.votes_for("President", "A"), 1);
    assert_eq!(tally.votes_for("President", "B"), 1);

    Ok(())
}

#[test]
fn test_log_survives_reopen() -> Result<()> {
    let dir = tempdir().unwrap();
    let config = Config::for_testing(dir.path());
    write_catalog(&config, r#"{"President": ["A", "B"]}"#);

    {
        let store = VoteStore::open(&config);
        let mut session = VoterSession::new();
        submit_ballot(&mut session, &store, selections(&[("President", "A")]))?;
    }

    // A fresh store over the same files sees the persisted ballot
    let catalog_store = PositionCatalog::open(&config.storage);
    let store = VoteStore::open(&config);
    let engine = TallyEngine::new(&catalog_store, &store);
    assert_eq!(engine.count()?.votes_for("President", "A"), 1);

    Ok(())
}
