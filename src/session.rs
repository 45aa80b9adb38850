//! Voter session lifecycle
//!
//! The original kept a process-wide `voted` flag and voter identifier in
//! global mutable state. Here each session is an explicit object keyed by a
//! server-issued token, passed into handler functions and held in a registry
//! whose lifetime matches the hosting request/response cycle.

use crate::Result;
use crate::config::VotingConfig;
use crate::session_error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Whether a session has submitted its ballot yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotVoted,
    Voted,
}

/// One voter's session: token, generated identifier, and voting state
///
/// The voter identifier is a UUID v4 string standing in for identity; it is
/// not authenticated, and the reset path deliberately replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterSession {
    token: Uuid,
    voter_id: String,
    state: SessionState,
}

impl VoterSession {
    /// Start a fresh session with a new token and voter identifier
    pub fn new() -> Self {
        Self {
            token: Uuid::new_v4(),
            voter_id: Uuid::new_v4().to_string(),
            state: SessionState::NotVoted,
        }
    }

    /// The server-issued session token
    pub fn token(&self) -> Uuid {
        self.token
    }

    /// The opaque voter identifier recorded on this session's ballot
    pub fn voter_id(&self) -> &str {
        &self.voter_id
    }

    /// Current voting state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether this session has already submitted its ballot
    pub fn has_voted(&self) -> bool {
        self.state == SessionState::Voted
    }

    /// Transition `NotVoted → Voted`; valid exactly once per session
    pub fn mark_voted(&mut self) -> Result<()> {
        if self.has_voted() {
            return Err(session_error!("session {} has already voted", self.token));
        }
        self.state = SessionState::Voted;
        Ok(())
    }

    /// The demo "vote again" path: back to `NotVoted` with a fresh identifier
    ///
    /// Replacing the identifier makes repeat voting by the same human
    /// possible, which is why the transition is gated on the configured
    /// policy rather than always available.
    pub fn reset(&mut self, voting: &VotingConfig) -> Result<()> {
        if !voting.allow_repeat_voting {
            return Err(session_error!("repeat voting is disabled"));
        }
        self.voter_id = Uuid::new_v4().to_string();
        self.state = SessionState::NotVoted;
        tracing::debug!(token = %self.token, "session reset with fresh voter identifier");
        Ok(())
    }
}

impl Default for VoterSession {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory registry of live sessions, keyed by token
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, VoterSession>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new session and return its token
    pub fn issue(&mut self) -> Uuid {
        let session = VoterSession::new();
        let token = session.token();
        self.sessions.insert(token, session);
        token
    }

    /// Look up a session by token
    pub fn get(&self, token: &Uuid) -> Option<&VoterSession> {
        self.sessions.get(token)
    }

    /// Look up a session by token for mutation
    pub fn get_mut(&mut self, token: &Uuid) -> Option<&mut VoterSession> {
        self.sessions.get_mut(token)
    }

    /// Drop a session at the end of its request/response lifecycle
    pub fn remove(&mut self, token: &Uuid) -> Option<VoterSession> {
        self.sessions.remove(token)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
