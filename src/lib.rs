//! Single-Session Election Voting Core
//!
//! Position catalog, append-only vote log, and tally engine behind a small
//! library surface. The web presentation layer (forms, charts, sidebar) is an
//! external caller of this crate, not part of it.

pub mod admin;
pub mod config;
pub mod election;
pub mod errors;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use errors::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the voting core with proper logging
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ballot=info".into()),
        )
        .init();

    tracing::info!("🗳️  Ballot core v{} initialized", VERSION);
    Ok(())
}
