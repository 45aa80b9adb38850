//! Configuration management for the voting core
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name of the persisted position catalog
pub const DEFAULT_CATALOG_FILE: &str = "positions.json";

/// Default file name of the persisted vote log
pub const DEFAULT_VOTES_FILE: &str = "votes.jsonl";

/// Default admin password, matching the original deployment
///
/// A shared secret compared in the admin gate. Replacing it with real
/// authentication is explicitly out of scope; override it via
/// `BALLOT_ADMIN_PASSWORD` if the default is unacceptable.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Storage layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted catalog and vote log
    pub data_dir: PathBuf,

    /// Catalog file name within `data_dir`
    pub catalog_file: String,

    /// Vote log file name within `data_dir`
    pub votes_file: String,
}

impl StorageConfig {
    /// Full path of the persisted position catalog
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    /// Full path of the persisted vote log
    pub fn votes_path(&self) -> PathBuf {
        self.data_dir.join(&self.votes_file)
    }
}

/// Voting policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Whether the same human may vote again via the session reset path
    ///
    /// The original left this open: its demo reset made repeat voting
    /// trivially possible. Here it is an explicit policy switch. When
    /// disabled, session resets are refused and the store rejects a voter
    /// identifier that already appears in the log.
    pub allow_repeat_voting: bool,
}

/// Admin gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared secret for the admin results view
    pub password: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub voting: VotingConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = std::env::var("BALLOT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let catalog_file = std::env::var("BALLOT_CATALOG_FILE")
            .unwrap_or_else(|_| DEFAULT_CATALOG_FILE.to_string());

        let votes_file =
            std::env::var("BALLOT_VOTES_FILE").unwrap_or_else(|_| DEFAULT_VOTES_FILE.to_string());

        let allow_repeat_voting = match std::env::var("BALLOT_ALLOW_REPEAT_VOTING") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::internal("Invalid BALLOT_ALLOW_REPEAT_VOTING"))?,
            Err(_) => true, // Original demo behavior
        };

        let password = std::env::var("BALLOT_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let logging = LoggingConfig {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
        };

        Ok(Self {
            storage: StorageConfig {
                data_dir,
                catalog_file,
                votes_file,
            },
            voting: VotingConfig {
                allow_repeat_voting,
            },
            admin: AdminConfig { password },
            logging,
        })
    }

    /// Create configuration for testing, rooted at an isolated data directory
    pub fn for_testing(data_dir: &Path) -> Self {
        Self {
            storage: StorageConfig {
                data_dir: data_dir.to_path_buf(),
                catalog_file: DEFAULT_CATALOG_FILE.to_string(),
                votes_file: DEFAULT_VOTES_FILE.to_string(),
            },
            voting: VotingConfig {
                allow_repeat_voting: true,
            },
            admin: AdminConfig {
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
