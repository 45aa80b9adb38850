//! Admin access gate
//!
//! A shared-secret check guarding the results view. Functional parity with
//! the original's hardcoded password, with the secret injected from config
//! and compared in constant time. Real authentication is out of scope.

use crate::config::AdminConfig;
use crate::{Error, Result};
use subtle::ConstantTimeEq;

/// Shared-secret gate for the admin results view
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    /// Create a gate over the configured secret
    pub fn new(admin: &AdminConfig) -> Self {
        Self {
            secret: admin.password.clone(),
        }
    }

    /// Whether the supplied password matches the secret
    ///
    /// Constant-time over equal-length inputs; the length itself is not
    /// hidden.
    pub fn verify(&self, password: &str) -> bool {
        self.secret.as_bytes().ct_eq(password.as_bytes()).into()
    }

    /// Verify, surfacing a failure as a user-visible error
    pub fn authorize(&self, password: &str) -> Result<()> {
        if self.verify(password) {
            Ok(())
        } else {
            tracing::warn!("admin authentication failed");
            Err(Error::AdminAuth)
        }
    }
}
