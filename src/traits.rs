//! Common trait definitions
//!
//! Defines the seams the rest of the crate is written against:
//! a pseudo-random source, a cloning strategy and the remote setup-key API.
//! These traits enable deterministic tests and let callers plug in their
//! own HTTP client.

use crate::setup_key::{CreateSetupKeyRequest, SetupKey};
use anyhow::Result;
use async_trait::async_trait;

/// Source of uniformly distributed floating point numbers
///
/// Mirrors a platform `random()` call: every draw returns a value in `[0, 1)`.
/// Production code uses `ThreadRandomSource`, tests can supply a fixed sequence.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`
    fn next_f64(&self) -> f64;
}

/// One step of a deep-clone fallback chain
///
/// A strategy either produces an independent copy of `value` or reports why
/// it could not. Strategies are tried in order by `clone_deep_with`.
pub trait CloneStrategy<T> {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Attempt to produce an unaliased copy of `value`
    fn try_clone(&self, value: &T) -> Result<T>;
}

/// Trait for the management API's setup-key collection
///
/// Abstracts the `POST /setup-keys` call so request shaping can be tested
/// without a network. Implementations own transport and authentication.
#[async_trait]
pub trait SetupKeyApi: Send + Sync {
    /// Create a setup key and return the stored resource
    async fn create_setup_key(&self, request: &CreateSetupKeyRequest) -> Result<SetupKey>;
}
