//! Timing helpers

use std::time::Duration;

/// Completes after at least `ms` milliseconds
///
/// There is no cancellation handle; drop the future to stop waiting.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
