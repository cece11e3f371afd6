//! Generic retry helper
//!
//! Exponential backoff for operations that want it. The seeding paths do
//! not: their fallback behavior is the explicit candidate enumeration in the
//! publisher and submitter, with no backoff between attempts.

use std::future::Future;
use std::time::Duration;

/// Retry an async operation with exponential backoff
///
/// Runs `op` up to `max_retries` times, doubling the delay after each
/// failure. The final error is returned unchanged.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_retries: u32,
    initial_delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut delay = initial_delay;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries => {
                tracing::warn!("retry {attempt}/{max_retries} after error: {e}");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
