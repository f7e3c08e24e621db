//! Bounded retry with linear backoff for the generation call.

use std::future::Future;
use std::time::Duration;

/// Execute `operation` up to `max_attempts` times total.
///
/// After failed attempt `k` (1-indexed) the function sleeps
/// `base_delay × k` before trying again; the failure of the final attempt
/// is returned to the caller unchanged. Each failed attempt is logged as
/// a warning, the terminal failure as an error.
///
/// `max_attempts` counts attempts, not re-attempts: `3` means at most
/// three calls to `operation`. A value of `0` is treated as `1`.
///
/// Dropping the returned future aborts the loop mid-sleep, so a caller
/// timeout can cancel a retry sequence cooperatively.
///
/// # Errors
///
/// Returns the error of the final attempt once the attempt budget is
/// exhausted.
pub async fn retry_generation<T, E, F, Fut>(
    max_attempts: u32,
    base_delay: Duration,
    mut operation: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts {
                    tracing::error!(
                        attempts = max_attempts,
                        error = %err,
                        "generation call failed after all attempts"
                    );
                    return Err(err);
                }
                let delay = base_delay * attempt;
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_secs = delay.as_secs_f64(),
                    error = %err,
                    "generation call failed — retrying after backoff"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_generation(3, Duration::ZERO, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, String>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_generation(3, Duration::ZERO, || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err("transient".to_string())
                } else {
                    Ok::<u32, String>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn attempts_exactly_max_then_surfaces_last_error() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_generation(3, Duration::ZERO, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, String>("down".to_string())
            }
        })
        .await;
        // max_attempts counts attempts, not re-attempts: exactly 3 calls.
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert_eq!(result.unwrap_err(), "down");
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_generation(0, Duration::ZERO, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, String>("down".to_string())
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(result.is_err());
    }
}
