use crate::config::RetryPolicy;
use crate::error::Result;
use std::future::Future;

/// Run `op`, retrying transient failures with the policy's backoff.
///
/// Only errors reporting `is_retryable()` are retried; the budget is
/// `max_attempts` retries after the initial call. The final error
/// propagates unchanged.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                attempt += 1;
                log::debug!(
                    "transient failure ({err}), retry {attempt}/{} in {delay:?}",
                    policy.max_attempts
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
