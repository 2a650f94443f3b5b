//! Location Resolver
//!
//! Best-effort location: the first fix wins, whatever its accuracy.

use std::sync::Arc;
use std::time::Duration;

use platform::retry::{AttemptCounter, RetryPolicy};

use crate::domain::repository::{Geolocation, PositionWatch};
use crate::domain::value_objects::{Coordinates, WatchOptions};
use crate::error::{AttendanceError, AttendanceResult};

/// Location resolver over a host [`Geolocation`]
pub struct LocationResolver<G>
where
    G: Geolocation,
{
    geolocation: Arc<G>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl<G> LocationResolver<G>
where
    G: Geolocation,
{
    pub fn new(geolocation: Arc<G>, timeout: Duration, retry: RetryPolicy) -> Self {
        Self {
            geolocation,
            timeout,
            retry,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// One attempt
    ///
    /// Settles on whichever comes first of a fix, a host error, or the
    /// deadline. The watch is cleared exactly once, on every path.
    pub async fn resolve(&self, timeout: Duration) -> AttendanceResult<Coordinates> {
        let options = WatchOptions {
            timeout,
            ..WatchOptions::default()
        };
        let PositionWatch { id, mut updates } = self.geolocation.watch_position(&options)?;

        let outcome = tokio::select! {
            biased;
            update = updates.recv() => match update {
                Some(Ok(coordinates)) => Ok(coordinates),
                Some(Err(e)) => Err(AttendanceError::from(e)),
                None => Err(AttendanceError::LocationUnavailable(
                    "watch closed without a fix".to_string(),
                )),
            },
            _ = tokio::time::sleep(timeout) => Err(AttendanceError::LocationTimeout),
        };

        self.geolocation.clear_watch(id);
        drop(updates);

        match &outcome {
            Ok(coordinates) => {
                tracing::debug!(watch = %id, accuracy = ?coordinates.accuracy, "Location fix")
            }
            Err(e) => tracing::debug!(watch = %id, error = %e, "Location attempt failed"),
        }
        outcome
    }

    /// Attempts bounded by the retry policy, with a fixed pause in between
    ///
    /// Missing geolocation support is terminal at once; every other failure
    /// is retried until the budget is spent.
    pub async fn resolve_with_retry(&self) -> AttendanceResult<Coordinates> {
        let mut attempts = AttemptCounter::new(self.retry);

        loop {
            let error = match self.resolve(self.timeout).await {
                Ok(coordinates) => {
                    attempts.reset();
                    return Ok(coordinates);
                }
                Err(AttendanceError::LocationUnsupported) => {
                    return Err(AttendanceError::LocationUnsupported);
                }
                Err(e) => e,
            };

            if !attempts.record_failure() {
                return Err(AttendanceError::LocationExhausted {
                    attempts: attempts.failures(),
                    last: error.kind(),
                });
            }

            tracing::info!(
                failures = attempts.failures(),
                max_attempts = self.retry.max_attempts(),
                error = %error,
                "Retrying location"
            );
            tokio::time::sleep(self.retry.delay).await;
        }
    }
}
