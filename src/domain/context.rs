//! Cancellable operation context passed through every store call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::repositories::StoreError;

/// Cancellation signal and optional deadline for a single operation.
///
/// Cloning shares the underlying token, so a caller can keep a clone and
/// cancel work that is already in flight.
#[derive(Debug, Clone, Default)]
pub struct OpContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl OpContext {
    /// A context that never fires on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// A context driven by an externally owned token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once the token was cancelled or the deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Races `fut` against cancellation and the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Cancelled`] if the context fires first, otherwise
    /// whatever `fut` resolves to.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        if self.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(StoreError::Cancelled),
            _ = deadline => Err(StoreError::Cancelled),
            result = fut => result,
        }
    }
}
