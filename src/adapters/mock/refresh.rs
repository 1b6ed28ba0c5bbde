//! Mock refresh use case for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use crate::error::SourceError;
use crate::models::RefreshGamesParams;
use crate::traits::RefreshAllGamesUseCase;

/// Mock [`RefreshAllGamesUseCase`] with a configurable outcome.
///
/// A held mock keeps every execution in flight until [`release`] is called,
/// which lets tests observe the in-progress state.
///
/// [`release`]: MockRefreshAll::release
#[derive(Debug, Clone)]
pub struct MockRefreshAll {
    outcome: Arc<Mutex<Result<(), SourceError>>>,
    /// `true` while executions must wait
    held: Arc<watch::Sender<bool>>,
    calls: Arc<watch::Sender<usize>>,
    params: Arc<Mutex<Vec<RefreshGamesParams>>>,
}

impl MockRefreshAll {
    /// A mock whose executions succeed immediately.
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(()))),
            held: Arc::new(watch::channel(false).0),
            calls: Arc::new(watch::channel(0).0),
            params: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock whose executions fail with `error`.
    pub fn failing(error: SourceError) -> Self {
        let mock = Self::new();
        mock.set_outcome(Err(error));
        mock
    }

    pub fn set_outcome(&self, outcome: Result<(), SourceError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    /// Keep subsequent executions in flight until [`release`](Self::release).
    pub fn hold(&self) {
        self.held.send_replace(true);
    }

    /// Let every held execution finish.
    pub fn release(&self) {
        self.held.send_replace(false);
    }

    /// Number of times `execute` was called.
    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }

    /// Wait until `execute` has been called at least `count` times.
    pub async fn wait_for_calls(&self, count: usize) {
        let mut calls = self.calls.subscribe();
        let _ = calls.wait_for(|calls| *calls >= count).await;
    }

    pub fn last_params(&self) -> Option<RefreshGamesParams> {
        self.params.lock().unwrap().last().copied()
    }
}

impl Default for MockRefreshAll {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshAllGamesUseCase for MockRefreshAll {
    async fn execute(&self, params: &RefreshGamesParams) -> Result<(), SourceError> {
        self.params.lock().unwrap().push(*params);
        let mut held = self.held.subscribe();
        self.calls.send_modify(|calls| *calls += 1);

        let _ = held.wait_for(|held| !*held).await;
        self.outcome.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outcome_is_returned() {
        let mock = MockRefreshAll::failing(SourceError::network("down"));

        let result = mock.execute(&RefreshGamesParams::default()).await;

        assert_eq!(result, Err(SourceError::network("down")));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_held_execution_waits_for_release() {
        let mock = MockRefreshAll::new();
        mock.hold();

        let task = tokio::spawn({
            let mock = mock.clone();
            async move { mock.execute(&RefreshGamesParams::default()).await }
        });
        mock.wait_for_calls(1).await;
        assert!(!task.is_finished());

        mock.release();
        assert!(task.await.unwrap().is_ok());
    }
}
