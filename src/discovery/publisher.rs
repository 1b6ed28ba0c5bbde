//! Single writer for the published snapshot.

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::view_state::DiscoverySnapshot;

/// Applies transitions to the current snapshot and publishes the result.
///
/// Every transition runs under the watch channel's lock against the value
/// published at that moment, so a load and a refresh running side by side
/// never overwrite each other's dimension. Closing cancels the shared token
/// under the same lock: once [`close`](Self::close) returns, no transition
/// can publish anymore.
#[derive(Debug)]
pub struct SnapshotPublisher {
    tx: watch::Sender<DiscoverySnapshot>,
    cancel: CancellationToken,
}

impl SnapshotPublisher {
    pub fn new(initial: DiscoverySnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Apply `transition` to the current snapshot and publish the result.
    ///
    /// Returns false if the publisher has been closed.
    pub fn publish<F>(&self, transition: F) -> bool
    where
        F: FnOnce(&DiscoverySnapshot) -> DiscoverySnapshot,
    {
        self.tx.send_if_modified(|current| {
            if self.cancel.is_cancelled() {
                return false;
            }
            *current = transition(current);
            true
        })
    }

    /// Run `f` unless the publisher is closed, serialized against
    /// [`close`](Self::close). Returns whether `f` ran.
    pub fn run_if_open<F>(&self, f: F) -> bool
    where
        F: FnOnce(),
    {
        let mut ran = false;
        self.tx.send_if_modified(|_| {
            if !self.cancel.is_cancelled() {
                f();
                ran = true;
            }
            false
        });
        ran
    }

    /// Copy of the current snapshot.
    pub fn current(&self) -> DiscoverySnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DiscoverySnapshot> {
        self.tx.subscribe()
    }

    /// Token cancelled when the publisher is closed.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stop all publication and cancel every operation holding the token.
    pub fn close(&self) {
        self.tx.send_if_modified(|_| {
            self.cancel.cancel();
            false
        });
    }
}
