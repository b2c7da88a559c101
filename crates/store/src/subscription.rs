//! Live subscription handles.

use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A live subscription to a stream of snapshots.
///
/// Each message is a complete, self-consistent snapshot that replaces the
/// previous one — callers keep only the latest delivery. Handles are owned by
/// exactly one subscriber; dropping the handle cancels the subscription (the
/// publisher prunes disconnected subscribers on its next delivery).
///
/// Independent subscriptions carry no ordering guarantee relative to each
/// other, so views combining several collections must recompute derived
/// values whenever any of their snapshots changes.
#[derive(Debug)]
pub struct WatchHandle<M> {
    receiver: Receiver<M>,
}

impl<M> WatchHandle<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next snapshot is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Take the next snapshot without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain to the most recent snapshot, if any arrived since the last read.
    pub fn latest(&self) -> Option<M> {
        let mut latest = None;
        while let Ok(msg) = self.receiver.try_recv() {
            latest = Some(msg);
        }
        latest
    }
}
