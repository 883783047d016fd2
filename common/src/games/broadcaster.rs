use std::future::Future;

use super::snake::{GameSnapshot, SessionSummary};

/// Receives what a running session wants displayed. Implementations must not
/// block; the session calls them from its tick loop.
pub trait SnapshotBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_snapshot(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_session_end(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}
