use common::games::SnapshotBroadcaster;
use common::games::snake::{GameSnapshot, SessionSummary};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnapshotBroadcaster for LocalBroadcaster {
    async fn broadcast_snapshot(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_session_end(&self, summary: SessionSummary) {
        self.shared_state.set_summary(summary);
    }
}
