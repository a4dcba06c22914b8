use serde::Serialize;
use tokio::sync::broadcast;

/// Events pushed to console subscribers over SSE.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
    /// A new sample snapshot replaced the previous one; charts should re-fetch.
    SnapshotUpdated {
        revision: u64,
        sample_count: usize,
        node_count: usize,
        pool_count: usize,
    },

    /// A pushed snapshot was refused and the previous one is still served.
    SnapshotRejected { message: String },
}

impl Event {
    /// Returns the SSE event type name for this event variant.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::SnapshotUpdated { .. } => "snapshot_updated",
            Self::SnapshotRejected { .. } => "snapshot_rejected",
        }
    }
}

/// The central event broadcast hub.
///
/// Snapshot handlers publish here; SSE handlers subscribe and forward to the browser.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a hub with the given channel capacity. Subscribers lagging by
    /// more than `capacity` events miss the intermediate ones.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Errors only when nobody is subscribed, which callers ignore.
    pub fn publish(&self, event: Event) -> Result<usize, broadcast::error::SendError<Event>> {
        self.sender.send(event)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
