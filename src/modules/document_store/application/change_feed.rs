use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::debug;

use crate::modules::document_store::application::domain::entities::{Document, Snapshot};
use crate::modules::document_store::application::subscription::Subscription;

const CHANNEL_CAPACITY: usize = 16;

struct Channel {
    tx: broadcast::Sender<Snapshot>,
    issued: u64,
    published: u64,
}

impl Channel {
    fn new() -> Self {
        Self {
            tx: broadcast::channel(CHANNEL_CAPACITY).0,
            issued: 0,
            published: 0,
        }
    }
}

/// Fan-out of collection snapshots to every open subscription.
///
/// Store adapters publish after each successful write; a collection with no
/// open subscription costs nothing beyond the `has_subscribers` check.
///
/// Snapshots read outside the write path carry a [`ChangeFeed::ticket`]
/// taken before the read. A snapshot whose ticket is older than the last one
/// published is dropped, so a slow read never overwrites a newer state.
#[derive(Clone, Default)]
pub struct ChangeFeed {
    channels: Arc<Mutex<HashMap<String, Channel>>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    fn channels(&self) -> MutexGuard<'_, HashMap<String, Channel>> {
        self.channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn has_subscribers(&self, collection: &str) -> bool {
        self.channels()
            .get(collection)
            .map(|channel| channel.tx.receiver_count() > 0)
            .unwrap_or(false)
    }

    /// Registers the receiver before the caller reads the initial state, so a
    /// write landing in between shows up as an extra (identical) snapshot
    /// instead of being lost.
    pub fn open(&self, collection: &str) -> broadcast::Receiver<Snapshot> {
        self.channels()
            .entry(collection.to_string())
            .or_insert_with(Channel::new)
            .tx
            .subscribe()
    }

    pub fn subscription(
        &self,
        receiver: broadcast::Receiver<Snapshot>,
        collection: &str,
        initial: Vec<Document>,
    ) -> Subscription {
        Subscription::new(Snapshot::new(collection, initial), receiver)
    }

    /// Orders a snapshot read against every other read of `collection`.
    /// Take it before reading.
    pub fn ticket(&self, collection: &str) -> u64 {
        let mut channels = self.channels();
        let channel = channels
            .entry(collection.to_string())
            .or_insert_with(Channel::new);
        channel.issued += 1;
        channel.issued
    }

    /// Publishes a snapshot read under `ticket`, unless a snapshot from a
    /// later ticket already went out.
    pub fn publish_ticketed(&self, ticket: u64, snapshot: Snapshot) {
        let mut channels = self.channels();
        let channel = channels
            .entry(snapshot.collection.clone())
            .or_insert_with(Channel::new);

        if ticket <= channel.published {
            debug!(
                collection = %snapshot.collection,
                ticket,
                published = channel.published,
                "stale snapshot dropped"
            );
            return;
        }
        channel.published = ticket;

        let collection = snapshot.collection.clone();
        match channel.tx.send(snapshot) {
            Ok(receivers) => debug!(collection = %collection, receivers, "snapshot published"),
            Err(_) => debug!(collection = %collection, "snapshot dropped, no subscribers"),
        }
    }

    /// Publishes a snapshot taken under the caller's own write lock.
    pub fn publish(&self, snapshot: Snapshot) {
        let ticket = self.ticket(&snapshot.collection);
        self.publish_ticketed(ticket, snapshot);
    }
}
