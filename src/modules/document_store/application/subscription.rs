use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;

use crate::modules::document_store::application::domain::entities::Snapshot;

/// Cancellable stream of full collection snapshots.
///
/// Yields the state at subscription time first, then one snapshot per
/// change. Dropping the value (or calling [`Subscription::unsubscribe`])
/// releases the listener.
pub struct Subscription {
    collection: String,
    initial: Option<Snapshot>,
    updates: BroadcastStream<Snapshot>,
}

impl Subscription {
    pub fn new(initial: Snapshot, receiver: broadcast::Receiver<Snapshot>) -> Self {
        Self {
            collection: initial.collection.clone(),
            initial: Some(initial),
            updates: BroadcastStream::new(receiver),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        debug!(collection = %self.collection, "subscription released");
    }
}

impl Stream for Subscription {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(initial) = self.initial.take() {
            return Poll::Ready(Some(initial));
        }

        loop {
            match self.updates.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(snapshot))) => return Poll::Ready(Some(snapshot)),
                // Every item is a full snapshot, so skipping overwritten ones
                // still converges on the latest state.
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(skipped)))) => {
                    debug!(collection = %self.collection, skipped, "subscriber lagged");
                    continue;
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::application::domain::entities::Document;

    fn snapshot(ids: &[&str]) -> Snapshot {
        Snapshot::new(
            "projects",
            ids.iter()
                .map(|id| Document::new(*id, Default::default()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_lagged_subscriber_converges_on_latest_snapshot() {
        let (tx, rx) = broadcast::channel(2);
        let mut sub = Subscription::new(snapshot(&[]), rx);

        for n in 0..5 {
            let ids: Vec<String> = (0..=n).map(|i| format!("p{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            tx.send(snapshot(&refs)).unwrap();
        }
        drop(tx);

        let mut last = None;
        while let Some(s) = sub.next().await {
            last = Some(s);
        }

        assert_eq!(last.unwrap().documents.len(), 5);
    }

    #[tokio::test]
    async fn test_unsubscribe_releases_receiver() {
        let (tx, rx) = broadcast::channel::<Snapshot>(4);
        let sub = Subscription::new(snapshot(&[]), rx);
        assert_eq!(tx.receiver_count(), 1);

        sub.unsubscribe();
        assert_eq!(tx.receiver_count(), 0);
    }
}
