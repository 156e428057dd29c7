use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::modules::content::application::domain::{CollectionRecord, StoredRecord};
use crate::modules::document_store::application::ports::outgoing::{
    DocumentStore, DocumentStoreError,
};

pub type RecordList<R> = Arc<Vec<StoredRecord<R>>>;

/// A live, ordered copy of one collection.
///
/// Every snapshot from the store replaces the whole list. Closing (or
/// dropping) the sync stops the listener task and releases the store
/// subscription; nothing is published afterwards.
pub struct CollectionSync<R: CollectionRecord> {
    records: watch::Receiver<RecordList<R>>,
    listener: JoinHandle<()>,
}

impl<R: CollectionRecord> CollectionSync<R> {
    pub async fn open<S>(store: &S) -> Result<Self, DocumentStoreError>
    where
        S: DocumentStore + ?Sized,
    {
        let mut subscription = store.subscribe(R::COLLECTION).await?;

        let initial = match subscription.next().await {
            Some(snapshot) => StoredRecord::from_snapshot(&snapshot.documents),
            None => Vec::new(),
        };
        let (tx, rx) = watch::channel(Arc::new(initial));

        let listener = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                let records = StoredRecord::<R>::from_snapshot(&snapshot.documents);
                if tx.send(Arc::new(records)).is_err() {
                    break;
                }
            }
            debug!(collection = R::COLLECTION, "collection sync ended");
        });

        Ok(Self {
            records: rx,
            listener,
        })
    }

    pub fn current(&self) -> RecordList<R> {
        self.records.borrow().clone()
    }

    /// Waits for the next snapshot. `None` once the underlying subscription
    /// has ended.
    pub async fn changed(&mut self) -> Option<RecordList<R>> {
        self.records.changed().await.ok()?;
        Some(self.records.borrow_and_update().clone())
    }

    pub fn close(self) {
        drop(self);
    }
}

impl<R: CollectionRecord> Drop for CollectionSync<R> {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
