//! What happens to the favorites after each change.
//!
//! The store hands every post-mutation snapshot to a [`PersistHook`]. The
//! hook decides when the snapshot reaches storage; the store never waits on
//! it except through [`PersistHook::flush`].

use super::storage::{KeyValueStore, StorageError};
use crate::model::FavoriteSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, warn};

pub trait PersistHook: Send {
    /// Called with the full set after every mutation.
    fn schedule(&mut self, snapshot: &FavoriteSet);

    /// Blocks until every scheduled snapshot has been written.
    fn flush(&mut self) {}
}

/// Serializes `snapshot` and writes it under `key`, logging failures.
pub(crate) fn write_snapshot<S: KeyValueStore + ?Sized>(
    storage: &S,
    key: &str,
    snapshot: &FavoriteSet,
) {
    let json = match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(e) => {
            error!("Error serializing favorites: {}", e);
            return;
        }
    };
    match storage.set(key, &json) {
        Ok(()) => debug!(count = snapshot.len(), key, "Saved favorites"),
        Err(e) => error!("Error saving favorites: {}", e),
    }
}

/// Writes each snapshot synchronously before returning to the caller.
pub struct WriteThrough<S> {
    storage: Arc<S>,
    key: String,
}

impl<S: KeyValueStore> WriteThrough<S> {
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> PersistHook for WriteThrough<S> {
    fn schedule(&mut self, snapshot: &FavoriteSet) {
        write_snapshot(&*self.storage, &self.key, snapshot);
    }
}

enum Message {
    Snapshot(FavoriteSet),
    Flush(Sender<()>),
}

/// Fire-and-forget writes on a dedicated thread.
///
/// Snapshots queue on a channel. Each time the writer wakes it drains the
/// queue and writes only the newest snapshot, so a burst of toggles costs a
/// single write. Dropping the writer flushes pending snapshots and joins the
/// thread.
pub struct BackgroundWriter {
    sender: Option<Sender<Message>>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundWriter {
    /// Starts the writer thread.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::IoError` if the thread cannot be spawned.
    pub fn spawn<S: KeyValueStore + 'static>(
        storage: Arc<S>,
        key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("favorites-writer".to_string())
            .spawn(move || run_writer(&*storage, &key, receiver))?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn send(&self, message: Message) -> bool {
        match &self.sender {
            Some(sender) => sender.send(message).is_ok(),
            None => false,
        }
    }
}

fn run_writer<S: KeyValueStore + ?Sized>(storage: &S, key: &str, receiver: Receiver<Message>) {
    while let Ok(first) = receiver.recv() {
        let mut latest = None;
        let mut waiting = Vec::new();
        let mut next = Some(first);

        while let Some(message) = next {
            match message {
                Message::Snapshot(snapshot) => latest = Some(snapshot),
                Message::Flush(ack) => waiting.push(ack),
            }
            next = receiver.try_recv().ok();
        }

        if let Some(snapshot) = latest {
            write_snapshot(storage, key, &snapshot);
        }
        for ack in waiting {
            // The flusher may have given up waiting
            let _ = ack.send(());
        }
    }
}

impl PersistHook for BackgroundWriter {
    fn schedule(&mut self, snapshot: &FavoriteSet) {
        if !self.send(Message::Snapshot(snapshot.clone())) {
            warn!("Favorites writer has stopped; change not persisted");
        }
    }

    fn flush(&mut self) {
        let (ack, done) = mpsc::channel();
        if self.send(Message::Flush(ack)) {
            let _ = done.recv();
        }
    }
}

impl Drop for BackgroundWriter {
    fn drop(&mut self) {
        // Closing the channel lets the writer drain and exit
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Favorites writer thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::storage::tests::FailingStore;
    use crate::favorites::storage::MemoryStore;

    fn set_of(ids: &[u32]) -> FavoriteSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_write_through_writes_immediately() {
        let storage = Arc::new(MemoryStore::new());
        let mut hook = WriteThrough::new(Arc::clone(&storage), "favorites");

        hook.schedule(&set_of(&[2, 5]));
        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[2,5]"));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut hook = WriteThrough::new(Arc::new(FailingStore), "favorites");
        hook.schedule(&set_of(&[1]));
    }

    #[test]
    fn test_background_flush_writes_latest() {
        let storage = Arc::new(MemoryStore::new());
        let mut writer = BackgroundWriter::spawn(Arc::clone(&storage), "favorites").unwrap();

        writer.schedule(&set_of(&[1]));
        writer.schedule(&set_of(&[1, 2]));
        writer.schedule(&set_of(&[2]));
        writer.flush();

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_background_drop_flushes() {
        let storage = Arc::new(MemoryStore::new());
        let mut writer = BackgroundWriter::spawn(Arc::clone(&storage), "favorites").unwrap();

        writer.schedule(&set_of(&[4, 3]));
        drop(writer);

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[4,3]"));
    }

    #[test]
    fn test_background_flush_without_changes() {
        let storage = Arc::new(MemoryStore::new());
        let mut writer = BackgroundWriter::spawn(Arc::clone(&storage), "favorites").unwrap();

        writer.flush();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_background_write_failure_keeps_running() {
        let mut writer = BackgroundWriter::spawn(Arc::new(FailingStore), "favorites").unwrap();
        writer.schedule(&set_of(&[1]));
        writer.flush();
        writer.schedule(&set_of(&[2]));
        writer.flush();
    }
}
