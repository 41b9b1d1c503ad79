use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::store::storage::KeyValue;

/// A queued persistence operation.
#[derive(Debug)]
enum WriteOp {
    Set { key: String, value: String },
    Remove { key: String },
}

/// Background persistence writer.
///
/// Owns a worker thread that applies writes in the order they were queued.
/// Callers never block on disk I/O; each `set` carries a complete snapshot,
/// so a stale in-flight write is simply superseded by the next one (last
/// write wins). Write failures are logged and never surfaced.
///
/// Dropping the writer closes the channel and joins the thread, which lets
/// queued writes finish before the process exits.
pub struct StoreWriter {
    tx: Option<mpsc::Sender<WriteOp>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StoreWriter {
    pub fn spawn(storage: Arc<dyn KeyValue>) -> Self {
        let (tx, rx) = mpsc::channel::<WriteOp>();
        let handle = thread::spawn(move || {
            for op in rx {
                let result = match &op {
                    WriteOp::Set { key, value } => storage.set(key, value),
                    WriteOp::Remove { key } => storage.remove(key),
                };
                if let Err(e) = result {
                    log::error!("persistence write failed: {}", e);
                }
            }
        });
        StoreWriter {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Queue a full-value write. Fire-and-forget.
    pub fn set(&self, key: &str, value: String) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(WriteOp::Set {
                key: key.to_string(),
                value,
            });
        }
    }

    /// Queue a key removal. Fire-and-forget.
    pub fn remove(&self, key: &str) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(WriteOp::Remove {
                key: key.to_string(),
            });
        }
    }
}

impl Drop for StoreWriter {
    fn drop(&mut self) {
        // Close the channel so the worker drains and exits
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
