//! Write-behind wrapper: `set` returns immediately, a worker thread persists.
//!
//! Reads see the latest value handed to `set` even before the worker has
//! written it. Dropping the wrapper closes the queue and waits for the worker
//! to drain it.

use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crate::core::{KeyValueStore, StoreError};

pub struct WriteBehindStore {
    inner: Arc<dyn KeyValueStore>,
    latest: Mutex<HashMap<String, String>>,
    tx: Mutex<Option<Sender<(String, String)>>>,
    worker: Option<JoinHandle<()>>,
}

impl WriteBehindStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let (tx, rx) = mpsc::channel::<(String, String)>();
        let sink = Arc::clone(&inner);
        let worker = thread::Builder::new()
            .name("tui-2048-store".into())
            .spawn(move || {
                for (key, value) in rx {
                    if let Err(err) = sink.set(&key, &value) {
                        log::warn!("background write of {key:?} failed: {err}");
                    }
                }
                log::debug!("store worker drained");
            })?;

        Ok(Self {
            inner,
            latest: Mutex::new(HashMap::new()),
            tx: Mutex::new(Some(tx)),
            worker: Some(worker),
        })
    }

    /// Block until every queued write has reached the inner store.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.tx.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("store worker panicked");
            }
        }
    }
}

impl KeyValueStore for WriteBehindStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let pending = self
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();
        match pending {
            Some(value) => Ok(Some(value)),
            None => self.inner.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());

        let tx = self.tx.lock().unwrap_or_else(PoisonError::into_inner);
        let tx = tx.as_ref().ok_or(StoreError::Disconnected)?;
        tx.send((key.to_string(), value.to_string()))
            .map_err(|_| StoreError::Disconnected)
    }
}

impl Drop for WriteBehindStore {
    fn drop(&mut self) {
        self.close();
    }
}
