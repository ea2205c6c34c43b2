//! The shared record collection and its two-tier locking discipline.
//!
//! One store-wide mutex guards the slot vector and the ID counter; each
//! record carries its own lock for field access. Lock order is always store
//! then record, and the store lock is never taken while a record lock is
//! held, so the discipline cannot deadlock.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::core::{Kind, Result, RosterError};
use crate::model::Record;

/// One stored record. `id` and `kind` never change for the lifetime of the
/// slot, so lookups can scan without touching record locks.
struct Slot {
    id: String,
    kind: Kind,
    record: Arc<RwLock<Record>>,
}

struct StoreInner {
    slots: Vec<Slot>,
    next_free_id: u64,
}

impl StoreInner {
    fn find(&self, kind: Kind, id: &str) -> Option<&Slot> {
        // IDs are unique across kinds; a kind mismatch reads as not-found.
        self.slots.iter().find(|s| s.id == id && s.kind == kind)
    }
}

/// In-memory record store with a monotonically increasing identity space.
///
/// Constructed once at startup and shared behind an `Arc`; all mutation goes
/// through the lock discipline above.
pub struct Store {
    inner: Mutex<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                slots: Vec::new(),
                next_free_id: 1,
            }),
        }
    }

    /// Mint the next ID, stamp it into the record and append a fresh slot,
    /// all under the store lock. The new record's lock starts free.
    pub async fn create(&self, mut record: Record) -> String {
        let mut inner = self.inner.lock().await;
        let id = inner.next_free_id.to_string();
        inner.next_free_id += 1;
        record.set_id(id.clone());
        let kind = record.kind();
        inner.slots.push(Slot {
            id: id.clone(),
            kind,
            record: Arc::new(RwLock::new(record)),
        });
        id
    }

    /// Snapshot one record's fields.
    ///
    /// The record lock is acquired while the store lock is still held, so a
    /// concurrent delete cannot remove the slot between lookup and access.
    pub async fn read(&self, kind: Kind, id: &str) -> Result<Record> {
        let inner = self.inner.lock().await;
        let slot = inner.find(kind, id).ok_or_else(|| RosterError::NotFound {
            kind,
            id: id.to_string(),
        })?;
        let handle = Arc::clone(&slot.record);
        let guard = handle.read().await;
        drop(inner);
        Ok(guard.clone())
    }

    /// Replace a record's contents in place, preserving the slot's ID.
    pub async fn update(&self, mut record: Record) -> Result<()> {
        let kind = record.kind();
        let id = record.id().to_string();

        let inner = self.inner.lock().await;
        let slot = inner
            .find(kind, &id)
            .ok_or_else(|| RosterError::NotFound { kind, id: id.clone() })?;
        let slot_id = slot.id.clone();
        let handle = Arc::clone(&slot.record);
        // Same window closure as read: record lock before store unlock.
        let mut guard = handle.write().await;
        drop(inner);

        record.set_id(slot_id);
        *guard = record;
        Ok(())
    }

    /// Remove every slot whose ID matches, discarding its lock with it.
    /// Returns whether anything was removed; callers choosing idempotent
    /// semantics ignore the flag.
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.slots.len();
        inner.slots.retain(|slot| slot.id != id);
        inner.slots.len() != before
    }

    /// All current IDs in insertion order.
    pub async fn ids(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner.slots.iter().map(|slot| slot.id.clone()).collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.slots.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
