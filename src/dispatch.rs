//! Dispatcher: raw bytes in, one human-readable response line out.
//!
//! Every failure mode of the decode chain is recovered here and rendered as
//! a diagnostic line; the serving task never panics and the store is left
//! untouched by rejected payloads.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::Encoding;
use crate::core::Result;
use crate::registry::{self, Operation};
use crate::store::Store;

#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<Store>,
}

impl Dispatcher {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Sniff, decode and run one envelope. Errors become the response text.
    pub async fn dispatch(&self, payload: &[u8]) -> String {
        match self.apply(payload).await {
            Ok(line) => line,
            Err(err) => {
                warn!(%err, "request rejected");
                err.to_string()
            }
        }
    }

    async fn apply(&self, payload: &[u8]) -> Result<String> {
        let encoding = Encoding::sniff(payload)?;
        let envelope = registry::decode_envelope(encoding, payload)?;
        let (kind, verb) = envelope.resolve()?;
        debug!(%kind, %verb, "dispatching");
        let operation = Operation::decode(kind, verb, encoding, payload)?;
        operation.apply(&self.store).await
    }

    /// Space-separated list of all current IDs, store order.
    pub async fn list(&self) -> String {
        self.store.ids().await.join(" ")
    }

    /// Raw-ID delete path for the bare `DELETE` verb: no envelope, and the
    /// acknowledgement is fixed whether or not a record matched.
    pub async fn delete_raw(&self, body: &[u8]) -> String {
        let id = String::from_utf8_lossy(body);
        let id = id.trim();
        if !self.store.delete(id).await {
            debug!(id, "delete matched nothing");
        }
        "Object deleted successfully".to_string()
    }
}
