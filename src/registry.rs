//! Action registry: resolves an envelope's (object, action) pair against the
//! closed kind and verb sets and decodes the matching operation shape.
//!
//! The original wire protocol used one action struct per (kind, verb) pair;
//! here a single generic [`Payload`] wrapper plus a per-kind record decode
//! covers all twelve combinations.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::codec::{self, Encoding};
use crate::core::{Kind, Result, RosterError, Verb};
use crate::model::{Record, Staff, Student, Teacher};
use crate::store::Store;

/// Outer wire message: names the target kind and verb. The embedded `data`
/// payload is deliberately not decoded here; the resolved operation re-reads
/// the full payload into its own shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub action: String,
    pub object: String,
}

impl Envelope {
    pub fn resolve(&self) -> Result<(Kind, Verb)> {
        let kind = self.object.parse::<Kind>()?;
        let verb = self.action.parse::<Verb>()?;
        Ok((kind, verb))
    }
}

/// Decode just the envelope fields from the raw payload.
pub fn decode_envelope(encoding: Encoding, payload: &[u8]) -> Result<Envelope> {
    codec::decode(encoding, payload).map_err(RosterError::EnvelopeDecode)
}

/// Generic operation payload: the envelope fields are skipped, `data` holds
/// either a full record or an ID reference depending on the verb. A missing
/// `data` block decodes to the zero value of the expected shape.
#[derive(Debug, Deserialize)]
struct Payload<T> {
    data: Option<T>,
}

/// ID-only `data` shape used by read and delete.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TargetRef {
    id: String,
}

/// A fully decoded operation, ready to run against the store.
#[derive(Debug)]
pub enum Operation {
    Create(Record),
    Read { kind: Kind, id: String },
    Update(Record),
    Delete { kind: Kind, id: String },
}

impl Operation {
    /// The second decode: re-read the full payload into the shape the
    /// resolved (kind, verb) pair expects, in the already-sniffed encoding.
    pub fn decode(kind: Kind, verb: Verb, encoding: Encoding, payload: &[u8]) -> Result<Self> {
        match verb {
            Verb::Create => Ok(Operation::Create(decode_record(kind, encoding, payload)?)),
            Verb::Update => Ok(Operation::Update(decode_record(kind, encoding, payload)?)),
            Verb::Read => {
                let target: TargetRef = decode_data(encoding, payload)?;
                Ok(Operation::Read { kind, id: target.id })
            }
            Verb::Delete => {
                let target: TargetRef = decode_data(encoding, payload)?;
                Ok(Operation::Delete { kind, id: target.id })
            }
        }
    }

    /// Execute against the store, producing the response line.
    ///
    /// Delete is idempotent by ID: the acknowledgement is rendered whether
    /// or not a record matched.
    pub async fn apply(self, store: &Store) -> Result<String> {
        match self {
            Operation::Create(record) => {
                let kind = record.kind();
                let id = store.create(record).await;
                Ok(format!("{kind} created successfully: id {id}"))
            }
            Operation::Read { kind, id } => {
                let snapshot = store.read(kind, &id).await?;
                Ok(snapshot.to_string())
            }
            Operation::Update(record) => {
                let kind = record.kind();
                store.update(record).await?;
                Ok(format!("{kind} updated successfully"))
            }
            Operation::Delete { kind, id } => {
                store.delete(&id).await;
                Ok(format!("{kind} deleted successfully"))
            }
        }
    }
}

fn decode_record(kind: Kind, encoding: Encoding, payload: &[u8]) -> Result<Record> {
    Ok(match kind {
        Kind::Teacher => Record::Teacher(decode_data::<Teacher>(encoding, payload)?),
        Kind::Student => Record::Student(decode_data::<Student>(encoding, payload)?),
        Kind::Staff => Record::Staff(decode_data::<Staff>(encoding, payload)?),
    })
}

fn decode_data<T: DeserializeOwned + Default>(encoding: Encoding, payload: &[u8]) -> Result<T> {
    codec::decode::<Payload<T>>(encoding, payload)
        .map(|p| p.data.unwrap_or_default())
        .map_err(RosterError::PayloadDecode)
}
