//! rosterdb — an in-memory school records store served over a single HTTP
//! endpoint.
//!
//! Payloads name an object kind (Teacher/Student/Staff) and a verb
//! (create/read/update/delete) in either of two wire encodings, selected by
//! the payload's leading byte. The [`dispatch::Dispatcher`] runs the chain
//! sniff → envelope decode → registry resolution → operation decode →
//! execution against the shared [`store::Store`], which serializes access
//! with one store-wide lock plus one lock per record.

pub mod codec;
pub mod core;
pub mod dispatch;
pub mod model;
pub mod registry;
pub mod store;
pub mod web;

pub use codec::Encoding;
pub use core::{Kind, Result, RosterError, Verb};
pub use dispatch::Dispatcher;
pub use model::{Person, Record, Staff, Student, Teacher};
pub use registry::{Envelope, Operation};
pub use store::Store;
