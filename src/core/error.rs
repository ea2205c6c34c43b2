use thiserror::Error;

use crate::core::Kind;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Unsupported payload encoding")]
    UnsupportedEncoding,

    #[error("Malformed envelope: {0}")]
    EnvelopeDecode(String),

    #[error("Malformed payload: {0}")]
    PayloadDecode(String),

    #[error("Unknown object '{0}'")]
    UnknownObjectKind(String),

    #[error("Unknown action '{0}'")]
    UnknownVerb(String),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: Kind, id: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
