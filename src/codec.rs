//! Wire format selection and the generic decode/encode pair behind it.
//!
//! The server never negotiates a content type; the payload's first
//! non-whitespace byte picks the format, and that one format is then used
//! for both the envelope decode and the operation-shaped second decode.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::{Result, RosterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Xml,
}

impl Encoding {
    /// Select the wire format from the payload's leading marker byte.
    ///
    /// `{` means JSON, `<` means XML; anything else, including an empty or
    /// whitespace-only payload, is rejected.
    pub fn sniff(payload: &[u8]) -> Result<Self> {
        match payload.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Ok(Encoding::Json),
            Some(b'<') => Ok(Encoding::Xml),
            _ => Err(RosterError::UnsupportedEncoding),
        }
    }
}

/// Decode `payload` as `T` in the given format.
///
/// Errors carry the underlying parser message; callers wrap them into the
/// envelope- or payload-level variant of [`RosterError`] depending on which
/// decode stage failed.
pub fn decode<T: DeserializeOwned>(
    encoding: Encoding,
    payload: &[u8],
) -> std::result::Result<T, String> {
    match encoding {
        Encoding::Json => serde_json::from_slice(payload).map_err(|e| e.to_string()),
        Encoding::Xml => {
            let text = std::str::from_utf8(payload).map_err(|e| e.to_string())?;
            quick_xml::de::from_str(text).map_err(|e| e.to_string())
        }
    }
}

/// Encode `value` in the given format. `root` names the XML root element
/// and is ignored for JSON.
pub fn encode<T: Serialize>(
    encoding: Encoding,
    root: &str,
    value: &T,
) -> std::result::Result<String, String> {
    match encoding {
        Encoding::Json => serde_json::to_string(value).map_err(|e| e.to_string()),
        Encoding::Xml => quick_xml::se::to_string_with_root(root, value).map_err(|e| e.to_string()),
    }
}
