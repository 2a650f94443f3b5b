//! Encoding Utilities
//!
//! Base64 and `data:` URL helpers used to move camera frames between the
//! device (encoded still) and the gateway (binary upload).

use base64::{Engine, engine::general_purpose};
use thiserror::Error;

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Error when decoding a `data:` URL
#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("Not a data URL")]
    MissingScheme,

    #[error("Data URL is not base64 encoded")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// Build a `data:<mime>;base64,<payload>` URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, to_base64(bytes))
}

/// Split a base64 `data:` URL into its MIME type and raw bytes
///
/// An empty MIME type defaults to `application/octet-stream`.
pub fn from_data_url(url: &str) -> Result<(String, Vec<u8>), DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
    let (meta, payload) = rest.split_once(',').ok_or(DataUrlError::MissingScheme)?;
    let mime = meta.strip_suffix(";base64").ok_or(DataUrlError::NotBase64)?;

    let mime = if mime.is_empty() {
        "application/octet-stream".to_string()
    } else {
        mime.to_string()
    };

    Ok((mime, from_base64(payload)?))
}
