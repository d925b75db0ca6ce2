use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::PlayerError;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode bytes as `data:<mime>;base64,<payload>`
///
/// An empty MIME type is replaced by `application/octet-stream`.
#[must_use]
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime_type
    };
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 data URI back into its MIME type and bytes
///
/// # Errors
///
/// Returns `PlayerError::InvalidDataUri` if the prefix, the base64 marker or
/// the payload encoding is wrong.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), PlayerError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| invalid("missing data: prefix"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| invalid("missing payload separator"))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| invalid("payload is not base64"))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| invalid(&e.to_string()))?;

    let mime_type = if mime_type.is_empty() {
        FALLBACK_MIME
    } else {
        mime_type
    };
    Ok((mime_type.to_string(), bytes))
}

fn invalid(reason: &str) -> PlayerError {
    PlayerError::InvalidDataUri {
        reason: reason.to_string(),
    }
}
