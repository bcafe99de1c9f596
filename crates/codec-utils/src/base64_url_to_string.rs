//! Base64url decoding to bytes and byte-per-character strings.

use base64::Engine;
use log::debug;

use crate::array_buffer_to_string;
use crate::base64_url_to_base64;
use crate::constants::STANDARD_ATOB;
use crate::CodecError;

/// Decodes a base64url string (padding optional) into bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] if the input, once padded and
/// translated back to the standard alphabet, is not valid base64.
///
/// # Example
///
/// ```
/// use codec_utils::base64_url_to_bytes;
///
/// assert_eq!(base64_url_to_bytes("A-z_4ME").unwrap(), [3, 236, 255, 224, 193]);
/// assert!(base64_url_to_bytes("A-z_4M!").is_err());
/// ```
pub fn base64_url_to_bytes(b64u: &str) -> Result<Vec<u8>, CodecError> {
    let b64 = base64_url_to_base64(b64u);
    STANDARD_ATOB.decode(b64.as_bytes()).map_err(|err| {
        debug!("rejected base64url input ({} bytes): {}", b64u.len(), err);
        CodecError::from(err)
    })
}

/// Decodes a base64url string into a byte-per-character string.
///
/// Each decoded byte becomes the char with the same code point, so this is
/// the exact inverse of [`string_to_base64_url`](crate::string_to_base64_url())
/// for text made of chars up to U+00FF.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBase64`] on malformed input.
///
/// # Example
///
/// ```
/// use codec_utils::base64_url_to_string;
///
/// let text = base64_url_to_string("YW55IGNhcm5hbCBwbGVhc3VyZS4").unwrap();
/// assert_eq!(text, "any carnal pleasure.");
/// ```
pub fn base64_url_to_string(b64u: &str) -> Result<String, CodecError> {
    let bytes = base64_url_to_bytes(b64u)?;
    Ok(array_buffer_to_string(&bytes))
}
