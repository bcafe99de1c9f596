//! Base64url encoding of bytes and byte-per-character strings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::base64_to_base64_url;
use crate::string_to_array_buffer;

/// Encodes bytes as base64url without padding.
///
/// # Example
///
/// ```
/// use codec_utils::bytes_to_base64_url;
///
/// assert_eq!(bytes_to_base64_url(&[0xfb, 0xff]), "-_8");
/// ```
pub fn bytes_to_base64_url(bytes: &[u8]) -> String {
    base64_to_base64_url(&STANDARD.encode(bytes))
}

/// Encodes a byte-per-character string as base64url without padding.
///
/// Every char is taken as one byte (see [`string_to_array_buffer()`]); the
/// bytes are base64 encoded, `+` and `/` become `-` and `_`, and the trailing
/// `=` padding is dropped.
///
/// # Example
///
/// ```
/// use codec_utils::string_to_base64_url;
///
/// assert_eq!(
///     string_to_base64_url("any carnal pleasure."),
///     "YW55IGNhcm5hbCBwbGVhc3VyZS4"
/// );
/// ```
pub fn string_to_base64_url(text: &str) -> String {
    bytes_to_base64_url(&string_to_array_buffer(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(string_to_base64_url(""), "");
    }

    #[test]
    fn test_padding_stripped() {
        assert_eq!(string_to_base64_url("f"), "Zg");
        assert_eq!(string_to_base64_url("fo"), "Zm8");
        assert_eq!(string_to_base64_url("foo"), "Zm9v");
        assert_eq!(string_to_base64_url("foob"), "Zm9vYg");
        assert_eq!(string_to_base64_url("fooba"), "Zm9vYmE");
        assert_eq!(string_to_base64_url("foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_latin1_chars_encode_as_single_bytes() {
        // "\u{fb}\u{ff}" is the byte pair that yields "+/" in standard base64.
        assert_eq!(string_to_base64_url("\u{fb}\u{ff}"), "-_8");
    }

    #[test]
    fn test_rfc7515_appendix_c() {
        let octets = [3u8, 236, 255, 224, 193];
        assert_eq!(bytes_to_base64_url(&octets), "A-z_4ME");
    }
}
