//! Base64url helpers for JWS/JWT style encodings.
//!
//! This crate provides:
//! - base64url encoding and decoding of byte-per-character strings and bytes
//!   ([RFC 7515 Appendix C](https://tools.ietf.org/html/rfc7515#appendix-C))
//! - escaping between the standard and URL-safe base64 alphabets without
//!   decoding
//! - conversion between Latin-1 strings and byte buffers
//!
//! Every function is pure. Only the decoding functions can fail.
//!
//! # Example
//!
//! ```
//! use codec_utils::{base64_url_to_string, string_to_base64_url};
//!
//! let encoded = string_to_base64_url("any carnal pleasure.");
//! assert_eq!(encoded, "YW55IGNhcm5hbCBwbGVhc3VyZS4");
//! assert_eq!(base64_url_to_string(&encoded).unwrap(), "any carnal pleasure.");
//! ```

mod array_buffer_to_string;
mod base64_to_base64_url;
mod base64_url_to_base64;
mod base64_url_to_string;
mod constants;
mod padding;
mod string_to_array_buffer;
mod string_to_base64_url;

pub use array_buffer_to_string::array_buffer_to_string;
pub use base64_to_base64_url::base64_to_base64_url;
pub use base64_url_to_base64::base64_url_to_base64;
pub use base64_url_to_string::{base64_url_to_bytes, base64_url_to_string};
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use padding::padding_len;
pub use string_to_array_buffer::string_to_array_buffer;
pub use string_to_base64_url::{bytes_to_base64_url, string_to_base64_url};

/// Error type for base64url decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The padded, standard-alphabet form of the input is not valid base64.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
