//! Byte buffer to byte-per-character string conversion.

/// Converts a byte buffer into a string with one char per byte.
///
/// Each byte becomes the char with the same code point (Latin-1), so the
/// result round-trips through [`string_to_array_buffer`](crate::string_to_array_buffer()).
pub fn array_buffer_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
