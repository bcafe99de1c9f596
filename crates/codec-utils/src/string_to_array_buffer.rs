//! Byte-per-character string to byte buffer conversion.

/// Converts an ASCII or Latin-1 string into a byte buffer, one byte per char.
///
/// Byte `i` holds the code point of char `i` modulo 256, so chars above
/// U+00FF silently lose their high bits. The buffer length always equals the
/// char count, never the UTF-8 byte length.
///
/// # Example
///
/// ```
/// use codec_utils::string_to_array_buffer;
///
/// assert_eq!(string_to_array_buffer("abc"), b"abc");
/// assert_eq!(string_to_array_buffer("\u{ff}"), [0xff]);
/// ```
pub fn string_to_array_buffer(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u8).collect()
}
