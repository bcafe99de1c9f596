//! Padding rule shared by the base64url unescape paths.

use crate::constants::PAD;

/// Number of `=` characters needed to bring a string of `len` characters up
/// to a whole number of 4-character groups.
///
/// # Example
///
/// ```
/// use codec_utils::padding_len;
///
/// assert_eq!(padding_len(4), 0);
/// assert_eq!(padding_len(3), 1);
/// assert_eq!(padding_len(2), 2);
/// assert_eq!(padding_len(1), 3);
/// ```
pub fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Appends the padding computed by [`padding_len`] for a string of `char_count` chars.
pub(crate) fn push_padding(out: &mut String, char_count: usize) {
    for _ in 0..padding_len(char_count) {
        out.push(PAD);
    }
}
