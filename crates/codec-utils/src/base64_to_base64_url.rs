//! Standard base64 to base64url escaping.

use crate::constants::PAD;

/// Escapes a standard base64 string into base64url.
///
/// Replaces `+` with `-` and `/` with `_`, and drops every `=`. The input is
/// not validated: anything outside the base64 alphabet is copied through
/// unchanged.
///
/// # Example
///
/// ```
/// use codec_utils::base64_to_base64_url;
///
/// assert_eq!(base64_to_base64_url("a+b/c=="), "a-b_c");
/// ```
pub fn base64_to_base64_url(b64: &str) -> String {
    let mut out = String::with_capacity(b64.len());
    for c in b64.chars() {
        match c {
            PAD => {}
            '+' => out.push('-'),
            '/' => out.push('_'),
            c => out.push(c),
        }
    }
    out
}
