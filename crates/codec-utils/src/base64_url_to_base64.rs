//! Base64url to standard base64 unescaping.

use crate::padding::push_padding;

/// Unescapes a base64url string into standard base64.
///
/// Restores `=` padding to a multiple of four characters, then replaces `-`
/// with `+` and `_` with `/`. The result is still encoded and is not checked
/// against the base64 alphabet.
///
/// # Example
///
/// ```
/// use codec_utils::base64_url_to_base64;
///
/// assert_eq!(base64_url_to_base64("Zm8"), "Zm8=");
/// assert_eq!(base64_url_to_base64("-_8"), "+/8=");
/// ```
pub fn base64_url_to_base64(b64u: &str) -> String {
    let mut out = String::with_capacity(b64u.len() + 3);
    let mut char_count = 0;
    for c in b64u.chars() {
        char_count += 1;
        match c {
            '-' => out.push('+'),
            '_' => out.push('/'),
            c => out.push(c),
        }
    }
    push_padding(&mut out, char_count);
    out
}
