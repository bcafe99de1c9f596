//! Tests for byte buffer conversion (string_to_array_buffer, array_buffer_to_string).

use codec_utils::{array_buffer_to_string, string_to_array_buffer};

#[test]
fn ascii() {
    assert_eq!(string_to_array_buffer("hello"), b"hello");
}

#[test]
fn length_is_char_count() {
    let text = "aé\u{100}\u{1f600}";
    let buf = string_to_array_buffer(text);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf, [b'a', 0xe9, 0x00, 0x00]);
}

#[test]
fn latin1_round_trip() {
    let text: String = (0u8..=255).map(char::from).collect();
    let buf = string_to_array_buffer(&text);
    assert_eq!(buf, (0u8..=255).collect::<Vec<_>>());
    assert_eq!(array_buffer_to_string(&buf), text);
}
