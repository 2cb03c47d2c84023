//! Byte classification for live-typed input
//!
//! Only the bytes listed here are special; everything else, including
//! unrecognized escape sequences and multi-byte UTF-8, is ordinary text.

/// Escape byte that starts terminal control sequences
pub const ESC: u8 = 27;

/// Carriage return, sent by the Enter key in raw mode
pub const CR: u8 = 13;

/// Ctrl-C in raw mode
pub const CTRL_C: u8 = 3;

/// Classification of a single input byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// Sentence or clause punctuation (`.`, `!`, `?`, `,`)
    Punctuation,
    /// Whitespace, including NEL and NBSP
    Whitespace,
    /// Anything else
    Text,
}

impl ByteClass {
    /// Classify a byte
    pub fn of(byte: u8) -> Self {
        if is_punctuation(byte) {
            ByteClass::Punctuation
        } else if is_whitespace(byte) {
            ByteClass::Whitespace
        } else {
            ByteClass::Text
        }
    }
}

/// Check if a byte ends a word
pub fn is_whitespace(byte: u8) -> bool {
    matches!(
        byte,
        b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ' | 0x85 | 0xA0
    )
}

/// Check if a byte is punctuation that may end a sentence or clause
pub fn is_punctuation(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?' | b',')
}

/// Comma separates clauses but never ends a sentence
pub fn is_comma(byte: u8) -> bool {
    byte == b','
}

/// Check if a byte is a hyphen
pub fn is_hyphen(byte: u8) -> bool {
    byte == b'-'
}

/// Final byte of a cursor key sequence (`A`..=`D`)
fn is_arrow_key(byte: u8) -> bool {
    (65..=68).contains(&byte)
}

/// Modifier parameter of a modified cursor key (Shift, Alt, Ctrl, ...)
fn is_arrow_modifier(byte: u8) -> bool {
    (50..=56).contains(&byte)
}

/// Check if a 6-byte window holds a cursor key sequence
///
/// Recognizes `ESC [ A..D` and `ESC [ 1 ; <2..8> A..D`.
pub fn is_arrow_sequence(window: &[u8; 6]) -> bool {
    arrow_sequence_len(window).is_some()
}

/// Length of the cursor key sequence at the start of `bytes`, if any
pub fn arrow_sequence_len(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [ESC, b'[', b'1', b';', modifier, key, ..]
            if is_arrow_modifier(*modifier) && is_arrow_key(*key) =>
        {
            Some(6)
        }
        [ESC, b'[', key, ..] if is_arrow_key(*key) => Some(3),
        _ => None,
    }
}

/// Whether `bytes` is an incomplete cursor key sequence
pub fn is_arrow_prefix(bytes: &[u8]) -> bool {
    match bytes {
        [ESC] | [ESC, b'['] | [ESC, b'[', b'1'] | [ESC, b'[', b'1', b';'] => true,
        [ESC, b'[', b'1', b';', modifier] => is_arrow_modifier(*modifier),
        _ => false,
    }
}

/// Character-level counterpart of [`ByteClass::of`]
///
/// NEL and NBSP are matched as code points so that UTF-8 encoded text
/// classifies the same way as raw Latin-1 keystrokes.
pub fn char_class(ch: char) -> ByteClass {
    match ch {
        '\u{85}' | '\u{A0}' => ByteClass::Whitespace,
        c if c.is_ascii() => ByteClass::of(c as u8),
        _ => ByteClass::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_bytes() {
        for byte in [b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ', 0x85, 0xA0] {
            assert!(is_whitespace(byte), "{byte:#x} should be whitespace");
        }
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(b'.'));
        assert!(!is_whitespace(0));
    }

    #[test]
    fn test_punctuation_bytes() {
        for byte in *b".!?," {
            assert!(is_punctuation(byte));
        }
        assert!(!is_punctuation(b';'));
        assert!(!is_punctuation(b'-'));
        assert!(is_comma(b','));
        assert!(!is_comma(b'.'));
    }

    #[test]
    fn test_byte_class() {
        assert_eq!(ByteClass::of(b'.'), ByteClass::Punctuation);
        assert_eq!(ByteClass::of(b' '), ByteClass::Whitespace);
        assert_eq!(ByteClass::of(b'x'), ByteClass::Text);
    }

    #[test]
    fn test_plain_arrows() {
        for key in *b"ABCD" {
            let window = [ESC, b'[', key, 0, 0, 0];
            assert!(is_arrow_sequence(&window));
            assert_eq!(arrow_sequence_len(&window[..3]), Some(3));
        }
        assert!(!is_arrow_sequence(&[ESC, b'[', b'E', 0, 0, 0]));
    }

    #[test]
    fn test_modified_arrows() {
        let shift_up = [ESC, b'[', b'1', b';', b'2', b'A'];
        assert!(is_arrow_sequence(&shift_up));
        assert_eq!(arrow_sequence_len(&shift_up), Some(6));

        let ctrl_left = [ESC, b'[', b'1', b';', b'5', b'D'];
        assert!(is_arrow_sequence(&ctrl_left));

        // modifier out of range
        let bogus = [ESC, b'[', b'1', b';', b'9', b'A'];
        assert!(!is_arrow_sequence(&bogus));
    }

    #[test]
    fn test_arrow_prefixes() {
        assert!(is_arrow_prefix(&[ESC]));
        assert!(is_arrow_prefix(&[ESC, b'[']));
        assert!(is_arrow_prefix(&[ESC, b'[', b'1', b';', b'5']));
        assert!(!is_arrow_prefix(&[ESC, b'[', b'1', b';', b'9']));
        assert!(!is_arrow_prefix(&[ESC, b'[', b'A']));
        assert!(!is_arrow_prefix(b"x"));
        assert!(!is_arrow_prefix(&[]));
    }

    #[test]
    fn test_partial_sequences_are_not_arrows() {
        assert_eq!(arrow_sequence_len(&[ESC]), None);
        assert_eq!(arrow_sequence_len(&[ESC, b'[']), None);
        assert_eq!(arrow_sequence_len(b"[A"), None);
        // truncated modified sequence still starts with a valid "ESC [ 1"
        assert_eq!(arrow_sequence_len(&[ESC, b'[', b'1', b';']), None);
    }

    #[test]
    fn test_char_class() {
        assert_eq!(char_class('\u{A0}'), ByteClass::Whitespace);
        assert_eq!(char_class('\u{85}'), ByteClass::Whitespace);
        assert_eq!(char_class('?'), ByteClass::Punctuation);
        assert_eq!(char_class('日'), ByteClass::Text);
    }
}
