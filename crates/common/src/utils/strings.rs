/// Renders a word as an escaped, quoted character literal if it is a
/// printable ASCII character or a newline.
///
/// ```
/// use synacore_common::utils::strings::char_literal;
///
/// assert_eq!(char_literal(97), Some(String::from("'a'")));
/// assert_eq!(char_literal(10), Some(String::from("'\\n'")));
/// assert_eq!(char_literal(7), None);
/// assert_eq!(char_literal(32768), None);
/// ```
pub fn char_literal(word: u16) -> Option<String> {
    let byte = u8::try_from(word).ok()?;
    if byte == b'\n' || (0x20..=0x7e).contains(&byte) {
        Some(format!("'{}'", char::from(byte).escape_default()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_characters_are_quoted() {
        assert_eq!(char_literal(u16::from(b' ')), Some(String::from("' '")));
        assert_eq!(char_literal(u16::from(b'z')), Some(String::from("'z'")));
        assert_eq!(char_literal(u16::from(b'~')), Some(String::from("'~'")));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        assert_eq!(char_literal(u16::from(b'\n')), Some(String::from("'\\n'")));
        assert_eq!(char_literal(u16::from(b'\'')), Some(String::from("'\\''")));
        assert_eq!(char_literal(u16::from(b'\\')), Some(String::from("'\\\\'")));
    }

    #[test]
    fn test_unprintable_words_are_skipped() {
        assert_eq!(char_literal(0), None);
        assert_eq!(char_literal(9), None);
        assert_eq!(char_literal(127), None);
        assert_eq!(char_literal(300), None);
        assert_eq!(char_literal(32771), None);
    }
}
