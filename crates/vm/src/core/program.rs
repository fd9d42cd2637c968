use std::path::Path;

use crate::{core::constants::ADDRESS_SPACE, error::LoadError};

/// A program image: the word sequence decoded from a binary file, one
/// memory cell per word in address order starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<u16>,
}

impl Program {
    /// Decodes an image from raw bytes. Words are 16-bit little-endian,
    /// low byte first.
    ///
    /// ```
    /// use synacore_vm::core::program::Program;
    ///
    /// let program = Program::from_bytes(&[9, 0, 0, 128]).expect("valid image");
    /// assert_eq!(program.words(), [9, 32768]);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        if bytes.len() % 2 != 0 {
            return Err(LoadError::OddByteCount(bytes.len()));
        }

        let words: Vec<u16> =
            bytes.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();

        Self::from_words(words)
    }

    /// Builds an image directly from decoded words.
    pub fn from_words(words: Vec<u16>) -> Result<Self, LoadError> {
        if words.len() > ADDRESS_SPACE {
            return Err(LoadError::TooLarge(words.len()));
        }

        Ok(Self { words })
    }

    /// Reads and decodes an image file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// The decoded words in address order.
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_decode_little_endian() {
        let program =
            Program::from_bytes(&[0x15, 0x00, 0x00, 0x80, 0xff, 0x7f]).expect("valid image");
        assert_eq!(program.words(), [21, 32768, 32767]);
    }

    #[test]
    fn test_odd_byte_count_is_rejected() {
        let err = Program::from_bytes(&[9, 0, 4]).unwrap_err();
        assert!(matches!(err, LoadError::OddByteCount(3)));
    }

    #[test]
    fn test_empty_image_is_valid() {
        let program = Program::from_bytes(&[]).expect("empty image");
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let bytes = vec![0u8; (ADDRESS_SPACE + 1) * 2];
        let err = Program::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge(_)));
    }

    #[test]
    fn test_unreadable_file_is_a_load_error() {
        let err = Program::from_file("/definitely/not/a/real/image.bin").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
