use crate::core::{constants::ADDRESS_SPACE, program::Program};

/// The flat address space of the machine: 32768 words, zero-filled past the
/// loaded image, never resized.
///
/// Addresses reaching `read` and `write` come out of operand resolution,
/// so they are always inside the 15-bit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u16>,
}

impl Memory {
    /// An all-zero address space.
    pub fn new() -> Self {
        Self { words: vec![0; ADDRESS_SPACE] }
    }

    /// An address space holding `program` from address 0, zero-filled after
    /// the image's last word.
    ///
    /// ```
    /// use synacore_vm::core::{memory::Memory, program::Program};
    ///
    /// let program = Program::from_words(vec![21, 21, 0]).expect("valid image");
    /// let memory = Memory::from_image(&program);
    /// assert_eq!(memory.read(1), 21);
    /// assert_eq!(memory.read(3), 0);
    /// ```
    pub fn from_image(program: &Program) -> Self {
        let mut memory = Self::new();
        memory.words[..program.len()].copy_from_slice(program.words());
        memory
    }

    /// Reads the word at `address`.
    pub fn read(&self, address: u16) -> u16 {
        self.words[usize::from(address)]
    }

    /// Overwrites the word at `address`.
    pub fn write(&mut self, address: u16, value: u16) {
        self.words[usize::from(address)] = value;
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
