use crate::{
    core::constants::{REGISTER_BASE, REGISTER_COUNT, REGISTER_LAST},
    error::Error,
};

/// The eight-slot register bank, plus the architecture's operand
/// addressing rules.
///
/// Raw operand words 0..=32767 are literals; 32768..=32775 reference the
/// registers 0..=7; anything above is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [u16; REGISTER_COUNT],
}

impl Registers {
    /// A zeroed register bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads register `index`.
    pub fn get(&self, index: usize) -> u16 {
        self.slots[index]
    }

    /// Writes register `index`.
    pub fn set(&mut self, index: usize, value: u16) {
        self.slots[index] = value;
    }

    /// Resolves a raw operand word to its effective value: literals pass
    /// through, register references read the referenced slot.
    ///
    /// ```
    /// use synacore_vm::core::register::Registers;
    ///
    /// let mut registers = Registers::new();
    /// registers.set(3, 1234);
    /// assert_eq!(registers.resolve(40).expect("literal"), 40);
    /// assert_eq!(registers.resolve(32771).expect("register"), 1234);
    /// assert!(registers.resolve(40000).is_err());
    /// ```
    pub fn resolve(&self, raw: u16) -> Result<u16, Error> {
        if raw < REGISTER_BASE {
            Ok(raw)
        } else if raw <= REGISTER_LAST {
            Ok(self.slots[usize::from(raw - REGISTER_BASE)])
        } else {
            Err(Error::InvalidAddress(raw))
        }
    }

    /// Stores `value` through a raw register-destination word. The
    /// destination is used directly as the register selector, never
    /// resolved twice; a value that is itself a register reference is
    /// resolved first, so storing a reference copies the referenced value.
    pub fn store(&mut self, dest: u16, value: u16) -> Result<(), Error> {
        let value = if value >= REGISTER_BASE { self.resolve(value)? } else { value };

        if !(REGISTER_BASE..=REGISTER_LAST).contains(&dest) {
            return Err(Error::InvalidRegister(dest));
        }

        self.slots[usize::from(dest - REGISTER_BASE)] = value;
        Ok(())
    }

    /// Snapshot of all eight registers, in index order.
    pub fn snapshot(&self) -> [u16; REGISTER_COUNT] {
        self.slots
    }
}
