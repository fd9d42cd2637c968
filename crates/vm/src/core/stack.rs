use std::collections::VecDeque;

use crate::error::Error;

/// The machine stack: an unbounded LIFO word sequence shared by the
/// explicit `push`/`pop` opcodes and `call`/`ret` linkage.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Stack {
    stack: VecDeque<u16>,
}

impl Stack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { stack: VecDeque::new() }
    }

    /// Pushes a word onto the top of the stack.
    ///
    /// ```
    /// use synacore_vm::core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(123);
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn push(&mut self, value: u16) {
        self.stack.push_front(value);
    }

    /// Removes and returns the top word. Popping an empty stack is fatal
    /// to the whole machine, not locally recoverable.
    ///
    /// ```
    /// use synacore_vm::core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(123);
    /// assert_eq!(stack.pop().expect("non-empty"), 123);
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<u16, Error> {
        self.stack.pop_front().ok_or(Error::StackUnderflow)
    }

    /// Returns the top word without removing it.
    ///
    /// ```
    /// use synacore_vm::core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(5);
    /// assert_eq!(stack.peek(), Some(5));
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn peek(&self) -> Option<u16> {
        self.stack.front().copied()
    }

    /// The number of words currently on the stack.
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack holds no words.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
