//! The closed 22-opcode instruction set: one table entry per opcode
//! carrying its listing mnemonic and fixed operand arity.

/// Number of opcodes in the instruction set.
pub const OPCODE_COUNT: usize = 22;

/// Description of a single opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCodeInfo {
    /// The listing mnemonic.
    mnemonic: &'static str,
    /// Number of operand words following the opcode.
    operands: u8,
}

impl OpCodeInfo {
    /// Returns the mnemonic of the opcode.
    pub const fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Returns the number of operand words following the opcode.
    pub const fn operands(&self) -> u8 {
        self.operands
    }
}

macro_rules! opcodes {
    ($($number:literal => $name:ident($mnemonic:literal, $operands:literal);)*) => {
        $(
            #[doc = concat!("The `", $mnemonic, "` opcode.")]
            pub const $name: u16 = $number;
        )*

        static OPCODE_INFO_TABLE: [Option<OpCodeInfo>; OPCODE_COUNT] = {
            let mut table = [None; OPCODE_COUNT];
            $(
                table[$number as usize] =
                    Some(OpCodeInfo { mnemonic: $mnemonic, operands: $operands });
            )*
            table
        };
    };
}

opcodes! {
    0 => HALT("halt", 0);
    1 => SET("set", 2);
    2 => PUSH("push", 1);
    3 => POP("pop", 1);
    4 => EQ("eq", 3);
    5 => GT("gt", 3);
    6 => JMP("jmp", 1);
    7 => JT("jt", 2);
    8 => JF("jf", 2);
    9 => ADD("add", 3);
    10 => MUL("mul", 3);
    11 => MOD("mod", 3);
    12 => AND("and", 3);
    13 => OR("or", 3);
    14 => NOT("not", 2);
    15 => RMEM("rmem", 2);
    16 => WMEM("wmem", 2);
    17 => CALL("call", 1);
    18 => RET("ret", 0);
    19 => OUT("out", 1);
    20 => IN("in", 1);
    21 => NOOP("noop", 0);
}

/// Returns the description of `opcode`, or `None` for a word outside the
/// instruction set.
///
/// ```
/// use synacore_vm::core::opcodes::{opcode_info, ADD};
///
/// let info = opcode_info(ADD).expect("part of the instruction set");
/// assert_eq!(info.mnemonic(), "add");
/// assert_eq!(info.operands(), 3);
/// assert!(opcode_info(22).is_none());
/// ```
pub fn opcode_info(opcode: u16) -> Option<OpCodeInfo> {
    OPCODE_INFO_TABLE.get(usize::from(opcode)).copied().flatten()
}

/// Returns the mnemonic of `opcode`, or `"unknown"` for a word outside the
/// instruction set.
pub fn opcode_name(opcode: u16) -> &'static str {
    match opcode_info(opcode) {
        Some(info) => info.mnemonic(),
        None => "unknown",
    }
}
