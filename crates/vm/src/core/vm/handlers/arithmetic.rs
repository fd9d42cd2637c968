use crate::{
    core::{
        constants::{MODULUS, WORD_MASK},
        vm::VM,
    },
    error::Error,
};

/// The closed set of binary operators sharing one execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Sum, reduced modulo 32768.
    Add,
    /// Product, reduced modulo 32768.
    Mul,
    /// Remainder.
    Mod,
    /// Bitwise conjunction.
    And,
    /// Bitwise disjunction.
    Or,
    /// Equality test, storing 1 or 0.
    Eq,
    /// Greater-than test, storing 1 or 0.
    Gt,
}

impl BinaryOp {
    /// Applies the operator to two resolved 15-bit values.
    ///
    /// ```
    /// use synacore_vm::core::vm::handlers::arithmetic::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::Add.apply(32758, 15), 5);
    /// assert_eq!(BinaryOp::Gt.apply(3, 2), 1);
    /// ```
    pub fn apply(self, lhs: u16, rhs: u16) -> u16 {
        match self {
            Self::Add => ((u32::from(lhs) + u32::from(rhs)) % u32::from(MODULUS)) as u16,
            Self::Mul => ((u32::from(lhs) * u32::from(rhs)) % u32::from(MODULUS)) as u16,
            // a zero divisor yields zero
            Self::Mod => {
                if rhs == 0 {
                    0
                } else {
                    lhs % rhs
                }
            }
            Self::And => lhs & rhs,
            Self::Or => lhs | rhs,
            Self::Eq => u16::from(lhs == rhs),
            Self::Gt => u16::from(lhs > rhs),
        }
    }
}

/// Applies `op` to the two resolved source operands and stores the result
/// in the destination register.
pub fn binary(vm: &mut VM, op: BinaryOp, dest: u16, lhs: u16, rhs: u16) -> Result<(), Error> {
    let lhs = vm.registers.resolve(lhs)?;
    let rhs = vm.registers.resolve(rhs)?;
    vm.registers.store(dest, op.apply(lhs, rhs))
}

/// `not`: stores the 15-bit complement of the resolved operand.
pub fn not(vm: &mut VM, dest: u16, value: u16) -> Result<(), Error> {
    let value = vm.registers.resolve(value)?;
    vm.registers.store(dest, !value & WORD_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_add_and_mul_wrap_at_the_modulus() {
        assert_eq!(BinaryOp::Add.apply(32767, 1), 0);
        assert_eq!(BinaryOp::Add.apply(32767, 32767), 32766);
        assert_eq!(BinaryOp::Mul.apply(2, 16384), 0);
        assert_eq!(BinaryOp::Mul.apply(32767, 32767), 1);
    }

    #[test]
    fn test_random_operands_stay_in_word_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let lhs: u16 = rng.gen_range(0..32768);
            let rhs: u16 = rng.gen_range(0..32768);

            let sum = BinaryOp::Add.apply(lhs, rhs);
            let product = BinaryOp::Mul.apply(lhs, rhs);
            assert_eq!(u32::from(sum), (u32::from(lhs) + u32::from(rhs)) % 32768);
            assert_eq!(u32::from(product), (u32::from(lhs) * u32::from(rhs)) % 32768);
            assert!(sum < 32768 && product < 32768);
        }
    }

    #[test]
    fn test_mod_matches_remainder_and_tolerates_zero() {
        assert_eq!(BinaryOp::Mod.apply(17, 5), 2);
        assert_eq!(BinaryOp::Mod.apply(5, 17), 5);
        assert_eq!(BinaryOp::Mod.apply(17, 0), 0);
    }

    #[test]
    fn test_comparisons_store_exactly_zero_or_one() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let lhs: u16 = rng.gen_range(0..32768);
            let rhs: u16 = rng.gen_range(0..32768);
            assert!(BinaryOp::Eq.apply(lhs, rhs) <= 1);
            assert!(BinaryOp::Gt.apply(lhs, rhs) <= 1);
        }
        assert_eq!(BinaryOp::Eq.apply(7, 7), 1);
        assert_eq!(BinaryOp::Eq.apply(7, 8), 0);
        assert_eq!(BinaryOp::Gt.apply(8, 7), 1);
        assert_eq!(BinaryOp::Gt.apply(7, 7), 0);
    }

    #[test]
    fn test_bitwise_operators_stay_masked() {
        assert_eq!(BinaryOp::And.apply(0b101, 0b110), 0b100);
        assert_eq!(BinaryOp::Or.apply(0b101, 0b110), 0b111);
        assert_eq!(BinaryOp::And.apply(32767, 32767), 32767);
    }
}
