use tracing::{debug, error, trace};

use crate::{
    core::{
        constants::ADDRESS_SPACE,
        diagnostics::CoreDump,
        io::Console,
        memory::Memory,
        opcodes::{self, opcode_info, opcode_name},
        program::Program,
        register::Registers,
        stack::Stack,
        vm::{
            execution::{ExecutionResult, HaltReason, Instruction},
            handlers::{self, arithmetic::BinaryOp},
        },
    },
    error::Error,
};

/// The virtual machine: flat memory, the register bank, the shared stack,
/// the program counter, and the console, driven by a fetch-decode-execute
/// loop.
#[derive(Debug)]
pub struct VM {
    /// The flat 32768-word address space.
    pub memory: Memory,
    /// The eight-slot register bank.
    pub registers: Registers,
    /// The stack shared by push/pop and call/ret.
    pub stack: Stack,
    /// The program counter.
    pub pc: u16,
    /// The character console.
    pub console: Console,
    /// Set when the machine has stopped on a non-error path.
    pub halted: Option<HaltReason>,
    /// Number of instructions executed so far.
    pub cycles: u64,
}

impl VM {
    /// A machine loaded with `program`, wired to process stdin/stdout.
    pub fn new(program: &Program) -> Self {
        Self::with_console(program, Console::new())
    }

    /// A machine loaded with `program`, wired to a caller-provided console.
    pub fn with_console(program: &Program, console: Console) -> Self {
        Self {
            memory: Memory::from_image(program),
            registers: Registers::new(),
            stack: Stack::new(),
            pc: 0,
            console,
            halted: None,
            cycles: 0,
        }
    }

    /// Fetches the word at the program counter and advances by one.
    fn fetch(&mut self) -> Result<u16, Error> {
        if usize::from(self.pc) >= ADDRESS_SPACE {
            return Err(Error::InvalidAddress(self.pc));
        }

        let word = self.memory.read(self.pc);
        self.pc += 1;
        Ok(word)
    }

    /// Executes one instruction cycle: fetch the opcode word, fetch its
    /// fixed operand count, and perform the state transition.
    pub fn step(&mut self) -> Result<Instruction, Error> {
        let address = self.pc;
        let opcode = self.fetch()?;
        let info = opcode_info(opcode).ok_or(Error::UnknownOpcode(opcode))?;

        let mut operands = Vec::with_capacity(usize::from(info.operands()));
        for _ in 0..info.operands() {
            operands.push(self.fetch()?);
        }

        trace!(address, opcode = opcode_name(opcode), "executing instruction");

        match opcode {
            opcodes::HALT => handlers::control::halt(self)?,
            opcodes::SET => handlers::data::set(self, operands[0], operands[1])?,
            opcodes::PUSH => handlers::stack::push(self, operands[0])?,
            opcodes::POP => handlers::stack::pop(self, operands[0])?,
            opcodes::EQ => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Eq,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::GT => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Gt,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::JMP => handlers::control::jmp(self, operands[0])?,
            opcodes::JT => handlers::control::jt(self, operands[0], operands[1])?,
            opcodes::JF => handlers::control::jf(self, operands[0], operands[1])?,
            opcodes::ADD => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Add,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::MUL => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Mul,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::MOD => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Mod,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::AND => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::And,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::OR => {
                handlers::arithmetic::binary(
                    self,
                    BinaryOp::Or,
                    operands[0],
                    operands[1],
                    operands[2],
                )?
            }
            opcodes::NOT => handlers::arithmetic::not(self, operands[0], operands[1])?,
            opcodes::RMEM => handlers::data::rmem(self, operands[0], operands[1])?,
            opcodes::WMEM => handlers::data::wmem(self, operands[0], operands[1])?,
            opcodes::CALL => handlers::control::call(self, operands[0])?,
            opcodes::RET => handlers::control::ret(self)?,
            opcodes::OUT => handlers::io::out(self, operands[0])?,
            opcodes::IN => handlers::io::input(self, operands[0])?,
            opcodes::NOOP => handlers::control::noop(self)?,
            _ => return Err(Error::UnknownOpcode(opcode)),
        }

        self.cycles += 1;

        Ok(Instruction { address, opcode, operands })
    }

    /// Runs the fetch-decode-execute loop until the machine halts or a
    /// fatal error terminates it. Both paths emit the diagnostic dump; the
    /// fatal path additionally surfaces the error to the caller.
    pub fn execute(&mut self) -> Result<ExecutionResult, Error> {
        loop {
            if let Some(halt) = self.halted {
                let dump = self.core_dump();
                let _ = self.console.flush();
                debug!(cycles = self.cycles, pc = dump.pc, "machine halted");
                dump.display();
                return Ok(ExecutionResult { halt, cycles: self.cycles, dump });
            }

            if let Err(err) = self.step() {
                let dump = self.core_dump();
                let _ = self.console.flush();
                error!(%err, pc = dump.pc, "fatal machine error");
                dump.display();
                return Err(err);
            }
        }
    }

    /// Diagnostic snapshot of the program counter and registers.
    pub fn core_dump(&self) -> CoreDump {
        CoreDump { pc: self.pc, registers: self.registers.snapshot() }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::core::{
        io::{capture::Sink, Console},
        program::Program,
        vm::{HaltReason, VM},
    };
    use crate::error::Error;

    fn machine(words: &[u16]) -> (VM, Sink) {
        let program = Program::from_words(words.to_vec()).expect("valid image");
        let sink = Sink::new();
        let console =
            Console::with_io(Box::new(Cursor::new(Vec::new())), Box::new(sink.clone()));
        (VM::with_console(&program, console), sink)
    }

    fn machine_with_input(words: &[u16], input: &[u8]) -> (VM, Sink) {
        let program = Program::from_words(words.to_vec()).expect("valid image");
        let sink = Sink::new();
        let console =
            Console::with_io(Box::new(Cursor::new(input.to_vec())), Box::new(sink.clone()));
        (VM::with_console(&program, console), sink)
    }

    #[test]
    fn test_add_out_halt_scenario() {
        let (mut vm, sink) = machine(&[9, 32768, 4, 5, 19, 32768, 21, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.halt, HaltReason::Halt);
        assert_eq!(result.cycles, 4);
        assert_eq!(sink.contents(), vec![9u8]);
    }

    #[test]
    fn test_set_out_round_trip() {
        for value in [7u16, 10, 65, 122, 126] {
            let (mut vm, sink) = machine(&[1, 32770, value, 19, 32770, 0]);
            vm.execute().expect("clean halt");
            assert_eq!(sink.contents(), vec![value as u8]);
        }
    }

    #[test]
    fn test_call_then_ret_returns_past_the_call() {
        let (mut vm, _) = machine(&[17, 3, 0, 18]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.halt, HaltReason::Halt);
        assert_eq!(result.cycles, 3);
        assert_eq!(result.dump.pc, 3);
    }

    #[test]
    fn test_ret_on_empty_stack_halts() {
        let (mut vm, _) = machine(&[18]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.halt, HaltReason::EmptyCallStack);
        assert_eq!(result.cycles, 1);
    }

    #[test]
    fn test_jf_jumps_only_on_zero() {
        for condition in [0u16, 1, 32767] {
            let (mut vm, _) = machine(&[8, condition, 5, 0, 0, 0]);
            let result = vm.execute().expect("clean halt");

            let expected_pc = if condition == 0 { 6 } else { 4 };
            assert_eq!(result.dump.pc, expected_pc, "jf with condition {condition}");
        }
    }

    #[test]
    fn test_jt_jumps_only_on_nonzero() {
        for condition in [0u16, 1, 32767] {
            let (mut vm, _) = machine(&[7, condition, 5, 0, 0, 0]);
            let result = vm.execute().expect("clean halt");

            let expected_pc = if condition == 0 { 4 } else { 6 };
            assert_eq!(result.dump.pc, expected_pc, "jt with condition {condition}");
        }
    }

    #[test]
    fn test_jmp_redirects_the_counter() {
        let (mut vm, _) = machine(&[6, 4, 0, 0, 21, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.cycles, 3);
        assert_eq!(result.dump.pc, 6);
    }

    #[test]
    fn test_push_pop_move_values_through_registers() {
        let (mut vm, _) = machine(&[2, 311, 3, 32773, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.dump.registers[5], 311);
        assert!(vm.stack.is_empty());
    }

    #[test]
    fn test_in_opcode_consumes_one_line_character_by_character() {
        let (mut vm, _) = machine_with_input(&[20, 32768, 20, 32769, 20, 32770, 0], b"ab\n");
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.dump.registers[0], u16::from(b'a'));
        assert_eq!(result.dump.registers[1], u16::from(b'b'));
        assert_eq!(result.dump.registers[2], u16::from(b'\n'));
    }

    #[test]
    fn test_wmem_rmem_round_trip() {
        let (mut vm, _) = machine(&[16, 500, 1234, 15, 32768, 500, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.dump.registers[0], 1234);
        assert_eq!(vm.memory.read(500), 1234);
    }

    #[test]
    fn test_not_is_a_15_bit_complement() {
        let (mut vm, _) = machine(&[14, 32768, 123, 14, 32769, 32768, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.dump.registers[0], 32644);
        assert_eq!(result.dump.registers[1], 123);
    }

    #[test]
    fn test_eq_gt_write_flag_bits() {
        let (mut vm, _) = machine(&[4, 32768, 7, 7, 5, 32769, 9, 4, 0]);
        let result = vm.execute().expect("clean halt");
        assert_eq!(result.dump.registers[0], 1);
        assert_eq!(result.dump.registers[1], 1);

        let (mut vm, _) = machine(&[4, 32768, 7, 8, 5, 32769, 4, 9, 0]);
        let result = vm.execute().expect("clean halt");
        assert_eq!(result.dump.registers[0], 0);
        assert_eq!(result.dump.registers[1], 0);
    }

    #[test]
    fn test_registers_resolve_inside_operands() {
        let (mut vm, _) = machine(&[1, 32768, 5, 9, 32769, 32768, 32768, 0]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.dump.registers[1], 10);
    }

    #[test]
    fn test_self_modifying_code_takes_effect() {
        let (mut vm, _) = machine(&[16, 4, 0, 21, 21]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.halt, HaltReason::Halt);
        assert_eq!(result.cycles, 3);
    }

    #[test]
    fn test_unknown_opcode_is_fatal() {
        let (mut vm, _) = machine(&[22]);
        let err = vm.execute().unwrap_err();
        assert!(matches!(err, Error::UnknownOpcode(22)));
    }

    #[test]
    fn test_invalid_operand_is_fatal() {
        let (mut vm, _) = machine(&[2, 40000]);
        let err = vm.execute().unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(40000)));
    }

    #[test]
    fn test_store_to_non_register_is_fatal() {
        let (mut vm, _) = machine(&[1, 100, 5]);
        let err = vm.execute().unwrap_err();
        assert!(matches!(err, Error::InvalidRegister(100)));
    }

    #[test]
    fn test_pop_on_empty_stack_is_fatal() {
        let (mut vm, _) = machine(&[3, 32768]);
        let err = vm.execute().unwrap_err();
        assert!(matches!(err, Error::StackUnderflow));
    }

    #[test]
    fn test_running_off_the_address_space_is_fatal() {
        let (mut vm, _) = machine(&[16, 32767, 19, 6, 32767]);
        let err = vm.execute().unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(32768)));
    }

    #[test]
    fn test_execute_counts_cycles() {
        let (mut vm, _) = machine(&[21, 21, 21, 0]);
        let result = vm.execute().expect("clean halt");
        assert_eq!(result.cycles, 4);
    }

    #[test]
    fn test_empty_image_halts_immediately() {
        let (mut vm, _) = machine(&[]);
        let result = vm.execute().expect("clean halt");

        assert_eq!(result.halt, HaltReason::Halt);
        assert_eq!(result.cycles, 1);
    }
}
