use std::time::Instant;

use synacore_common::utils::strings::char_literal;
use synacore_vm::core::{
    constants::{REGISTER_BASE, REGISTER_LAST},
    opcodes::{opcode_info, OUT},
    program::Program,
};
use tracing::{debug, info};

use crate::{error::Error, interfaces::DisassemblerArgs};

/// Disassemble a program image into an assembly listing, with one line per
/// instruction in the form `<address>:\t<mnemonic>\t<operand>, <operand>, ...`.
///
/// Words that cannot begin an instruction, either because the word is not a
/// valid opcode or because the image ends before the instruction's operands
/// do, are rendered as `data` lines so that every word of the image appears
/// exactly once in the listing.
pub fn disassemble(args: DisassemblerArgs) -> Result<String, Error> {
    let start_time = Instant::now();

    let program = Program::from_file(&args.target)?;
    let words = program.words();
    debug!("loaded {} words from '{}'.", words.len(), args.target);

    let start_disassemble_time = Instant::now();
    let mut asm = String::new();
    let mut address = 0;
    while address < words.len() {
        let word = words[address];

        // a word only starts an instruction if it is a known opcode and all
        // of its operands fit within the image
        let Some(opcode) = opcode_info(word) else {
            asm.push_str(&format!("{address}:\tdata\t{word}\n"));
            address += 1;
            continue;
        };
        let arity = usize::from(opcode.operands());
        let Some(operands) = words.get(address + 1..address + 1 + arity) else {
            asm.push_str(&format!("{address}:\tdata\t{word}\n"));
            address += 1;
            continue;
        };

        asm.push_str(&render_instruction(
            address,
            word,
            opcode.mnemonic(),
            operands,
        ));
        address += 1 + arity;
    }
    debug!("disassembly took {:?}.", start_disassemble_time.elapsed());

    info!("disassembled {} words successfully.", words.len());
    debug!("disassembly took {:?}.", start_time.elapsed());

    Ok(asm)
}

/// Render a single instruction as one listing line, operands separated by
/// `", "` and the whole line terminated by a newline.
fn render_instruction(address: usize, opcode: u16, mnemonic: &str, operands: &[u16]) -> String {
    let mut line = format!("{address}:\t{mnemonic}");

    let rendered = operands
        .iter()
        .enumerate()
        .map(|(position, operand)| render_operand(opcode, position, *operand))
        .collect::<Vec<String>>();
    if !rendered.is_empty() {
        line.push('\t');
        line.push_str(&rendered.join(", "));
    }

    line.push('\n');
    line
}

/// Render a single operand. Register references render as `$0` through `$7`,
/// and the operand of `out` additionally renders as a quoted character
/// literal when it holds a printable character.
fn render_operand(opcode: u16, position: usize, operand: u16) -> String {
    if (REGISTER_BASE..=REGISTER_LAST).contains(&operand) {
        return format!("${}", operand - REGISTER_BASE);
    }

    if opcode == OUT && position == 0 {
        if let Some(literal) = char_literal(operand) {
            return literal;
        }
    }

    operand.to_string()
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use synacore_vm::core::opcodes::{ADD, HALT, JMP, OUT, SET};

    use super::*;
    use crate::interfaces::DisassemblerArgsBuilder;

    fn write_image(name: &str, words: &[u16]) -> String {
        let mut bytes = Vec::with_capacity(words.len() * 2);
        for word in words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        let path = env::temp_dir().join(name);
        fs::write(&path, bytes).expect("failed to write image");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_render_operand_register() {
        assert_eq!(render_operand(SET, 0, 32768), "$0");
        assert_eq!(render_operand(SET, 0, 32775), "$7");
    }

    #[test]
    fn test_render_operand_literal() {
        assert_eq!(render_operand(ADD, 1, 123), "123");
        assert_eq!(render_operand(ADD, 2, 32767), "32767");
    }

    #[test]
    fn test_render_operand_printable_out() {
        assert_eq!(render_operand(OUT, 0, 65), "'A'");
        assert_eq!(render_operand(OUT, 0, 10), "'\\n'");

        // only `out` renders character literals
        assert_eq!(render_operand(ADD, 0, 65), "65");
    }

    #[test]
    fn test_disassemble_listing() {
        let target = write_image(
            "test_disassemble_listing.bin",
            &[SET, 32768, 4, ADD, 32769, 32768, 10, OUT, 65, HALT],
        );

        let asm = disassemble(
            DisassemblerArgsBuilder::new()
                .target(target.clone())
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(
            asm,
            "0:\tset\t$0, 4\n3:\tadd\t$1, $0, 10\n7:\tout\t'A'\n9:\thalt\n"
        );

        let _ = fs::remove_file(target);
    }

    #[test]
    fn test_disassemble_data_words() {
        // 999 is not an opcode, and the trailing `jmp` is missing its operand
        let target = write_image("test_disassemble_data_words.bin", &[999, JMP]);

        let asm = disassemble(
            DisassemblerArgsBuilder::new()
                .target(target.clone())
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(asm, "0:\tdata\t999\n1:\tdata\t6\n");

        let _ = fs::remove_file(target);
    }
}
