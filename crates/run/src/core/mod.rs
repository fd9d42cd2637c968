use std::{fs::File, io::BufReader, time::Instant};

use synacore_vm::core::{
    io::Console,
    program::Program,
    vm::{ExecutionResult, VM},
};
use tracing::{debug, info};

use crate::{error::Error, interfaces::RunArgs};

/// Load a program image into a fresh machine and execute it until it
/// halts.
///
/// The machine's console is wired to process stdin/stdout. When a playback
/// file is supplied its lines are fed to the program first, echoed to the
/// output as they are consumed, and interactive input takes over once the
/// file runs out.
pub fn run(args: RunArgs) -> Result<ExecutionResult, Error> {
    let start_time = Instant::now();

    let program = Program::from_file(&args.target)?;
    debug!("loaded {} words from '{}'.", program.len(), args.target);

    let mut console = Console::new();
    if !args.playback.is_empty() {
        let playback = File::open(&args.playback)?;
        console = console.with_playback(Box::new(BufReader::new(playback)));
        info!("replaying input from '{}'.", args.playback);
    }

    let mut vm = VM::with_console(&program, console);

    let start_execution_time = Instant::now();
    let result = vm.execute()?;
    debug!("program execution took {:?}.", start_execution_time.elapsed());

    info!("program halted after {} cycles.", result.cycles);
    debug!("run took {:?}.", start_time.elapsed());

    Ok(result)
}
