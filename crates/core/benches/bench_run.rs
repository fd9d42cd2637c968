//! Benchmark for testing virtual machine performance.

use std::io::{self, Cursor};

use criterion::{criterion_group, criterion_main, Criterion};
use synacore_vm::core::{io::Console, program::Program, vm::VM};

fn test_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("synacore_run");

    // set $0 1000; add $0 $0 32767; jt $0 3; halt
    let countdown = vec![1, 32768, 1000, 9, 32768, 32768, 32767, 7, 32768, 3, 0];
    let program = Program::from_words(countdown).expect("Failed to build program");

    group.bench_function("countdown", |b| {
        b.iter(|| {
            let console =
                Console::with_io(Box::new(Cursor::new(Vec::new())), Box::new(io::sink()));
            let mut vm = VM::with_console(&program, console);
            while vm.halted.is_none() {
                vm.step().expect("Failed to step the machine");
            }
            vm.cycles
        });
    });
    group.finish();
}

criterion_group!(benches, test_run);
criterion_main!(benches);
