pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use error::Error;
use log_args::LogArgs;
use output::{build_output_path, print_with_less};
use tracing::info;

use clap::{Parser, Subcommand};

use synacore_common::utils::io::file::{short_path, write_file};
use synacore_config::{config, ConfigArgs, Configuration};
use synacore_core::{
    synacore_disassembler::{disassemble, DisassemblerArgs},
    synacore_runner::{run, RunArgs},
    synacore_solvers::{solve, SolveArgs},
};

#[derive(Debug, Parser)]
#[clap(name = "synacore", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "Synacore is a virtual machine, disassembler, and puzzle toolkit for the Synacor challenge."
)]
#[allow(clippy::large_enum_variant)]
pub enum Subcommands {
    #[clap(name = "run", about = "Execute a program image on the virtual machine")]
    Run(RunArgs),

    #[clap(name = "disassemble", about = "Disassemble a program image to assembly")]
    Disassemble(DisassemblerArgs),

    #[clap(name = "solve", about = "Solve one of the challenge puzzles directly")]
    Solve(SolveArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _ = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Run(mut cmd) => {
            // if the user has not specified a target, use the configured image
            if cmd.target.as_str() == "" {
                cmd.target = configuration.rom_path;
            }
            if cmd.target.as_str() == "" {
                return Err(Error::Generic(
                    "no program image specified and no rom_path configured".to_string(),
                ));
            }

            // if the user has not specified a playback file, use the default
            if cmd.playback.as_str() == "" {
                cmd.playback = configuration.playback_path;
            }

            run(cmd).map_err(|e| Error::Generic(format!("failed to run program: {}", e)))?;
        }

        Subcommands::Disassemble(cmd) => {
            // if the user has passed an output filename, override the default filename
            let mut filename: String = "disassembled.asm".to_string();
            let given_name = cmd.name.as_str();

            if !given_name.is_empty() {
                filename = format!("{}-{}", given_name, filename);
            }

            let assembly = disassemble(cmd.clone())
                .map_err(|e| Error::Generic(format!("failed to disassemble image: {}", e)))?;

            if cmd.output == "print" {
                print_with_less(&assembly)
                    .map_err(|e| Error::Generic(format!("failed to print assembly: {}", e)))?;
            } else {
                let output_path = build_output_path(&cmd.output, &cmd.target, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_file(&output_path, &assembly)
                    .map_err(|e| Error::Generic(format!("failed to write assembly: {}", e)))?;
                info!("wrote assembly to '{}'.", short_path(&output_path));
            }
        }

        Subcommands::Solve(cmd) => {
            let answer =
                solve(cmd).map_err(|e| Error::Generic(format!("failed to solve puzzle: {}", e)))?;
            println!("{answer}");
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}
