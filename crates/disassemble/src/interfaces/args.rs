use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Disassemble a program image into a human-readable assembly listing",
    override_usage = "synacore disassemble <TARGET> [OPTIONS]"
)]
pub struct DisassemblerArgs {
    /// The path of the program image to disassemble.
    #[clap(required = true)]
    pub target: String,

    /// The output directory to write the output to, or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl DisassemblerArgsBuilder {
    /// Create a new builder for [`DisassemblerArgs`]
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            output: Some(String::new()),
            name: Some(String::new()),
        }
    }
}
