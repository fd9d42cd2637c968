use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Execute a program image on the virtual machine",
    override_usage = "synacore run <TARGET> [OPTIONS]"
)]
pub struct RunArgs {
    /// The path of the program image to execute.
    #[clap(default_value = "", hide_default_value = true)]
    pub target: String,

    /// The path of a playback file whose lines are fed to the program
    /// before interactive input takes over.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub playback: String,
}

impl RunArgsBuilder {
    /// Create a new builder for [`RunArgs`]
    pub fn new() -> Self {
        Self { target: Some(String::new()), playback: Some(String::new()) }
    }
}
