//! clap [Args](clap::Args) for logging configuration.

use clap::{ArgAction, Args};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{filter::Directive, EnvFilter};

/// The log configuration.
#[derive(Debug, Args)]
#[clap(next_help_heading = "LOGGING")]
pub struct LogArgs {
    /// The filter to use for logs written to stderr.
    #[clap(long = "log.filter", value_name = "FILTER", global = true, default_value = "")]
    pub log_filter: String,

    /// The verbosity settings for the tracer.
    #[clap(flatten)]
    pub verbosity: Verbosity,
}

impl LogArgs {
    /// Initializes tracing with the configured options from cli args. Logs
    /// go to stderr so that program output stays clean on stdout.
    pub fn init_tracing(&self) -> eyre::Result<()> {
        let mut filter =
            EnvFilter::builder().with_default_directive(self.verbosity.directive()).from_env()?;
        if !self.log_filter.is_empty() {
            filter = filter.add_directive(self.log_filter.parse()?);
        }

        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

        Ok(())
    }
}

/// The verbosity settings for the cli.
#[derive(Debug, Copy, Clone, Args)]
#[clap(next_help_heading = "DISPLAY")]
pub struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v     Warnings & Errors
    /// -vv    Info
    /// -vvv   Debug
    /// -vvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 1, verbatim_doc_comment, help_heading = "DISPLAY")]
    verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q', global = true, help_heading = "DISPLAY")]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding [Directive] for the given verbosity, or none if the verbosity
    /// corresponds to silent.
    pub fn directive(&self) -> Directive {
        if self.quiet {
            LevelFilter::OFF.into()
        } else {
            let level = match self.verbosity - 1 {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            };

            level.into()
        }
    }
}
