use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the arguments the sample configuration accepts
    Describe(DescribeArgs),

    /// Bind the sample configuration and print the result
    Bind(BindArgs),
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Text printed above the argument list
    #[arg(short, long, default_value = "Binds the sample configuration")]
    pub task: String,

    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Args, Debug)]
pub struct BindArgs {
    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Arguments to bind, given after `--` (e.g. `-- --jobs=4 --dry_run`)
    #[arg(last = true)]
    pub args: Vec<String>,
}

/// Log levels accepted by `--log-level`, mapped onto `tracing` levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Commands {
    pub fn log_level(&self) -> LogLevel {
        match self {
            Self::Describe(opts) => opts.log_level,
            Self::Bind(opts) => opts.log_level,
        }
    }
}

pub fn parse_args() -> Result<Cli> {
    Ok(Cli::parse())
}
