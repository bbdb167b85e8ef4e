//! Binds command-line arguments and environment variables onto typed
//! configuration structs.
//!
//! A configuration type implements [`Bindable`] by listing its fields with a
//! descriptor for each. [`ArgumentBinder`] then resolves, converts and
//! validates every field, collecting all failures into one [`BindErrors`].
//!
//! ```
//! use argbind::{
//!     ArgumentBinder, Bindable, CommandLineArguments, Field, IntegerArgument, MapEnvironment,
//!     RealFileSystem, field,
//! };
//!
//! #[derive(Default)]
//! struct Config {
//!     jobs: i32,
//! }
//!
//! impl Bindable for Config {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![field!(Config, jobs, IntegerArgument::new("jobs").min(1).max(8).default_value(1))]
//!     }
//! }
//!
//! let args = CommandLineArguments::parse(["--jobs=4"]);
//! let env = MapEnvironment::new();
//! let config: Config = ArgumentBinder::new(&args, &env, &RealFileSystem).bind().unwrap();
//! assert_eq!(config.jobs, 4);
//! ```

pub mod arguments;
mod binder;
pub mod cli;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod filesystem;
pub mod orchestrator;
pub mod sample;
pub mod source;
pub mod value;

use anyhow::{Context, Result};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

pub use arguments::{CommandLineArguments, MapEnvironment, ProcessEnvironment};
pub use describe::{describe, dump};
pub use descriptor::{
    ArgumentDescriptor, ArgumentSpec, BooleanArgument, Descriptor, DescriptorKind,
    DirectoryPathArgument, EnumArgument, FilePathArgument, IntegerArgument, StringArgument,
};
pub use error::{ArgumentBinderError, BindErrors, HIDDEN_STRING, NULL_STRING};
pub use field::{Bindable, Field};
pub use filesystem::{FileSystem, RealFileSystem};
pub use orchestrator::ArgumentBinder;
pub use source::{ArgumentSource, ArgumentStore, EnvironmentStore};
pub use value::{
    BindableEnum, DirectoryPath, EnumMember, EnumType, EnumTypeId, EnumValue, FieldValue, FilePath,
    Value, ValueType,
};

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Renders help text for the sample configuration.
pub fn run_describe(opts: &cli::DescribeArgs) -> String {
    ArgumentBinder::describe::<sample::SampleConfig>(&opts.task)
}

/// Binds the sample configuration from `opts.args` and the process
/// environment, returning its dump.
pub fn run_bind(opts: &cli::BindArgs) -> Result<String> {
    let arguments = CommandLineArguments::parse(&opts.args);
    let binder = ArgumentBinder::new(&arguments, &ProcessEnvironment, &RealFileSystem);

    let config = binder
        .bind::<sample::SampleConfig>()
        .context("failed to bind the sample configuration")?;

    Ok(dump(&config))
}
