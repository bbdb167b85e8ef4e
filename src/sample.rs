//! Configuration bound by the `argbind` binary.

use strum::{EnumIter, IntoStaticStr};

use crate::descriptor::{
    BooleanArgument, DirectoryPathArgument, EnumArgument, FilePathArgument, IntegerArgument,
    StringArgument,
};
use crate::field::{Bindable, Field};
use crate::source::ArgumentSource;
use crate::value::{DirectoryPath, FilePath};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Verbosity {
    Quiet = 1,
    #[default]
    Normal = 0,
    Verbose = 2,
    Diagnostic = 3,
}

crate::bindable_enum!(Verbosity);

/// A build-style task configuration using every argument kind.
#[derive(Debug, Default)]
pub struct SampleConfig {
    pub target: Option<String>,
    pub api_token: Option<String>,
    pub dry_run: bool,
    pub jobs: i32,
    pub script: Option<FilePath>,
    pub output: Option<DirectoryPath>,
    pub verbosity: Verbosity,
}

impl Bindable for SampleConfig {
    fn fields() -> Vec<Field<Self>> {
        vec![
            crate::field!(
                SampleConfig,
                target,
                StringArgument::new("target")
                    .description("The target to run")
                    .default_value(Some("Default"))
            ),
            crate::field!(
                SampleConfig,
                api_token,
                StringArgument::new("api_token")
                    .description("Token used to publish artifacts")
                    .secret()
                    .default_value(None::<String>)
                    .source(ArgumentSource::EnvironmentVariableThenCommandLine)
            ),
            crate::field!(
                SampleConfig,
                dry_run,
                BooleanArgument::new("dry_run").description("Show what would be done")
            ),
            crate::field!(
                SampleConfig,
                jobs,
                IntegerArgument::new("jobs")
                    .description("Number of parallel jobs")
                    .min(1)
                    .max(64)
                    .default_value(1)
                    .source(ArgumentSource::CommandLineThenEnvironmentVariable)
            ),
            crate::field!(
                SampleConfig,
                script,
                FilePathArgument::new("script").description("Script to run before the build")
            ),
            crate::field!(
                SampleConfig,
                output,
                DirectoryPathArgument::new("output")
                    .description("Directory receiving the build output")
                    .default_value(".")
                    .must_exist()
            ),
            crate::field!(
                SampleConfig,
                verbosity,
                EnumArgument::new::<Verbosity>("verbosity")
                    .description("How much to log")
                    .ignore_case()
            ),
        ]
    }
}
