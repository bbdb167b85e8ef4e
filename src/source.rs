//! Raw value resolution from the command line and the environment.
//!
//! The host provides two stores:
//! - [`ArgumentStore`]: arguments passed on the command line
//! - [`EnvironmentStore`]: environment variables
//!
//! [`SourceResolver`] combines them according to a per-field [`ArgumentSource`]
//! policy. Nothing is cached; every call queries the stores again.

use strum::{Display, EnumString, VariantNames};
use tracing::trace;

/// Where an argument's raw value comes from.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
pub enum ArgumentSource {
    /// The value comes from the command line only (default)
    #[default]
    CommandLineOnly,
    /// The value comes from an environment variable only
    EnvironmentVariableOnly,
    /// The command line is checked first, then the environment
    CommandLineThenEnvironmentVariable,
    /// The environment is checked first, then the command line
    EnvironmentVariableThenCommandLine,
}

/// Command-line argument store provided by the host.
pub trait ArgumentStore {
    /// Returns true if the argument was specified.
    fn has_argument(&self, name: &str) -> bool;

    /// Returns the raw value of the argument, if specified.
    fn get_argument(&self, name: &str) -> Option<String>;
}

/// Environment variable store provided by the host.
pub trait EnvironmentStore {
    /// Returns the value of the variable, or `None` if it is not set.
    fn get_environment_variable(&self, name: &str) -> Option<String>;
}

/// Resolves raw values for argument names according to an [`ArgumentSource`].
#[derive(Clone, Copy)]
pub struct SourceResolver<'a> {
    arguments: &'a dyn ArgumentStore,
    environment: &'a dyn EnvironmentStore,
}

impl<'a> SourceResolver<'a> {
    pub fn new(arguments: &'a dyn ArgumentStore, environment: &'a dyn EnvironmentStore) -> Self {
        Self {
            arguments,
            environment,
        }
    }

    /// Returns true if any source allowed by `source` has a value for `name`.
    pub fn exists(&self, name: &str, source: ArgumentSource) -> bool {
        match source {
            ArgumentSource::CommandLineOnly => self.arguments.has_argument(name),
            ArgumentSource::EnvironmentVariableOnly => self.env_exists(name),
            ArgumentSource::CommandLineThenEnvironmentVariable
            | ArgumentSource::EnvironmentVariableThenCommandLine => {
                self.arguments.has_argument(name) || self.env_exists(name)
            }
        }
    }

    /// Fetches the raw value for `name`, honouring the priority of `source`.
    ///
    /// Returns `None` when no allowed source has the value.
    pub fn fetch(&self, name: &str, source: ArgumentSource) -> Option<String> {
        let value = match source {
            ArgumentSource::CommandLineOnly => self.arguments.get_argument(name),
            ArgumentSource::EnvironmentVariableOnly => self.env_value(name),
            ArgumentSource::CommandLineThenEnvironmentVariable => {
                if self.arguments.has_argument(name) {
                    self.arguments.get_argument(name)
                } else {
                    self.env_value(name)
                }
            }
            ArgumentSource::EnvironmentVariableThenCommandLine => match self.env_value(name) {
                Some(value) => Some(value),
                None => self.arguments.get_argument(name),
            },
        };
        trace!(argument = name, %source, found = value.is_some(), "resolved raw value");
        value
    }

    // An environment variable set to the empty string counts as absent.
    fn env_exists(&self, name: &str) -> bool {
        self.env_value(name).is_some()
    }

    fn env_value(&self, name: &str) -> Option<String> {
        self.environment
            .get_environment_variable(name)
            .filter(|value| !value.is_empty())
    }
}
