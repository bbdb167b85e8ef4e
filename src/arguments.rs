//! Production and in-memory implementations of the value stores.

use std::collections::HashMap;

use tracing::debug;

use crate::source::{ArgumentStore, EnvironmentStore};

/// Command-line arguments in host syntax.
///
/// Accepted forms:
/// - `--name=value` and `-name=value`: `name` is `value` (may be empty)
/// - `--name` and `-name`: `name` is `"true"`
///
/// Tokens without a leading dash are ignored. Later occurrences of the same
/// name replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineArguments {
    values: HashMap<String, String>,
}

impl CommandLineArguments {
    /// Parses host arguments. The program name must not be included.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();
        // Ignored tokens are logged by position only; they may hold secrets.
        for (position, arg) in args.into_iter().enumerate() {
            let arg = arg.as_ref();
            let Some(body) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                debug!(position, "ignoring positional token");
                continue;
            };
            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, value),
                None => (body, "true"),
            };
            if name.is_empty() {
                debug!(position, "ignoring token without an argument name");
                continue;
            }
            values.insert(name.to_string(), value.to_string());
        }
        Self { values }
    }

    /// Builds a store from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ArgumentStore for CommandLineArguments {
    fn has_argument(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn get_argument(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Environment store backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentStore for ProcessEnvironment {
    fn get_environment_variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment store backed by an explicit map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentStore for MapEnvironment {
    fn get_environment_variable(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
