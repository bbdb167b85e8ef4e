//! Binding descriptors.
//!
//! A descriptor is the static metadata attached to one field: the argument
//! name, description, requiredness, secrecy, source policy, default value and
//! kind-specific constraints. Descriptors are read-only once declared.
//!
//! Each kind (string, boolean, integer, enum, file path, directory path) is a
//! struct implementing [`ArgumentDescriptor`]. The [`Descriptor`] enum wraps
//! them so a field table can hold any kind.
//!
//! Adding a new kind requires:
//! 1. A struct implementing `ArgumentDescriptor`
//! 2. A variant on `Descriptor` and `DescriptorKind`
//! 3. A binder in [`crate::binder`]

/// Implements the builder methods for the attributes in [`ArgumentSpec`].
macro_rules! impl_spec_builders {
    ($type:ident) => {
        impl $type {
            /// Sets the help text.
            #[must_use]
            pub fn description(mut self, description: impl Into<String>) -> Self {
                self.spec.description = Some(description.into());
                self
            }

            /// Marks the argument as required.
            #[must_use]
            pub fn required(mut self) -> Self {
                self.spec.required = true;
                self
            }

            /// Hides the value from descriptions and dumps.
            #[must_use]
            pub fn secret(mut self) -> Self {
                self.spec.has_secret_value = true;
                self
            }

            /// Sets where the value comes from.
            #[must_use]
            pub fn source(mut self, source: $crate::source::ArgumentSource) -> Self {
                self.spec.source = source;
                self
            }
        }

        impl From<$type> for $crate::descriptor::Descriptor {
            fn from(descriptor: $type) -> Self {
                $crate::descriptor::Descriptor::$type(descriptor)
            }
        }
    };
}

pub(crate) use impl_spec_builders;

pub mod boolean;
pub mod enumeration;
pub mod integer;
pub mod path;
pub mod string;

use std::fmt;

use strum::Display;

pub use boolean::BooleanArgument;
pub use enumeration::EnumArgument;
pub use integer::IntegerArgument;
pub use path::{DirectoryPathArgument, FilePathArgument};
pub use string::StringArgument;

use crate::source::ArgumentSource;
use crate::value::ValueType;

/// Attributes shared by every descriptor kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Name used to look up the raw value in every source.
    pub arg_name: String,
    /// Help text; `None` renders a placeholder.
    pub description: Option<String>,
    /// Absence of a value fails binding, regardless of the default.
    pub required: bool,
    /// The value never appears in descriptions or dumps.
    pub has_secret_value: bool,
    /// Which stores supply the value, and in which order.
    pub source: ArgumentSource,
}

impl ArgumentSpec {
    pub fn new(arg_name: impl Into<String>) -> Self {
        Self {
            arg_name: arg_name.into(),
            description: None,
            required: false,
            has_secret_value: false,
            source: ArgumentSource::default(),
        }
    }
}

/// Descriptor kinds, in the order the orchestrator binds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DescriptorKind {
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "boolean")]
    Boolean,
    #[strum(serialize = "integer")]
    Integer,
    #[strum(serialize = "file path")]
    FilePath,
    #[strum(serialize = "directory path")]
    DirectoryPath,
    #[strum(serialize = "enum")]
    Enum,
}

impl DescriptorKind {
    /// Order in which the orchestrator runs the binders.
    pub const BIND_ORDER: [DescriptorKind; 6] = [
        Self::String,
        Self::Boolean,
        Self::Integer,
        Self::FilePath,
        Self::DirectoryPath,
        Self::Enum,
    ];
}

/// Capabilities every descriptor kind provides.
pub trait ArgumentDescriptor {
    /// Returns the shared attributes.
    fn spec(&self) -> &ArgumentSpec;

    fn kind(&self) -> DescriptorKind;

    /// Returns the type of value this descriptor produces.
    fn value_type(&self) -> ValueType;

    /// Checks the descriptor in isolation.
    ///
    /// # Errors
    ///
    /// Returns one line per problem found.
    fn validate(&self) -> Result<(), String>;

    /// Renders the default value, ignoring secrecy. `None` means null.
    fn default_value_description(&self) -> Option<String>;

    /// Appends the kind-specific description lines.
    fn describe_constraints(&self, _out: &mut String) {}
}

/// Collects validation problems into the `Result` returned by
/// [`ArgumentDescriptor::validate`].
pub(crate) fn problems_to_result(problems: Vec<String>) -> Result<(), String> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("\n"))
    }
}

/// Checks that an argument name is usable.
///
/// Path kinds allow whitespace-only names, since paths may legally consist
/// of whitespace; every other kind rejects them.
pub(crate) fn check_arg_name(arg_name: &str, allow_whitespace: bool, problems: &mut Vec<String>) {
    if allow_whitespace {
        if arg_name.is_empty() {
            problems.push("arg_name can not be empty".to_string());
        }
    } else if arg_name.trim().is_empty() {
        problems.push("arg_name can not be empty or whitespace".to_string());
    }
}

/// Any descriptor kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Descriptor {
    StringArgument(StringArgument),
    BooleanArgument(BooleanArgument),
    IntegerArgument(IntegerArgument),
    EnumArgument(EnumArgument),
    FilePathArgument(FilePathArgument),
    DirectoryPathArgument(DirectoryPathArgument),
}

impl Descriptor {
    /// Returns the descriptor as its capability trait.
    pub fn as_descriptor(&self) -> &dyn ArgumentDescriptor {
        match self {
            Self::StringArgument(d) => d,
            Self::BooleanArgument(d) => d,
            Self::IntegerArgument(d) => d,
            Self::EnumArgument(d) => d,
            Self::FilePathArgument(d) => d,
            Self::DirectoryPathArgument(d) => d,
        }
    }

    pub fn spec(&self) -> &ArgumentSpec {
        self.as_descriptor().spec()
    }

    pub fn kind(&self) -> DescriptorKind {
        self.as_descriptor().kind()
    }
}

impl fmt::Display for Descriptor {
    /// Renders the help block for this descriptor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::describe::describe_descriptor(self.as_descriptor()))
    }
}
