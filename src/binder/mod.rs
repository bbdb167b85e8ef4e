//! Per-kind binders.
//!
//! Every kind follows the same steps for one field:
//! 1. Validate the descriptor in isolation
//! 2. Check that the field's type matches the descriptor's value type
//! 3. Resolve the raw value (failing if absent and required)
//! 4. Convert and check kind-specific constraints, or fall back to the default
//! 5. Write the value into the field
//!
//! Only steps 3 and 4 differ between kinds; they live in the submodules.
//! A failure at any step produces exactly one error and stops that field only.

mod boolean;
mod enumeration;
mod integer;
mod path;
mod string;

use tracing::debug;

use crate::descriptor::{ArgumentSpec, Descriptor};
use crate::error::ArgumentBinderError;
use crate::field::{Bindable, Field};
use crate::filesystem::FileSystem;
use crate::source::SourceResolver;
use crate::value::Value;

/// Collaborators a binder needs to resolve one value.
#[derive(Clone, Copy)]
pub(crate) struct BindContext<'a> {
    pub resolver: SourceResolver<'a>,
    pub filesystem: &'a dyn FileSystem,
}

/// Binds a single field of `target`.
pub(crate) fn bind_field<T: Bindable>(
    field: &Field<T>,
    target: &mut T,
    context: &BindContext<'_>,
) -> Result<(), ArgumentBinderError> {
    let descriptor = field.descriptor().as_descriptor();

    descriptor
        .validate()
        .map_err(|message| ArgumentBinderError::AttributeValidation {
            target: T::type_name().to_string(),
            field: field.name().to_string(),
            message,
        })?;

    let invalid_field_type = || ArgumentBinderError::InvalidFieldType {
        target: T::type_name().to_string(),
        field: field.name().to_string(),
        field_type: field.field_type_name().to_string(),
        descriptor: descriptor.kind().to_string(),
        expected: descriptor.value_type().to_string(),
    };

    if field.field_type() != descriptor.value_type() {
        return Err(invalid_field_type());
    }

    let value = resolve(field.descriptor(), context)?;

    if !field.assign(target, value) {
        return Err(invalid_field_type());
    }
    Ok(())
}

/// Produces the value for a descriptor, dispatching on its kind.
pub(crate) fn resolve(
    descriptor: &Descriptor,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    match descriptor {
        Descriptor::StringArgument(d) => string::resolve(d, context),
        Descriptor::BooleanArgument(d) => boolean::resolve(d, context),
        Descriptor::IntegerArgument(d) => integer::resolve(d, context),
        Descriptor::EnumArgument(d) => enumeration::resolve(d, context),
        Descriptor::FilePathArgument(d) => path::resolve_file(d, context),
        Descriptor::DirectoryPathArgument(d) => path::resolve_directory(d, context),
    }
}

/// Fetches the raw value for `spec`.
///
/// Returns `Ok(None)` when no source has the value and the argument is
/// optional, so the caller substitutes its default.
///
/// # Errors
///
/// Returns `MissingRequiredArgument` when no source has the value and the
/// argument is required.
fn lookup(
    spec: &ArgumentSpec,
    context: &BindContext<'_>,
) -> Result<Option<String>, ArgumentBinderError> {
    let name = spec.arg_name.as_str();
    let raw = if context.resolver.exists(name, spec.source) {
        context.resolver.fetch(name, spec.source)
    } else {
        None
    };

    if let Some(raw) = raw {
        debug!(argument = name, source = %spec.source, "argument specified");
        return Ok(Some(raw));
    }

    if spec.required {
        return Err(ArgumentBinderError::MissingRequiredArgument(name.to_string()));
    }

    debug!(argument = name, "argument not specified, using default value");
    Ok(None)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashSet;

    use camino::Utf8Path;

    use super::BindContext;
    use crate::arguments::{CommandLineArguments, MapEnvironment};
    use crate::filesystem::FileSystem;
    use crate::source::SourceResolver;

    /// Filesystem that reports only the listed paths as existing.
    #[derive(Default)]
    pub struct FakeFileSystem {
        pub files: HashSet<String>,
        pub directories: HashSet<String>,
    }

    impl FileSystem for FakeFileSystem {
        fn file_exists(&self, path: &Utf8Path) -> bool {
            self.files.contains(path.as_str())
        }

        fn directory_exists(&self, path: &Utf8Path) -> bool {
            self.directories.contains(path.as_str())
        }
    }

    pub fn context<'a>(
        args: &'a CommandLineArguments,
        env: &'a MapEnvironment,
        fs: &'a FakeFileSystem,
    ) -> BindContext<'a> {
        BindContext {
            resolver: SourceResolver::new(args, env),
            filesystem: fs,
        }
    }
}
