//! File and directory path argument descriptors.

use super::{
    ArgumentDescriptor, ArgumentSpec, DescriptorKind, check_arg_name, impl_spec_builders,
    problems_to_result,
};
use crate::describe::{MUST_EXIST_PREFIX, push_detail};
use crate::value::ValueType;

/// Validation shared by both path kinds.
fn validate_path(
    spec: &ArgumentSpec,
    value_type: ValueType,
    default_value: Option<&str>,
    must_exist: bool,
) -> Result<(), String> {
    let mut problems = Vec::new();
    check_arg_name(&spec.arg_name, true, &mut problems);
    if must_exist && !spec.required && default_value.is_none() {
        problems.push(format!(
            "if a {} must exist, but the argument is not required, the default value \
            can not be null",
            value_type
        ));
    }
    problems_to_result(problems)
}

macro_rules! path_argument {
    ($(#[$meta:meta])* $type:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $type {
            pub spec: ArgumentSpec,
            /// Used when the argument is optional and absent; defaults to null.
            pub default_value: Option<String>,
            /// The path must exist before the task runs.
            pub must_exist: bool,
        }

        impl $type {
            pub fn new(arg_name: impl Into<String>) -> Self {
                Self {
                    spec: ArgumentSpec::new(arg_name),
                    default_value: None,
                    must_exist: false,
                }
            }

            #[must_use]
            pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
                self.default_value = Some(default_value.into());
                self
            }

            #[must_use]
            pub fn must_exist(mut self) -> Self {
                self.must_exist = true;
                self
            }
        }

        impl_spec_builders!($type);

        impl ArgumentDescriptor for $type {
            fn spec(&self) -> &ArgumentSpec {
                &self.spec
            }

            fn kind(&self) -> DescriptorKind {
                DescriptorKind::$kind
            }

            fn value_type(&self) -> ValueType {
                ValueType::$kind
            }

            fn validate(&self) -> Result<(), String> {
                validate_path(
                    &self.spec,
                    self.value_type(),
                    self.default_value.as_deref(),
                    self.must_exist,
                )
            }

            fn default_value_description(&self) -> Option<String> {
                self.default_value.clone()
            }

            fn describe_constraints(&self, out: &mut String) {
                push_detail(out, MUST_EXIST_PREFIX, self.must_exist);
            }
        }
    };
}

path_argument!(
    /// An argument bound as a [`FilePath`](crate::value::FilePath).
    FilePathArgument,
    FilePath
);

path_argument!(
    /// An argument bound as a [`DirectoryPath`](crate::value::DirectoryPath).
    DirectoryPathArgument,
    DirectoryPath
);
