//! String argument descriptor.

use super::{
    ArgumentDescriptor, ArgumentSpec, DescriptorKind, check_arg_name, impl_spec_builders,
    problems_to_result,
};
use crate::value::ValueType;

/// An argument bound verbatim as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArgument {
    pub spec: ArgumentSpec,
    /// Used when the argument is optional and absent; defaults to `""`.
    pub default_value: Option<String>,
}

impl StringArgument {
    pub fn new(arg_name: impl Into<String>) -> Self {
        Self {
            spec: ArgumentSpec::new(arg_name),
            default_value: Some(String::new()),
        }
    }

    /// Sets the default value; `None` binds null.
    #[must_use]
    pub fn default_value(mut self, default_value: Option<impl Into<String>>) -> Self {
        self.default_value = default_value.map(Into::into);
        self
    }
}

impl_spec_builders!(StringArgument);

impl ArgumentDescriptor for StringArgument {
    fn spec(&self) -> &ArgumentSpec {
        &self.spec
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::String
    }

    fn value_type(&self) -> ValueType {
        ValueType::String
    }

    fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();
        check_arg_name(&self.spec.arg_name, false, &mut problems);
        problems_to_result(problems)
    }

    fn default_value_description(&self) -> Option<String> {
        self.default_value.clone()
    }
}
