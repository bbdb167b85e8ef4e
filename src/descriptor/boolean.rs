//! Boolean argument descriptor.

use super::{
    ArgumentDescriptor, ArgumentSpec, DescriptorKind, check_arg_name, impl_spec_builders,
    problems_to_result,
};
use crate::value::ValueType;

/// An argument parsed as `true` or `false`, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanArgument {
    pub spec: ArgumentSpec,
    pub default_value: bool,
}

impl BooleanArgument {
    pub fn new(arg_name: impl Into<String>) -> Self {
        Self {
            spec: ArgumentSpec::new(arg_name),
            default_value: false,
        }
    }

    #[must_use]
    pub fn default_value(mut self, default_value: bool) -> Self {
        self.default_value = default_value;
        self
    }
}

impl_spec_builders!(BooleanArgument);

impl ArgumentDescriptor for BooleanArgument {
    fn spec(&self) -> &ArgumentSpec {
        &self.spec
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Boolean
    }

    fn value_type(&self) -> ValueType {
        ValueType::Boolean
    }

    fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();
        check_arg_name(&self.spec.arg_name, false, &mut problems);
        problems_to_result(problems)
    }

    fn default_value_description(&self) -> Option<String> {
        Some(self.default_value.to_string())
    }
}
