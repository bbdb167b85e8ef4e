//! Integer argument descriptor.

use super::{
    ArgumentDescriptor, ArgumentSpec, DescriptorKind, check_arg_name, impl_spec_builders,
    problems_to_result,
};
use crate::describe::{MAX_VALUE_PREFIX, MIN_VALUE_PREFIX, push_detail};
use crate::error::HIDDEN_STRING;
use crate::value::ValueType;

/// A base-10 `i32` argument with inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerArgument {
    pub spec: ArgumentSpec,
    pub default_value: i32,
    /// Inclusive minimum; defaults to `0`.
    pub min: i32,
    /// Inclusive maximum; defaults to `i32::MAX`.
    pub max: i32,
}

impl IntegerArgument {
    pub fn new(arg_name: impl Into<String>) -> Self {
        Self {
            spec: ArgumentSpec::new(arg_name),
            default_value: 0,
            min: 0,
            max: i32::MAX,
        }
    }

    #[must_use]
    pub fn default_value(mut self, default_value: i32) -> Self {
        self.default_value = default_value;
        self
    }

    #[must_use]
    pub fn min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }
}

impl_spec_builders!(IntegerArgument);

impl ArgumentDescriptor for IntegerArgument {
    fn spec(&self) -> &ArgumentSpec {
        &self.spec
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Integer
    }

    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }

    fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();
        check_arg_name(&self.spec.arg_name, false, &mut problems);
        if self.min > self.max {
            problems.push(format!("min ({}) is greater than max ({})", self.min, self.max));
        }
        problems_to_result(problems)
    }

    fn default_value_description(&self) -> Option<String> {
        Some(self.default_value.to_string())
    }

    fn describe_constraints(&self, out: &mut String) {
        if self.spec.has_secret_value {
            push_detail(out, MIN_VALUE_PREFIX, HIDDEN_STRING);
            push_detail(out, MAX_VALUE_PREFIX, HIDDEN_STRING);
        } else {
            push_detail(out, MIN_VALUE_PREFIX, self.min);
            push_detail(out, MAX_VALUE_PREFIX, self.max);
        }
    }
}
