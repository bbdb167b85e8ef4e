//! Enum argument descriptor.

use super::{
    ArgumentDescriptor, ArgumentSpec, DescriptorKind, check_arg_name, impl_spec_builders,
    problems_to_result,
};
use crate::describe::{IGNORE_CASE_PREFIX, POSSIBLE_VALUES_PREFIX, push_detail};
use crate::value::{BindableEnum, EnumMember, EnumType, ValueType};

/// An argument matched against the member names of an enumeration.
///
/// The default value is always the member whose discriminant is `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumArgument {
    pub spec: ArgumentSpec,
    pub enum_type: EnumType,
    /// Match member names case-insensitively.
    pub ignore_case: bool,
}

impl EnumArgument {
    pub fn new<E: BindableEnum>(arg_name: impl Into<String>) -> Self {
        Self::with_type(EnumType::of::<E>(), arg_name)
    }

    pub fn with_type(enum_type: EnumType, arg_name: impl Into<String>) -> Self {
        Self {
            spec: ArgumentSpec::new(arg_name),
            enum_type,
            ignore_case: false,
        }
    }

    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Returns the member bound when the argument is optional and absent.
    pub fn default_value(&self) -> Option<EnumMember> {
        self.enum_type.zero_member()
    }
}

impl_spec_builders!(EnumArgument);

impl ArgumentDescriptor for EnumArgument {
    fn spec(&self) -> &ArgumentSpec {
        &self.spec
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Enum
    }

    fn value_type(&self) -> ValueType {
        ValueType::Enum(self.enum_type.id())
    }

    fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();
        check_arg_name(&self.spec.arg_name, false, &mut problems);

        let type_name = self.enum_type.name();
        if self.enum_type.members().is_empty() {
            problems.push(format!("the enum type {} has no members", type_name));
        } else if !self.spec.required && self.default_value().is_none() {
            problems.push(format!(
                "the argument is not required, but the enum type {} has no member \
                with value 0 to use as the default",
                type_name
            ));
        }

        if self.ignore_case {
            for names in self.enum_type.case_insensitive_collisions() {
                problems.push(format!(
                    "case is ignored, but the enum type {} has members that differ only \
                    by case: {}",
                    type_name,
                    names.join(", ")
                ));
            }
        }

        problems_to_result(problems)
    }

    fn default_value_description(&self) -> Option<String> {
        self.default_value().map(|m| m.name.to_string())
    }

    fn describe_constraints(&self, out: &mut String) {
        push_detail(out, IGNORE_CASE_PREFIX, self.ignore_case);
        if !self.spec.has_secret_value {
            out.push_str(&format!("\t\t{}:\n", POSSIBLE_VALUES_PREFIX));
            for member in self.enum_type.members() {
                out.push_str(&format!("\t\t\t- {}\n", member.name));
            }
        }
    }
}
