//! Enum binder.

use super::{BindContext, lookup};
use crate::descriptor::EnumArgument;
use crate::error::ArgumentBinderError;
use crate::value::{EnumValue, Value};

/// Matches the raw value against member names only; numeric text is not
/// accepted as a discriminant.
pub(super) fn resolve(
    descriptor: &EnumArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let argument = &descriptor.spec.arg_name;
    let enum_type = &descriptor.enum_type;

    let member = match lookup(&descriptor.spec, context)? {
        Some(raw) => enum_type.find(&raw, descriptor.ignore_case).ok_or_else(|| {
            ArgumentBinderError::ArgumentFormat {
                argument: argument.clone(),
                expected_type: enum_type.name().to_string(),
            }
        })?,
        None => descriptor
            .default_value()
            .ok_or_else(|| ArgumentBinderError::ArgumentValueNull(argument.clone()))?,
    };

    Ok(Value::Enum(EnumValue {
        enum_type: enum_type.id(),
        member,
    }))
}
