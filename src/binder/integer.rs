//! Integer binder.

use super::{BindContext, lookup};
use crate::descriptor::IntegerArgument;
use crate::error::ArgumentBinderError;
use crate::value::{Value, ValueType};

/// Parses a base-10 `i32` and checks it against the descriptor's bounds.
///
/// The maximum is checked before the minimum.
pub(super) fn resolve(
    descriptor: &IntegerArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let argument = &descriptor.spec.arg_name;
    let Some(raw) = lookup(&descriptor.spec, context)? else {
        return Ok(Value::Integer(descriptor.default_value));
    };

    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ArgumentBinderError::ArgumentFormat {
            argument: argument.clone(),
            expected_type: ValueType::Integer.to_string(),
        })?;

    if value > descriptor.max {
        return Err(ArgumentBinderError::ArgumentTooLarge {
            argument: argument.clone(),
            maximum: descriptor.max,
        });
    }
    if value < descriptor.min {
        return Err(ArgumentBinderError::ArgumentTooSmall {
            argument: argument.clone(),
            minimum: descriptor.min,
        });
    }

    Ok(Value::Integer(value))
}
