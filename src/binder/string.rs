//! String binder.

use super::{BindContext, lookup};
use crate::descriptor::StringArgument;
use crate::error::ArgumentBinderError;
use crate::value::Value;

/// Uses the raw value verbatim; an empty string is a valid value.
pub(super) fn resolve(
    descriptor: &StringArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let value = match lookup(&descriptor.spec, context)? {
        Some(raw) => Some(raw),
        None => descriptor.default_value.clone(),
    };
    Ok(Value::String(value))
}
