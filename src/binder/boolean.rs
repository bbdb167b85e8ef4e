//! Boolean binder.

use super::{BindContext, lookup};
use crate::descriptor::BooleanArgument;
use crate::error::ArgumentBinderError;
use crate::value::{Value, ValueType};

/// Parses `true` or `false`, ignoring case and surrounding whitespace.
fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub(super) fn resolve(
    descriptor: &BooleanArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let value = match lookup(&descriptor.spec, context)? {
        Some(raw) => parse_bool(&raw).ok_or_else(|| ArgumentBinderError::ArgumentFormat {
            argument: descriptor.spec.arg_name.clone(),
            expected_type: ValueType::Boolean.to_string(),
        })?,
        None => descriptor.default_value,
    };
    Ok(Value::Boolean(value))
}
