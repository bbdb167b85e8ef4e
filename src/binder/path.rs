//! File and directory path binders.

use camino::Utf8Path;

use super::{BindContext, lookup};
use crate::descriptor::{ArgumentSpec, DirectoryPathArgument, FilePathArgument};
use crate::error::{ArgumentBinderError, HIDDEN_STRING};
use crate::value::{DirectoryPath, FilePath, Value};

/// Resolves the path text and, when required, checks that it exists.
///
/// `exists` is the filesystem query for the kind; `not_found` builds the
/// kind's error from the path to report, which is redacted for secrets.
fn resolve_path(
    spec: &ArgumentSpec,
    default_value: Option<&str>,
    must_exist: bool,
    context: &BindContext<'_>,
    exists: fn(&BindContext<'_>, &Utf8Path) -> bool,
    not_found: fn(String) -> ArgumentBinderError,
) -> Result<Option<String>, ArgumentBinderError> {
    let path = match lookup(spec, context)? {
        Some(raw) => Some(raw),
        None => default_value.map(str::to_string),
    };

    if !must_exist {
        return Ok(path);
    }

    let Some(path) = path else {
        return Err(ArgumentBinderError::ArgumentValueNull(spec.arg_name.clone()));
    };

    if !exists(context, Utf8Path::new(&path)) {
        let reported = if spec.has_secret_value {
            HIDDEN_STRING.to_string()
        } else {
            path
        };
        return Err(not_found(reported));
    }

    Ok(Some(path))
}

pub(super) fn resolve_file(
    descriptor: &FilePathArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let path = resolve_path(
        &descriptor.spec,
        descriptor.default_value.as_deref(),
        descriptor.must_exist,
        context,
        |context, path| context.filesystem.file_exists(path),
        |path| ArgumentBinderError::FileNotFound { path },
    )?;
    Ok(Value::FilePath(path.map(FilePath::new)))
}

pub(super) fn resolve_directory(
    descriptor: &DirectoryPathArgument,
    context: &BindContext<'_>,
) -> Result<Value, ArgumentBinderError> {
    let path = resolve_path(
        &descriptor.spec,
        descriptor.default_value.as_deref(),
        descriptor.must_exist,
        context,
        |context, path| context.filesystem.directory_exists(path),
        |path| ArgumentBinderError::DirectoryNotFound { path },
    )?;
    Ok(Value::DirectoryPath(path.map(DirectoryPath::new)))
}
