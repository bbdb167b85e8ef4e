//! Help text and configuration dumps.
//!
//! Both outputs are line oriented and tab indented so they can be embedded
//! in a host's help screen.

use std::fmt::{self, Write};

use crate::descriptor::ArgumentDescriptor;
use crate::error::{HIDDEN_STRING, NULL_STRING};
use crate::field::Bindable;

pub const SOURCE_PREFIX: &str = "Source";
pub const TYPE_PREFIX: &str = "Type";
pub const REQUIRED_PREFIX: &str = "Required";
pub const DEFAULT_VALUE_PREFIX: &str = "Default Value";
pub const VALUE_IS_SECRET_PREFIX: &str = "Value is Secret";
pub const MIN_VALUE_PREFIX: &str = "Minimum Value";
pub const MAX_VALUE_PREFIX: &str = "Maximum Value";
pub const MUST_EXIST_PREFIX: &str = "Must Exist";
pub const IGNORE_CASE_PREFIX: &str = "Ignore Case";
pub const POSSIBLE_VALUES_PREFIX: &str = "Possible Values";

/// Placeholder for descriptors without help text.
pub const NO_DESCRIPTION: &str = "(No Description Given)";

/// Appends one `\t\t<prefix>: <value>.` line.
pub(crate) fn push_detail(out: &mut String, prefix: &str, value: impl fmt::Display) {
    // Writing to a String never fails.
    let _ = writeln!(out, "\t\t{}: {}.", prefix, value);
}

/// Renders the help block for one argument.
pub(crate) fn describe_descriptor(descriptor: &dyn ArgumentDescriptor) -> String {
    let spec = descriptor.spec();
    let mut out = String::new();

    let _ = writeln!(out, "\t --{}", spec.arg_name);
    let _ = writeln!(
        out,
        "\t\t{}.",
        spec.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );
    push_detail(&mut out, SOURCE_PREFIX, spec.source);
    push_detail(&mut out, TYPE_PREFIX, descriptor.value_type());

    if spec.required {
        push_detail(&mut out, REQUIRED_PREFIX, true);
    } else {
        let default_value = if spec.has_secret_value {
            HIDDEN_STRING.to_string()
        } else {
            descriptor
                .default_value_description()
                .unwrap_or_else(|| NULL_STRING.to_string())
        };
        push_detail(&mut out, DEFAULT_VALUE_PREFIX, default_value);
    }

    if spec.has_secret_value {
        push_detail(&mut out, VALUE_IS_SECRET_PREFIX, true);
    }

    descriptor.describe_constraints(&mut out);
    out
}

/// Renders help text for every argument `T` declares.
///
/// The output starts with `task_description`. An `- Arguments:` section
/// follows only if `T` has at least one field.
pub fn describe<T: Bindable>(task_description: &str) -> String {
    let fields = T::fields();
    let mut out = String::new();
    let _ = writeln!(out, "{}", task_description);

    if fields.is_empty() {
        return out;
    }

    out.push_str("- Arguments:\n");
    for field in &fields {
        out.push_str(&describe_descriptor(field.descriptor().as_descriptor()));
    }
    out
}

/// Renders the current field values of `instance`.
///
/// Secret values are replaced with [`HIDDEN_STRING`] and absent values with
/// [`NULL_STRING`].
pub fn dump<T: Bindable>(instance: &T) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}'s Configuration:", T::type_name());

    for field in T::fields() {
        let value = if field.descriptor().spec().has_secret_value {
            HIDDEN_STRING.to_string()
        } else {
            field
                .display_value(instance)
                .unwrap_or_else(|| NULL_STRING.to_string())
        };
        let _ = writeln!(out, "\t- {}: {}", field.name(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FilePathArgument, IntegerArgument, StringArgument};
    use crate::field::Field;
    use crate::source::ArgumentSource;
    use crate::value::FilePath;

    #[derive(Default)]
    struct Deploy {
        count: i32,
        token: Option<String>,
        manifest: Option<FilePath>,
    }

    impl Bindable for Deploy {
        fn fields() -> Vec<Field<Self>> {
            vec![
                crate::field!(
                    Deploy,
                    count,
                    IntegerArgument::new("count").min(1).max(10).description("count").required()
                ),
                crate::field!(
                    Deploy,
                    token,
                    StringArgument::new("token")
                        .secret()
                        .source(ArgumentSource::EnvironmentVariableOnly)
                ),
                crate::field!(Deploy, manifest, FilePathArgument::new("manifest")),
            ]
        }
    }

    struct Empty;

    impl Bindable for Empty {
        fn fields() -> Vec<Field<Self>> {
            Vec::new()
        }
    }

    #[test]
    fn test_push_detail_format() {
        let mut out = String::new();
        push_detail(&mut out, MUST_EXIST_PREFIX, false);
        assert_eq!(out, "\t\tMust Exist: false.\n");
    }

    #[test]
    fn test_describe_required_integer() {
        let descriptor = IntegerArgument::new("count")
            .min(1)
            .max(10)
            .description("count")
            .required();
        assert_eq!(
            describe_descriptor(&descriptor),
            "\t --count\n\
             \t\tcount.\n\
             \t\tSource: CommandLineOnly.\n\
             \t\tType: Integer.\n\
             \t\tRequired: true.\n\
             \t\tMinimum Value: 1.\n\
             \t\tMaximum Value: 10.\n"
        );
    }

    #[test]
    fn test_describe_secret_hides_default() {
        let descriptor = StringArgument::new("token")
            .default_value(Some("hunter2"))
            .secret();
        let out = describe_descriptor(&descriptor);
        assert!(out.contains("\t\t(No Description Given).\n"));
        assert!(out.contains("\t\tDefault Value: ******.\n"));
        assert!(out.contains("\t\tValue is Secret: true.\n"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn test_describe_null_default() {
        let out = describe_descriptor(&FilePathArgument::new("manifest"));
        assert!(out.contains("\t\tDefault Value: [null].\n"));
        assert!(out.contains("\t\tType: FilePath.\n"));
        assert!(out.contains("\t\tMust Exist: false.\n"));
        assert!(!out.contains("Value is Secret"));
    }

    #[test]
    fn test_describe_lists_fields_in_order() {
        let out = describe::<Deploy>("Deploys the site");
        assert!(out.starts_with("Deploys the site\n- Arguments:\n"));

        let count = out.find("--count").unwrap();
        let token = out.find("--token").unwrap();
        let manifest = out.find("--manifest").unwrap();
        assert!(count < token && token < manifest);
        assert!(out.contains("\t\tSource: EnvironmentVariableOnly.\n"));
    }

    #[test]
    fn test_describe_without_fields_has_no_arguments_header() {
        assert_eq!(describe::<Empty>("Nothing to see"), "Nothing to see\n");
    }

    #[test]
    fn test_dump_redacts_secrets_and_nulls() {
        let deploy = Deploy {
            count: 3,
            token: Some("topsecret".to_string()),
            manifest: None,
        };
        assert_eq!(
            dump(&deploy),
            "Deploy's Configuration:\n\
             \t- count: 3\n\
             \t- token: ******\n\
             \t- manifest: [null]\n"
        );
    }
}
