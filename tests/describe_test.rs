mod helpers;

use argbind::sample::SampleConfig;
use argbind::{
    ArgumentBinder, Bindable, CommandLineArguments, Field, HIDDEN_STRING, IntegerArgument,
    MapEnvironment, StringArgument, describe, dump, field,
};
use helpers::{MockFileSystem, assert_no_line_starting_with, assert_single_line};

#[derive(Debug, Default)]
struct Counter {
    count: i32,
}

impl Bindable for Counter {
    fn fields() -> Vec<Field<Self>> {
        vec![field!(
            Counter,
            count,
            IntegerArgument::new("count").min(1).max(10).description("count").required()
        )]
    }
}

#[test]
fn test_describe_required_integer() {
    let text = describe::<Counter>("Task X");

    assert!(text.starts_with("Task X\n"));
    assert_single_line(&text, "--count");
    assert_single_line(&text, "count.");
    assert_single_line(&text, "Type: Integer.");
    assert_single_line(&text, "Required: true.");
    assert_single_line(&text, "Minimum Value: 1.");
    assert_single_line(&text, "Maximum Value: 10.");
    assert_no_line_starting_with(&text, "Default Value");
    assert_no_line_starting_with(&text, "Value is Secret");
}

#[test]
fn test_describe_forwarder_matches_formatter() {
    assert_eq!(
        ArgumentBinder::describe::<Counter>("Task X"),
        describe::<Counter>("Task X")
    );
}

#[test]
fn test_describe_sample_configuration() {
    let text = describe::<SampleConfig>("Sample");

    assert_single_line(&text, "--api_token");
    assert_single_line(&text, "Source: EnvironmentVariableThenCommandLine.");
    assert_single_line(&text, "Value is Secret: true.");
    assert_single_line(&text, "Default Value: Default.");
    assert_single_line(&text, "Default Value: Normal.");
    assert_single_line(&text, "Default Value: [null].");
    assert_single_line(&text, "Type: Verbosity.");
    assert_single_line(&text, "Ignore Case: true.");
    assert_single_line(&text, "Possible Values:");
    assert_single_line(&text, "- Diagnostic");
    assert!(text.contains(&format!("\t\tDefault Value: {}.\n", HIDDEN_STRING)));
}

#[derive(Debug, Default)]
struct Secrets {
    user: Option<String>,
    token: Option<String>,
}

impl Bindable for Secrets {
    fn fields() -> Vec<Field<Self>> {
        vec![
            field!(Secrets, user, StringArgument::new("user")),
            field!(Secrets, token, StringArgument::new("token").secret()),
        ]
    }
}

#[test]
fn test_dump_never_shows_secret_values() {
    let args = CommandLineArguments::parse(["--user=me", "--token=topsecret"]);
    let env = MapEnvironment::new();
    let fs = MockFileSystem::new();
    let bound: Secrets = ArgumentBinder::new(&args, &env, &fs).bind().unwrap();

    assert_eq!(bound.token.as_deref(), Some("topsecret"));
    let text = dump(&bound);
    assert!(text.starts_with("Secrets's Configuration:\n"));
    assert_single_line(&text, "- user: me");
    assert_single_line(&text, "- token: ******");
    assert!(!text.contains("topsecret"));
}

#[test]
fn test_dump_marks_null_values() {
    let text = dump(&Secrets::default());
    assert_single_line(&text, "- user: [null]");
    assert_single_line(&text, "- token: ******");
}
