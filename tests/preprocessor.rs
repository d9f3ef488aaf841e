//! Integration tests for the argument preprocessor.

use preflight::args::{ArgsPreprocessor, OptionTable, OptionValue, PreflightStorage};
use preflight::site::NoSites;

/// Storage fake that records every call in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Recorder {
    program_name: Option<String>,
    alias: Option<String>,
    calls: Vec<(&'static str, OptionValue)>,
    passthrough: Vec<String>,
    program_name_calls: usize,
    bulk_calls: usize,
}

impl PreflightStorage for Recorder {
    fn set_program_name(&mut self, name: String) {
        self.program_name_calls += 1;
        self.program_name = Some(name);
    }

    fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    fn set_alias(&mut self, alias: String) {
        assert!(self.alias.is_none(), "alias set twice");
        self.alias = Some(alias);
    }

    fn add_arg(&mut self, arg: String) {
        self.passthrough.push(arg);
    }

    fn pass_args(&mut self, args: Vec<String>) {
        self.bulk_calls += 1;
        self.passthrough.extend(args);
    }
}

fn set_verbose(r: &mut Recorder, v: OptionValue) {
    r.calls.push(("verbose", v));
}

fn set_root(r: &mut Recorder, v: OptionValue) {
    r.calls.push(("root", v));
}

fn set_uri(r: &mut Recorder, v: OptionValue) {
    r.calls.push(("uri", v));
}

fn set_alias_from_option(r: &mut Recorder, v: OptionValue) {
    r.calls.push(("site", v.clone()));
    r.alias = v.into_string();
}

fn table() -> OptionTable<Recorder> {
    OptionTable::new()
        .with("--verbose", set_verbose)
        .with("--root=", set_root)
        .with("-l=", set_uri)
}

fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn live_only(token: &str) -> bool {
    token == "@live" || token == "@dev"
}

fn run(args: &[&str]) -> Recorder {
    ArgsPreprocessor::new(live_only).parse(raw_args(args), &table(), Recorder::default())
}

fn value(s: &str) -> OptionValue {
    OptionValue::Value(s.to_string())
}

// =============================================================================
// PROGRAM NAME
// =============================================================================

#[test]
fn program_name_recorded_once_and_never_passed_through() {
    let result = run(&["app", "status"]);
    assert_eq!(result.program_name.as_deref(), Some("app"));
    assert_eq!(result.program_name_calls, 1);
    assert_eq!(result.passthrough, vec!["status"]);
}

#[test]
fn program_name_that_looks_like_alias_is_not_classified() {
    let result = run(&["@live", "--verbose"]);
    assert_eq!(result.program_name.as_deref(), Some("@live"));
    assert_eq!(result.alias, None);
}

#[test]
fn empty_argv_records_empty_program_name() {
    let result = run(&[]);
    assert_eq!(result.program_name.as_deref(), Some(""));
    assert_eq!(result.program_name_calls, 1);
    assert!(result.passthrough.is_empty());
}

// =============================================================================
// TERMINATOR
// =============================================================================

#[test]
fn terminator_alone() {
    let result = run(&["app", "--"]);
    assert_eq!(result.program_name.as_deref(), Some("app"));
    assert_eq!(result.passthrough, vec!["--"]);
    assert_eq!(result.alias, None);
}

#[test]
fn tokens_after_terminator_are_not_classified() {
    let result = run(&["app", "--", "x", "--verbose", "@live", "--root=foo"]);
    assert_eq!(result.passthrough, vec!["--", "x", "--verbose", "@live", "--root=foo"]);
    assert!(result.calls.is_empty());
    assert_eq!(result.alias, None);
    assert_eq!(result.bulk_calls, 1);
}

#[test]
fn tokens_before_terminator_still_classified() {
    let result = run(&["app", "@live", "--verbose", "--", "y"]);
    assert_eq!(result.alias.as_deref(), Some("@live"));
    assert_eq!(result.calls, vec![("verbose", OptionValue::Flag)]);
    assert_eq!(result.passthrough, vec!["--", "y"]);
}

#[test]
fn terminator_as_pending_value_is_consumed_as_value() {
    let result = run(&["app", "--root", "--", "x"]);
    assert_eq!(result.calls, vec![("root", value("--"))]);
    assert_eq!(result.passthrough, vec!["x"]);
    assert_eq!(result.bulk_calls, 0);
}

// =============================================================================
// OPTIONS
// =============================================================================

#[test]
fn boolean_option_invokes_handler_with_flag() {
    let result = run(&["app", "--verbose"]);
    assert_eq!(result.calls, vec![("verbose", OptionValue::Flag)]);
    assert!(result.passthrough.is_empty());
}

#[test]
fn boolean_option_with_suffix_passes_through() {
    let result = run(&["app", "--verbose=1"]);
    assert!(result.calls.is_empty());
    assert_eq!(result.passthrough, vec!["--verbose=1"]);
}

#[test]
fn value_option_inline_form() {
    let result = run(&["app", "--root=foo"]);
    assert_eq!(result.calls, vec![("root", value("foo"))]);
    assert!(result.passthrough.is_empty());
}

#[test]
fn value_option_two_token_form() {
    let result = run(&["app", "--root", "foo", "status"]);
    assert_eq!(result.calls, vec![("root", value("foo"))]);
    assert_eq!(result.passthrough, vec!["status"]);
}

#[test]
fn next_token_taken_as_value_even_if_it_looks_like_option() {
    let result = run(&["app", "--root", "--verbose"]);
    assert_eq!(result.calls, vec![("root", value("--verbose"))]);
    assert!(result.passthrough.is_empty());
}

#[test]
fn value_option_at_end_yields_missing_value() {
    let result = run(&["app", "status", "--root"]);
    assert_eq!(result.calls, vec![("root", OptionValue::Missing)]);
    assert_eq!(result.passthrough, vec!["status"]);
}

#[test]
fn single_dash_value_option_has_no_inline_form() {
    let result = run(&["app", "-l=example.com", "-l", "example.com"]);
    assert_eq!(result.calls, vec![("uri", value("example.com"))]);
    assert_eq!(result.passthrough, vec!["-l=example.com"]);
}

#[test]
fn options_recognized_after_plain_argument() {
    let result = run(&["app", "status", "--verbose", "--root=x"]);
    assert_eq!(
        result.calls,
        vec![("verbose", OptionValue::Flag), ("root", value("x"))]
    );
    assert_eq!(result.passthrough, vec!["status"]);
}

#[test]
fn unknown_options_pass_through_in_order() {
    let result = run(&["app", "--format=json", "-y", "cmd", "--verbose", "arg", ""]);
    assert_eq!(result.passthrough, vec!["--format=json", "-y", "cmd", "arg", ""]);
    assert_eq!(result.calls, vec![("verbose", OptionValue::Flag)]);
}

#[test]
fn first_matching_entry_wins() {
    let table = OptionTable::new()
        .with("--root=", set_root)
        .with("--root=", set_uri)
        .with("--root", set_verbose);
    let result = ArgsPreprocessor::new(NoSites).parse(
        raw_args(&["app", "--root", "a"]),
        &table,
        Recorder::default(),
    );
    assert_eq!(result.calls, vec![("root", value("a"))]);
}

// =============================================================================
// ALIAS
// =============================================================================

#[test]
fn leading_alias_is_recorded() {
    let result = run(&["app", "@live", "--verbose"]);
    assert_eq!(result.alias.as_deref(), Some("@live"));
    assert_eq!(result.calls, vec![("verbose", OptionValue::Flag)]);
    assert!(result.passthrough.is_empty());
}

#[test]
fn alias_after_options_is_recorded() {
    let result = run(&["app", "--verbose", "--root", "x", "@live", "status"]);
    assert_eq!(result.alias.as_deref(), Some("@live"));
    assert_eq!(result.passthrough, vec!["status"]);
}

#[test]
fn alias_after_plain_argument_passes_through() {
    let result = run(&["app", "somepositional", "@live"]);
    assert_eq!(result.alias, None);
    assert_eq!(result.passthrough, vec!["somepositional", "@live"]);
}

#[test]
fn unknown_option_does_not_block_alias() {
    let result = run(&["app", "-y", "@live"]);
    assert_eq!(result.alias.as_deref(), Some("@live"));
    assert_eq!(result.passthrough, vec!["-y"]);
}

#[test]
fn second_alias_passes_through() {
    let result = run(&["app", "@live", "@dev"]);
    assert_eq!(result.alias.as_deref(), Some("@live"));
    assert_eq!(result.passthrough, vec!["@dev"]);
}

#[test]
fn preset_alias_in_storage_is_respected() {
    let storage = Recorder {
        alias: Some("@preset".to_string()),
        ..Recorder::default()
    };
    let result =
        ArgsPreprocessor::new(live_only).parse(raw_args(&["app", "@live"]), &table(), storage);
    assert_eq!(result.alias.as_deref(), Some("@preset"));
    assert_eq!(result.passthrough, vec!["@live"]);
}

#[test]
fn alias_recorded_by_handler_blocks_later_alias() {
    let table = OptionTable::new()
        .with("--site=", set_alias_from_option)
        .with("--flag-alias", set_alias_from_option);

    let result = ArgsPreprocessor::new(live_only).parse(
        raw_args(&["app", "--site=@dev", "@live"]),
        &table,
        Recorder::default(),
    );
    assert_eq!(result.alias.as_deref(), Some("@dev"));
    assert_eq!(result.passthrough, vec!["@live"]);

    let result = ArgsPreprocessor::new(live_only).parse(
        raw_args(&["app", "--flag-alias", "@live"]),
        &table,
        Recorder::default(),
    );
    assert_eq!(result.alias.as_deref(), Some("true"));
    assert_eq!(result.passthrough, vec!["@live"]);
}

#[test]
fn option_value_is_not_classified_as_alias() {
    let result = run(&["app", "--root", "@live"]);
    assert_eq!(result.alias, None);
    assert_eq!(result.calls, vec![("root", value("@live"))]);
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn repeated_runs_are_identical() {
    let args = ["app", "@live", "--root", "r", "status", "--verbose", "-x", "--", "tail"];
    assert_eq!(run(&args), run(&args));
}
