//! Preflight args — the concrete storage for the global early options.

use serde::{Deserialize, Serialize};

use crate::args::registry::{OptionHandler, OptionTable, OptionValue};
use crate::args::storage::PreflightStorage;

/// Everything the preprocessor pulled out of the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreflightArgs {
    /// Path of the invoked program.
    pub program_name: String,
    /// Site alias or site specification, if one led the command line.
    pub alias: Option<String>,
    /// Site root (`--root`, `-r`).
    pub root: Option<String>,
    /// Site uri (`--uri`, `-l`).
    pub uri: Option<String>,
    /// Extra configuration files (`--config`, `-c`), in order given.
    pub config_paths: Vec<String>,
    /// Extra alias search paths (`--alias-path`).
    pub alias_paths: Vec<String>,
    /// Extra command search paths (`--include`, `-i`).
    pub include_paths: Vec<String>,
    pub local: bool,
    /// Raw value of `--strict`.
    pub strict: Option<String>,
    pub simulate: bool,
    pub backend: bool,
    pub debug: bool,
    /// Coverage output file (`--coverage`).
    pub coverage_file: Option<String>,
    /// Tokens left for the general-purpose parser.
    pub args: Vec<String>,
}

impl PreflightArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The built-in early option table, in match order.
    pub fn option_table() -> OptionTable<Self> {
        BUILTIN_OPTIONS
            .iter()
            .fold(OptionTable::new(), |table, &(key, option)| {
                table.with(key, option.handler())
            })
    }
}

/// Built-in keys. Order matters: the first matching key wins.
const BUILTIN_OPTIONS: [(&str, GlobalOption); 17] = [
    ("-r=", GlobalOption::Root),
    ("--root=", GlobalOption::Root),
    ("-l=", GlobalOption::Uri),
    ("--uri=", GlobalOption::Uri),
    ("-c=", GlobalOption::Config),
    ("--config=", GlobalOption::Config),
    ("--alias-path=", GlobalOption::AliasPath),
    ("--include=", GlobalOption::Include),
    ("-i=", GlobalOption::Include),
    ("--local", GlobalOption::Local),
    ("--strict=", GlobalOption::Strict),
    ("--simulate", GlobalOption::Simulate),
    ("-s", GlobalOption::Simulate),
    ("--backend", GlobalOption::Backend),
    ("--debug", GlobalOption::Debug),
    ("-d", GlobalOption::Debug),
    ("--coverage=", GlobalOption::Coverage),
];

impl PreflightStorage for PreflightArgs {
    fn set_program_name(&mut self, name: String) {
        self.program_name = name;
    }

    fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    fn set_alias(&mut self, alias: String) {
        self.alias = Some(alias);
    }

    fn add_arg(&mut self, arg: String) {
        self.args.push(arg);
    }

    fn pass_args(&mut self, args: Vec<String>) {
        self.args.extend(args);
    }
}

/// Global options `PreflightArgs` knows how to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlobalOption {
    Root,
    Uri,
    Config,
    AliasPath,
    Include,
    Local,
    Strict,
    Simulate,
    Backend,
    Debug,
    Coverage,
}

impl GlobalOption {
    /// Whether table keys for this option should end in `=`.
    pub fn takes_value(self) -> bool {
        !matches!(
            self,
            GlobalOption::Local | GlobalOption::Simulate | GlobalOption::Backend | GlobalOption::Debug
        )
    }

    pub fn handler(self) -> OptionHandler<PreflightArgs> {
        match self {
            GlobalOption::Root => set_root,
            GlobalOption::Uri => set_uri,
            GlobalOption::Config => add_config_path,
            GlobalOption::AliasPath => add_alias_path,
            GlobalOption::Include => add_include_path,
            GlobalOption::Local => set_local,
            GlobalOption::Strict => set_strict,
            GlobalOption::Simulate => set_simulate,
            GlobalOption::Backend => set_backend,
            GlobalOption::Debug => set_debug,
            GlobalOption::Coverage => set_coverage_file,
        }
    }
}

// Value handlers record nothing for `OptionValue::Missing`; flag handlers
// ignore the value entirely.

fn set_root(args: &mut PreflightArgs, value: OptionValue) {
    if let Some(v) = value.into_string() {
        args.root = Some(v);
    }
}

fn set_uri(args: &mut PreflightArgs, value: OptionValue) {
    if let Some(v) = value.into_string() {
        args.uri = Some(v);
    }
}

fn add_config_path(args: &mut PreflightArgs, value: OptionValue) {
    args.config_paths.extend(value.into_string());
}

fn add_alias_path(args: &mut PreflightArgs, value: OptionValue) {
    args.alias_paths.extend(value.into_string());
}

fn add_include_path(args: &mut PreflightArgs, value: OptionValue) {
    args.include_paths.extend(value.into_string());
}

fn set_local(args: &mut PreflightArgs, _: OptionValue) {
    args.local = true;
}

fn set_strict(args: &mut PreflightArgs, value: OptionValue) {
    if let Some(v) = value.into_string() {
        args.strict = Some(v);
    }
}

fn set_simulate(args: &mut PreflightArgs, _: OptionValue) {
    args.simulate = true;
}

fn set_backend(args: &mut PreflightArgs, _: OptionValue) {
    args.backend = true;
}

fn set_debug(args: &mut PreflightArgs, _: OptionValue) {
    args.debug = true;
}

fn set_coverage_file(args: &mut PreflightArgs, value: OptionValue) {
    if let Some(v) = value.into_string() {
        args.coverage_file = Some(v);
    }
}
