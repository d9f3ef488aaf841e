//! Preprocessor — raw argv → program name, site alias, early options, leftovers.

use crate::args::matcher::{find_option, MatchedValue};
use crate::args::registry::{OptionTable, OptionValue};
use crate::args::storage::PreflightStorage;
use crate::site::SiteClassifier;

/// Terminates special handling; it and everything after it are passed on.
pub const TERMINATOR: &str = "--";

/// State carried from one token to the next.
///
/// Alias state lives in storage and is queried for every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// A token not starting with `-` has been seen.
    pub saw_plain_argument: bool,
}

impl ScanState {
    /// A site token is only accepted before any alias and any plain argument.
    pub fn accepts_alias(&self, alias_already_set: bool) -> bool {
        !alias_already_set && !self.saw_plain_argument
    }
}

/// Splits the early concerns off a raw argument list.
///
/// Everything it does not recognize is recorded untouched, in order, for
/// the general-purpose parser that runs afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArgsPreprocessor<C> {
    classifier: C,
}

impl<C: SiteClassifier> ArgsPreprocessor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scan `argv` into `storage` and hand it back.
    ///
    /// The first element of `argv` is the program path and is recorded
    /// as-is. Scanning stops at `--`; the terminator and every token after
    /// it are passed on without inspection.
    pub fn parse<I, S>(&self, argv: I, table: &OptionTable<S>, mut storage: S) -> S
    where
        I: IntoIterator<Item = String>,
        S: PreflightStorage,
    {
        let mut argv = argv.into_iter();

        let program = argv.next().unwrap_or_default();
        tracing::trace!(program = %program, "program name");
        storage.set_program_name(program);

        let mut state = ScanState::default();

        while let Some(arg) = argv.next() {
            if arg == TERMINATOR {
                let rest: Vec<String> = argv.collect();
                tracing::debug!(remaining = rest.len(), "terminator reached, passing remaining args");
                storage.add_arg(arg);
                storage.pass_args(rest);
                return storage;
            }

            if state.accepts_alias(storage.has_alias()) && self.classifier.is_alias_or_spec(&arg) {
                tracing::trace!(alias = %arg, "site alias");
                storage.set_alias(arg);
                continue;
            }

            if !arg.starts_with('-') {
                state.saw_plain_argument = true;
            }

            match find_option(table, &arg) {
                Some(found) => {
                    let handler = found.entry.handler();
                    tracing::trace!(option = %found.entry.key(), token = %arg, "matched option");
                    let value = match found.value {
                        MatchedValue::Flag => OptionValue::Flag,
                        MatchedValue::Inline(v) => OptionValue::Value(v),
                        MatchedValue::Pending => match argv.next() {
                            Some(v) => OptionValue::Value(v),
                            None => {
                                tracing::debug!(option = %arg, "option value missing at end of args");
                                OptionValue::Missing
                            }
                        },
                    };
                    storage.apply(handler, value);
                }
                None => {
                    tracing::trace!(arg = %arg, "passthrough");
                    storage.add_arg(arg);
                }
            }
        }

        storage
    }
}
