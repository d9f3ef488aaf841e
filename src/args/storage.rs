//! Result storage — where the preprocessor puts what it finds.

use crate::args::registry::{OptionHandler, OptionValue};

/// Sink filled by [`ArgsPreprocessor::parse`](crate::args::ArgsPreprocessor::parse).
///
/// Any result type can implement this; the preprocessor only ever talks to
/// storage through these operations.
pub trait PreflightStorage: Sized {
    /// Record the invoked program path. Called exactly once, first.
    fn set_program_name(&mut self, name: String);

    fn has_alias(&self) -> bool;

    /// Record the site alias or site specification.
    fn set_alias(&mut self, alias: String);

    /// Invoke the handler of a matched option.
    fn apply(&mut self, handler: OptionHandler<Self>, value: OptionValue) {
        handler(self, value);
    }

    /// Record one token left for the downstream parser.
    fn add_arg(&mut self, arg: String);

    /// Record every token following the `--` terminator, in order.
    fn pass_args(&mut self, args: Vec<String>) {
        for arg in args {
            self.add_arg(arg);
        }
    }
}
