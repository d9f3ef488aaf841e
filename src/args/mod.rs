//! Early argument preprocessing.
//!
//! ```text
//! argv → program name → site alias → early options (table) → passthrough args
//! ```
//!
//! Each stage lives in its own module and can be unit-tested independently.
//! Nothing here fails: tokens that match nothing are simply passed on.

mod matcher;
mod preflight_args;
mod preprocessor;
mod registry;
mod storage;

pub use matcher::{check_option, find_option, MatchedValue, OptionMatch};
pub use preflight_args::{GlobalOption, PreflightArgs};
pub use preprocessor::{ArgsPreprocessor, ScanState, TERMINATOR};
pub use registry::{OptionEntry, OptionHandler, OptionTable, OptionValue};
pub use storage::PreflightStorage;
