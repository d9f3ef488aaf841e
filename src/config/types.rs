use serde::{Deserialize, Serialize};

use crate::args::{GlobalOption, OptionTable, PreflightArgs};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    pub logging: LoggingConfig,
    /// Extra option keys, consulted before the built-in table.
    pub options: Vec<OptionOverride>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// An additional key routed to one of the global options.
///
/// ```toml
/// [[options]]
/// key = "--site="
/// handler = "root"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOverride {
    /// Table key; a trailing `=` makes it value-taking.
    pub key: String,
    pub handler: GlobalOption,
}

impl PreflightConfig {
    /// Configured keys followed by the built-in ones.
    pub fn option_table(&self) -> OptionTable<PreflightArgs> {
        let mut table: OptionTable<PreflightArgs> = self
            .options
            .iter()
            .fold(OptionTable::new(), |table, o| {
                table.with(o.key.clone(), o.handler.handler())
            });
        table.extend(PreflightArgs::option_table());
        table
    }
}
