use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use preflight::args::{ArgsPreprocessor, PreflightArgs};
use preflight::config::PreflightConfig;
use preflight::logging::init_tracing;
use preflight::site::SiteAliasClassifier;

/// Show what the preflight stage extracts from a command line.
#[derive(Parser, Debug)]
#[command(name = "preflight", version, about)]
struct Cli {
    /// Config file (default: ~/.config/preflight/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Command line to preprocess; the first element is the program path
    #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PreflightConfig::load_from(path),
        None => PreflightConfig::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging.filter);

    let table = config.option_table();
    let preprocessor = ArgsPreprocessor::new(SiteAliasClassifier);
    let result = preprocessor.parse(cli.argv, &table, PreflightArgs::new());

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&result).context("Failed to encode result")?;
            println!("{json}");
        }
        Format::Text => print!("{}", render_text(&result)),
    }

    Ok(())
}

/// One `field: value` line per populated field, then the remaining args.
fn render_text(result: &PreflightArgs) -> String {
    let mut lines = vec![format!("program: {}", result.program_name())];

    let optional = [
        ("alias", result.alias.as_deref()),
        ("root", result.root.as_deref()),
        ("uri", result.uri.as_deref()),
        ("strict", result.strict.as_deref()),
        ("coverage", result.coverage_file.as_deref()),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{name}: {value}"));
        }
    }

    let repeated = [
        ("config", &result.config_paths),
        ("alias-path", &result.alias_paths),
        ("include", &result.include_paths),
    ];
    for (name, values) in repeated {
        for value in values {
            lines.push(format!("{name}: {value}"));
        }
    }

    let flags = [
        ("local", result.local),
        ("simulate", result.simulate),
        ("backend", result.backend),
        ("debug", result.debug),
    ];
    for (name, set) in flags {
        if set {
            lines.push(format!("{name}: true"));
        }
    }

    lines.push(format!("args: {}", result.args().join(" ")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
