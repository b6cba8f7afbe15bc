use anyhow::Result;
use clap::Parser;
use mixinmap::cli::{Cli, Commands};
use mixinmap::commands::analyze::{handle_analyze, AnalyzeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            languages,
            ignore,
            no_implicit_return,
            verbosity,
        } => {
            init_logging(verbosity);
            handle_analyze(AnalyzeConfig {
                path,
                format: format.into(),
                output,
                languages,
                ignore,
                no_implicit_return,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            mixinmap::commands::init::init_config(force)
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
