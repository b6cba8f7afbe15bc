use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mixinmap")]
#[command(about = "Catalog mixin patterns in JavaScript and TypeScript sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find mixins under a path
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Languages to analyze (js, ts)
        #[arg(long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Additional glob patterns to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore: Option<Vec<String>>,

        /// Require an explicit `return` of a declared class
        #[arg(long = "no-implicit-return", env = "MIXINMAP_NO_IMPLICIT_RETURN")]
        no_implicit_return: bool,

        /// Increase log verbosity (-v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_analyze_command() {
        let args = vec![
            "mixinmap",
            "analyze",
            "/test/path",
            "--format",
            "json",
            "--languages",
            "js,ts",
            "--no-implicit-return",
            "-vv",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Analyze {
                path,
                format,
                languages,
                no_implicit_return,
                verbosity,
                ..
            } => {
                assert_eq!(path, PathBuf::from("/test/path"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(languages, Some(vec!["js".to_string(), "ts".to_string()]));
                assert!(no_implicit_return);
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["mixinmap", "analyze", "."]);
        match cli.command {
            Commands::Analyze {
                format,
                output,
                ignore,
                no_implicit_return,
                ..
            } => {
                assert_eq!(format, OutputFormat::Terminal);
                assert!(output.is_none());
                assert!(ignore.is_none());
                assert!(!no_implicit_return);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["mixinmap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => {
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }
}
