use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zonemap")]
#[command(about = "Score people on weighted hot/crazy criteria and place them on the zone map", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in criteria templates
    Templates,

    /// Write a new session document
    New {
        /// Where to write the document (.toml or .json)
        path: PathBuf,

        /// Seed the criteria from a built-in template
        #[arg(short, long)]
        template: Option<String>,

        /// Force overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Score everyone in a session document and show the results
    Score {
        /// Session document to score
        session: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Rescale each category's weights to sum to 100% before scoring
        #[arg(long)]
        normalize: bool,

        /// Compare two or more people side by side (names or ids)
        #[arg(long, value_delimiter = ',')]
        compare: Option<Vec<String>>,

        /// Only list people in this zone
        #[arg(long)]
        zone: Option<String>,

        /// Plain output: no colors, no emoji, ASCII tables
        #[arg(long)]
        plain: bool,
    },

    /// Classify a single (hot, crazy) point
    Classify {
        /// Hot score (x axis, 0-10)
        #[arg(allow_negative_numbers = true)]
        hot: f64,

        /// Crazy score (y axis, 0-10)
        #[arg(allow_negative_numbers = true)]
        crazy: f64,
    },

    /// Rescale each category's weights to sum to 100% and save the document
    Normalize {
        /// Session document to normalize
        session: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Csv,
    /// Plain-text report
    Report,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Csv => crate::io::output::OutputFormat::Csv,
            OutputFormat::Report => crate::io::output::OutputFormat::Report,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Csv),
            crate::io::output::OutputFormat::Csv
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Report),
            crate::io::output::OutputFormat::Report
        );
    }

    #[test]
    fn score_accepts_comma_separated_comparison() {
        let cli = Cli::try_parse_from([
            "zonemap", "score", "s.toml", "--compare", "Alex,Sam", "-vv", "--plain",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score { compare, plain, .. } => {
                assert_eq!(compare, Some(vec!["Alex".to_string(), "Sam".to_string()]));
                assert!(plain);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn classify_takes_two_numbers() {
        let cli = Cli::try_parse_from(["zonemap", "classify", "9", "-1.5"]).unwrap();
        match cli.command {
            Commands::Classify { hot, crazy } => {
                assert_eq!(hot, 9.0);
                assert_eq!(crazy, -1.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
