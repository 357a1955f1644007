use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gem-cli
#[derive(Debug, Parser)]
#[command(
    name = "gem",
    version,
    about = "Geocode spreadsheet locations against a GeoNames-derived gazetteer"
)]
pub struct CliArgs {
    /// Path to the gazetteer store (default: gem-core/data/gazetteer.bin.gz)
    #[arg(long = "db", env = "GEM_GAZETTEER", global = true)]
    pub db: Option<PathBuf>,

    /// Maximum log level written to stderr (ERROR, WARN, INFO, DEBUG, TRACE)
    #[arg(long = "log-level", default_value = "INFO", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import one GeoNames country partition into the gazetteer
    Import {
        /// ISO2 country code of the partition (e.g. US)
        #[arg(short = 'c', long = "country")]
        country: String,

        /// Local dump (.txt, .txt.gz or .zip) instead of downloading it
        #[arg(short = 's', long = "source")]
        source: Option<PathBuf>,

        /// Start from an empty gazetteer, discarding the stored one
        #[arg(long = "reset")]
        reset: bool,
    },

    /// Append resolved place name and coordinates to every row of a CSV file
    Geocode {
        /// Input CSV file
        #[arg(long = "input", visible_alias = "in")]
        input: PathBuf,

        /// Output CSV file
        #[arg(long = "output", visible_alias = "out")]
        output: PathBuf,

        /// Name of the location column
        #[arg(long = "location", visible_alias = "loc", default_value = gem_core::DEFAULT_LOCATION_COLUMN)]
        location: String,
    },

    /// Resolve a single location string
    Lookup {
        /// Free-text location (e.g. "Portland, Oregon")
        location: String,

        /// Print the matched record as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show a summary of the gazetteer contents
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_accepts_short_aliases() {
        let args = CliArgs::try_parse_from([
            "gem", "geocode", "--in", "a.csv", "--out", "b.csv", "--loc", "city",
        ])
        .unwrap();
        match args.command {
            Commands::Geocode {
                input,
                output,
                location,
            } => {
                assert_eq!(input, PathBuf::from("a.csv"));
                assert_eq!(output, PathBuf::from("b.csv"));
                assert_eq!(location, "city");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn geocode_defaults_location_column() {
        let args =
            CliArgs::try_parse_from(["gem", "geocode", "--input", "a.csv", "--output", "b.csv"])
                .unwrap();
        assert!(matches!(
            args.command,
            Commands::Geocode { ref location, .. } if location == "location"
        ));
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn geocode_requires_both_paths() {
        assert!(CliArgs::try_parse_from(["gem", "geocode", "--input", "a.csv"]).is_err());
    }

    #[test]
    fn global_db_flag_after_subcommand() {
        let args = CliArgs::try_parse_from(["gem", "stats", "--db", "/tmp/g.bin"]).unwrap();
        assert_eq!(args.db, Some(PathBuf::from("/tmp/g.bin")));
    }
}
