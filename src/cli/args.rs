use crate::config::ConversionMode;
use crate::models::Format;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coords")]
#[command(about = "Parse and convert geographic coordinates between DEC, DDM and DMS")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Configuration file (TOML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single latitude/longitude pair
    Convert {
        #[arg(help = "Latitude, e.g. S43°38'19.39\" or -43.63872", allow_hyphen_values = true)]
        lat: String,

        #[arg(help = "Longitude, e.g. W116°14'28.86\" or -116.24135", allow_hyphen_values = true)]
        long: String,

        #[arg(short, long, value_enum, default_value = "dec")]
        to: Format,

        #[arg(short, long, help = "Digits for DEC output [default: from config]")]
        precision: Option<usize>,

        #[arg(short, long, value_enum, help = "Rounding rules [default: from config]")]
        mode: Option<ConversionMode>,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Convert a flat list of lat/long tokens, two per pair
    Batch {
        #[arg(short, long, help = "Token file, one per line [default: stdin]")]
        input: Option<PathBuf>,

        #[arg(long, help = "Input is a JSON array of strings and numbers")]
        json_input: bool,

        #[arg(short, long, value_enum, default_value = "dec")]
        to: Format,

        #[arg(short, long, help = "Digits for DEC output [default: from config]")]
        precision: Option<usize>,

        #[arg(short, long, value_enum, help = "Rounding rules [default: from config]")]
        mode: Option<ConversionMode>,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_negative_values() {
        let cli = Cli::parse_from(["coords", "convert", "-43.63872", "-116.24135", "--to", "dms"]);

        match cli.command {
            Commands::Convert { lat, long, to, .. } => {
                assert_eq!(lat, "-43.63872");
                assert_eq!(long, "-116.24135");
                assert_eq!(to, Format::Dms);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_parse_batch() {
        let cli = Cli::parse_from([
            "coords",
            "--verbose",
            "batch",
            "--input",
            "points.json",
            "--json-input",
            "--mode",
            "exact",
        ]);

        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Batch {
                input,
                json_input,
                mode,
                to,
                ..
            } => {
                assert_eq!(input, Some(PathBuf::from("points.json")));
                assert!(json_input);
                assert_eq!(mode, Some(ConversionMode::Exact));
                assert_eq!(to, Format::Dec);
            }
            _ => panic!("expected batch command"),
        }
    }
}
