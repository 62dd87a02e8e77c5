//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Burnish: heuristic normalization for tabular product data
#[derive(Parser)]
#[command(name = "burnish")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service (cleaning, layout and export jobs)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Text generator backing custom exports
        #[arg(long, default_value = "stub")]
        generator: GeneratorChoice,
    },

    /// Clean a JSON file of product records and print a summary
    Clean {
        /// Path to a JSON file containing an array of records
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the cleaned records to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

/// Text generator choice for custom exports
#[derive(Clone, Debug, Default)]
pub enum GeneratorChoice {
    /// Deterministic built-in generator
    #[default]
    Stub,
    /// No generator - custom exports fail with a job error
    Off,
}

impl std::str::FromStr for GeneratorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stub" => Ok(GeneratorChoice::Stub),
            "off" | "none" => Ok(GeneratorChoice::Off),
            _ => Err(format!("Unknown generator: {}. Use: stub or off.", s)),
        }
    }
}

impl std::fmt::Display for GeneratorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorChoice::Stub => write!(f, "stub"),
            GeneratorChoice::Off => write!(f, "off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_choice_parses() {
        assert!(matches!("stub".parse(), Ok(GeneratorChoice::Stub)));
        assert!(matches!("OFF".parse(), Ok(GeneratorChoice::Off)));
        assert!(matches!("none".parse(), Ok(GeneratorChoice::Off)));
        assert!("gpt".parse::<GeneratorChoice>().is_err());
    }
}
