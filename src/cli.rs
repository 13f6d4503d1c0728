use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cross two parents and list offspring outcomes, most likely first
    Cross {
        /// Father's genotype as TRAIT=GENOTYPE (repeatable)
        #[arg(short = 'f', long = "father", value_name = "TRAIT=GENOTYPE")]
        father: Vec<String>,
        /// Mother's genotype as TRAIT=GENOTYPE (repeatable)
        #[arg(short = 'm', long = "mother", value_name = "TRAIT=GENOTYPE")]
        mother: Vec<String>,
        /// CSV file with parent,trait,genotype rows
        #[arg(short = 's', long)]
        selections: Option<PathBuf>,
        /// JSON array of known trait names; other traits are rejected
        #[arg(long)]
        vocabulary: Option<PathBuf>,
        /// TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
        /// Print outcomes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the inheritance mode inferred for a trait
    Classify {
        trait_name: String,
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// List the genotypes a parent may have for a trait
    Genotypes {
        trait_name: String,
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// List a trait vocabulary with inferred modes
    Traits {
        /// JSON array of trait names
        vocabulary: PathBuf,
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}
