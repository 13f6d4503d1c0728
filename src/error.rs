use crate::{GenotypeLabel, InheritanceMode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrossError {
    #[error("Invalid genotype for {trait_name}: {genotype} is not a {mode} genotype")]
    InvalidGenotype {
        trait_name: String,
        mode: InheritanceMode,
        genotype: GenotypeLabel,
    },

    #[error("Unknown genotype label: {0}")]
    UnknownGenotype(String),

    #[error("Unknown inheritance mode: {0}")]
    UnknownMode(String),

    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    #[error("Unknown parent: {0}")]
    UnknownParent(String),

    #[error("Too many traits: {count} exceeds the configured maximum of {max}")]
    TooManyTraits { count: usize, max: usize },

    #[error("Malformed selection: {0}")]
    MalformedSelection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CrossError>;
