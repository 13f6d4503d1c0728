mod cli;

use clap::Parser;
use punnett::error::Result;
use punnett::observable::{assignments, CsvBuilder};
use punnett::prelude::*;
use std::fs::File;
use std::path::PathBuf;

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}

fn cross(
    father: Vec<String>,
    mother: Vec<String>,
    selections: Option<PathBuf>,
    vocabulary: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut calculator = Calculator::from_config(&load_config(config)?);
    if let Some(path) = vocabulary {
        let vocabulary = Vocabulary::from_path(&path)?;
        log::info!("Loaded {} traits from {}", vocabulary.len(), path.display());
        calculator.vocabulary(vocabulary);
    }

    let mut parents = Parents::new();
    if let Some(path) = selections {
        parents.observe(CsvBuilder::new().from_reader(Box::new(File::open(path)?))?)?;
    }
    parents.observe(assignments(Parent::Father, &father))?;
    parents.observe(assignments(Parent::Mother, &mother))?;

    let outcomes = calculator.cross_parents(&parents)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{}", outcome);
        }
    }
    Ok(())
}

fn classify(trait_name: String, config: Option<PathBuf>) -> Result<()> {
    let classifier = load_config(config)?.classifier();
    println!("{}", classifier.classify(&Trait::new(&trait_name)));
    Ok(())
}

fn genotypes(trait_name: String, config: Option<PathBuf>) -> Result<()> {
    let mode = load_config(config)?.classifier().classify(&Trait::new(&trait_name));
    println!("{} ({})", trait_name, mode);
    for genotype in mode.genotypes() {
        println!("  {:<10}{}", genotype.as_str(), genotype.description());
    }
    Ok(())
}

fn traits(vocabulary: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let classifier = load_config(config)?.classifier();
    for trait_name in Vocabulary::from_path(vocabulary)?.iter() {
        println!("{}\t{}", trait_name, classifier.classify(trait_name));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Cross {
            father,
            mother,
            selections,
            vocabulary,
            config,
            json,
        } => cross(father, mother, selections, vocabulary, config, json),
        cli::Commands::Classify { trait_name, config } => classify(trait_name, config),
        cli::Commands::Genotypes { trait_name, config } => genotypes(trait_name, config),
        cli::Commands::Traits { vocabulary, config } => traits(vocabulary, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
