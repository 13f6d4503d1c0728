#![crate_name = "punnett"]
//! Mendelian cross calculations for single-locus, two-allele traits.
//!
//! Each parent is described by a [`Selection`]: the traits it shows or
//! carries, each with a [`GenotypeLabel`]. A trait's [`InheritanceMode`]
//! is inferred from its name by a [`classifier::Classifier`], the label
//! is turned into an allele pair, and a Punnett square gives the
//! phenotype distribution of the offspring for that trait. Traits are
//! assorted independently and combined into ranked [`cross::JointOutcome`]s.
//!
//! ```
//! use punnett::prelude::*;
//!
//! let mut father = Selection::new();
//! father.select("Albino", GenotypeLabel::Het);
//! let mut mother = Selection::new();
//! mother.select("Albino", GenotypeLabel::Visual);
//!
//! let outcomes = Calculator::new().cross(&father, &mother)?;
//! assert_eq!(outcomes.len(), 2);
//! assert_eq!(outcomes[0].probability, 0.5);
//! # Ok::<(), punnett::error::CrossError>(())
//! ```
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CrossError, Result};

pub mod prelude;

pub mod alleles;
pub mod classifier;
pub mod config;
pub mod cross;
pub mod error;
pub mod observable;
pub mod square;
pub mod vocabulary;

pub type Probability = f64;
pub type Genotypes = BTreeMap<Trait, GenotypeLabel>;

/// A named trait, e.g. "Albino" or "Mack Snow".
///
/// Names are compared exactly. Case only matters for display, the
/// classifier lowercases before matching.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trait {
    name: String,
}

impl Trait {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for empty or whitespace-only names, which are never crossed.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl From<&str> for Trait {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InheritanceMode {
    /// Wild type. Always homozygous dominant, always shows as wild.
    Base,
    Recessive,
    Dominant,
    CoDominant,
}

impl InheritanceMode {
    pub const ALL: [InheritanceMode; 4] = [
        InheritanceMode::Base,
        InheritanceMode::Recessive,
        InheritanceMode::Dominant,
        InheritanceMode::CoDominant,
    ];

    /// The genotype labels a parent may be given for a trait of this mode.
    pub fn genotypes(&self) -> &'static [GenotypeLabel] {
        use GenotypeLabel::*;
        match self {
            Self::Recessive => &[Visual, Het, PosHet, Het66, Het50, NoPorta],
            Self::Dominant => &[Visual, NoPorta],
            Self::CoDominant => &[Super, Visual, NoPorta],
            Self::Base => &[Visual],
        }
    }

    pub fn accepts(&self, genotype: GenotypeLabel) -> bool {
        self.genotypes().contains(&genotype)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Recessive => "recessive",
            Self::Dominant => "dominant",
            Self::CoDominant => "co-dominant",
        }
    }
}

impl fmt::Display for InheritanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InheritanceMode {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "recessive" => Ok(Self::Recessive),
            "dominant" => Ok(Self::Dominant),
            "co-dominant" | "codominant" => Ok(Self::CoDominant),
            _ => Err(CrossError::UnknownMode(s.into())),
        }
    }
}

/// What a breeder knows about one parent for one trait.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GenotypeLabel {
    #[serde(rename = "Visual")]
    Visual,
    #[serde(rename = "Het")]
    Het,
    #[serde(rename = "Pos Het")]
    PosHet,
    #[serde(rename = "66% Het")]
    Het66,
    #[serde(rename = "50% Het")]
    Het50,
    #[serde(rename = "No porta")]
    NoPorta,
    #[serde(rename = "Super")]
    Super,
}

impl GenotypeLabel {
    pub const ALL: [GenotypeLabel; 7] = [
        GenotypeLabel::Visual,
        GenotypeLabel::Het,
        GenotypeLabel::PosHet,
        GenotypeLabel::Het66,
        GenotypeLabel::Het50,
        GenotypeLabel::NoPorta,
        GenotypeLabel::Super,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "Visual",
            Self::Het => "Het",
            Self::PosHet => "Pos Het",
            Self::Het66 => "66% Het",
            Self::Het50 => "50% Het",
            Self::NoPorta => "No porta",
            Self::Super => "Super",
        }
    }

    /// Any of the carrier labels, proven or probable.
    pub fn is_het(&self) -> bool {
        matches!(self, Self::Het | Self::PosHet | Self::Het66 | Self::Het50)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Visual => "Expresses the gene or morph physically, visible at a glance.",
            Self::Het => "Not visible, but carries the recessive gene and can pass it on.",
            Self::PosHet => "Possible carrier, unconfirmed. May or may not pass the gene on.",
            Self::Het66 => "66% chance of being a recessive carrier.",
            Self::Het50 => "50% chance of being a recessive carrier.",
            Self::NoPorta => "Neither expresses nor carries this gene.",
            Self::Super => {
                "Two copies of the co-dominant gene. Usually a more intense phenotype."
            }
        }
    }
}

impl fmt::Display for GenotypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenotypeLabel {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| CrossError::UnknownGenotype(s.into()))
    }
}

/// The visible (or carried) result of one trait in one offspring.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phenotype {
    #[serde(rename = "Super")]
    Super,
    #[serde(rename = "Visual")]
    Visual,
    #[serde(rename = "Het")]
    Het,
    #[serde(rename = "No porta")]
    NoPorta,
    #[serde(rename = "Wild")]
    Wild,
}

impl Phenotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Super => "Super",
            Self::Visual => "Visual",
            Self::Het => "Het",
            Self::NoPorta => "No porta",
            Self::Wild => "Wild",
        }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parent {
    Father,
    Mother,
}

impl FromStr for Parent {
    type Err = CrossError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "father" | "sire" | "male" | "1" => Ok(Self::Father),
            "mother" | "dam" | "female" | "2" => Ok(Self::Mother),
            _ => Err(CrossError::UnknownParent(s.into())),
        }
    }
}

/// One parent's chosen genotypes, keyed by trait.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    genotypes: Genotypes,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            genotypes: Genotypes::new(),
        }
    }

    /// Sets the genotype for a trait, replacing any earlier choice.
    pub fn select(&mut self, trait_name: &str, genotype: GenotypeLabel) -> &mut Self {
        self.genotypes.insert(Trait::new(trait_name), genotype);
        self
    }

    pub fn get(&self, trait_name: &Trait) -> Option<GenotypeLabel> {
        self.genotypes.get(trait_name).copied()
    }

    pub fn traits(&self) -> impl Iterator<Item = &Trait> {
        self.genotypes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Trait, &GenotypeLabel)> {
        self.genotypes.iter()
    }

    pub fn len(&self) -> usize {
        self.genotypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }
}

impl FromIterator<(Trait, GenotypeLabel)> for Selection {
    fn from_iter<I: IntoIterator<Item = (Trait, GenotypeLabel)>>(iter: I) -> Self {
        Self {
            genotypes: iter.into_iter().collect(),
        }
    }
}

/// An observation that a parent has a genotype for a trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub parent: Parent,
    pub trait_name: Trait,
    pub genotype: GenotypeLabel,
}

/// Both parents of a cross.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parents {
    pub father: Selection,
    pub mother: Selection,
}

impl Parents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_mut(&mut self, parent: Parent) -> &mut Selection {
        match parent {
            Parent::Father => &mut self.father,
            Parent::Mother => &mut self.mother,
        }
    }

    /// Records a single `Observation`.
    ///
    /// This is normally called by `observe()`. A later observation of the
    /// same parent and trait replaces the earlier one.
    pub fn observe_one(&mut self, observation: Observation) {
        self.selection_mut(observation.parent)
            .genotypes
            .insert(observation.trait_name, observation.genotype);
    }

    /// Observe all the data in the argument.
    ///
    /// Any iterator of `Result<Observation>` works, such as the
    /// [`observable::Csv`] reader or [`observable::assignments`].
    pub fn observe<I>(&mut self, observable: I) -> Result<()>
    where
        I: Iterator<Item = Result<Observation>>,
    {
        for observation in observable {
            self.observe_one(observation?);
        }
        Ok(())
    }
}
