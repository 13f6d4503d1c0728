use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::{CrossError, Result};
use crate::prelude::*;
use crate::square::{resolve, TraitDistribution};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Distributions of every trait in a cross, in trait order.
pub type Distributions = BTreeMap<Trait, TraitDistribution>;
pub type TagSet = BTreeSet<Tag>;

/// One trait's phenotype as shown in an outcome.
///
/// Wild tags carry no trait name, so several base traits collapse into
/// a single "Wild Type" tag.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Tag {
    pub phenotype: Phenotype,
    #[serde(rename = "trait", skip_serializing_if = "Option::is_none")]
    pub trait_name: Option<Trait>,
}

impl Tag {
    pub fn new(trait_name: &Trait, phenotype: Phenotype) -> Self {
        Self {
            phenotype,
            trait_name: match phenotype {
                Phenotype::Wild => None,
                _ => Some(trait_name.clone()),
            },
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.phenotype, &self.trait_name) {
            (Phenotype::Wild, _) | (_, None) => f.write_str("Wild Type"),
            (Phenotype::NoPorta, Some(t)) => write!(f, "Visual Wild (no porta {})", t),
            (phenotype, Some(t)) => write!(f, "{} {}", phenotype, t),
        }
    }
}

/// A full offspring description and how likely it is.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JointOutcome {
    pub tags: TagSet,
    pub probability: Probability,
}

impl JointOutcome {
    pub fn percent(&self) -> Probability {
        self.probability * 100.0
    }
}

impl fmt::Display for JointOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.percent())?;
        for tag in &self.tags {
            write!(f, "  {}", tag)?;
        }
        Ok(())
    }
}

/// Combines independent per-trait distributions into ranked outcomes.
///
/// Traits are folded in one at a time. Partial outcomes whose tag sets
/// already coincide are merged before the next trait is added, which
/// gives the same result as merging the full product at the end since
/// a tag set only ever grows. With no traits the single outcome is the
/// empty set at probability 1.
pub fn aggregate(distributions: &Distributions) -> Vec<JointOutcome> {
    let mut partials: BTreeMap<TagSet, Probability> = BTreeMap::new();
    partials.insert(TagSet::new(), 1.0);

    for (trait_name, distribution) in distributions {
        let mut next = BTreeMap::new();
        for (tags, p) in &partials {
            for (phenotype, q) in distribution.iter() {
                let mut tags = tags.clone();
                tags.insert(Tag::new(trait_name, phenotype));
                *next.entry(tags).or_insert(0.0) += p * q;
            }
        }
        partials = next;
    }

    let mut outcomes: Vec<JointOutcome> = partials
        .into_iter()
        .map(|(tags, probability)| JointOutcome { tags, probability })
        .collect();
    outcomes.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.tags.cmp(&b.tags))
    });
    outcomes
}

/// Crosses two parents trait by trait.
///
/// Built once with an optional trait vocabulary and configuration, then
/// reused for any number of crosses.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    classifier: Classifier,
    vocabulary: Option<Vocabulary>,
    max_traits: Option<usize>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: config.classifier(),
            vocabulary: None,
            max_traits: config.max_traits,
        }
    }

    pub fn classifier(&mut self, classifier: Classifier) -> &mut Self {
        self.classifier = classifier;
        self
    }

    /// Restricts crosses to traits in `vocabulary`.
    pub fn vocabulary(&mut self, vocabulary: Vocabulary) -> &mut Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn max_traits(&mut self, max_traits: usize) -> &mut Self {
        self.max_traits = Some(max_traits);
        self
    }

    pub fn classify(&self, trait_name: &Trait) -> InheritanceMode {
        self.classifier.classify(trait_name)
    }

    /// Resolves every trait either parent has a genotype for.
    ///
    /// A trait only one parent names is "No porta" for the other.
    pub fn distributions(&self, first: &Selection, second: &Selection) -> Result<Distributions> {
        let mut traits = BTreeSet::new();
        for trait_name in first.traits().chain(second.traits()) {
            if trait_name.is_blank() {
                log::warn!("Ignoring blank trait name {:?}", trait_name.name());
                continue;
            }
            if let Some(vocabulary) = &self.vocabulary {
                if !vocabulary.contains(trait_name) {
                    return Err(CrossError::UnknownTrait(trait_name.to_string()));
                }
            }
            traits.insert(trait_name);
        }

        if let Some(max) = self.max_traits {
            if traits.len() > max {
                return Err(CrossError::TooManyTraits {
                    count: traits.len(),
                    max,
                });
            }
        }

        traits
            .into_iter()
            .map(|trait_name| -> Result<(Trait, TraitDistribution)> {
                let mode = self.classify(trait_name);
                let g1 = first.get(trait_name).unwrap_or(GenotypeLabel::NoPorta);
                let g2 = second.get(trait_name).unwrap_or(GenotypeLabel::NoPorta);
                Ok((trait_name.clone(), resolve(trait_name, mode, g1, g2)?))
            })
            .collect()
    }

    /// Offspring outcomes of `first` x `second`, most likely first.
    pub fn cross(&self, first: &Selection, second: &Selection) -> Result<Vec<JointOutcome>> {
        let distributions = self.distributions(first, second)?;
        let outcomes = aggregate(&distributions);
        log::debug!(
            "Crossed {} traits into {} outcomes",
            distributions.len(),
            outcomes.len()
        );
        Ok(outcomes)
    }

    pub fn cross_parents(&self, parents: &Parents) -> Result<Vec<JointOutcome>> {
        self.cross(&parents.father, &parents.mother)
    }
}
