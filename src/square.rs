use crate::alleles::{alleles, Allele, AllelePair};
use crate::error::{CrossError, Result};
use crate::prelude::*;
use std::collections::BTreeMap;

/// The 2x2 grid of offspring genotypes for one trait.
///
/// Rows are the first parent's alleles, columns the second parent's.
/// Every cell is equally likely.
pub struct PunnettSquare {
    cells: ndarray::Array2<AllelePair>,
}

impl PunnettSquare {
    pub fn new(first: AllelePair, second: AllelePair) -> Self {
        let (rows, columns) = (first.alleles(), second.alleles());
        Self {
            cells: ndarray::Array2::from_shape_fn((2, 2), |(i, j)| {
                AllelePair::new(rows[i], columns[j])
            }),
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> AllelePair {
        self.cells[[row, column]]
    }

    pub fn cells(&self) -> impl Iterator<Item = &AllelePair> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Tallies the phenotype of every cell.
    pub fn phenotype_counts(&self, mode: InheritanceMode) -> BTreeMap<Phenotype, usize> {
        let mut counts = BTreeMap::new();
        for pair in self.cells() {
            *counts.entry(phenotype(mode, pair)).or_insert(0) += 1;
        }
        counts
    }
}

/// What an offspring with `pair` looks like (or carries) under `mode`.
pub fn phenotype(mode: InheritanceMode, pair: &AllelePair) -> Phenotype {
    match mode {
        InheritanceMode::Base => Phenotype::Wild,
        InheritanceMode::Recessive => match pair.count(Allele::Recessive) {
            2 => Phenotype::Visual,
            1 => Phenotype::Het,
            _ => Phenotype::NoPorta,
        },
        InheritanceMode::CoDominant => match pair.count(Allele::Dominant) {
            2 => Phenotype::Super,
            1 => Phenotype::Visual,
            _ => Phenotype::NoPorta,
        },
        InheritanceMode::Dominant => {
            if pair.count(Allele::Dominant) > 0 {
                Phenotype::Visual
            } else {
                Phenotype::NoPorta
            }
        }
    }
}

/// Phenotype probabilities for a single trait. Sums to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TraitDistribution {
    probabilities: BTreeMap<Phenotype, Probability>,
}

impl TraitDistribution {
    pub fn certain(phenotype: Phenotype) -> Self {
        let mut probabilities = BTreeMap::new();
        probabilities.insert(phenotype, 1.0);
        Self { probabilities }
    }

    /// Normalizes phenotype counts over `total` equally likely outcomes.
    pub fn from_counts(counts: BTreeMap<Phenotype, usize>, total: usize) -> Self {
        Self {
            probabilities: counts
                .into_iter()
                .map(|(phenotype, count)| (phenotype, count as Probability / total as Probability))
                .collect(),
        }
    }

    /// Probability of `phenotype`, zero when it cannot occur.
    pub fn get(&self, phenotype: Phenotype) -> Probability {
        self.probabilities.get(&phenotype).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phenotype, Probability)> + '_ {
        self.probabilities.iter().map(|(p, q)| (*p, *q))
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn total(&self) -> Probability {
        self.probabilities.values().sum()
    }
}

/// Crosses two parents for one trait.
///
/// Base traits are wild with certainty and their labels are not looked
/// at. For the other modes each label must be one the mode offers,
/// otherwise this fails with `InvalidGenotype`.
pub fn resolve(
    trait_name: &Trait,
    mode: InheritanceMode,
    first: GenotypeLabel,
    second: GenotypeLabel,
) -> Result<TraitDistribution> {
    if mode == InheritanceMode::Base {
        return Ok(TraitDistribution::certain(Phenotype::Wild));
    }

    let pair = |genotype: GenotypeLabel| {
        Some(genotype)
            .filter(|g| mode.accepts(*g))
            .and_then(|g| alleles(mode, g))
            .ok_or_else(|| CrossError::InvalidGenotype {
                trait_name: trait_name.to_string(),
                mode,
                genotype,
            })
    };

    let square = PunnettSquare::new(pair(first)?, pair(second)?);
    let distribution = TraitDistribution::from_counts(square.phenotype_counts(mode), square.len());
    log::debug!(
        "{} ({}): {} x {} -> {:?}",
        trait_name,
        mode,
        first,
        second,
        distribution.probabilities
    );
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn cross(
        mode: InheritanceMode,
        first: GenotypeLabel,
        second: GenotypeLabel,
    ) -> Result<TraitDistribution> {
        resolve(&Trait::new("test"), mode, first, second)
    }

    #[test]
    fn test_square_layout() {
        let square = PunnettSquare::new(
            AllelePair::heterozygous(),
            AllelePair::homozygous(Allele::Recessive),
        );
        assert_eq!(square.len(), 4);
        assert_eq!(square.cell(0, 0).to_string(), "Rr");
        assert_eq!(square.cell(1, 1).to_string(), "rr");
    }

    #[test]
    fn test_recessive_het_by_het() -> std::result::Result<(), Box<dyn Error>> {
        let d = cross(InheritanceMode::Recessive, GenotypeLabel::Het, GenotypeLabel::Het)?;
        assert_eq!(d.get(Phenotype::Visual), 0.25);
        assert_eq!(d.get(Phenotype::Het), 0.5);
        assert_eq!(d.get(Phenotype::NoPorta), 0.25);
        assert_eq!(d.len(), 3);
        Ok(())
    }

    #[test]
    fn test_probable_hets_cross_as_hets() -> std::result::Result<(), Box<dyn Error>> {
        assert_eq!(
            cross(InheritanceMode::Recessive, GenotypeLabel::Het66, GenotypeLabel::PosHet)?,
            cross(InheritanceMode::Recessive, GenotypeLabel::Het, GenotypeLabel::Het)?
        );
        Ok(())
    }

    #[test]
    fn test_recessive_visual_by_no_porta() -> std::result::Result<(), Box<dyn Error>> {
        let d = cross(InheritanceMode::Recessive, GenotypeLabel::Visual, GenotypeLabel::NoPorta)?;
        assert_eq!(d.get(Phenotype::Het), 1.0);
        assert_eq!(d.len(), 1);
        Ok(())
    }

    #[test]
    fn test_dominant_visual_by_no_porta() -> std::result::Result<(), Box<dyn Error>> {
        let d = cross(InheritanceMode::Dominant, GenotypeLabel::Visual, GenotypeLabel::NoPorta)?;
        assert_eq!(d.get(Phenotype::Visual), 0.5);
        assert_eq!(d.get(Phenotype::NoPorta), 0.5);
        Ok(())
    }

    #[test]
    fn test_co_dominant_super_by_visual() -> std::result::Result<(), Box<dyn Error>> {
        let d = cross(InheritanceMode::CoDominant, GenotypeLabel::Super, GenotypeLabel::Visual)?;
        assert_eq!(d.get(Phenotype::Super), 0.5);
        assert_eq!(d.get(Phenotype::Visual), 0.5);
        assert_eq!(d.get(Phenotype::NoPorta), 0.0);
        Ok(())
    }

    #[test]
    fn test_base_is_always_wild() -> std::result::Result<(), Box<dyn Error>> {
        for first in GenotypeLabel::ALL.iter() {
            for second in GenotypeLabel::ALL.iter() {
                let d = cross(InheritanceMode::Base, *first, *second)?;
                assert_eq!(d, TraitDistribution::certain(Phenotype::Wild));
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_valid_cross_sums_to_one() -> std::result::Result<(), Box<dyn Error>> {
        for mode in InheritanceMode::ALL.iter() {
            for first in mode.genotypes() {
                for second in mode.genotypes() {
                    let d = cross(*mode, *first, *second)?;
                    assert!((d.total() - 1.0).abs() < 1e-12);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_resolving_twice_is_identical() -> std::result::Result<(), Box<dyn Error>> {
        let a = cross(InheritanceMode::Recessive, GenotypeLabel::Het50, GenotypeLabel::Visual)?;
        let b = cross(InheritanceMode::Recessive, GenotypeLabel::Het50, GenotypeLabel::Visual)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_label_outside_mode_is_rejected() {
        let err = cross(InheritanceMode::Dominant, GenotypeLabel::PosHet, GenotypeLabel::Visual);
        assert!(matches!(
            err,
            Err(CrossError::InvalidGenotype {
                mode: InheritanceMode::Dominant,
                genotype: GenotypeLabel::PosHet,
                ..
            })
        ));
        assert!(
            cross(InheritanceMode::CoDominant, GenotypeLabel::Visual, GenotypeLabel::Het).is_err()
        );
    }
}
