use crate::{GenotypeLabel, InheritanceMode};
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Allele {
    Dominant,
    Recessive,
}

impl Allele {
    pub fn symbol(&self) -> char {
        match self {
            Self::Dominant => 'R',
            Self::Recessive => 'r',
        }
    }
}

/// An unordered pair of alleles at one locus.
///
/// The pair is stored sorted, dominant first, so `Rr` and `rR` compare
/// equal.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct AllelePair {
    alleles: [Allele; 2],
}

impl AllelePair {
    pub fn new(first: Allele, second: Allele) -> Self {
        let alleles = if first <= second {
            [first, second]
        } else {
            [second, first]
        };
        Self { alleles }
    }

    pub fn homozygous(allele: Allele) -> Self {
        Self::new(allele, allele)
    }

    pub fn heterozygous() -> Self {
        Self::new(Allele::Dominant, Allele::Recessive)
    }

    pub fn alleles(&self) -> [Allele; 2] {
        self.alleles
    }

    /// Number of copies of `allele` in the pair, 0 to 2.
    pub fn count(&self, allele: Allele) -> usize {
        self.alleles.iter().filter(|a| **a == allele).count()
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.alleles[0].symbol(), self.alleles[1].symbol())
    }
}

/// Maps a genotype label to the allele pair it stands for.
///
/// Returns `None` when the label is not one the mode offers. Base traits
/// are homozygous dominant whatever the label. Probable carriers
/// ("Pos Het", "66% Het", "50% Het") are treated as proven hets.
pub fn alleles(mode: InheritanceMode, genotype: GenotypeLabel) -> Option<AllelePair> {
    use Allele::*;
    use GenotypeLabel::*;
    let pair = match (mode, genotype) {
        (InheritanceMode::Base, _) => AllelePair::homozygous(Dominant),
        (InheritanceMode::Recessive, Visual) => AllelePair::homozygous(Recessive),
        (InheritanceMode::Recessive, NoPorta) => AllelePair::homozygous(Dominant),
        (InheritanceMode::Recessive, g) if g.is_het() => AllelePair::heterozygous(),
        (InheritanceMode::Dominant, Visual) => AllelePair::heterozygous(),
        (InheritanceMode::Dominant, NoPorta) => AllelePair::homozygous(Recessive),
        (InheritanceMode::CoDominant, Super) => AllelePair::homozygous(Dominant),
        (InheritanceMode::CoDominant, Visual) => AllelePair::heterozygous(),
        (InheritanceMode::CoDominant, NoPorta) => AllelePair::homozygous(Recessive),
        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unordered() {
        assert_eq!(
            AllelePair::new(Allele::Recessive, Allele::Dominant),
            AllelePair::new(Allele::Dominant, Allele::Recessive)
        );
        assert_eq!(AllelePair::heterozygous().to_string(), "Rr");
    }

    #[test]
    fn test_recessive_mapping() {
        let mode = InheritanceMode::Recessive;
        assert_eq!(
            alleles(mode, GenotypeLabel::Visual).map(|p| p.to_string()),
            Some("rr".into())
        );
        assert_eq!(
            alleles(mode, GenotypeLabel::NoPorta).map(|p| p.to_string()),
            Some("RR".into())
        );
        let hets = [
            GenotypeLabel::Het,
            GenotypeLabel::PosHet,
            GenotypeLabel::Het66,
            GenotypeLabel::Het50,
        ];
        for label in hets.iter() {
            assert_eq!(alleles(mode, *label), Some(AllelePair::heterozygous()));
        }
        assert_eq!(alleles(mode, GenotypeLabel::Super), None);
    }

    #[test]
    fn test_dominant_mapping() {
        let mode = InheritanceMode::Dominant;
        assert_eq!(alleles(mode, GenotypeLabel::Visual), Some(AllelePair::heterozygous()));
        assert_eq!(
            alleles(mode, GenotypeLabel::NoPorta),
            Some(AllelePair::homozygous(Allele::Recessive))
        );
        assert_eq!(alleles(mode, GenotypeLabel::Het), None);
        assert_eq!(alleles(mode, GenotypeLabel::Super), None);
    }

    #[test]
    fn test_co_dominant_mapping() {
        let mode = InheritanceMode::CoDominant;
        assert_eq!(
            alleles(mode, GenotypeLabel::Super),
            Some(AllelePair::homozygous(Allele::Dominant))
        );
        assert_eq!(alleles(mode, GenotypeLabel::Visual), Some(AllelePair::heterozygous()));
        assert_eq!(
            alleles(mode, GenotypeLabel::NoPorta),
            Some(AllelePair::homozygous(Allele::Recessive))
        );
        assert_eq!(alleles(mode, GenotypeLabel::PosHet), None);
    }

    #[test]
    fn test_base_is_always_homozygous_dominant() {
        for label in GenotypeLabel::ALL.iter() {
            assert_eq!(
                alleles(InheritanceMode::Base, *label),
                Some(AllelePair::homozygous(Allele::Dominant))
            );
        }
    }

    #[test]
    fn test_every_offered_label_maps() {
        for mode in InheritanceMode::ALL.iter() {
            for label in mode.genotypes() {
                assert!(alleles(*mode, *label).is_some(), "{} {}", mode, label);
            }
        }
    }
}
