pub use crate::classifier::Classifier;
pub use crate::config::Config;
pub use crate::cross::{Calculator, JointOutcome, Tag};
pub use crate::error::CrossError;
pub use crate::square::TraitDistribution;
pub use crate::vocabulary::Vocabulary;
pub use crate::{
    GenotypeLabel, InheritanceMode, Observation, Parent, Parents, Phenotype, Probability,
    Selection, Trait,
};
