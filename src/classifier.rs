use crate::{InheritanceMode, Trait};
use std::collections::HashMap;

const BASE_NAMES: [&str; 3] = ["wild", "wild type", "normal"];

const RECESSIVE_KEYWORDS: [&str; 7] = [
    "het",
    "patternless",
    "albino",
    "ecl...pher",
    "rainwater",
    "tremper",
    "bell",
];

const CO_DOMINANT_KEYWORD: &str = "super";

/// Infers a mode from keywords in the trait name.
///
/// Checks run in order and the first match wins: exact base names, then
/// recessive keywords, then "super" for co-dominant. Everything else is
/// dominant, so every name gets a mode.
pub fn infer_mode(name: &str) -> InheritanceMode {
    let name = name.to_lowercase();
    if BASE_NAMES.contains(&name.as_str()) {
        InheritanceMode::Base
    } else if RECESSIVE_KEYWORDS.iter().any(|k| name.contains(k)) {
        InheritanceMode::Recessive
    } else if name.contains(CO_DOMINANT_KEYWORD) {
        InheritanceMode::CoDominant
    } else {
        InheritanceMode::Dominant
    }
}

/// Resolves inheritance modes, preferring explicit entries over keywords.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    modes: HashMap<String, InheritanceMode>,
}

impl Classifier {
    /// A classifier with no explicit entries; uses keyword inference only.
    pub fn new() -> Self {
        Self {
            modes: HashMap::new(),
        }
    }

    pub fn with_modes<I, S>(modes: I) -> Self
    where
        I: IntoIterator<Item = (S, InheritanceMode)>,
        S: AsRef<str>,
    {
        let mut classifier = Self::new();
        for (name, mode) in modes {
            classifier.insert(name.as_ref(), mode);
        }
        classifier
    }

    /// Pins the mode of a trait. Lookup ignores case.
    pub fn insert(&mut self, name: &str, mode: InheritanceMode) -> &mut Self {
        self.modes.insert(name.to_lowercase(), mode);
        self
    }

    pub fn classify(&self, trait_name: &Trait) -> InheritanceMode {
        self.modes
            .get(&trait_name.name().to_lowercase())
            .copied()
            .unwrap_or_else(|| infer_mode(trait_name.name()))
    }
}
