use crate::classifier::Classifier;
use crate::error::{CrossError, Result};
use crate::InheritanceMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Settings read from a TOML file.
///
/// ```toml
/// max_traits = 10
///
/// [modes]
/// "Mack Snow" = "co-dominant"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on the number of traits in one cross. Unbounded if unset.
    pub max_traits: Option<usize>,
    /// Trait name to mode, consulted before keyword inference.
    pub modes: BTreeMap<String, InheritanceMode>,
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CrossError::Configuration(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_traits == Some(0) {
            return Err(CrossError::Configuration(
                "max_traits must be at least 1".into(),
            ));
        }
        if let Some(name) = self.modes.keys().find(|name| name.trim().is_empty()) {
            return Err(CrossError::Configuration(format!(
                "Blank trait name {:?} in modes",
                name
            )));
        }
        let mut seen: BTreeMap<String, (&str, InheritanceMode)> = BTreeMap::new();
        for (name, mode) in &self.modes {
            match seen.insert(name.to_lowercase(), (name.as_str(), *mode)) {
                Some((other, other_mode)) if other_mode != *mode => {
                    return Err(CrossError::Configuration(format!(
                        "Conflicting modes for {:?} ({}) and {:?} ({})",
                        other, other_mode, name, mode
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::with_modes(self.modes.iter().map(|(name, mode)| (name, *mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trait;
    use std::error::Error;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() -> std::result::Result<(), Box<dyn Error>> {
        assert_eq!(Config::parse("")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_modes_feed_the_classifier() -> std::result::Result<(), Box<dyn Error>> {
        let config = Config::parse(
            r#"
            max_traits = 4

            [modes]
            "Mack Snow" = "co-dominant"
            "Lemon Frost" = "dominant"
            "#,
        )?;
        assert_eq!(config.max_traits, Some(4));
        let classifier = config.classifier();
        assert_eq!(classifier.classify(&Trait::new("Mack Snow")), InheritanceMode::CoDominant);
        Ok(())
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(matches!(
            Config::parse("[modes]\nEnigma = \"semi-dominant\"\n"),
            Err(CrossError::Toml(_))
        ));
    }

    #[test]
    fn test_modes_differing_only_in_case_must_agree() -> std::result::Result<(), Box<dyn Error>> {
        let conflicting = r#"
            [modes]
            "Mack Snow" = "co-dominant"
            "mack snow" = "recessive"
            "#;
        assert!(matches!(
            Config::parse(conflicting),
            Err(CrossError::Configuration(_))
        ));

        let agreeing = r#"
            [modes]
            "Mack Snow" = "co-dominant"
            "MACK SNOW" = "co-dominant"
            "#;
        let classifier = Config::parse(agreeing)?.classifier();
        assert_eq!(
            classifier.classify(&Trait::new("mack snow")),
            InheritanceMode::CoDominant
        );
        Ok(())
    }

    #[test]
    fn test_zero_max_traits_is_rejected() {
        assert!(matches!(
            Config::parse("max_traits = 0"),
            Err(CrossError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_from_file() -> std::result::Result<(), Box<dyn Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "[modes]\nAlbino = \"recessive\"")?;
        let config = Config::from_path(file.path())?;
        assert_eq!(config.modes.get("Albino"), Some(&InheritanceMode::Recessive));
        assert!(matches!(
            Config::from_path(file.path().with_extension("missing")),
            Err(CrossError::Configuration(_))
        ));
        Ok(())
    }
}
