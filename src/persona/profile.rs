//! Personality profiles: the static, weighted trait set of an emulated persona.
//!
//! A [`PersonalityProfile`] is pure data.  The adaptation engine borrows it
//! read-only and never mutates trait weights; learning new weights from usage
//! belongs to a separate subsystem.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// One weighted personality trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    /// Free-form grouping label (e.g. "Technical", "Professional").
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Author-assigned importance (0.0–1.0).
    pub weight: f32,
}

impl PersonalityTrait {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        weight: f32,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            description: description.into(),
            weight,
        }
    }

    /// Weight clamped to 0.0–1.0.  Non-finite weights count as zero.
    pub fn effective_weight(&self) -> f32 {
        crate::adaptation::bounds::unit(self.weight)
    }

    /// Lowercased, trimmed category label.
    pub fn category_key(&self) -> String {
        self.category.trim().to_lowercase()
    }

    /// Whether this trait's category equals `label` (case-insensitive).
    pub fn in_category(&self, label: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(label)
    }

    /// Name and description joined and lowercased, for keyword matching.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// The identity of an emulated person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered trait list.  Order breaks ties during relevance ranking.
    #[serde(default)]
    pub traits: Vec<PersonalityTrait>,
}

impl PersonalityProfile {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            traits: Vec::new(),
        }
    }

    /// Builder: append a trait.
    pub fn with_trait(mut self, personality_trait: PersonalityTrait) -> Self {
        self.traits.push(personality_trait);
        self
    }

    /// Key used to look up per-persona configuration.
    pub fn persona_id(&self) -> String {
        normalize_persona_id(&self.name)
    }

    /// Traits whose category matches `label` (case-insensitive).
    pub fn traits_in<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a PersonalityTrait> + 'a {
        self.traits.iter().filter(move |t| t.in_category(label))
    }

    /// Mean effective weight of the traits in `label`, or 0.0 if there are none.
    pub fn mean_weight_in(&self, label: &str) -> f32 {
        let (sum, count) = self
            .traits_in(label)
            .fold((0.0_f32, 0_u32), |(s, c), t| (s + t.effective_weight(), c + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Parse a profile from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse a profile from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }
}

/// Normalise a persona id for case-insensitive lookup.
pub fn normalize_persona_id(id: &str) -> String {
    id.trim().to_lowercase()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_yaml_parsing() {
        let yaml = r#"
name: Avery
description: Principal engineer
traits:
  - category: Technical
    name: Rust systems design
    description: Builds low-latency services
    weight: 0.9
  - category: Personality
    name: Dry humour
    weight: 0.4
"#;
        let p = PersonalityProfile::from_yaml(yaml).unwrap();
        assert_eq!(p.name, "Avery");
        assert_eq!(p.traits.len(), 2);
        assert_eq!(p.traits[1].description, "");
        assert_eq!(p.persona_id(), "avery");
    }

    #[test]
    fn test_effective_weight_clamps() {
        let t = PersonalityTrait::new("Technical", "x", "", 1.7);
        assert_eq!(t.effective_weight(), 1.0);
        let t = PersonalityTrait::new("Technical", "x", "", -0.2);
        assert_eq!(t.effective_weight(), 0.0);
        let t = PersonalityTrait::new("Technical", "x", "", f32::NAN);
        assert_eq!(t.effective_weight(), 0.0);
    }

    #[test]
    fn test_category_matching_ignores_case() {
        let t = PersonalityTrait::new("  TECHNICAL ", "x", "", 0.5);
        assert!(t.in_category("technical"));
        assert_eq!(t.category_key(), "technical");
    }

    #[test]
    fn test_mean_weight_in_category() {
        let p = PersonalityProfile::new("p", "")
            .with_trait(PersonalityTrait::new("Personality", "a", "", 0.4))
            .with_trait(PersonalityTrait::new("personality", "b", "", 0.8))
            .with_trait(PersonalityTrait::new("Technical", "c", "", 1.0));
        assert!((p.mean_weight_in("personality") - 0.6).abs() < 1e-6);
        assert_eq!(p.mean_weight_in("family"), 0.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PersonalityProfile::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
