//! Override documents: YAML (or JSON) sections that refine or add personas.
//!
//! ```yaml
//! personas:
//!   avery:
//!     expertise_levels:
//!       software_architecture: 0.97
//!     stress_rules:
//!       directness_factor: 0.4
//!   riley:
//!     behavior_rules:
//!       trait_influence: 0.8
//! ```
//!
//! Each entry is partial: only the fields it names change, on top of the
//! existing persona with the same id (or the generic table for a new id).
//! A malformed entry is logged and skipped; the remaining entries still load.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::persona::profile::normalize_persona_id;
use crate::persona::DomainType;

use super::error::ConfigError;
use super::provider::PersonaTable;
use super::rules::{CommunicationRules, PersonalityConfiguration};

// ============================================================================
// Override schema
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BehaviorRulesOverride {
    technical_context_boost: Option<f32>,
    leadership_context_boost: Option<f32>,
    family_context_boost: Option<f32>,
    professional_context_boost: Option<f32>,
    trait_influence: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StressRulesOverride {
    directness_factor: Option<f32>,
    structured_thinking_boost: Option<f32>,
    detail_reduction_factor: Option<f32>,
    warmth_reduction_factor: Option<f32>,
    solution_focus_factor: Option<f32>,
    self_reflection_factor: Option<f32>,
    confidence_factor: Option<f32>,
    pragmatism_factor: Option<f32>,
    results_orientation_factor: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommunicationRulesOverride {
    high_urgency_threshold: Option<f32>,
    urgency_formality_boost: Option<f32>,
    /// Any finite number; rounded and clamped to 1–10 at load.
    complexity_formality_threshold: Option<f32>,
    complexity_formality_boost: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfidenceRulesOverride {
    complexity_reduction_rate: Option<f32>,
    core_domain_confidence_bonus: Option<f32>,
    known_weakness_reduction: Option<f32>,
}

/// One persona entry of an override document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersonaOverride {
    #[serde(default)]
    expertise_levels: HashMap<String, f32>,
    #[serde(default)]
    behavior_rules: BehaviorRulesOverride,
    #[serde(default)]
    stress_rules: StressRulesOverride,
    #[serde(default)]
    communication_rules: CommunicationRulesOverride,
    #[serde(default)]
    confidence_rules: ConfidenceRulesOverride,
}

/// Overwrite `slot` when `value` is present; reject non-finite numbers.
fn set(slot: &mut f32, field: &str, value: Option<f32>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() => Err(format!("{} is not a finite number", field)),
        Some(v) => {
            *slot = v;
            Ok(())
        }
        None => Ok(()),
    }
}

impl PersonaOverride {
    /// Apply this override to `base`.  The result is clamped.
    fn apply_to(&self, base: PersonalityConfiguration) -> Result<PersonalityConfiguration, String> {
        let mut cfg = base;

        for (name, level) in &self.expertise_levels {
            let domain: DomainType = name.parse().map_err(|e| format!("{}", e))?;
            if !level.is_finite() {
                return Err(format!("expertise level for {} is not a finite number", name));
            }
            cfg.expertise_levels.set(domain, *level);
        }

        let b = &self.behavior_rules;
        let rules = &mut cfg.behavior_rules;
        set(&mut rules.technical_context_boost, "technical_context_boost", b.technical_context_boost)?;
        set(&mut rules.leadership_context_boost, "leadership_context_boost", b.leadership_context_boost)?;
        set(&mut rules.family_context_boost, "family_context_boost", b.family_context_boost)?;
        set(&mut rules.professional_context_boost, "professional_context_boost", b.professional_context_boost)?;
        set(&mut rules.trait_influence, "trait_influence", b.trait_influence)?;

        let s = &self.stress_rules;
        let rules = &mut cfg.stress_rules;
        set(&mut rules.directness_factor, "directness_factor", s.directness_factor)?;
        set(&mut rules.structured_thinking_boost, "structured_thinking_boost", s.structured_thinking_boost)?;
        set(&mut rules.detail_reduction_factor, "detail_reduction_factor", s.detail_reduction_factor)?;
        set(&mut rules.warmth_reduction_factor, "warmth_reduction_factor", s.warmth_reduction_factor)?;
        set(&mut rules.solution_focus_factor, "solution_focus_factor", s.solution_focus_factor)?;
        set(&mut rules.self_reflection_factor, "self_reflection_factor", s.self_reflection_factor)?;
        set(&mut rules.confidence_factor, "confidence_factor", s.confidence_factor)?;
        set(&mut rules.pragmatism_factor, "pragmatism_factor", s.pragmatism_factor)?;
        set(&mut rules.results_orientation_factor, "results_orientation_factor", s.results_orientation_factor)?;

        let c = &self.communication_rules;
        let rules = &mut cfg.communication_rules;
        set(&mut rules.high_urgency_threshold, "high_urgency_threshold", c.high_urgency_threshold)?;
        set(&mut rules.urgency_formality_boost, "urgency_formality_boost", c.urgency_formality_boost)?;
        set(&mut rules.complexity_formality_boost, "complexity_formality_boost", c.complexity_formality_boost)?;
        if let Some(threshold) = c.complexity_formality_threshold {
            if !threshold.is_finite() {
                return Err("complexity_formality_threshold is not a finite number".to_string());
            }
            rules.complexity_formality_threshold = CommunicationRules::complexity_threshold(threshold);
        }

        let k = &self.confidence_rules;
        let rules = &mut cfg.confidence_rules;
        set(&mut rules.complexity_reduction_rate, "complexity_reduction_rate", k.complexity_reduction_rate)?;
        set(&mut rules.core_domain_confidence_bonus, "core_domain_confidence_bonus", k.core_domain_confidence_bonus)?;
        set(&mut rules.known_weakness_reduction, "known_weakness_reduction", k.known_weakness_reduction)?;

        Ok(cfg.clamped())
    }
}

// ============================================================================
// Override document
// ============================================================================

/// Outcome of applying an override document.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Persona ids that were added or overridden.
    pub loaded: Vec<String>,
    /// Entries that were skipped, as [`ConfigError::MalformedPersona`].
    pub skipped: Vec<ConfigError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A parsed override document whose entries have not yet been validated.
#[derive(Debug, Clone, Default)]
pub struct OverrideDocument {
    entries: Vec<(String, Value)>,
}

impl OverrideDocument {
    /// Parse the document structure.  Fails only when the root is not a
    /// mapping with a `personas` mapping; individual entries are checked by
    /// [`OverrideDocument::apply`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_yaml::from_str(yaml)?;
        let root = match root {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(m) => m,
            other => {
                return Err(ConfigError::InvalidDocument(format!(
                    "expected a mapping at the root, found {}",
                    kind(&other)
                )))
            }
        };

        let personas = match root.get("personas") {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Mapping(m)) => m,
            Some(other) => {
                return Err(ConfigError::InvalidDocument(format!(
                    "`personas` must be a mapping, found {}",
                    kind(other)
                )))
            }
        };

        let mut entries = Vec::with_capacity(personas.len());
        for (key, value) in personas {
            let id = match key {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => {
                    log::warn!("Skipping persona entry with {} key", kind(other));
                    continue;
                }
            };
            entries.push((id, value.clone()));
        }
        Ok(Self { entries })
    }

    /// Read and parse a document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry to `table`.  Malformed entries are logged, reported
    /// and skipped.
    pub fn apply(&self, table: &mut PersonaTable) -> LoadReport {
        let mut report = LoadReport::default();

        for (raw_id, value) in &self.entries {
            let id = normalize_persona_id(raw_id);
            match Self::resolve(table, &id, value) {
                Ok(cfg) => {
                    table.insert(&id, cfg);
                    report.loaded.push(id);
                }
                Err(reason) => {
                    log::warn!("Skipping persona override '{}': {}", raw_id, reason);
                    report.skipped.push(ConfigError::MalformedPersona {
                        persona: raw_id.clone(),
                        reason,
                    });
                }
            }
        }

        log::info!(
            "Applied persona overrides: {} loaded, {} skipped",
            report.loaded.len(),
            report.skipped.len()
        );
        report
    }

    fn resolve(
        table: &PersonaTable,
        id: &str,
        value: &Value,
    ) -> Result<PersonalityConfiguration, String> {
        if id.is_empty() {
            return Err("persona id is empty".to_string());
        }
        let ovr: PersonaOverride = match value {
            Value::Null => PersonaOverride::default(),
            v => serde_yaml::from_value(v.clone()).map_err(|e| e.to_string())?,
        };
        let base = table.get(id).cloned().unwrap_or_default();
        ovr.apply_to(base)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ============================================================================
// Tests
// ============================================================================
