//! Configuration provider: per-persona rule tables with a generic fallback.
//!
//! The table is built once (built-ins plus optional overrides) and then only
//! read.  A reload builds a complete new table and swaps it in behind a
//! single pointer, so a reader always sees one consistent snapshot.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::persona::profile::normalize_persona_id;

use super::builtin::builtin_personas;
use super::error::ConfigError;
use super::loader::{LoadReport, OverrideDocument};
use super::rules::{
    BehaviorRules, CommunicationRules, ConfidenceRules, ExpertiseLevels,
    PersonalityConfiguration, StressRules,
};

// ============================================================================
// Provider contract
// ============================================================================

/// Read-only source of persona configuration.
///
/// Lookups are case-insensitive and never fail: unknown personas receive the
/// generic table.
pub trait ConfigurationProvider: Send + Sync {
    /// Full configuration for `persona_id`.
    fn configuration(&self, persona_id: &str) -> PersonalityConfiguration;

    /// Whether `persona_id` has its own table.
    fn is_supported(&self, persona_id: &str) -> bool;

    /// Ids of every persona with its own table.
    fn list_supported(&self) -> BTreeSet<String>;

    /// Expertise table for `persona_id`.
    fn expertise_levels(&self, persona_id: &str) -> ExpertiseLevels {
        self.configuration(persona_id).expertise_levels
    }

    /// Context boosts and trait influence for `persona_id`.
    fn behavior_rules(&self, persona_id: &str) -> BehaviorRules {
        self.configuration(persona_id).behavior_rules
    }

    /// Stress and time-pressure coefficients for `persona_id`.
    fn stress_rules(&self, persona_id: &str) -> StressRules {
        self.configuration(persona_id).stress_rules
    }

    /// Urgency and complexity formality rules for `persona_id`.
    fn communication_rules(&self, persona_id: &str) -> CommunicationRules {
        self.configuration(persona_id).communication_rules
    }

    /// Expertise confidence coefficients for `persona_id`.
    fn confidence_rules(&self, persona_id: &str) -> ConfidenceRules {
        self.configuration(persona_id).confidence_rules
    }
}

// ============================================================================
// Persona table
// ============================================================================

/// Immutable-once-published map of persona id → configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonaTable {
    personas: BTreeMap<String, PersonalityConfiguration>,
}

impl PersonaTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in personas.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (id, cfg) in builtin_personas() {
            table.insert(&id, cfg);
        }
        table
    }

    /// Built-ins refined by an override document.
    pub fn with_overrides(doc: &OverrideDocument) -> (Self, LoadReport) {
        let mut table = Self::builtin();
        let report = doc.apply(&mut table);
        (table, report)
    }

    /// Insert or replace a persona.  The id is normalised and the
    /// configuration clamped.
    pub fn insert(&mut self, persona_id: &str, cfg: PersonalityConfiguration) {
        self.personas
            .insert(normalize_persona_id(persona_id), cfg.clamped());
    }

    /// Configuration for `persona_id`, matched case-insensitively.  `None` for
    /// unknown personas; the generic fallback is the provider's job.
    pub fn get(&self, persona_id: &str) -> Option<&PersonalityConfiguration> {
        self.personas.get(&normalize_persona_id(persona_id))
    }

    /// Whether `persona_id` has its own entry.
    pub fn contains(&self, persona_id: &str) -> bool {
        self.get(persona_id).is_some()
    }

    /// Normalised ids, sorted.
    pub fn ids(&self) -> BTreeSet<String> {
        self.personas.keys().cloned().collect()
    }

    /// Number of personas in the table.
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the table holds no personas.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

// ============================================================================
// Provider
// ============================================================================

/// In-memory [`ConfigurationProvider`] with atomic reload.
#[derive(Debug)]
pub struct PersonaConfigProvider {
    table: RwLock<Arc<PersonaTable>>,
}

impl PersonaConfigProvider {
    /// Provider over the built-in personas.
    pub fn new() -> Self {
        Self::from_table(PersonaTable::builtin())
    }

    /// Provider over an explicit table (e.g. synthetic tables in tests).
    pub fn from_table(table: PersonaTable) -> Self {
        log::info!("Persona configuration ready: {} personas", table.len());
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Built-ins refined by an override document given as YAML or JSON.
    pub fn from_yaml(yaml: &str) -> Result<(Self, LoadReport), ConfigError> {
        let doc = OverrideDocument::from_yaml(yaml)?;
        let (table, report) = PersonaTable::with_overrides(&doc);
        Ok((Self::from_table(table), report))
    }

    /// Built-ins refined by an override document on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<(Self, LoadReport), ConfigError> {
        let doc = OverrideDocument::from_file(path)?;
        let (table, report) = PersonaTable::with_overrides(&doc);
        Ok((Self::from_table(table), report))
    }

    /// Current table.  Later reloads do not affect a snapshot already taken.
    pub fn snapshot(&self) -> Arc<PersonaTable> {
        Arc::clone(&self.table.read())
    }

    /// Replace the whole table in one step.
    pub fn reload(&self, table: PersonaTable) {
        let table = Arc::new(table);
        log::info!("Reloading persona configuration: {} personas", table.len());
        *self.table.write() = table;
    }

    /// Rebuild from built-ins plus `yaml` and swap it in.  On a document-level
    /// error the current table stays in place.
    pub fn reload_from_yaml(&self, yaml: &str) -> Result<LoadReport, ConfigError> {
        let doc = OverrideDocument::from_yaml(yaml)?;
        let (table, report) = PersonaTable::with_overrides(&doc);
        self.reload(table);
        Ok(report)
    }
}

impl Default for PersonaConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationProvider for PersonaConfigProvider {
    fn configuration(&self, persona_id: &str) -> PersonalityConfiguration {
        let table = self.snapshot();
        match table.get(persona_id) {
            Some(cfg) => cfg.clone(),
            None => {
                log::debug!("No configuration for persona '{}', using generic", persona_id);
                PersonalityConfiguration::generic()
            }
        }
    }

    fn is_supported(&self, persona_id: &str) -> bool {
        self.snapshot().contains(persona_id)
    }

    fn list_supported(&self) -> BTreeSet<String> {
        self.snapshot().ids()
    }
}

// ============================================================================
// Tests
// ============================================================================
