//! Per-persona rule tables.
//!
//! Every numeric field has a documented range.  Tables are clamped into
//! those ranges once, when a configuration is loaded
//! ([`PersonalityConfiguration::clamped`]); the adaptation components read
//! them as-is.
//!
//! `Default` on every table yields the **generic** coefficients used for
//! personas the provider does not know.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adaptation::bounds::{clamp_range, unit, CONFIDENCE_BOOST_LIMIT};
use crate::persona::DomainType;

/// Confidence assumed for any domain a persona does not map.
pub const GENERIC_DOMAIN_CONFIDENCE: f32 = 0.6;

// ============================================================================
// Expertise levels
// ============================================================================

/// Domain → confidence (0.0–1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertiseLevels(BTreeMap<DomainType, f32>);

impl ExpertiseLevels {
    /// Every domain at the same level.
    pub fn uniform(level: f32) -> Self {
        Self(DomainType::ALL.iter().map(|d| (*d, level)).collect())
    }

    /// Level for `domain`, or [`GENERIC_DOMAIN_CONFIDENCE`] when unmapped.
    pub fn level(&self, domain: DomainType) -> f32 {
        self.0
            .get(&domain)
            .copied()
            .unwrap_or(GENERIC_DOMAIN_CONFIDENCE)
    }

    pub fn set(&mut self, domain: DomainType, level: f32) {
        self.0.insert(domain, level);
    }

    pub fn contains(&self, domain: DomainType) -> bool {
        self.0.contains_key(&domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DomainType, f32)> + '_ {
        self.0.iter().map(|(d, v)| (*d, *v))
    }

    fn clamped(mut self) -> Self {
        for v in self.0.values_mut() {
            *v = unit(*v);
        }
        self
    }
}

impl Default for ExpertiseLevels {
    fn default() -> Self {
        Self::uniform(GENERIC_DOMAIN_CONFIDENCE)
    }
}

impl FromIterator<(DomainType, f32)> for ExpertiseLevels {
    fn from_iter<I: IntoIterator<Item = (DomainType, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Behavior rules
// ============================================================================

/// Context-boost multipliers applied to behavior baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorRules {
    /// Scales `technical_detail` in technical contexts.  0.5–2.0.
    pub technical_context_boost: f32,
    /// Scales `leadership_tone` in professional and strategic contexts.  0.5–2.0.
    pub leadership_context_boost: f32,
    /// Scales `warmth` and `protectiveness` in family contexts.  0.5–2.0.
    pub family_context_boost: f32,
    /// Scales `results_orientation` in professional and strategic contexts.  0.5–2.0.
    pub professional_context_boost: f32,
    /// Scales every per-trait delta.  0.0–2.0.
    pub trait_influence: f32,
}

impl BehaviorRules {
    /// Accepted range of every context boost multiplier.
    pub const BOOST_RANGE: (f32, f32) = (0.5, 2.0);
    /// Accepted range of `trait_influence`.
    pub const INFLUENCE_RANGE: (f32, f32) = (0.0, 2.0);

    /// Boosts clamped into `BOOST_RANGE`, influence into `INFLUENCE_RANGE`.
    pub fn clamped(self) -> Self {
        let boost = |v| clamp_range(v, Self::BOOST_RANGE.0, Self::BOOST_RANGE.1);
        Self {
            technical_context_boost: boost(self.technical_context_boost),
            leadership_context_boost: boost(self.leadership_context_boost),
            family_context_boost: boost(self.family_context_boost),
            professional_context_boost: boost(self.professional_context_boost),
            trait_influence: clamp_range(
                self.trait_influence,
                Self::INFLUENCE_RANGE.0,
                Self::INFLUENCE_RANGE.1,
            ),
        }
    }
}

impl Default for BehaviorRules {
    fn default() -> Self {
        Self {
            technical_context_boost: 1.0,
            leadership_context_boost: 1.0,
            family_context_boost: 1.0,
            professional_context_boost: 1.0,
            trait_influence: 1.0,
        }
    }
}

// ============================================================================
// Stress rules
// ============================================================================

/// Coefficients turning stress and time pressure into behavior deltas.
///
/// All factors are 0.0–1.0 except `confidence_factor`, which may be negative
/// (a persona that loses confidence under stress) and lies in −0.3–0.3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressRules {
    /// Directness gained per unit of stress.
    pub directness_factor: f32,
    /// Structured thinking gained per unit of stress.
    pub structured_thinking_boost: f32,
    /// Technical detail shed per unit of time pressure.
    pub detail_reduction_factor: f32,
    /// Warmth lost per unit of stress.
    pub warmth_reduction_factor: f32,
    /// Results orientation gained per unit of time pressure.
    pub solution_focus_factor: f32,
    /// Self-reflection lost per unit of stress.
    pub self_reflection_factor: f32,
    /// Confidence change per unit of stress.
    pub confidence_factor: f32,
    /// Pragmatism gained per unit of time pressure.
    pub pragmatism_factor: f32,
    /// Results orientation gained per unit of `max(stress, time_pressure)`.
    pub results_orientation_factor: f32,
}

impl StressRules {
    /// Every factor clamped to 0.0–1.0 except `confidence_factor` (−0.3–0.3).
    pub fn clamped(self) -> Self {
        Self {
            directness_factor: unit(self.directness_factor),
            structured_thinking_boost: unit(self.structured_thinking_boost),
            detail_reduction_factor: unit(self.detail_reduction_factor),
            warmth_reduction_factor: unit(self.warmth_reduction_factor),
            solution_focus_factor: unit(self.solution_focus_factor),
            self_reflection_factor: unit(self.self_reflection_factor),
            confidence_factor: clamp_range(
                self.confidence_factor,
                -CONFIDENCE_BOOST_LIMIT,
                CONFIDENCE_BOOST_LIMIT,
            ),
            pragmatism_factor: unit(self.pragmatism_factor),
            results_orientation_factor: unit(self.results_orientation_factor),
        }
    }
}

impl Default for StressRules {
    fn default() -> Self {
        Self {
            directness_factor: 0.2,
            structured_thinking_boost: 0.15,
            detail_reduction_factor: 0.2,
            warmth_reduction_factor: 0.1,
            solution_focus_factor: 0.15,
            self_reflection_factor: 0.15,
            confidence_factor: 0.0,
            pragmatism_factor: 0.1,
            results_orientation_factor: 0.1,
        }
    }
}

// ============================================================================
// Communication rules
// ============================================================================

/// Thresholds for formality switching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRules {
    /// Urgency at or above which formality is raised.  0.0–1.0.
    pub high_urgency_threshold: f32,
    /// Formality added under high urgency.  0.0–0.5.
    pub urgency_formality_boost: f32,
    /// Complexity above which formality is raised.  1–10.
    pub complexity_formality_threshold: u8,
    /// Formality added above the complexity threshold.  0.0–0.5.
    pub complexity_formality_boost: f32,
}

impl CommunicationRules {
    /// Upper bound of both formality boosts.
    pub const BOOST_MAX: f32 = 0.5;

    /// Round a raw complexity threshold into 1–10.  NaN maps to 1.
    pub fn complexity_threshold(raw: f32) -> u8 {
        clamp_range(raw.round(), 1.0, 10.0) as u8
    }

    /// Threshold to 0.0–1.0, boosts to 0.0–`BOOST_MAX`, complexity threshold to 1–10.
    pub fn clamped(self) -> Self {
        Self {
            high_urgency_threshold: unit(self.high_urgency_threshold),
            urgency_formality_boost: clamp_range(self.urgency_formality_boost, 0.0, Self::BOOST_MAX),
            complexity_formality_threshold: self.complexity_formality_threshold.clamp(1, 10),
            complexity_formality_boost: clamp_range(
                self.complexity_formality_boost,
                0.0,
                Self::BOOST_MAX,
            ),
        }
    }
}

/// Urgency counts as high from 0.7; complexity above 7 raises formality.
impl Default for CommunicationRules {
    fn default() -> Self {
        Self {
            high_urgency_threshold: 0.7,
            urgency_formality_boost: 0.1,
            complexity_formality_threshold: 7,
            complexity_formality_boost: 0.05,
        }
    }
}

// ============================================================================
// Confidence rules
// ============================================================================

/// Persona-specific coefficients for expertise confidence scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRules {
    /// Confidence lost per complexity step above 1.  0.0–0.1.
    pub complexity_reduction_rate: f32,
    /// Added for core (expert-level) domains.  0.0–0.3.
    pub core_domain_confidence_bonus: f32,
    /// Subtracted for weakness domains.  0.0–0.5.
    pub known_weakness_reduction: f32,
}

impl ConfidenceRules {
    /// Each coefficient clamped into the range given on its field.
    pub fn clamped(self) -> Self {
        Self {
            complexity_reduction_rate: clamp_range(self.complexity_reduction_rate, 0.0, 0.1),
            core_domain_confidence_bonus: clamp_range(self.core_domain_confidence_bonus, 0.0, 0.3),
            known_weakness_reduction: clamp_range(self.known_weakness_reduction, 0.0, 0.5),
        }
    }
}

impl Default for ConfidenceRules {
    fn default() -> Self {
        Self {
            complexity_reduction_rate: 0.02,
            core_domain_confidence_bonus: 0.05,
            known_weakness_reduction: 0.1,
        }
    }
}

// ============================================================================
// Full configuration
// ============================================================================

/// Everything the engine knows about one persona.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalityConfiguration {
    /// Base confidence per domain.
    pub expertise_levels: ExpertiseLevels,
    /// Context boosts and trait influence.
    pub behavior_rules: BehaviorRules,
    /// Stress and time-pressure coefficients.
    pub stress_rules: StressRules,
    /// Formality switches for urgency and complexity.
    pub communication_rules: CommunicationRules,
    /// Expertise confidence coefficients.
    pub confidence_rules: ConfidenceRules,
}

impl PersonalityConfiguration {
    /// The fallback table for unknown personas.
    pub fn generic() -> Self {
        Self::default()
    }

    /// Every value clamped into its documented range.
    pub fn clamped(self) -> Self {
        Self {
            expertise_levels: self.expertise_levels.clamped(),
            behavior_rules: self.behavior_rules.clamped(),
            stress_rules: self.stress_rules.clamped(),
            communication_rules: self.communication_rules.clamped(),
            confidence_rules: self.confidence_rules.clamped(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
