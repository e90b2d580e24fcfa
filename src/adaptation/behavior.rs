//! Behavior modifiers: context baselines, trait deltas and stress modulation.
//!
//! The pipeline:
//! ```text
//! neutral (0.5) ─► context baseline ─► × context boosts
//!                                     ─► + Σ trait deltas (× trait_influence)
//!                                     ─► ± stress / time-pressure deltas
//!                                     ─► clamp every axis to [0, 1]  (once)
//! ```
//!
//! Clamping happens exactly once, after every contribution is summed, so a
//! large positive trait delta can still be pulled back by a stress
//! reduction instead of being lost at the ceiling.

use serde::{Deserialize, Serialize};

use crate::config::{BehaviorRules, StressRules};
use crate::persona::{ContextType, PersonalityProfile};

use super::bounds::{clamp_range, unit, CONFIDENCE_BOOST_LIMIT};
use super::traits::BehaviorCalculator;

// ============================================================================
// Behavior modifiers
// ============================================================================

/// Fourteen independent behavior axes, each 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorModifiers {
    pub confidence: f32,
    pub directness: f32,
    pub technical_detail: f32,
    pub structured_thinking: f32,
    pub warmth: f32,
    pub pragmatism: f32,
    pub self_reflection: f32,
    pub vulnerability: f32,
    pub formality: f32,
    pub leadership_tone: f32,
    pub results_orientation: f32,
    pub protectiveness: f32,
    pub competence: f32,
    pub analytical_depth: f32,
}

impl BehaviorModifiers {
    /// Value of every axis before any context is applied.
    pub const NEUTRAL: f32 = 0.5;

    pub fn neutral() -> Self {
        Self {
            confidence: Self::NEUTRAL,
            directness: Self::NEUTRAL,
            technical_detail: Self::NEUTRAL,
            structured_thinking: Self::NEUTRAL,
            warmth: Self::NEUTRAL,
            pragmatism: Self::NEUTRAL,
            self_reflection: Self::NEUTRAL,
            vulnerability: Self::NEUTRAL,
            formality: Self::NEUTRAL,
            leadership_tone: Self::NEUTRAL,
            results_orientation: Self::NEUTRAL,
            protectiveness: Self::NEUTRAL,
            competence: Self::NEUTRAL,
            analytical_depth: Self::NEUTRAL,
        }
    }

    /// Fixed baseline bundle for a context type.
    pub fn baseline(context: ContextType) -> Self {
        let n = Self::neutral();
        match context {
            ContextType::Technical => Self {
                technical_detail: 0.90,
                pragmatism: 0.95,
                confidence: 0.95,
                structured_thinking: 0.85,
                analytical_depth: 0.85,
                competence: 0.90,
                ..n
            },
            ContextType::Professional => Self {
                leadership_tone: 0.85,
                results_orientation: 0.90,
                formality: 0.75,
                confidence: 0.85,
                directness: 0.80,
                competence: 0.85,
                ..n
            },
            ContextType::Personal => Self {
                warmth: 0.80,
                self_reflection: 0.75,
                vulnerability: 0.60,
                formality: 0.25,
                directness: 0.60,
                ..n
            },
            ContextType::Family => Self {
                warmth: 0.90,
                protectiveness: 0.85,
                vulnerability: 0.70,
                formality: 0.15,
                self_reflection: 0.70,
                ..n
            },
            ContextType::Creative => Self {
                warmth: 0.70,
                self_reflection: 0.65,
                formality: 0.30,
                analytical_depth: 0.60,
                ..n
            },
            ContextType::Strategic => Self {
                structured_thinking: 0.90,
                analytical_depth: 0.90,
                leadership_tone: 0.85,
                results_orientation: 0.85,
                formality: 0.70,
                ..n
            },
            ContextType::Crisis => Self {
                directness: 0.95,
                structured_thinking: 0.90,
                results_orientation: 0.95,
                confidence: 0.90,
                leadership_tone: 0.90,
                warmth: 0.40,
                self_reflection: 0.20,
                ..n
            },
            ContextType::Celebration => Self {
                warmth: 0.90,
                vulnerability: 0.60,
                formality: 0.20,
                ..n
            },
        }
    }

    /// Named axis values, in declaration order.
    pub fn axes(&self) -> [(&'static str, f32); 14] {
        [
            ("confidence", self.confidence),
            ("directness", self.directness),
            ("technical_detail", self.technical_detail),
            ("structured_thinking", self.structured_thinking),
            ("warmth", self.warmth),
            ("pragmatism", self.pragmatism),
            ("self_reflection", self.self_reflection),
            ("vulnerability", self.vulnerability),
            ("formality", self.formality),
            ("leadership_tone", self.leadership_tone),
            ("results_orientation", self.results_orientation),
            ("protectiveness", self.protectiveness),
            ("competence", self.competence),
            ("analytical_depth", self.analytical_depth),
        ]
    }

    fn clamped(self) -> Self {
        Self {
            confidence: unit(self.confidence),
            directness: unit(self.directness),
            technical_detail: unit(self.technical_detail),
            structured_thinking: unit(self.structured_thinking),
            warmth: unit(self.warmth),
            pragmatism: unit(self.pragmatism),
            self_reflection: unit(self.self_reflection),
            vulnerability: unit(self.vulnerability),
            formality: unit(self.formality),
            leadership_tone: unit(self.leadership_tone),
            results_orientation: unit(self.results_orientation),
            protectiveness: unit(self.protectiveness),
            competence: unit(self.competence),
            analytical_depth: unit(self.analytical_depth),
        }
    }
}

impl Default for BehaviorModifiers {
    fn default() -> Self {
        Self::neutral()
    }
}

// ============================================================================
// Stress adjustment
// ============================================================================

/// Deltas produced by stress and time pressure.
///
/// Every field is 0.0–1.0 except `confidence_boost` (−0.3–0.3).  Reductions
/// are stored as positive magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StressAdjustment {
    pub directness_increase: f32,
    pub structured_thinking_boost: f32,
    pub technical_detail_reduction: f32,
    pub warmth_reduction: f32,
    pub solution_focus_boost: f32,
    pub self_reflection_reduction: f32,
    pub confidence_boost: f32,
    pub pragmatism_increase: f32,
    pub results_orientation_increase: f32,
}

impl StressAdjustment {
    /// Linear deltas from `rules`; both inputs are clamped to 0.0–1.0.
    pub fn compute(rules: &StressRules, stress_level: f32, time_pressure: f32) -> Self {
        let s = unit(stress_level);
        let t = unit(time_pressure);
        Self {
            directness_increase: unit(s * rules.directness_factor),
            structured_thinking_boost: unit(s * rules.structured_thinking_boost),
            technical_detail_reduction: unit(t * rules.detail_reduction_factor),
            warmth_reduction: unit(s * rules.warmth_reduction_factor),
            solution_focus_boost: unit(t * rules.solution_focus_factor),
            self_reflection_reduction: unit(s * rules.self_reflection_factor),
            confidence_boost: clamp_range(
                s * rules.confidence_factor,
                -CONFIDENCE_BOOST_LIMIT,
                CONFIDENCE_BOOST_LIMIT,
            ),
            pragmatism_increase: unit(t * rules.pragmatism_factor),
            results_orientation_increase: unit(s.max(t) * rules.results_orientation_factor),
        }
    }

    /// Named deltas, in declaration order.
    pub fn deltas(&self) -> [(&'static str, f32); 9] {
        [
            ("directness_increase", self.directness_increase),
            ("structured_thinking_boost", self.structured_thinking_boost),
            ("technical_detail_reduction", self.technical_detail_reduction),
            ("warmth_reduction", self.warmth_reduction),
            ("solution_focus_boost", self.solution_focus_boost),
            ("self_reflection_reduction", self.self_reflection_reduction),
            ("confidence_boost", self.confidence_boost),
            ("pragmatism_increase", self.pragmatism_increase),
            ("results_orientation_increase", self.results_orientation_increase),
        ]
    }

    /// Add these deltas to unclamped modifiers.
    fn apply(&self, raw: &mut BehaviorModifiers) {
        raw.directness += self.directness_increase;
        raw.structured_thinking += self.structured_thinking_boost;
        raw.technical_detail -= self.technical_detail_reduction;
        raw.warmth -= self.warmth_reduction;
        raw.results_orientation += self.solution_focus_boost + self.results_orientation_increase;
        raw.self_reflection -= self.self_reflection_reduction;
        raw.confidence += self.confidence_boost;
        raw.pragmatism += self.pragmatism_increase;
    }
}

// ============================================================================
// Calculator
// ============================================================================

const DECISION_KEYWORDS: [&str; 5] = ["decision", "decisive", "strategic", "analytic", "problem"];
const DIRECTNESS_KEYWORDS: [&str; 3] = ["direct", "honest", "candid"];

/// Default [`BehaviorCalculator`]: fixed baselines plus weighted trait deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitBehaviorCalculator;

impl TraitBehaviorCalculator {
    /// Baseline (or neutral) with context boosts applied.  Unclamped.
    fn boosted_baseline(context: Option<ContextType>, rules: &BehaviorRules) -> BehaviorModifiers {
        let Some(context) = context else {
            return BehaviorModifiers::neutral();
        };
        let mut m = BehaviorModifiers::baseline(context);
        match context {
            ContextType::Technical => {
                m.technical_detail *= rules.technical_context_boost;
            }
            ContextType::Professional | ContextType::Strategic => {
                m.leadership_tone *= rules.leadership_context_boost;
                m.results_orientation *= rules.professional_context_boost;
            }
            ContextType::Family => {
                m.warmth *= rules.family_context_boost;
                m.protectiveness *= rules.family_context_boost;
            }
            ContextType::Personal
            | ContextType::Creative
            | ContextType::Crisis
            | ContextType::Celebration => {}
        }
        m
    }

    /// Add every trait's weighted contribution.  Unclamped.
    fn apply_traits(raw: &mut BehaviorModifiers, profile: &PersonalityProfile, rules: &BehaviorRules) {
        for t in &profile.traits {
            let w = t.effective_weight() * rules.trait_influence;
            match t.category_key().as_str() {
                "technical" => {
                    raw.technical_detail += w * 0.15;
                    raw.pragmatism += w * 0.10;
                    raw.analytical_depth += w * 0.05;
                }
                "professional" => {
                    raw.leadership_tone += w * 0.10;
                    raw.results_orientation += w * 0.10;
                    raw.competence += w * 0.05;
                }
                "leadership" => {
                    raw.leadership_tone += w * 0.15;
                    raw.confidence += w * 0.05;
                }
                "personality" => {
                    raw.warmth += w * 0.10;
                    raw.self_reflection += w * 0.05;
                }
                "personal" | "family" => {
                    raw.warmth += w * 0.08;
                    raw.protectiveness += w * 0.10;
                }
                "communication" => {
                    raw.directness += w * 0.10;
                }
                _ => {}
            }

            let name = t.name.to_lowercase();
            if DECISION_KEYWORDS.iter().any(|k| name.contains(k)) {
                raw.structured_thinking += w * 0.10;
                raw.analytical_depth += w * 0.10;
            }
            if DIRECTNESS_KEYWORDS.iter().any(|k| name.contains(k)) {
                raw.directness += w * 0.10;
            }
        }
    }

    fn compose(
        profile: &PersonalityProfile,
        context: Option<ContextType>,
        behavior_rules: &BehaviorRules,
        stress: Option<&StressAdjustment>,
    ) -> BehaviorModifiers {
        let mut raw = Self::boosted_baseline(context, behavior_rules);
        Self::apply_traits(&mut raw, profile, behavior_rules);
        if let Some(adjustment) = stress {
            adjustment.apply(&mut raw);
        }
        raw.clamped()
    }
}

impl BehaviorCalculator for TraitBehaviorCalculator {
    fn behavior_modifiers(
        &self,
        profile: &PersonalityProfile,
        context: ContextType,
        rules: &BehaviorRules,
    ) -> BehaviorModifiers {
        Self::compose(profile, Some(context), rules, None)
    }

    fn stress_adjustment(&self, rules: &StressRules, stress_level: f32, time_pressure: f32) -> StressAdjustment {
        StressAdjustment::compute(rules, stress_level, time_pressure)
    }

    fn modify_for_stress_and_time(
        &self,
        profile: &PersonalityProfile,
        behavior_rules: &BehaviorRules,
        stress_rules: &StressRules,
        stress_level: f32,
        time_pressure: f32,
    ) -> BehaviorModifiers {
        let adjustment = StressAdjustment::compute(stress_rules, stress_level, time_pressure);
        Self::compose(profile, None, behavior_rules, Some(&adjustment))
    }

    fn adapted_modifiers(
        &self,
        profile: &PersonalityProfile,
        context: ContextType,
        behavior_rules: &BehaviorRules,
        stress_rules: &StressRules,
        stress_level: f32,
        time_pressure: f32,
    ) -> BehaviorModifiers {
        let adjustment = StressAdjustment::compute(stress_rules, stress_level, time_pressure);
        Self::compose(profile, Some(context), behavior_rules, Some(&adjustment))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationProvider, PersonaConfigProvider, AVERY};
    use crate::persona::PersonalityTrait;

    fn empty() -> PersonalityProfile {
        PersonalityProfile::new("empty", "")
    }

    fn all_in_range(m: &BehaviorModifiers) -> bool {
        m.axes().iter().all(|(_, v)| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_context_baselines() {
        let rules = BehaviorRules::default();
        let tech = TraitBehaviorCalculator.behavior_modifiers(&empty(), ContextType::Technical, &rules);
        assert_eq!(tech.technical_detail, 0.90);
        assert_eq!(tech.pragmatism, 0.95);
        assert_eq!(tech.confidence, 0.95);

        let family = TraitBehaviorCalculator.behavior_modifiers(&empty(), ContextType::Family, &rules);
        assert_eq!(family.warmth, 0.90);
        assert_eq!(family.protectiveness, 0.85);
        assert_eq!(family.directness, BehaviorModifiers::NEUTRAL);
    }

    #[test]
    fn test_technical_trait_adds_weighted_delta() {
        let profile = PersonalityProfile::new("p", "")
            .with_trait(PersonalityTrait::new("Technical", "Systems design", "", 0.5));
        let m = TraitBehaviorCalculator.behavior_modifiers(
            &profile,
            ContextType::Personal,
            &BehaviorRules::default(),
        );
        assert!((m.technical_detail - 0.575).abs() < 1e-6);
        assert!((m.pragmatism - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_decision_keyword_boosts_structure() {
        let profile = PersonalityProfile::new("p", "")
            .with_trait(PersonalityTrait::new("Hobbies", "Decisive under pressure", "", 1.0));
        let m = TraitBehaviorCalculator.behavior_modifiers(
            &profile,
            ContextType::Personal,
            &BehaviorRules::default(),
        );
        assert!((m.structured_thinking - 0.6).abs() < 1e-6);
        assert!((m.analytical_depth - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_family_boost_multiplies_baseline() {
        let rules = BehaviorRules {
            family_context_boost: 1.1,
            ..BehaviorRules::default()
        };
        let m = TraitBehaviorCalculator.behavior_modifiers(&empty(), ContextType::Family, &rules);
        assert!((m.warmth - 0.99).abs() < 1e-6);
        assert!((m.protectiveness - 0.935).abs() < 1e-6);
    }

    #[test]
    fn test_stress_deltas_follow_rules() {
        let rules = StressRules::default();
        let adj = StressAdjustment::compute(&rules, 0.5, 1.0);
        assert!((adj.directness_increase - 0.5 * rules.directness_factor).abs() < 1e-6);
        assert!((adj.technical_detail_reduction - rules.detail_reduction_factor).abs() < 1e-6);
        assert!((adj.solution_focus_boost - rules.solution_focus_factor).abs() < 1e-6);
        assert!((adj.results_orientation_increase - rules.results_orientation_factor).abs() < 1e-6);
    }

    #[test]
    fn test_stress_monotonicity() {
        let provider = PersonaConfigProvider::new();
        for persona in [AVERY, "unknown"] {
            let rules = provider.stress_rules(persona);
            for time in [0.0, 0.3, 1.0] {
                let mut prev = StressAdjustment::compute(&rules, 0.0, time);
                for step in 1..=20 {
                    let next = StressAdjustment::compute(&rules, step as f32 / 20.0, time);
                    assert!(next.directness_increase >= prev.directness_increase);
                    assert!(next.structured_thinking_boost >= prev.structured_thinking_boost);
                    prev = next;
                }
            }
        }
    }

    #[test]
    fn test_confidence_boost_bounded() {
        let rules = StressRules {
            confidence_factor: 0.3,
            ..StressRules::default()
        };
        let adj = StressAdjustment::compute(&rules, 5.0, 0.0);
        assert!(adj.confidence_boost <= CONFIDENCE_BOOST_LIMIT);
        let rules = StressRules {
            confidence_factor: -0.3,
            ..StressRules::default()
        };
        let adj = StressAdjustment::compute(&rules, 1.0, 0.0);
        assert!(adj.confidence_boost >= -CONFIDENCE_BOOST_LIMIT);
    }

    #[test]
    fn test_clamp_happens_once_after_summing() {
        let provider = PersonaConfigProvider::new();
        let cfg = provider.configuration(AVERY);
        let profile = PersonalityProfile::new("Avery", "")
            .with_trait(PersonalityTrait::new("Technical", "Systems design", "", 1.0));

        // 0.90 × 1.05 + 1.0 × 0.15 × 1.2 = 1.125 before any clamp; full time
        // pressure removes 0.25.  Clamping per step would give 0.75.
        let m = TraitBehaviorCalculator.adapted_modifiers(
            &profile,
            ContextType::Technical,
            &cfg.behavior_rules,
            &cfg.stress_rules,
            0.0,
            1.0,
        );
        assert!((m.technical_detail - 0.875).abs() < 1e-5, "got {}", m.technical_detail);
    }

    #[test]
    fn test_modify_for_stress_and_time_moves_axes() {
        let rules = BehaviorRules::default();
        let stress = StressRules::default();
        let calm = TraitBehaviorCalculator.modify_for_stress_and_time(&empty(), &rules, &stress, 0.0, 0.0);
        let tense = TraitBehaviorCalculator.modify_for_stress_and_time(&empty(), &rules, &stress, 1.0, 1.0);
        assert_eq!(calm, BehaviorModifiers::neutral());
        assert!(tense.directness > calm.directness);
        assert!(tense.structured_thinking > calm.structured_thinking);
        assert!(tense.warmth < calm.warmth);
        assert!(tense.technical_detail < calm.technical_detail);
        assert!(tense.self_reflection < calm.self_reflection);
        assert!(tense.results_orientation > calm.results_orientation);
    }

    #[test]
    fn test_bounds_hold_for_extreme_inputs() {
        let heavy = PersonalityProfile::new("heavy", "")
            .with_trait(PersonalityTrait::new("Technical", "Decisive direct problem solver", "", 5.0))
            .with_trait(PersonalityTrait::new("Leadership", "Strategic", "", 1.0))
            .with_trait(PersonalityTrait::new("Family", "Honest", "", f32::NAN))
            .with_trait(PersonalityTrait::new("Personality", "Candid", "", -2.0));
        let rules = BehaviorRules {
            technical_context_boost: 2.0,
            leadership_context_boost: 2.0,
            family_context_boost: 2.0,
            professional_context_boost: 2.0,
            trait_influence: 2.0,
        };
        let stress = StressRules {
            directness_factor: 1.0,
            warmth_reduction_factor: 1.0,
            detail_reduction_factor: 1.0,
            ..StressRules::default()
        };
        for context in ContextType::ALL {
            for s in [-1.0, 0.0, 0.5, 1.0, 3.0, f32::NAN] {
                for t in [-1.0, 0.0, 1.0, 7.0] {
                    let m = TraitBehaviorCalculator.adapted_modifiers(&heavy, context, &rules, &stress, s, t);
                    assert!(all_in_range(&m), "{:?} s={} t={} -> {:?}", context, s, t, m);
                    let m = TraitBehaviorCalculator.modify_for_stress_and_time(&heavy, &rules, &stress, s, t);
                    assert!(all_in_range(&m));
                }
            }
        }
    }
}
