//! `PersonalityAdaptationEngine`: the facade composing every capability.
//!
//! The engine resolves the persona's rule tables through the configuration
//! provider on each call and hands them to the capability implementations.
//! It holds no per-request state and caches nothing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{CommunicationRules, ConfigurationProvider, PersonaConfigProvider};
use crate::persona::{
    ContextType, DomainType, EmotionalContext, PersonalityProfile, SituationalContext, TaskType,
};

use super::analysis::{ContextAnalysisResult, DefaultContextAnalyzer};
use super::behavior::{BehaviorModifiers, StressAdjustment, TraitBehaviorCalculator};
use super::confidence::{ExpertiseConfidenceAdjustment, ExpertiseConfidenceScorer};
use super::ranker::{CategoryTraitRanker, WeightedTrait};
use super::style::{ContextStyleMapper, ContextualCommunicationStyle};
use super::tone::ToneModulation;
use super::traits::{BehaviorCalculator, ConfidenceScorer, ContextAnalyzer, StyleMapper, TraitRanker};

/// Stress floor applied in crisis contexts.
pub const CRISIS_STRESS_FLOOR: f32 = 0.8;

/// Everything computed for one profile in one situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptedPersonality {
    pub persona_id: String,
    /// Whether the provider has a table for this persona (otherwise generic).
    pub known_persona: bool,
    pub task_type: TaskType,
    pub stress_level: f32,
    pub time_pressure: f32,
    pub relevant_traits: Vec<WeightedTrait>,
    pub behavior: BehaviorModifiers,
    pub stress_adjustment: StressAdjustment,
    pub communication_style: ContextualCommunicationStyle,
    pub tone: ToneModulation,
    pub context_analysis: ContextAnalysisResult,
}

pub struct PersonalityAdaptationEngine {
    provider: Arc<dyn ConfigurationProvider>,
    ranker: Box<dyn TraitRanker>,
    behavior: Box<dyn BehaviorCalculator>,
    confidence: Box<dyn ConfidenceScorer>,
    style: Box<dyn StyleMapper>,
    analyzer: Box<dyn ContextAnalyzer>,
}

impl PersonalityAdaptationEngine {
    /// Engine over `provider` with the default capability implementations.
    pub fn new(provider: Arc<dyn ConfigurationProvider>) -> Self {
        Self {
            provider,
            ranker: Box::new(CategoryTraitRanker),
            behavior: Box::new(TraitBehaviorCalculator),
            confidence: Box::new(ExpertiseConfidenceScorer),
            style: Box::new(ContextStyleMapper),
            analyzer: Box::new(DefaultContextAnalyzer),
        }
    }

    pub fn with_ranker(mut self, ranker: impl TraitRanker + 'static) -> Self {
        self.ranker = Box::new(ranker);
        self
    }

    pub fn with_behavior_calculator(mut self, calculator: impl BehaviorCalculator + 'static) -> Self {
        self.behavior = Box::new(calculator);
        self
    }

    pub fn with_confidence_scorer(mut self, scorer: impl ConfidenceScorer + 'static) -> Self {
        self.confidence = Box::new(scorer);
        self
    }

    pub fn with_style_mapper(mut self, mapper: impl StyleMapper + 'static) -> Self {
        self.style = Box::new(mapper);
        self
    }

    pub fn with_context_analyzer(mut self, analyzer: impl ContextAnalyzer + 'static) -> Self {
        self.analyzer = Box::new(analyzer);
        self
    }

    pub fn provider(&self) -> &Arc<dyn ConfigurationProvider> {
        &self.provider
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Full adaptation of `profile` to a situation and emotional state.
    ///
    /// Stress comes from the emotional context (at least
    /// [`CRISIS_STRESS_FLOOR`] in a crisis); time pressure is the urgency.
    pub fn adapt_personality_to_context(
        &self,
        profile: &PersonalityProfile,
        situational: &SituationalContext,
        emotional: &EmotionalContext,
    ) -> AdaptedPersonality {
        let persona_id = profile.persona_id();
        let cfg = self.provider.configuration(&persona_id);
        let known_persona = self.provider.is_supported(&persona_id);

        let mut stress_level = emotional.stress_level();
        if situational.context_type == ContextType::Crisis {
            stress_level = stress_level.max(CRISIS_STRESS_FLOOR);
        }
        let time_pressure = situational.urgency();
        let task_type = TaskType::from(situational.context_type);

        log::debug!(
            "Adapting '{}' to {:?} (stress {:.2}, time pressure {:.2})",
            persona_id,
            situational.context_type,
            stress_level,
            time_pressure
        );

        AdaptedPersonality {
            known_persona,
            task_type,
            stress_level,
            time_pressure,
            relevant_traits: self.ranker.relevant_traits(profile, task_type),
            behavior: self.behavior.adapted_modifiers(
                profile,
                situational.context_type,
                &cfg.behavior_rules,
                &cfg.stress_rules,
                stress_level,
                time_pressure,
            ),
            stress_adjustment: self
                .behavior
                .stress_adjustment(&cfg.stress_rules, stress_level, time_pressure),
            communication_style: self
                .style
                .communication_style(profile, situational, &cfg.communication_rules),
            tone: self.style.modulate_tone(profile, emotional),
            context_analysis: self.analyzer.analyze(situational, &cfg.communication_rules),
            persona_id,
        }
    }

    /// Stress and time pressure applied to the neutral baseline.
    pub fn modify_behavior_for_stress_and_time(
        &self,
        profile: &PersonalityProfile,
        stress_level: f32,
        time_pressure: f32,
    ) -> BehaviorModifiers {
        let cfg = self.provider.configuration(&profile.persona_id());
        self.behavior.modify_for_stress_and_time(
            profile,
            &cfg.behavior_rules,
            &cfg.stress_rules,
            stress_level,
            time_pressure,
        )
    }

    pub fn stress_adjustment(
        &self,
        profile: &PersonalityProfile,
        stress_level: f32,
        time_pressure: f32,
    ) -> StressAdjustment {
        let rules = self.provider.stress_rules(&profile.persona_id());
        self.behavior.stress_adjustment(&rules, stress_level, time_pressure)
    }

    pub fn adjust_confidence_by_expertise(
        &self,
        profile: &PersonalityProfile,
        domain: DomainType,
        task_complexity: f32,
    ) -> ExpertiseConfidenceAdjustment {
        let cfg = self.provider.configuration(&profile.persona_id());
        self.confidence
            .adjust_confidence(&cfg.expertise_levels, &cfg.confidence_rules, domain, task_complexity)
    }

    pub fn determine_optimal_communication_style(
        &self,
        profile: &PersonalityProfile,
        context: &SituationalContext,
    ) -> ContextualCommunicationStyle {
        let rules = self.provider.communication_rules(&profile.persona_id());
        self.style.communication_style(profile, context, &rules)
    }

    pub fn modulate_tone(&self, profile: &PersonalityProfile, emotional: &EmotionalContext) -> ToneModulation {
        self.style.modulate_tone(profile, emotional)
    }

    /// Persona-independent analysis using the generic communication rules.
    pub fn analyze_context_requirements(&self, context: &SituationalContext) -> ContextAnalysisResult {
        self.analyzer.analyze(context, &CommunicationRules::default())
    }

    /// Analysis using `profile`'s communication thresholds.
    pub fn analyze_context_for(
        &self,
        profile: &PersonalityProfile,
        context: &SituationalContext,
    ) -> ContextAnalysisResult {
        let rules = self.provider.communication_rules(&profile.persona_id());
        self.analyzer.analyze(context, &rules)
    }

    pub fn relevant_traits(&self, profile: &PersonalityProfile, task: TaskType) -> Vec<WeightedTrait> {
        self.ranker.relevant_traits(profile, task)
    }

    pub fn behavior_modifiers(&self, profile: &PersonalityProfile, context: ContextType) -> BehaviorModifiers {
        let rules = self.provider.behavior_rules(&profile.persona_id());
        self.behavior.behavior_modifiers(profile, context, &rules)
    }
}

impl Default for PersonalityAdaptationEngine {
    fn default() -> Self {
        Self::new(Arc::new(PersonaConfigProvider::new()))
    }
}

impl std::fmt::Debug for PersonalityAdaptationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalityAdaptationEngine")
            .field("personas", &self.provider.list_supported())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptation::analysis::{DetailLevel, EmotionalTone, ResponseSpeed};
    use crate::config::{PersonaTable, AVERY};
    use crate::persona::{EmotionalState, PersonalityTrait, TimeOfDay};

    fn avery() -> PersonalityProfile {
        PersonalityProfile::new("Avery", "Principal engineer")
            .with_trait(PersonalityTrait::new("Technical", "Rust systems", "Writes Rust daily", 0.95))
            .with_trait(PersonalityTrait::new("Leadership", "Team builder", "", 0.85))
            .with_trait(PersonalityTrait::new("Family", "Devoted parent", "", 0.9))
            .with_trait(PersonalityTrait::new("Communication", "Direct and honest", "", 0.8))
            .with_trait(PersonalityTrait::new("Personality", "Dry humour", "", 0.6))
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PersonalityAdaptationEngine>();
    }

    #[test]
    fn test_adapt_known_persona() {
        let engine = PersonalityAdaptationEngine::default();
        let situation = SituationalContext::new(ContextType::Technical)
            .with_topic("database migration")
            .with_urgency(0.8)
            .with_time_of_day(TimeOfDay::Morning);
        let emotional = EmotionalContext::new(EmotionalState::Concerned, 0.5);

        let adapted = engine.adapt_personality_to_context(&avery(), &situation, &emotional);
        assert_eq!(adapted.persona_id, AVERY);
        assert!(adapted.known_persona);
        assert_eq!(adapted.task_type, TaskType::Technical);
        assert!((adapted.stress_level - 0.4).abs() < 1e-6);
        assert_eq!(adapted.time_pressure, 0.8);
        assert_eq!(adapted.relevant_traits[0].personality_trait.name, "Rust systems");
        assert!(adapted.behavior.technical_detail > BehaviorModifiers::NEUTRAL);
        assert_eq!(adapted.tone.tone_label, "reassuring");
        assert_eq!(adapted.context_analysis.response_speed, ResponseSpeed::Fast);
    }

    #[test]
    fn test_adapt_unknown_persona_uses_generic() {
        let engine = PersonalityAdaptationEngine::default();
        let profile = PersonalityProfile::new("Stranger", "");
        let adapted = engine.adapt_personality_to_context(
            &profile,
            &SituationalContext::new(ContextType::Personal),
            &EmotionalContext::default(),
        );
        assert!(!adapted.known_persona);
        assert!(adapted.relevant_traits.is_empty());
    }

    #[test]
    fn test_crisis_raises_stress() {
        let engine = PersonalityAdaptationEngine::default();
        let calm = EmotionalContext::new(EmotionalState::Confident, 1.0);
        let adapted = engine.adapt_personality_to_context(
            &avery(),
            &SituationalContext::new(ContextType::Crisis),
            &calm,
        );
        assert_eq!(adapted.stress_level, CRISIS_STRESS_FLOOR);
        assert!(adapted.stress_adjustment.directness_increase > 0.0);
    }

    #[test]
    fn test_generic_confidence_scenario() {
        let engine = PersonalityAdaptationEngine::default();
        let adj = engine.adjust_confidence_by_expertise(
            &PersonalityProfile::new("nobody", ""),
            DomainType::Marketing,
            5.0,
        );
        assert!((adj.adjusted_confidence - 0.52).abs() < 1e-6);

        let unknown = engine.adjust_confidence_by_expertise(
            &PersonalityProfile::new("unknown-persona", ""),
            DomainType::SoftwareArchitecture,
            5.0,
        );
        assert!((unknown.base_confidence - 0.6).abs() < 1e-6);
        assert!((unknown.complexity_adjustment + 0.08).abs() < 1e-6);
        assert_eq!(unknown.domain_bonus, 0.0);
        assert_eq!(unknown.weakness_reduction, 0.0);
        assert!((unknown.adjusted_confidence - 0.52).abs() < 1e-6);

        let weak = engine.adjust_confidence_by_expertise(&avery(), DomainType::Legal, 3.0);
        assert!(weak.adjusted_confidence <= 0.6);
    }

    #[test]
    fn test_analysis_generic_vs_persona_rules() {
        let mut table = PersonaTable::builtin();
        let mut cfg = table.get(AVERY).cloned().unwrap_or_default();
        cfg.communication_rules.high_urgency_threshold = 0.3;
        table.insert(AVERY, cfg);
        let engine = PersonalityAdaptationEngine::new(Arc::new(PersonaConfigProvider::from_table(table)));

        let ctx = SituationalContext::new(ContextType::Family).with_urgency(0.5);
        let generic = engine.analyze_context_requirements(&ctx);
        let personal = engine.analyze_context_for(&avery(), &ctx);
        assert!(personal.formality_level > generic.formality_level);
    }

    fn assert_stress_adjustment_in_range(adj: &StressAdjustment) {
        for (name, v) in adj.deltas() {
            let (lo, hi) = if name == "confidence_boost" { (-0.3, 0.3) } else { (0.0, 1.0) };
            assert!((lo..=hi).contains(&v), "{} = {}", name, v);
        }
    }

    #[test]
    fn test_bounds_across_personas_and_contexts() {
        let engine = PersonalityAdaptationEngine::default();
        let check = |what: &str, axes: &[(&'static str, f32)]| {
            for (name, v) in axes {
                assert!((0.0..=1.0).contains(v), "{} {} = {}", what, name, v);
            }
        };
        let wild = [-1.0, 0.0, 0.5, 1.0, 3.0, f32::NAN];
        for profile in [avery(), PersonalityProfile::new("nobody", "")] {
            for context in ContextType::ALL {
                for emotion in EmotionalState::ALL {
                    for urgency in wild {
                        for intensity in wild {
                            let adapted = engine.adapt_personality_to_context(
                                &profile,
                                &SituationalContext::new(context).with_urgency(urgency),
                                &EmotionalContext::new(emotion, intensity),
                            );
                            check("behavior", &adapted.behavior.axes());
                            check("style", &adapted.communication_style.axes());
                            check("tone", &adapted.tone.axes());
                            check(
                                "analysis",
                                &[("formality_level", adapted.context_analysis.formality_level)],
                            );
                            check(
                                "pressure",
                                &[
                                    ("stress_level", adapted.stress_level),
                                    ("time_pressure", adapted.time_pressure),
                                ],
                            );
                            assert_stress_adjustment_in_range(&adapted.stress_adjustment);
                            assert!(adapted.relevant_traits.len() <= 10);
                        }
                    }
                }
            }
            for s in wild {
                for t in wild {
                    let m = engine.modify_behavior_for_stress_and_time(&profile, s, t);
                    check("stress behavior", &m.axes());
                    assert_stress_adjustment_in_range(&engine.stress_adjustment(&profile, s, t));
                }
            }
        }
    }

    #[test]
    fn test_injected_capability_is_used() {
        struct FixedAnalyzer;
        impl ContextAnalyzer for FixedAnalyzer {
            fn analyze(&self, _: &SituationalContext, _: &CommunicationRules) -> ContextAnalysisResult {
                ContextAnalysisResult {
                    response_speed: ResponseSpeed::Thoughtful,
                    detail_level: DetailLevel::Brief,
                    formality_level: 0.0,
                    emotional_tone: EmotionalTone::Calm,
                    recommendations: vec!["fixed".to_string()],
                }
            }
        }

        let engine = PersonalityAdaptationEngine::default().with_context_analyzer(FixedAnalyzer);
        let result = engine.analyze_context_requirements(&SituationalContext::new(ContextType::Crisis));
        assert_eq!(result.recommendations, vec!["fixed".to_string()]);
    }

    #[test]
    fn test_behavior_and_style_facade() {
        let engine = PersonalityAdaptationEngine::default();
        let family = engine.behavior_modifiers(&avery(), ContextType::Family);
        assert!(family.warmth > 0.9);
        let style = engine.determine_optimal_communication_style(
            &avery(),
            &SituationalContext::new(ContextType::Technical),
        );
        assert!(style.technical_depth > 0.9);
        let traits = engine.relevant_traits(&avery(), TaskType::Personal);
        assert_eq!(traits[0].personality_trait.name, "Devoted parent");
    }

    #[test]
    fn test_demo_files_load() {
        #[derive(Deserialize)]
        struct ContextFile {
            situational: SituationalContext,
            emotional: EmotionalContext,
        }

        let profile = PersonalityProfile::from_yaml(include_str!("../../demos/avery.yaml")).unwrap();
        let context: ContextFile = serde_yaml::from_str(include_str!("../../demos/incident.yaml")).unwrap();
        let (provider, report) =
            PersonaConfigProvider::from_yaml(include_str!("../../demos/overrides.yaml")).unwrap();
        assert!(report.is_clean());

        let engine = PersonalityAdaptationEngine::new(Arc::new(provider));
        let adapted = engine.adapt_personality_to_context(&profile, &context.situational, &context.emotional);
        assert!(adapted.known_persona);
        assert_eq!(adapted.task_type, TaskType::Communication);
        assert_eq!(adapted.context_analysis.response_speed, ResponseSpeed::Immediate);
        assert_eq!(adapted.context_analysis.detail_level, DetailLevel::Comprehensive);
        assert_eq!(adapted.stress_level, CRISIS_STRESS_FLOOR);
    }
}
