//! Capability traits composed by the adaptation engine.
//!
//! Each capability is a pure function of its inputs plus the rule tables
//! handed to it; none of them talk to the configuration provider directly.

use crate::config::{BehaviorRules, CommunicationRules, ConfidenceRules, ExpertiseLevels, StressRules};
use crate::persona::{
    ContextType, DomainType, EmotionalContext, PersonalityProfile, SituationalContext, TaskType,
};

use super::analysis::ContextAnalysisResult;
use super::behavior::{BehaviorModifiers, StressAdjustment};
use super::confidence::ExpertiseConfidenceAdjustment;
use super::ranker::WeightedTrait;
use super::style::ContextualCommunicationStyle;
use super::tone::ToneModulation;

/// Ranks a profile's traits by relevance to a task.
pub trait TraitRanker: Send + Sync {
    /// At most ten traits, highest relevance first.
    fn relevant_traits(&self, profile: &PersonalityProfile, task: TaskType) -> Vec<WeightedTrait>;
}

/// Derives behavior modifiers from context, traits and stress.
pub trait BehaviorCalculator: Send + Sync {
    fn behavior_modifiers(
        &self,
        profile: &PersonalityProfile,
        context: ContextType,
        rules: &BehaviorRules,
    ) -> BehaviorModifiers;

    fn stress_adjustment(&self, rules: &StressRules, stress_level: f32, time_pressure: f32) -> StressAdjustment;

    /// Stress and time pressure applied on top of the neutral baseline.
    fn modify_for_stress_and_time(
        &self,
        profile: &PersonalityProfile,
        behavior_rules: &BehaviorRules,
        stress_rules: &StressRules,
        stress_level: f32,
        time_pressure: f32,
    ) -> BehaviorModifiers;

    /// Context baseline, traits and stress summed and clamped together.
    fn adapted_modifiers(
        &self,
        profile: &PersonalityProfile,
        context: ContextType,
        behavior_rules: &BehaviorRules,
        stress_rules: &StressRules,
        stress_level: f32,
        time_pressure: f32,
    ) -> BehaviorModifiers;
}

/// Scores confidence in a domain for a task of given complexity.
pub trait ConfidenceScorer: Send + Sync {
    fn adjust_confidence(
        &self,
        expertise: &ExpertiseLevels,
        rules: &ConfidenceRules,
        domain: DomainType,
        complexity: f32,
    ) -> ExpertiseConfidenceAdjustment;
}

/// Maps context to communication style and emotion to tone.
pub trait StyleMapper: Send + Sync {
    fn communication_style(
        &self,
        profile: &PersonalityProfile,
        context: &SituationalContext,
        rules: &CommunicationRules,
    ) -> ContextualCommunicationStyle;

    fn modulate_tone(&self, profile: &PersonalityProfile, emotional: &EmotionalContext) -> ToneModulation;
}

/// Summarises what a context demands of a response.
pub trait ContextAnalyzer: Send + Sync {
    fn analyze(&self, context: &SituationalContext, rules: &CommunicationRules) -> ContextAnalysisResult;
}
