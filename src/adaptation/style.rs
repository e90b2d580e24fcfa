//! Communication style for a situational context.

use serde::{Deserialize, Serialize};

use crate::config::CommunicationRules;
use crate::persona::{ContextType, EmotionalContext, PersonalityProfile, SituationalContext};

use super::bounds::unit;
use super::tone::{self, ToneModulation};
use super::traits::StyleMapper;

/// Fifteen style axes (0.0–1.0) and a one-line tone recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualCommunicationStyle {
    pub formality_level: f32,
    pub directness: f32,
    pub technical_depth: f32,
    pub explanation_depth: f32,
    pub example_usage: f32,
    pub emotional_openness: f32,
    pub leadership_assertiveness: f32,
    pub results_orientation: f32,
    pub warmth: f32,
    pub protectiveness: f32,
    pub future_orientation: f32,
    pub empathy: f32,
    pub humor: f32,
    pub conciseness: f32,
    pub structure: f32,
    pub tone_recommendation: String,
}

impl ContextualCommunicationStyle {
    /// Named axis values, in declaration order.
    pub fn axes(&self) -> [(&'static str, f32); 15] {
        [
            ("formality_level", self.formality_level),
            ("directness", self.directness),
            ("technical_depth", self.technical_depth),
            ("explanation_depth", self.explanation_depth),
            ("example_usage", self.example_usage),
            ("emotional_openness", self.emotional_openness),
            ("leadership_assertiveness", self.leadership_assertiveness),
            ("results_orientation", self.results_orientation),
            ("warmth", self.warmth),
            ("protectiveness", self.protectiveness),
            ("future_orientation", self.future_orientation),
            ("empathy", self.empathy),
            ("humor", self.humor),
            ("conciseness", self.conciseness),
            ("structure", self.structure),
        ]
    }
}

/// Numeric axes before clamping.
#[derive(Debug, Clone, Copy)]
struct StyleAxes {
    formality: f32,
    directness: f32,
    technical_depth: f32,
    explanation_depth: f32,
    example_usage: f32,
    emotional_openness: f32,
    leadership_assertiveness: f32,
    results_orientation: f32,
    warmth: f32,
    protectiveness: f32,
    future_orientation: f32,
    empathy: f32,
    humor: f32,
    conciseness: f32,
    structure: f32,
}

impl StyleAxes {
    const fn uniform(v: f32) -> Self {
        Self {
            formality: v,
            directness: v,
            technical_depth: v,
            explanation_depth: v,
            example_usage: v,
            emotional_openness: v,
            leadership_assertiveness: v,
            results_orientation: v,
            warmth: v,
            protectiveness: v,
            future_orientation: v,
            empathy: v,
            humor: v,
            conciseness: v,
            structure: v,
        }
    }

    fn baseline(context: ContextType) -> Self {
        match context {
            ContextType::Technical => Self {
                formality: 0.60,
                directness: 0.85,
                technical_depth: 0.90,
                explanation_depth: 0.80,
                example_usage: 0.85,
                emotional_openness: 0.30,
                leadership_assertiveness: 0.60,
                results_orientation: 0.80,
                warmth: 0.40,
                protectiveness: 0.30,
                future_orientation: 0.60,
                empathy: 0.40,
                humor: 0.30,
                conciseness: 0.70,
                structure: 0.90,
            },
            ContextType::Personal => Self {
                formality: 0.20,
                directness: 0.60,
                technical_depth: 0.20,
                explanation_depth: 0.50,
                example_usage: 0.60,
                emotional_openness: 0.85,
                leadership_assertiveness: 0.30,
                results_orientation: 0.30,
                warmth: 0.90,
                protectiveness: 0.60,
                future_orientation: 0.50,
                empathy: 0.90,
                humor: 0.60,
                conciseness: 0.40,
                structure: 0.30,
            },
            ContextType::Professional => Self {
                formality: 0.75,
                directness: 0.80,
                technical_depth: 0.50,
                explanation_depth: 0.60,
                example_usage: 0.60,
                emotional_openness: 0.35,
                leadership_assertiveness: 0.85,
                results_orientation: 0.90,
                warmth: 0.50,
                protectiveness: 0.40,
                future_orientation: 0.80,
                empathy: 0.55,
                humor: 0.25,
                conciseness: 0.75,
                structure: 0.85,
            },
            ContextType::Family => Self {
                formality: 0.10,
                directness: 0.55,
                technical_depth: 0.10,
                explanation_depth: 0.50,
                example_usage: 0.70,
                emotional_openness: 0.90,
                leadership_assertiveness: 0.40,
                results_orientation: 0.25,
                warmth: 0.95,
                protectiveness: 0.90,
                future_orientation: 0.70,
                empathy: 0.95,
                humor: 0.70,
                conciseness: 0.40,
                structure: 0.25,
            },
            ContextType::Creative
            | ContextType::Strategic
            | ContextType::Crisis
            | ContextType::Celebration => Self::uniform(0.5),
        }
    }

    fn clamped(self) -> Self {
        Self {
            formality: unit(self.formality),
            directness: unit(self.directness),
            technical_depth: unit(self.technical_depth),
            explanation_depth: unit(self.explanation_depth),
            example_usage: unit(self.example_usage),
            emotional_openness: unit(self.emotional_openness),
            leadership_assertiveness: unit(self.leadership_assertiveness),
            results_orientation: unit(self.results_orientation),
            warmth: unit(self.warmth),
            protectiveness: unit(self.protectiveness),
            future_orientation: unit(self.future_orientation),
            empathy: unit(self.empathy),
            humor: unit(self.humor),
            conciseness: unit(self.conciseness),
            structure: unit(self.structure),
        }
    }
}

/// Whether `context` crosses the high-urgency threshold.
pub(crate) fn is_urgent(context: &SituationalContext, rules: &CommunicationRules) -> bool {
    context.urgency() >= rules.high_urgency_threshold
}

/// Whether `context` is complex enough to raise formality.
pub(crate) fn is_complex(context: &SituationalContext, rules: &CommunicationRules) -> bool {
    context.complexity() > rules.complexity_formality_threshold
}

/// Formality for `context`: the context baseline raised by the urgency and
/// complexity boosts, clamped to 0.0–1.0.
pub fn formality_level(context: &SituationalContext, rules: &CommunicationRules) -> f32 {
    let mut formality = StyleAxes::baseline(context.context_type).formality;
    if is_urgent(context, rules) {
        formality += rules.urgency_formality_boost;
    }
    if is_complex(context, rules) {
        formality += rules.complexity_formality_boost;
    }
    unit(formality)
}

fn tone_recommendation(context: ContextType, urgent: bool) -> String {
    let base = match context {
        ContextType::Technical => "Precise and pragmatic; lead with the working solution",
        ContextType::Professional => "Confident and results-focused; frame decisions and next steps",
        ContextType::Personal => "Warm and candid; listen before advising",
        ContextType::Family => "Gentle and protective; keep it simple and reassuring",
        ContextType::Creative => "Open and curious; build on ideas before judging them",
        ContextType::Strategic => "Measured and structured; weigh options against long-term goals",
        ContextType::Crisis => "Calm and decisive; give clear actions in priority order",
        ContextType::Celebration => "Upbeat and generous; share credit freely",
    };
    if urgent {
        format!("{}, and keep it brief", base)
    } else {
        base.to_string()
    }
}

/// Default [`StyleMapper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextStyleMapper;

impl StyleMapper for ContextStyleMapper {
    fn communication_style(
        &self,
        profile: &PersonalityProfile,
        context: &SituationalContext,
        rules: &CommunicationRules,
    ) -> ContextualCommunicationStyle {
        let urgent = is_urgent(context, rules);
        let mut raw = StyleAxes::baseline(context.context_type);

        if urgent {
            raw.formality += rules.urgency_formality_boost;
            raw.conciseness += 0.15;
            raw.directness += 0.10;
        }
        if is_complex(context, rules) {
            raw.formality += rules.complexity_formality_boost;
            raw.structure += 0.10;
        }
        for t in profile.traits_in("technical") {
            raw.technical_depth += t.effective_weight() * 0.05;
        }

        let s = raw.clamped();
        ContextualCommunicationStyle {
            formality_level: s.formality,
            directness: s.directness,
            technical_depth: s.technical_depth,
            explanation_depth: s.explanation_depth,
            example_usage: s.example_usage,
            emotional_openness: s.emotional_openness,
            leadership_assertiveness: s.leadership_assertiveness,
            results_orientation: s.results_orientation,
            warmth: s.warmth,
            protectiveness: s.protectiveness,
            future_orientation: s.future_orientation,
            empathy: s.empathy,
            humor: s.humor,
            conciseness: s.conciseness,
            structure: s.structure,
            tone_recommendation: tone_recommendation(context.context_type, urgent),
        }
    }

    fn modulate_tone(&self, profile: &PersonalityProfile, emotional: &EmotionalContext) -> ToneModulation {
        tone::modulate_tone(profile, emotional)
    }
}

// ============================================================================
// Tests
// ============================================================================
