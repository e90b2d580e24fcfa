//! Context analysis: how fast, how deep, how formal and in what emotional
//! register a response should be.

use serde::{Deserialize, Serialize};

use crate::config::CommunicationRules;
use crate::persona::{ContextType, SituationalContext, TimeOfDay};

use super::style::{formality_level, is_complex, is_urgent};
use super::traits::ContextAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSpeed {
    Immediate,
    Fast,
    Normal,
    Thoughtful,
}

impl ResponseSpeed {
    /// Urgency at or above which a response is immediate.
    pub const IMMEDIATE_URGENCY: f32 = 0.9;
    /// Urgency at or above which a response is at least normal speed.
    pub const NORMAL_URGENCY: f32 = 0.4;

    /// Speed for `urgency`.  Anything at or above the persona's high-urgency
    /// threshold is at least `Fast`.
    fn from_urgency(urgency: f32, high_urgency_threshold: f32) -> Self {
        if urgency >= Self::IMMEDIATE_URGENCY {
            Self::Immediate
        } else if urgency >= high_urgency_threshold.min(Self::IMMEDIATE_URGENCY) {
            Self::Fast
        } else if urgency >= Self::NORMAL_URGENCY {
            Self::Normal
        } else {
            Self::Thoughtful
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Brief,
    Standard,
    Detailed,
    Comprehensive,
}

impl DetailLevel {
    fn from_complexity(complexity: u8) -> Self {
        match complexity {
            8.. => Self::Comprehensive,
            6..=7 => Self::Detailed,
            3..=5 => Self::Standard,
            _ => Self::Brief,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    Calm,
    Warm,
    Supportive,
    Celebratory,
    Focused,
    Professional,
    Energetic,
}

impl EmotionalTone {
    fn for_context(context: ContextType) -> Self {
        match context {
            ContextType::Crisis => Self::Calm,
            ContextType::Family => Self::Warm,
            ContextType::Personal => Self::Supportive,
            ContextType::Celebration => Self::Celebratory,
            ContextType::Technical => Self::Focused,
            ContextType::Professional | ContextType::Strategic => Self::Professional,
            ContextType::Creative => Self::Energetic,
        }
    }
}

/// What a context demands of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysisResult {
    pub response_speed: ResponseSpeed,
    pub detail_level: DetailLevel,
    pub formality_level: f32,
    pub emotional_tone: EmotionalTone,
    pub recommendations: Vec<String>,
}

/// Default [`ContextAnalyzer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContextAnalyzer;

impl DefaultContextAnalyzer {
    fn recommendations(context: &SituationalContext, rules: &CommunicationRules, formality: f32) -> Vec<String> {
        let mut out = Vec::new();

        match context.time_of_day {
            TimeOfDay::EarlyMorning => out.push("Early hours: keep the opening light and focused".to_string()),
            TimeOfDay::Night | TimeOfDay::LateNight => {
                out.push("Late in the day: prefer short answers and defer non-urgent detail".to_string())
            }
            TimeOfDay::Morning | TimeOfDay::Afternoon | TimeOfDay::Evening => {}
        }

        if is_urgent(context, rules) {
            out.push("High urgency: lead with the action, then the reasoning".to_string());
        }
        if context.context_type == ContextType::Crisis {
            out.push("Crisis: give one clear next step at a time".to_string());
        }

        if is_complex(context, rules) {
            out.push("Complex topic: break the answer into structured steps".to_string());
        } else if context.complexity() <= 2 {
            out.push("Simple topic: answer directly without background".to_string());
        }

        if formality >= 0.7 {
            out.push("Use a formal register".to_string());
        } else if formality <= 0.3 {
            out.push("Use a casual, personal register".to_string());
        }

        out
    }
}

impl ContextAnalyzer for DefaultContextAnalyzer {
    fn analyze(&self, context: &SituationalContext, rules: &CommunicationRules) -> ContextAnalysisResult {
        let mut response_speed = ResponseSpeed::from_urgency(context.urgency(), rules.high_urgency_threshold);
        if context.context_type == ContextType::Crisis {
            response_speed = response_speed.min(ResponseSpeed::Fast);
        }

        let emotional_tone = if context.context_type != ContextType::Crisis && is_urgent(context, rules) {
            EmotionalTone::Focused
        } else {
            EmotionalTone::for_context(context.context_type)
        };

        let formality = formality_level(context, rules);
        ContextAnalysisResult {
            response_speed,
            detail_level: DetailLevel::from_complexity(context.complexity()),
            formality_level: formality,
            emotional_tone,
            recommendations: Self::recommendations(context, rules, formality),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(ctx: &SituationalContext) -> ContextAnalysisResult {
        DefaultContextAnalyzer.analyze(ctx, &CommunicationRules::default())
    }

    #[test]
    fn test_response_speed_thresholds() {
        let speed = |u| analyze(&SituationalContext::new(ContextType::Technical).with_urgency(u)).response_speed;
        assert_eq!(speed(0.95), ResponseSpeed::Immediate);
        assert_eq!(speed(0.9), ResponseSpeed::Immediate);
        assert_eq!(speed(0.7), ResponseSpeed::Fast);
        assert_eq!(speed(0.4), ResponseSpeed::Normal);
        assert_eq!(speed(0.1), ResponseSpeed::Thoughtful);
    }

    #[test]
    fn test_fast_cut_follows_urgency_threshold() {
        let rules = CommunicationRules {
            high_urgency_threshold: 0.6,
            ..CommunicationRules::default()
        };
        let ctx = SituationalContext::new(ContextType::Professional).with_urgency(0.65);

        let tuned = DefaultContextAnalyzer.analyze(&ctx, &rules);
        assert_eq!(tuned.response_speed, ResponseSpeed::Fast);
        assert_eq!(tuned.emotional_tone, EmotionalTone::Focused);
        assert!(tuned.recommendations.iter().any(|r| r.starts_with("High urgency")));

        let generic = analyze(&ctx);
        assert_eq!(generic.response_speed, ResponseSpeed::Normal);
        assert_eq!(generic.emotional_tone, EmotionalTone::Professional);

        let low = CommunicationRules {
            high_urgency_threshold: 0.2,
            ..CommunicationRules::default()
        };
        let quiet = SituationalContext::new(ContextType::Professional).with_urgency(0.25);
        assert_eq!(DefaultContextAnalyzer.analyze(&quiet, &low).response_speed, ResponseSpeed::Fast);
        assert_eq!(
            DefaultContextAnalyzer
                .analyze(&SituationalContext::new(ContextType::Professional).with_urgency(0.95), &low)
                .response_speed,
            ResponseSpeed::Immediate
        );
    }

    #[test]
    fn test_crisis_never_slower_than_fast() {
        let calm = analyze(&SituationalContext::new(ContextType::Crisis));
        assert_eq!(calm.response_speed, ResponseSpeed::Fast);
        assert_eq!(calm.emotional_tone, EmotionalTone::Calm);

        let urgent = analyze(&SituationalContext::new(ContextType::Crisis).with_urgency(1.0));
        assert_eq!(urgent.response_speed, ResponseSpeed::Immediate);
        assert_eq!(urgent.emotional_tone, EmotionalTone::Calm);
    }

    #[test]
    fn test_detail_level_from_complexity() {
        let detail = |c| analyze(&SituationalContext::new(ContextType::Personal).with_complexity(c)).detail_level;
        assert_eq!(detail(9.0), DetailLevel::Comprehensive);
        assert_eq!(detail(6.0), DetailLevel::Detailed);
        assert_eq!(detail(3.0), DetailLevel::Standard);
        assert_eq!(detail(1.0), DetailLevel::Brief);
        assert_eq!(
            analyze(&SituationalContext::new(ContextType::Strategic)).detail_level,
            DetailLevel::Detailed
        );
    }

    #[test]
    fn test_emotional_tone_by_context() {
        let tone = |c| analyze(&SituationalContext::new(c)).emotional_tone;
        assert_eq!(tone(ContextType::Family), EmotionalTone::Warm);
        assert_eq!(tone(ContextType::Personal), EmotionalTone::Supportive);
        assert_eq!(tone(ContextType::Celebration), EmotionalTone::Celebratory);
        assert_eq!(tone(ContextType::Strategic), EmotionalTone::Professional);
        assert_eq!(tone(ContextType::Creative), EmotionalTone::Energetic);

        let urgent_family = analyze(&SituationalContext::new(ContextType::Family).with_urgency(0.8));
        assert_eq!(urgent_family.emotional_tone, EmotionalTone::Focused);
    }

    #[test]
    fn test_recommendations_follow_fired_branches() {
        let ctx = SituationalContext::new(ContextType::Professional)
            .with_urgency(0.9)
            .with_complexity(9.0)
            .with_time_of_day(TimeOfDay::LateNight);
        let recs = analyze(&ctx).recommendations;
        assert!(recs.iter().any(|r| r.starts_with("Late in the day")));
        assert!(recs.iter().any(|r| r.starts_with("High urgency")));
        assert!(recs.iter().any(|r| r.starts_with("Complex topic")));
        assert!(recs.iter().any(|r| r == "Use a formal register"));

        let quiet = SituationalContext::new(ContextType::Celebration);
        let recs = analyze(&quiet).recommendations;
        assert_eq!(recs, vec!["Simple topic: answer directly without background".to_string()]);
    }
}
