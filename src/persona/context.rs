//! Per-request situational and emotional context.
//!
//! Both types are created by the caller for every request and never
//! persisted by the engine.

use std::collections::HashMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::adaptation::bounds::{complexity, unit};

// ============================================================================
// Enumerations
// ============================================================================

/// Category of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    Technical,
    Professional,
    Personal,
    Family,
    Creative,
    Strategic,
    Crisis,
    Celebration,
}

impl ContextType {
    pub const ALL: [ContextType; 8] = [
        Self::Technical,
        Self::Professional,
        Self::Personal,
        Self::Family,
        Self::Creative,
        Self::Strategic,
        Self::Crisis,
        Self::Celebration,
    ];

    /// Complexity assumed when the caller does not supply one.
    pub fn default_complexity(&self) -> u8 {
        match self {
            Self::Technical => 6,
            Self::Professional => 5,
            Self::Personal => 3,
            Self::Family => 3,
            Self::Creative => 5,
            Self::Strategic => 7,
            Self::Crisis => 8,
            Self::Celebration => 2,
        }
    }
}

/// Time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    EarlyMorning,
    Morning,
    #[default]
    Afternoon,
    Evening,
    Night,
    LateNight,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        Self::EarlyMorning,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
        Self::LateNight,
    ];

    /// Bucket a 24-hour clock hour.  Hours past 23 wrap.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=7 => Self::EarlyMorning,
            8..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            21..=23 => Self::Night,
            _ => Self::LateNight,
        }
    }

    /// Bucket for the local wall clock.
    pub fn now() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }
}

/// Primary emotion driving tone modulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    #[default]
    Neutral,
    Confident,
    Concerned,
    Excited,
    Reflective,
    Frustrated,
}

impl EmotionalState {
    pub const ALL: [EmotionalState; 6] = [
        Self::Neutral,
        Self::Confident,
        Self::Concerned,
        Self::Excited,
        Self::Reflective,
        Self::Frustrated,
    ];

    /// How much of this emotion's intensity reads as stress.
    fn stress_weight(&self) -> f32 {
        match self {
            Self::Frustrated => 1.0,
            Self::Concerned => 0.8,
            Self::Excited => 0.3,
            Self::Neutral => 0.2,
            Self::Reflective => 0.1,
            Self::Confident => 0.0,
        }
    }
}

// ============================================================================
// Situational context
// ============================================================================

/// Key in [`SituationalContext::additional_context`] carrying an explicit
/// complexity score (1–10).
pub const COMPLEXITY_KEY: &str = "complexity";

/// The situation a response is produced in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationalContext {
    /// Kind of situation; selects baselines and default complexity.
    pub context_type: ContextType,
    /// Free-text setting (channel, room, meeting).
    #[serde(default)]
    pub environment: String,
    /// Free-text subject.
    #[serde(default)]
    pub topic: String,
    /// 0.0–1.0.  Clamped on read.
    #[serde(default)]
    pub urgency_level: f32,
    /// Drives the time-of-day recommendations.
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Role of the person being addressed.
    #[serde(default)]
    pub user_role: String,
    /// Open key/value bag.  Only [`COMPLEXITY_KEY`] is interpreted.
    #[serde(default)]
    pub additional_context: HashMap<String, serde_json::Value>,
}

impl SituationalContext {
    /// A calm context of `context_type` with no topic, role or extra entries.
    pub fn new(context_type: ContextType) -> Self {
        Self {
            context_type,
            environment: String::new(),
            topic: String::new(),
            urgency_level: 0.0,
            time_of_day: TimeOfDay::default(),
            user_role: String::new(),
            additional_context: HashMap::new(),
        }
    }

    /// Subject under discussion.  Informational only.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Where the conversation happens (e.g. "slack", "on-call bridge").
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Raw urgency.  Stored as given and clamped by [`Self::urgency`].
    pub fn with_urgency(mut self, urgency: f32) -> Self {
        self.urgency_level = urgency;
        self
    }

    /// Override the time of day instead of the default `Afternoon`.
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Role of the person being addressed.
    pub fn with_user_role(mut self, role: impl Into<String>) -> Self {
        self.user_role = role.into();
        self
    }

    /// Set the `complexity` entry read by [`Self::complexity`].
    pub fn with_complexity(self, value: f32) -> Self {
        self.with_context(COMPLEXITY_KEY, serde_json::json!(value))
    }

    /// Insert or replace an entry in the open key/value bag.
    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.additional_context.insert(key.into(), value);
        self
    }

    /// Urgency clamped to 0.0–1.0.
    pub fn urgency(&self) -> f32 {
        unit(self.urgency_level)
    }

    /// Complexity on a 1–10 scale: the explicit `complexity` entry when it
    /// is numeric, otherwise the context type's default.
    pub fn complexity(&self) -> u8 {
        self.additional_context
            .get(COMPLEXITY_KEY)
            .and_then(serde_json::Value::as_f64)
            .map(|v| complexity(v as f32).round() as u8)
            .unwrap_or_else(|| self.context_type.default_complexity())
    }
}

// ============================================================================
// Emotional context
// ============================================================================

/// The emotional state behind a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalContext {
    #[serde(default)]
    pub primary_emotion: EmotionalState,
    /// 0.0–1.0.  Clamped on read.
    #[serde(default)]
    pub intensity: f32,
    /// What caused the emotion, if known.
    #[serde(default)]
    pub trigger: String,
}

impl EmotionalContext {
    pub fn new(primary_emotion: EmotionalState, intensity: f32) -> Self {
        Self {
            primary_emotion,
            intensity,
            trigger: String::new(),
        }
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn intensity(&self) -> f32 {
        unit(self.intensity)
    }

    /// Stress estimate (0.0–1.0) implied by the emotion and its intensity.
    pub fn stress_level(&self) -> f32 {
        unit(self.primary_emotion.stress_weight() * self.intensity())
    }
}

impl Default for EmotionalContext {
    fn default() -> Self {
        Self::new(EmotionalState::Neutral, 0.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
