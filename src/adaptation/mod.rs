//! Adaptation engine: turns a profile, its persona configuration and the
//! current situation into concrete behavior, confidence and style values.
//!
//! ```text
//!                  ┌──────────────────────────────────────┐
//!  profile ───────►│   PersonalityAdaptationEngine        │
//!  situation ─────►│                                      │
//!  emotion ───────►│  provider ──► rule tables            │
//!                  │  TraitRanker        ─► WeightedTrait │
//!                  │  BehaviorCalculator ─► BehaviorMods  │
//!                  │  ConfidenceScorer   ─► Confidence    │
//!                  │  StyleMapper        ─► Style / Tone  │
//!                  │  ContextAnalyzer    ─► Analysis      │
//!                  └──────────────────────────────────────┘
//! ```
//!
//! Every capability is a trait with one default implementation; the engine
//! owns one boxed instance of each and can be rebuilt with replacements.
//! All outputs are plain values clamped into their documented ranges.

pub mod analysis;
pub mod behavior;
pub mod bounds;
pub mod confidence;
pub mod engine;
pub mod ranker;
pub mod style;
pub mod tone;
pub mod traits;

// Re-exports
pub use analysis::{
    ContextAnalysisResult, DefaultContextAnalyzer, DetailLevel, EmotionalTone, ResponseSpeed,
};
pub use behavior::{BehaviorModifiers, StressAdjustment, TraitBehaviorCalculator};
pub use confidence::{ExpertiseConfidenceAdjustment, ExpertiseConfidenceScorer};
pub use engine::{AdaptedPersonality, PersonalityAdaptationEngine};
pub use ranker::{CategoryTraitRanker, WeightedTrait, MAX_RELEVANT_TRAITS};
pub use style::{formality_level, ContextStyleMapper, ContextualCommunicationStyle};
pub use tone::{modulate_tone, ToneModulation};
pub use traits::{BehaviorCalculator, ConfidenceScorer, ContextAnalyzer, StyleMapper, TraitRanker};
