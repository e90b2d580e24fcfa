//! Persona data model: who is being emulated and the situation they are in.
//!
//! ```text
//! PersonalityProfile { name, description, traits[] }   static, per persona
//! SituationalContext { context_type, urgency, ... }    per request
//! EmotionalContext   { primary_emotion, intensity }    per request
//! ```
//!
//! The closed enumerations here (`ContextType`, `DomainType`, `TaskType`,
//! `EmotionalState`, `TimeOfDay`) are matched exhaustively by the
//! adaptation components, so a new variant is a compile-time extension point.

pub mod context;
pub mod domain;
pub mod profile;

// Re-exports
pub use context::{ContextType, EmotionalContext, EmotionalState, SituationalContext, TimeOfDay};
pub use domain::{DomainType, TaskType, UnknownDomain};
pub use profile::{PersonalityProfile, PersonalityTrait};
