//! # persona-adapt
//!
//! Context-driven personality adaptation for persona-emulating assistants.
//!
//! Given a persona's static profile (weighted traits) and the situation a
//! response is produced in (context type, urgency, time of day, emotional
//! state), the engine derives behavior modifiers, expertise-bounded
//! confidence, communication style, tone and a context analysis. Persona
//! coefficients come from built-in tables refined by an optional YAML
//! override document; unknown personas fall back to a generic table.
//!
//! ```no_run
//! use persona_adapt::{
//!     ContextType, EmotionalContext, PersonalityAdaptationEngine, PersonalityProfile,
//!     SituationalContext,
//! };
//!
//! let engine = PersonalityAdaptationEngine::default();
//! let profile = PersonalityProfile::from_yaml_file("avery.yaml").unwrap();
//! let situation = SituationalContext::new(ContextType::Technical).with_urgency(0.8);
//! let adapted = engine.adapt_personality_to_context(&profile, &situation, &EmotionalContext::default());
//! println!("{}", adapted.communication_style.tone_recommendation);
//! ```

pub mod adaptation;
pub mod config;
pub mod persona;

pub use adaptation::{AdaptedPersonality, PersonalityAdaptationEngine};
pub use config::{ConfigError, ConfigurationProvider, PersonaConfigProvider};
pub use persona::{
    ContextType, DomainType, EmotionalContext, EmotionalState, PersonalityProfile,
    PersonalityTrait, SituationalContext, TaskType, TimeOfDay,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
