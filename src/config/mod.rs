//! Persona configuration: rule tables, built-in personas, override
//! documents, and the provider that serves them.
//!
//! # Architecture
//!
//! ```text
//! builtin_personas() ─┐
//!                     ├─► PersonaTable ─► Arc ─► PersonaConfigProvider
//! OverrideDocument ───┘    (clamped)              (snapshot / reload)
//! ```
//!
//! Unknown personas are never an error: every getter falls back to the
//! generic table.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod provider;
pub mod rules;

pub use builtin::AVERY;
pub use error::ConfigError;
pub use loader::{LoadReport, OverrideDocument};
pub use provider::{ConfigurationProvider, PersonaConfigProvider, PersonaTable};
pub use rules::{
    BehaviorRules, CommunicationRules, ConfidenceRules, ExpertiseLevels,
    PersonalityConfiguration, StressRules, GENERIC_DOMAIN_CONFIDENCE,
};
