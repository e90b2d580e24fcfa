//! persona-adapt command-line tool.
//!
//! Loads a personality profile, optionally a context file, runs the full
//! adaptation and prints the result as pretty JSON.
//!
//! # Usage
//!
//! ```bash
//! persona-adapt profile.yaml [context.yaml]
//! ```
//!
//! The context file holds a `situational` section and an optional
//! `emotional` section. Without it, a professional context at the current
//! local time is used.
//!
//! # Environment Variables
//!
//! - `PERSONA_CONFIG`: optional YAML/JSON persona override document
//! - `RUST_LOG`: tracing filter (default: "info,persona_adapt=debug")

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use persona_adapt::{
    ContextType, EmotionalContext, PersonaConfigProvider, PersonalityAdaptationEngine,
    PersonalityProfile, SituationalContext, TimeOfDay,
};

#[derive(Debug, Deserialize)]
struct ContextFile {
    situational: SituationalContext,
    #[serde(default)]
    emotional: EmotionalContext,
}

fn load_context(path: Option<&Path>) -> Result<ContextFile> {
    let Some(path) = path else {
        return Ok(ContextFile {
            situational: SituationalContext::new(ContextType::Professional)
                .with_time_of_day(TimeOfDay::now()),
            emotional: EmotionalContext::default(),
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading context file {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing context file {}", path.display()))
}

fn load_provider() -> Result<PersonaConfigProvider> {
    let Ok(path) = std::env::var("PERSONA_CONFIG") else {
        return Ok(PersonaConfigProvider::new());
    };
    let (provider, report) = PersonaConfigProvider::from_file(&path)
        .with_context(|| format!("loading persona overrides from {}", path))?;
    if !report.is_clean() {
        tracing::warn!(
            "{} persona entries in {} were skipped",
            report.skipped.len(),
            path
        );
    }
    Ok(provider)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,persona_adapt=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let (profile_path, context_path) = match args.as_slice() {
        [profile] => (profile, None),
        [profile, context] => (profile, Some(context.as_path())),
        _ => bail!("usage: persona-adapt <profile.yaml> [context.yaml]"),
    };

    let profile = PersonalityProfile::from_yaml_file(profile_path)
        .with_context(|| format!("loading profile {}", profile_path.display()))?;
    let context = load_context(context_path)?;
    let engine = PersonalityAdaptationEngine::new(Arc::new(load_provider()?));

    tracing::info!(
        "Adapting '{}' ({} traits) to a {:?} context",
        profile.name,
        profile.traits.len(),
        context.situational.context_type
    );

    let adapted =
        engine.adapt_personality_to_context(&profile, &context.situational, &context.emotional);
    println!("{}", serde_json::to_string_pretty(&adapted)?);
    Ok(())
}
