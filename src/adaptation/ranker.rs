//! Trait relevance ranking: which traits matter for a given kind of task.
//!
//! ```text
//! relevance = weight × category multiplier × task-specific modifier
//! ```
//!
//! The category multiplier comes from a fixed per-task table; categories the
//! table does not list are excluded.  The task-specific modifier rewards
//! traits whose name or description mentions task keywords, so a strongly
//! on-topic trait can outrank a trait from a higher-weighted category.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::persona::{PersonalityProfile, PersonalityTrait, TaskType};

use super::traits::TraitRanker;

/// Maximum number of traits returned.
pub const MAX_RELEVANT_TRAITS: usize = 10;

/// A trait paired with its computed relevance for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTrait {
    #[serde(rename = "trait")]
    pub personality_trait: PersonalityTrait,
    pub relevance_weight: f32,
    pub task_specific_modifier: f32,
}

/// Category label → multiplier for `task`.
fn category_multipliers(task: TaskType) -> &'static [(&'static str, f32)] {
    match task {
        TaskType::Technical => &[
            ("technical", 1.0),
            ("professional", 0.8),
            ("personality", 0.6),
            ("communication", 0.4),
            ("leadership", 0.4),
        ],
        TaskType::Personal => &[
            ("personal", 1.0),
            ("family", 1.0),
            ("personality", 0.9),
            ("values", 0.8),
            ("communication", 0.6),
            ("professional", 0.4),
        ],
        TaskType::Professional => &[
            ("professional", 1.0),
            ("leadership", 0.9),
            ("communication", 0.8),
            ("technical", 0.7),
            ("personality", 0.6),
        ],
        TaskType::Creative => &[
            ("creative", 1.0),
            ("personality", 0.8),
            ("technical", 0.6),
            ("communication", 0.6),
        ],
        TaskType::Analytical => &[
            ("analytical", 1.0),
            ("technical", 0.9),
            ("professional", 0.7),
            ("personality", 0.5),
        ],
        TaskType::Communication => &[
            ("communication", 1.0),
            ("personality", 0.8),
            ("leadership", 0.7),
            ("professional", 0.6),
            ("personal", 0.5),
        ],
    }
}

lazy_static::lazy_static! {
    static ref TECHNICAL_KEYWORDS: Regex = Regex::new(
        r"\b(rust|java|python|typescript|javascript|kotlin|scala|sql)\b|c#|c\+\+|\.net\b"
    ).expect("valid regex");
    static ref PERSONAL_KEYWORDS: Regex =
        Regex::new(r"family|\blife\b|\bhome\b|children|parent").expect("valid regex");
    static ref PROFESSIONAL_KEYWORDS: Regex =
        Regex::new(r"leader|manag|\bteam|business").expect("valid regex");
    static ref CREATIVE_KEYWORDS: Regex =
        Regex::new(r"creativ|design|music|\barts?\b|writing").expect("valid regex");
    static ref ANALYTICAL_KEYWORDS: Regex =
        Regex::new(r"analy|\bdata\b|logic|problem|decision").expect("valid regex");
    static ref COMMUNICATION_KEYWORDS: Regex =
        Regex::new(r"communicat|direct|honest|speak|listen").expect("valid regex");
}

/// Keyword matcher and boost for `task`.
fn task_keywords(task: TaskType) -> (&'static Regex, f32) {
    match task {
        TaskType::Technical => (&*TECHNICAL_KEYWORDS, 1.2),
        TaskType::Personal => (&*PERSONAL_KEYWORDS, 1.15),
        TaskType::Professional => (&*PROFESSIONAL_KEYWORDS, 1.1),
        TaskType::Creative => (&*CREATIVE_KEYWORDS, 1.15),
        TaskType::Analytical => (&*ANALYTICAL_KEYWORDS, 1.15),
        TaskType::Communication => (&*COMMUNICATION_KEYWORDS, 1.1),
    }
}

/// Default ranker using the fixed multiplier and keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTraitRanker;

impl CategoryTraitRanker {
    /// Modifier for one trait (1.0 when no keyword matches).
    pub fn task_specific_modifier(personality_trait: &PersonalityTrait, task: TaskType) -> f32 {
        let (pattern, boost) = task_keywords(task);
        if pattern.is_match(&personality_trait.searchable_text()) {
            boost
        } else {
            1.0
        }
    }

    /// Category multiplier, or `None` when the category is not relevant.
    pub fn category_multiplier(personality_trait: &PersonalityTrait, task: TaskType) -> Option<f32> {
        let key = personality_trait.category_key();
        category_multipliers(task)
            .iter()
            .find(|(label, _)| *label == key)
            .map(|(_, m)| *m)
    }
}

impl TraitRanker for CategoryTraitRanker {
    fn relevant_traits(&self, profile: &PersonalityProfile, task: TaskType) -> Vec<WeightedTrait> {
        let mut ranked: Vec<WeightedTrait> = profile
            .traits
            .iter()
            .filter_map(|t| {
                let multiplier = Self::category_multiplier(t, task)?;
                let modifier = Self::task_specific_modifier(t, task);
                Some(WeightedTrait {
                    personality_trait: t.clone(),
                    relevance_weight: t.effective_weight() * multiplier * modifier,
                    task_specific_modifier: modifier,
                })
            })
            .collect();

        // Stable: ties keep profile order.
        ranked.sort_by(|a, b| {
            b.relevance_weight
                .partial_cmp(&a.relevance_weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(MAX_RELEVANT_TRAITS);
        ranked
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t(category: &str, name: &str, weight: f32) -> PersonalityTrait {
        PersonalityTrait::new(category, name, "", weight)
    }

    #[test]
    fn test_empty_profile_returns_empty_list() {
        let profile = PersonalityProfile::new("nobody", "");
        assert!(CategoryTraitRanker
            .relevant_traits(&profile, TaskType::Technical)
            .is_empty());
    }

    #[test]
    fn test_unmapped_category_excluded() {
        let profile = PersonalityProfile::new("p", "")
            .with_trait(t("Hobbies", "Sailing", 1.0))
            .with_trait(t("Technical", "Distributed systems", 0.5));
        let ranked = CategoryTraitRanker.relevant_traits(&profile, TaskType::Technical);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].personality_trait.name, "Distributed systems");
    }

    #[test]
    fn test_relevance_is_weight_times_multiplier() {
        let profile = PersonalityProfile::new("p", "")
            .with_trait(t("Professional", "Delivery focus", 0.5));
        let ranked = CategoryTraitRanker.relevant_traits(&profile, TaskType::Technical);
        assert!((ranked[0].relevance_weight - 0.4).abs() < 1e-6);
        assert_eq!(ranked[0].task_specific_modifier, 1.0);
    }

    #[test]
    fn test_keyword_boost_can_override_category() {
        // Lower weight, but the description names a language.
        let profile = PersonalityProfile::new("p", "")
            .with_trait(t("Technical", "Systems thinking", 0.7))
            .with_trait(PersonalityTrait::new(
                "Technical",
                "Polyglot",
                "Writes Rust and C# daily",
                0.65,
            ));
        let ranked = CategoryTraitRanker.relevant_traits(&profile, TaskType::Technical);
        assert_eq!(ranked[0].personality_trait.name, "Polyglot");
        assert!((ranked[0].task_specific_modifier - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_personal_keywords() {
        let family = t("Personality", "Family first", 0.5);
        let other = t("Personality", "Stoic", 0.5);
        assert_eq!(CategoryTraitRanker::task_specific_modifier(&family, TaskType::Personal), 1.15);
        assert_eq!(CategoryTraitRanker::task_specific_modifier(&other, TaskType::Personal), 1.0);
        assert_eq!(CategoryTraitRanker::task_specific_modifier(&family, TaskType::Technical), 1.0);
    }

    #[test]
    fn test_partial_word_does_not_match() {
        let trait_ = PersonalityTrait::new("Technical", "Good judgement", "javascripting aside", 0.5);
        assert_eq!(CategoryTraitRanker::task_specific_modifier(&trait_, TaskType::Technical), 1.0);
    }

    #[test]
    fn test_ranking_is_capped_sorted_and_deterministic() {
        let mut profile = PersonalityProfile::new("p", "");
        for i in 0..25 {
            let category = ["Technical", "Professional", "Personality", "Unknown"][i % 4];
            profile = profile.with_trait(t(category, &format!("trait {}", i), (i as f32 * 0.37) % 1.0));
        }

        for task in TaskType::ALL {
            let first = CategoryTraitRanker.relevant_traits(&profile, task);
            let second = CategoryTraitRanker.relevant_traits(&profile, task);
            assert_eq!(first, second);
            assert!(first.len() <= MAX_RELEVANT_TRAITS);
            for pair in first.windows(2) {
                assert!(pair[0].relevance_weight >= pair[1].relevance_weight);
            }
        }
    }

    #[test]
    fn test_ties_keep_profile_order() {
        let profile = PersonalityProfile::new("p", "")
            .with_trait(t("Technical", "first", 0.5))
            .with_trait(t("Technical", "second", 0.5))
            .with_trait(t("Technical", "third", 0.5));
        let names: Vec<_> = CategoryTraitRanker
            .relevant_traits(&profile, TaskType::Technical)
            .into_iter()
            .map(|w| w.personality_trait.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
