//! Built-in persona tables compiled into the binary.
//!
//! These are the starting point of every [`PersonaTable`]; an override
//! document can refine them or add new personas.
//!
//! [`PersonaTable`]: super::provider::PersonaTable

use crate::persona::DomainType;

use super::rules::{
    BehaviorRules, CommunicationRules, ConfidenceRules, ExpertiseLevels,
    PersonalityConfiguration, StressRules,
};

/// Id of the built-in senior software architect / engineering leader persona.
pub const AVERY: &str = "avery";

/// All built-in personas as `(id, configuration)` pairs, already clamped.
pub fn builtin_personas() -> Vec<(String, PersonalityConfiguration)> {
    vec![(AVERY.to_string(), avery().clamped())]
}

/// A principal engineer who leads teams: expert in architecture and
/// delivery, family-oriented, openly weak in arts, marketing and law.
fn avery() -> PersonalityConfiguration {
    let expertise: ExpertiseLevels = [
        (DomainType::SoftwareArchitecture, 0.95),
        (DomainType::SoftwareDevelopment, 0.92),
        (DomainType::TeamLeadership, 0.90),
        (DomainType::ProjectManagement, 0.80),
        (DomainType::DevOps, 0.80),
        (DomainType::Security, 0.75),
        (DomainType::DataEngineering, 0.70),
        (DomainType::ProductStrategy, 0.75),
        (DomainType::BusinessStrategy, 0.70),
        (DomainType::Family, 0.85),
        (DomainType::PersonalFinance, 0.55),
        (DomainType::Health, 0.45),
        (DomainType::Arts, 0.30),
        (DomainType::Marketing, 0.35),
        (DomainType::Legal, 0.25),
    ]
    .into_iter()
    .collect();

    PersonalityConfiguration {
        expertise_levels: expertise,
        behavior_rules: BehaviorRules {
            technical_context_boost: 1.05,
            leadership_context_boost: 1.10,
            family_context_boost: 1.05,
            professional_context_boost: 1.0,
            trait_influence: 1.2,
        },
        stress_rules: StressRules {
            directness_factor: 0.35,
            structured_thinking_boost: 0.3,
            detail_reduction_factor: 0.25,
            warmth_reduction_factor: 0.15,
            solution_focus_factor: 0.3,
            self_reflection_factor: 0.2,
            confidence_factor: 0.1,
            pragmatism_factor: 0.2,
            results_orientation_factor: 0.2,
        },
        communication_rules: CommunicationRules {
            high_urgency_threshold: 0.7,
            urgency_formality_boost: 0.15,
            complexity_formality_threshold: 7,
            complexity_formality_boost: 0.1,
        },
        confidence_rules: ConfidenceRules {
            complexity_reduction_rate: 0.03,
            core_domain_confidence_bonus: 0.1,
            known_weakness_reduction: 0.15,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps_every_domain() {
        for (id, cfg) in builtin_personas() {
            for domain in DomainType::ALL {
                assert!(cfg.expertise_levels.contains(domain), "{} misses {:?}", id, domain);
            }
        }
    }

    #[test]
    fn test_builtin_is_already_clamped() {
        for (_, cfg) in builtin_personas() {
            assert_eq!(cfg.clone().clamped(), cfg);
        }
    }

    #[test]
    fn test_avery_decays_faster_than_generic() {
        let cfg = avery();
        assert!(
            cfg.confidence_rules.complexity_reduction_rate
                > ConfidenceRules::default().complexity_reduction_rate
        );
    }
}
