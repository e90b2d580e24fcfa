//! Expertise confidence scoring.
//!
//! ```text
//! raw      = base − (c − 1) × rate  [+ bonus if base ≥ 0.85]  [− reduction if base ≤ 0.40]
//! raw      = min(raw, 0.6)          if weakness domain
//! adjusted = clamp(raw, 0.1, 1.0)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfidenceRules, ExpertiseLevels};
use crate::persona::DomainType;

use super::bounds::{clamp_range, complexity, MAXIMUM_CONFIDENCE_LEVEL, MINIMUM_CONFIDENCE_LEVEL};
use super::traits::ConfidenceScorer;

/// Base confidence at or above which a domain counts as core expertise.
pub const CORE_DOMAIN_THRESHOLD: f32 = 0.85;
/// Base confidence at or below which a domain counts as a known weakness.
pub const WEAKNESS_THRESHOLD: f32 = 0.40;
/// Ceiling on adjusted confidence in a weakness domain.
pub const WEAKNESS_CONFIDENCE_CAP: f32 = 0.6;

/// Complexity at or above which a task counts as complex.
const COMPLEX_TASK: f32 = 7.0;

/// Result of scoring one domain at one complexity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseConfidenceAdjustment {
    pub domain: DomainType,
    /// Complexity actually used, after clamping to 1–10.
    pub task_complexity: f32,
    pub base_confidence: f32,
    pub adjusted_confidence: f32,
    /// Always ≤ 0.
    pub complexity_adjustment: f32,
    pub domain_bonus: f32,
    pub weakness_reduction: f32,
    pub confidence_explanation: String,
}

/// Default [`ConfidenceScorer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpertiseConfidenceScorer;

impl ConfidenceScorer for ExpertiseConfidenceScorer {
    fn adjust_confidence(
        &self,
        expertise: &ExpertiseLevels,
        rules: &ConfidenceRules,
        domain: DomainType,
        task_complexity: f32,
    ) -> ExpertiseConfidenceAdjustment {
        let c = complexity(task_complexity);
        let base = expertise.level(domain);
        let core = base >= CORE_DOMAIN_THRESHOLD;
        let weak = base <= WEAKNESS_THRESHOLD;

        let complexity_adjustment = -(c - 1.0) * rules.complexity_reduction_rate;
        let domain_bonus = if core { rules.core_domain_confidence_bonus } else { 0.0 };
        let weakness_reduction = if weak { rules.known_weakness_reduction } else { 0.0 };

        let mut raw = base + complexity_adjustment + domain_bonus - weakness_reduction;
        let capped = weak && raw > WEAKNESS_CONFIDENCE_CAP;
        if capped {
            raw = WEAKNESS_CONFIDENCE_CAP;
        }

        let mut notes = Vec::with_capacity(3);
        notes.push(if core {
            format!("High expertise in {}", domain.label())
        } else if weak {
            format!("Known weakness in {}", domain.label())
        } else {
            format!("Moderate expertise in {}", domain.label())
        });
        if c >= COMPLEX_TASK {
            notes.push("Complex task reduces confidence".to_string());
        } else if c > 1.0 {
            notes.push("Task complexity slightly reduces confidence".to_string());
        }
        if capped {
            notes.push("Confidence capped for weakness domain".to_string());
        }

        ExpertiseConfidenceAdjustment {
            domain,
            task_complexity: c,
            base_confidence: base,
            adjusted_confidence: clamp_range(raw, MINIMUM_CONFIDENCE_LEVEL, MAXIMUM_CONFIDENCE_LEVEL),
            complexity_adjustment,
            domain_bonus,
            weakness_reduction,
            confidence_explanation: notes.join(", "),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
