//! Tone modulation driven by the caller's emotional context.

use serde::{Deserialize, Serialize};

use crate::persona::{EmotionalContext, EmotionalState, PersonalityProfile};

use super::bounds::unit;

/// Eight tone axes (0.0–1.0) and the name of the dominant register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneModulation {
    pub confidence: f32,
    pub directness: f32,
    pub warmth: f32,
    pub enthusiasm: f32,
    pub self_awareness: f32,
    pub analytical: f32,
    pub patience: f32,
    pub reassurance: f32,
    pub tone_label: String,
}

impl ToneModulation {
    pub const BASELINE: f32 = 0.5;

    /// Named axis values, in declaration order.
    pub fn axes(&self) -> [(&'static str, f32); 8] {
        [
            ("confidence", self.confidence),
            ("directness", self.directness),
            ("warmth", self.warmth),
            ("enthusiasm", self.enthusiasm),
            ("self_awareness", self.self_awareness),
            ("analytical", self.analytical),
            ("patience", self.patience),
            ("reassurance", self.reassurance),
        ]
    }

    /// Label of the highest axis; "balanced" when every axis is level.
    fn dominant_label(&self) -> &'static str {
        const REGISTERS: [&str; 8] = [
            "assured",
            "direct",
            "warm",
            "enthusiastic",
            "reflective",
            "analytical",
            "patient",
            "reassuring",
        ];
        let axes = self.axes();
        let mut best = 0;
        let mut lowest = axes[0].1;
        for (i, (_, v)) in axes.iter().enumerate().skip(1) {
            if *v > axes[best].1 {
                best = i;
            }
            lowest = lowest.min(*v);
        }
        if axes[best].1 - lowest < 1e-6 {
            "balanced"
        } else {
            REGISTERS[best]
        }
    }
}

/// Tone for `profile` speaking to someone in `emotional` state.
pub fn modulate_tone(profile: &PersonalityProfile, emotional: &EmotionalContext) -> ToneModulation {
    let b = ToneModulation::BASELINE;
    let mut tone = ToneModulation {
        confidence: b,
        directness: b,
        warmth: b + profile.mean_weight_in("personality") * 0.1,
        enthusiasm: b,
        self_awareness: b,
        analytical: b + profile.mean_weight_in("technical") * 0.1,
        patience: b,
        reassurance: b,
        tone_label: String::new(),
    };

    let i = emotional.intensity();
    match emotional.primary_emotion {
        EmotionalState::Confident => {
            tone.confidence += 0.25 * i;
            tone.directness += 0.10 * i;
        }
        EmotionalState::Concerned => {
            tone.reassurance += 0.25 * i;
            tone.warmth += 0.10 * i;
            tone.patience += 0.10 * i;
            tone.confidence -= 0.10 * i;
        }
        EmotionalState::Excited => {
            tone.enthusiasm += 0.30 * i;
            tone.warmth += 0.10 * i;
        }
        EmotionalState::Reflective => {
            tone.self_awareness += 0.25 * i;
            tone.analytical += 0.20 * i;
            tone.patience += 0.10 * i;
        }
        EmotionalState::Frustrated => {
            tone.directness += 0.20 * i;
            tone.warmth -= 0.15 * i;
            tone.patience -= 0.20 * i;
        }
        EmotionalState::Neutral => {}
    }

    tone.confidence = unit(tone.confidence);
    tone.directness = unit(tone.directness);
    tone.warmth = unit(tone.warmth);
    tone.enthusiasm = unit(tone.enthusiasm);
    tone.self_awareness = unit(tone.self_awareness);
    tone.analytical = unit(tone.analytical);
    tone.patience = unit(tone.patience);
    tone.reassurance = unit(tone.reassurance);
    tone.tone_label = tone.dominant_label().to_string();
    tone
}
