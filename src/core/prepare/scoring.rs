//! Heuristic content-quality scoring
//!
//! Scores are for ranking sessions within one batch, nothing more. The
//! weights are policy, not calibration: a session with substantial
//! multi-turn content scores higher than a near-empty one, and heavily
//! redacted content is penalized because little trainable signal remains.

use regex::Regex;

/// Tunable scoring weights
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Character count at which the length component maxes out
    pub full_length_chars: usize,
    /// Maximum points awarded for length
    pub length_points: u32,
    /// Maximum points awarded for structure signals
    pub structure_points: u32,
    /// Penalty points per percentage point of placeholder density
    pub density_penalty_per_pct: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            full_length_chars: 2_000,
            length_points: 60,
            structure_points: 25,
            density_penalty_per_pct: 2.0,
        }
    }
}

/// Heuristic scorer over preview text
pub struct ScoringEngine {
    weights: ScoringWeights,
    placeholder: Regex,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            // Matches the substituted placeholder shape, <PREFIX_n>.
            placeholder: Regex::new(r"<[A-Z][A-Z0-9_]*_\d+>").expect("placeholder regex is valid"),
        }
    }

    /// Score a sanitized preview on a 0 to 100 scale
    ///
    /// Empty text scores zero. Otherwise: a length component saturating at
    /// `full_length_chars`, structure bonuses for multi-line and multi-word
    /// content, minus a penalty proportional to placeholder density.
    pub fn score_text(&self, text: &str) -> u32 {
        let char_count = text.chars().count();
        if char_count == 0 {
            return 0;
        }

        let w = &self.weights;

        let length_ratio =
            (char_count as f64 / w.full_length_chars as f64).min(1.0);
        let length_score = length_ratio * w.length_points as f64;

        let mut structure_score = 0u32;
        if text.lines().count() >= 5 {
            structure_score += 10;
        }
        let word_count = text.split_whitespace().count().max(1);
        if word_count >= 50 {
            structure_score += 10;
        }
        if text.contains('?') {
            structure_score += 5;
        }
        let structure_score = structure_score.min(w.structure_points);

        let placeholder_count = self.placeholder.find_iter(text).count();
        let density_pct = placeholder_count as f64 / word_count as f64 * 100.0;
        let density_penalty = density_pct * w.density_penalty_per_pct;

        let base = 15.0;
        let score = base + length_score + structure_score as f64 - density_penalty;
        score.clamp(0.0, 100.0).round() as u32
    }
}
