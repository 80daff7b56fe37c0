//! Shannon-entropy secret detection
//!
//! Statistical fallback for secrets not covered by any known pattern. A
//! candidate is a bare run of base64/key-alphabet characters; high entropy
//! marks it as likely random, so likely secret material.

use regex::Regex;

/// Candidate runs: base64/key alphabet, bounded by word boundaries.
const CANDIDATE_SOURCE: &str = r"\b[A-Za-z0-9+/=_-]{20,}\b";

/// Entropy-based secret detector
///
/// Thresholds are hand-tuned policy, surfaced through configuration rather
/// than baked in: base64-encoded key material typically lands well above
/// 3.8 bits/char, while identifiers and English-ish tokens land below.
#[derive(Debug, Clone)]
pub struct EntropyDetector {
    candidate: Regex,
    min_length: usize,
    threshold: f64,
}

impl EntropyDetector {
    /// Create a detector with the given minimum candidate length and
    /// entropy threshold (bits per character)
    pub fn new(min_length: usize, threshold: f64) -> Self {
        Self {
            // The literal cannot fail to compile; tested below.
            candidate: Regex::new(CANDIDATE_SOURCE).expect("candidate regex is valid"),
            min_length: min_length.max(20),
            threshold,
        }
    }

    /// The candidate-run regex, for callers that drive replacement
    pub fn candidate_regex(&self) -> &Regex {
        &self.candidate
    }

    /// Decide whether a candidate run should be treated as a secret
    ///
    /// Rejects pure-hex, pure-digit and pure-alphabetic runs regardless of
    /// length, runs shorter than the configured minimum, and runs shaped
    /// like already-inserted placeholders (which share this alphabet).
    pub fn is_secret_like(&self, candidate: &str) -> bool {
        if candidate.len() < self.min_length {
            return false;
        }
        if candidate.chars().all(|c| c.is_ascii_hexdigit()) {
            return false;
        }
        if candidate.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        if candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        if looks_like_placeholder(candidate) {
            return false;
        }

        shannon_entropy(candidate) >= self.threshold
    }

    /// Configured entropy threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Configured minimum candidate length
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

// UPPER_SNAKE prefix ending in a sequence number, e.g. CONNECTION_STRING_12.
fn looks_like_placeholder(candidate: &str) -> bool {
    let Some((prefix, suffix)) = candidate.rsplit_once('_') else {
        return false;
    };
    !suffix.is_empty()
        && suffix.chars().all(|c| c.is_ascii_digit())
        && !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Shannon entropy of a string in bits per character
///
/// Higher entropy means more randomness; base64-encoded secrets typically
/// score above 3.8, English words below 3.
pub fn shannon_entropy(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }

    let mut freq = [0u32; 256];
    let len = value.len() as f64;

    for byte in value.bytes() {
        freq[byte as usize] += 1;
    }

    let mut entropy = 0.0;
    for &count in &freq {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    entropy
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn detector() -> EntropyDetector {
        EntropyDetector::new(20, 3.8)
    }

    #[test]
    fn test_candidate_regex_compiles() {
        let det = detector();
        assert!(det.candidate_regex().is_match("aB3xY9kL5mN7qR2tV8wZ"));
        assert!(!det.candidate_regex().is_match("short"));
    }

    #[test]
    fn test_entropy_of_repeated_chars_is_low() {
        assert!(shannon_entropy("aaaaaaaaaaaaaaaa") < 1.0);
    }

    #[test]
    fn test_entropy_of_random_looking_is_high() {
        assert!(shannon_entropy("aB3xY9kL5mN7qR2tV8wZ") > 3.8);
    }

    #[test]
    fn test_entropy_of_empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    // Exclusions hold regardless of length
    #[test_case("deadbeefdeadbeefdeadbeefdeadbeef"; "pure hex")]
    #[test_case("123456789012345678901234567890"; "pure digits")]
    #[test_case("abcdefghijklmnopqrstuvwxyzABCD"; "pure alpha")]
    fn test_exclusions_never_flagged(candidate: &str) {
        assert!(!detector().is_secret_like(candidate));
    }

    #[test]
    fn test_short_candidates_rejected() {
        assert!(!detector().is_secret_like("aB3xY9kL5m"));
    }

    #[test]
    fn test_random_mixed_candidate_flagged() {
        assert!(detector().is_secret_like("aB3xY9kL5mN7qR2tV8wZ"));
    }

    #[test]
    fn test_placeholder_shape_not_flagged() {
        assert!(!detector().is_secret_like("CONNECTION_STRING_1234567"));
    }

    #[test]
    fn test_min_length_floor_is_twenty() {
        let det = EntropyDetector::new(5, 3.8);
        assert_eq!(det.min_length(), 20);
    }

    #[test]
    fn test_threshold_is_policy() {
        // A lax threshold flags what the default rejects
        let strict = EntropyDetector::new(20, 4.5);
        let lax = EntropyDetector::new(20, 2.5);
        let candidate = "user_1234_user_1234a";
        assert!(!strict.is_secret_like(candidate));
        assert!(lax.is_secret_like(candidate));
    }
}
