// src/scorer.rs
//
// Pronunciation acceptability scoring. Both strings are normalized, folded
// through a confusable-phoneme map (sounds Japanese learners routinely merge
// collapse to one representative per class), then compared with a normalized
// longest-common-subsequence ratio. Pure and symmetric.

use serde::{Deserialize, Serialize};

use crate::config::SETTINGS;
use crate::normalizer;

/// Confusable multigraphs folded before the per-character pass.
const CANONICAL_MULTIGRAPHS: &[(&str, &str)] = &[("ing", "in"), ("th", "s"), ("ed", "d")];

/// Per-character confusable classes: l/r, b/v/p, d/t, g/k, f/h.
fn canonical_char(c: char) -> char {
    match c {
        'l' => 'r',
        'v' | 'p' => 'b',
        't' => 'd',
        'k' => 'g',
        'f' => 'h',
        _ => c,
    }
}

/// Coarse rating bands over the similarity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PronunciationLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PronunciationLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.8 {
            PronunciationLevel::Excellent
        } else if ratio >= 0.6 {
            PronunciationLevel::Good
        } else if ratio >= 0.4 {
            PronunciationLevel::Fair
        } else {
            PronunciationLevel::Poor
        }
    }

    /// Practice feedback shown to the learner.
    pub fn message(&self) -> &'static str {
        match self {
            PronunciationLevel::Excellent => "Excellent! Your pronunciation is very close.",
            PronunciationLevel::Good => "Good. A few sounds drifted, but it is clearly understandable.",
            PronunciationLevel::Fair => "Fair. Understandable, but worth another attempt.",
            PronunciationLevel::Poor => "Keep practicing. Try saying it slowly, sound by sound.",
        }
    }
}

/// Outcome of comparing a recognized utterance against a reference phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptabilityResult {
    pub reference: String,
    pub recognized: String,
    pub similarity: f64,
    pub level: PronunciationLevel,
    pub acceptable: bool,
}

/// Fold a normalized string onto confusable-class representatives.
fn canonicalize(text: &str) -> String {
    let mut folded = normalizer::normalize(text);
    for (pattern, replacement) in CANONICAL_MULTIGRAPHS {
        if folded.contains(pattern) {
            folded = folded.replace(pattern, replacement);
        }
    }
    folded.chars().map(canonical_char).collect()
}

/// Longest common subsequence length over chars, standard DP matrix.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            matrix[i][j] = if a[i - 1] == b[j - 1] {
                matrix[i - 1][j - 1] + 1
            } else {
                matrix[i - 1][j].max(matrix[i][j - 1])
            };
        }
    }
    matrix[a.len()][b.len()]
}

/// Similarity ratio 2·LCS / (|A| + |B|) over canonicalized strings, in [0, 1].
pub fn similarity(reference: &str, recognized: &str) -> f64 {
    let a: Vec<char> = canonicalize(reference).chars().collect();
    let b: Vec<char> = canonicalize(recognized).chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let lcs = lcs_length(&a, &b);
    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

/// Score with an explicit acceptance threshold.
pub fn score_with_threshold(
    reference: &str,
    recognized: &str,
    threshold: f64,
) -> AcceptabilityResult {
    let ratio = similarity(reference, recognized);
    let level = PronunciationLevel::from_ratio(ratio);
    let acceptable = ratio >= threshold;
    log::debug!(
        "[Scorer] '{}' vs '{}': ratio={:.3}, level={:?}, acceptable={}",
        reference,
        recognized,
        ratio,
        level,
        acceptable
    );
    AcceptabilityResult {
        reference: reference.to_string(),
        recognized: recognized.to_string(),
        similarity: ratio,
        level,
        acceptable,
    }
}

/// Score with the configured acceptance threshold.
pub fn score(reference: &str, recognized: &str) -> AcceptabilityResult {
    score_with_threshold(reference, recognized, SETTINGS.acceptance_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_perfect() {
        let result = score("hello world", "hello world");
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.level, PronunciationLevel::Excellent);
        assert!(result.acceptable);
    }

    #[test]
    fn test_confusables_are_equivalent() {
        // Every character difference sits inside one confusable class
        assert_eq!(similarity("light", "right"), 1.0);
        assert_eq!(similarity("berry", "belly"), 1.0);
        assert_eq!(similarity("bat", "vat"), 1.0);
    }

    #[test]
    fn test_close_pronunciation_scores_high() {
        let result = score("hello", "helo");
        assert!(result.similarity > 0.85, "got {}", result.similarity);
        assert_eq!(result.level, PronunciationLevel::Excellent);
        assert!(result.acceptable);
    }

    #[test]
    fn test_unrelated_not_acceptable() {
        // canonical forms: "ned in" vs "gadon", LCS 2, ratio 4/11
        let result = score_with_threshold("need in", "katon", 0.4);
        assert!(result.similarity < 0.4, "got {}", result.similarity);
        assert_eq!(result.level, PronunciationLevel::Poor);
        assert!(!result.acceptable);
    }

    #[test]
    fn test_symmetry() {
        for (a, b) in [("hello", "herro"), ("need in", "katon"), ("", "x")] {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_range() {
        for (a, b) in [("hello", "goodbye"), ("a", "a"), ("thing", "sing"), ("x", "")] {
            let r = similarity(a, b);
            assert!((0.0..=1.0).contains(&r), "{} vs {} gave {}", a, b, r);
        }
    }

    #[test]
    fn test_empty_cases() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("hello", ""), 0.0);
        assert_eq!(similarity("", "hello"), 0.0);
        // Punctuation-only input normalizes to empty
        assert_eq!(similarity("...", "!!!"), 1.0);
    }

    #[test]
    fn test_threshold_boundary() {
        // Identical input passes any threshold up to 1.0
        assert!(score_with_threshold("go", "go", 1.0).acceptable);
        assert!(!score_with_threshold("go", "no", 1.0).acceptable);
    }

    #[test]
    fn test_suffix_folding() {
        // "ing" and "in" endings sound alike
        assert_eq!(similarity("going", "goin"), 1.0);
        // "th" folds to "s"
        assert_eq!(similarity("think", "sink"), 1.0);
    }

    #[test]
    fn test_level_bands() {
        assert_eq!(PronunciationLevel::from_ratio(0.85), PronunciationLevel::Excellent);
        assert_eq!(PronunciationLevel::from_ratio(0.8), PronunciationLevel::Excellent);
        assert_eq!(PronunciationLevel::from_ratio(0.7), PronunciationLevel::Good);
        assert_eq!(PronunciationLevel::from_ratio(0.5), PronunciationLevel::Fair);
        assert_eq!(PronunciationLevel::from_ratio(0.39), PronunciationLevel::Poor);
    }
}
