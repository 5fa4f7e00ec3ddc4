// src/converter.rs
//
// The conversion pipeline: normalize, phrase-match, resolve each remaining
// token, assemble. Total over all input; empty or unusable text yields the
// unknown marker rather than an error.

use serde::{Deserialize, Serialize};

use crate::assembler;
use crate::config::SETTINGS;
use crate::kana;
use crate::normalizer;
use crate::phrase_matcher::{self, Segment};
use crate::word_resolver::{self, TokenSource};

/// One resolved token with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenTrace {
    pub token: String,
    pub kana: String,
    pub source: TokenSource,
}

/// Full conversion output including the per-token trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input: String,
    pub katakana: String,
    pub trace: Vec<TokenTrace>,
}

/// Convert recognized English text to its katakana pronunciation.
pub fn convert(text: &str) -> String {
    convert_detailed(text).katakana
}

/// Convert with a trace of how each token was resolved.
pub fn convert_detailed(text: &str) -> ConversionResult {
    let normalized = normalizer::normalize(text);
    let mut trace = Vec::new();
    let mut parts = Vec::new();

    for segment in phrase_matcher::apply(&normalized) {
        match segment {
            Segment::Phrase { pattern, kana } => {
                parts.push(kana.clone());
                trace.push(TokenTrace {
                    token: pattern,
                    kana,
                    source: TokenSource::Phrase,
                });
            }
            Segment::Text(body) => {
                for token in body.split_whitespace() {
                    let (kana, source) =
                        word_resolver::resolve(token, SETTINGS.allow_half_width_kana);
                    parts.push(kana.clone());
                    trace.push(TokenTrace {
                        token: token.to_string(),
                        kana,
                        source,
                    });
                }
            }
        }
    }

    let mut katakana = assembler::assemble(&parts, SETTINGS.repetition_min_len);
    if katakana.is_empty() {
        katakana = kana::UNKNOWN.to_string();
    }

    log::info!("[Converter] '{}' -> '{}'", text, katakana);
    ConversionResult {
        input: text.to_string(),
        katakana,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::WORD_DICT;

    #[test]
    fn test_phrase_conversion() {
        assert_eq!(convert("got to"), "ガラ");
        assert_eq!(convert("Got to!"), "ガラ");
    }

    #[test]
    fn test_dictionary_conversion() {
        assert_eq!(convert("hello"), "ハロー");
        assert_eq!(convert("Hello, world!"), "ハロー ワールド");
    }

    #[test]
    fn test_rule_conversion_with_digits() {
        assert_eq!(convert("xyz9"), "クスヤズ9");
    }

    #[test]
    fn test_dictionary_totality() {
        // Every dictionary word converts to exactly its entry
        for (word, kana) in WORD_DICT.iter() {
            // Phrase rules may claim a word first ("because" -> "コズ")
            if crate::phrase_matcher::apply(word).len() == 1
                && matches!(
                    crate::phrase_matcher::apply(word)[0],
                    crate::phrase_matcher::Segment::Text(_)
                )
            {
                assert_eq!(convert(word), *kana, "dictionary miss for '{}'", word);
            }
        }
    }

    #[test]
    fn test_kana_input_is_idempotent() {
        for text in ["ハロー", "ガラ ゴー", "アイ・ドンノ"] {
            assert_eq!(convert(text), text);
            assert_eq!(convert(&convert(text)), convert(text));
        }
    }

    #[test]
    fn test_deterministic() {
        let input = "I gotta go to the station at nine";
        assert_eq!(convert(input), convert(input));
    }

    #[test]
    fn test_phrase_kana_contiguous() {
        let output = convert("well i don't know today");
        assert!(output.contains("アイドンノ"), "got '{}'", output);
    }

    #[test]
    fn test_no_latin_in_output() {
        for input in ["hello", "zyxxyz qwerty", "The quick brown fox!", "über cool"] {
            let output = convert(input);
            assert!(
                !output.chars().any(|c| c.is_ascii_alphabetic()),
                "latin left in '{}' -> '{}'",
                input,
                output
            );
        }
    }

    #[test]
    fn test_empty_input_yields_unknown() {
        assert_eq!(convert(""), "？？？");
        assert_eq!(convert("   "), "？？？");
        assert_eq!(convert("...!!!"), "？？？");
    }

    #[test]
    fn test_doubled_transcript_collapsed() {
        assert_eq!(convert("アイドンノアイドンノ"), "アイドンノ");
    }

    #[test]
    fn test_trace_sources() {
        let result = convert_detailed("gotta go ガラ zyx");
        let sources: Vec<TokenSource> = result.trace.iter().map(|t| t.source).collect();
        assert_eq!(
            sources,
            vec![
                TokenSource::Phrase,
                TokenSource::Dictionary,
                TokenSource::Passthrough,
                TokenSource::Rule
            ]
        );
        assert_eq!(result.katakana, "ガラ ゴー ガラ ズヤクス");
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(convert("I want to go"), "アイ ワナ ゴー");
        assert_eq!(convert("thank you very much"), "サンキュー ベリー ムウチ");
    }
}
