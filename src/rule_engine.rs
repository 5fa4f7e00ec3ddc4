// src/rule_engine.rs
//
// Last-resort conversion for words the dictionary does not know. Applies the
// ordered phonetic rule table as global substring replacements, then closes
// with the placeholder policy: one placeholder glyph per remaining run of
// Latin letters, never one per character.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kana::PLACEHOLDER;
use crate::tables::PHONETIC_RULES;

// Runs of Latin-script letters left over after every rule has fired.
// ASCII letters always have a single-letter rule, so in practice this only
// catches accented or otherwise exotic Latin characters.
static LATIN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Latin}+").unwrap());

/// Convert one lowercase token to kana via the phonetic rule table.
///
/// Rules are applied one at a time over the whole buffer, longest pattern
/// first. Replacement output is kana while every pattern is Latin, so a rule
/// can never re-match its own output; the pass terminates in
/// O(rules × token length). Digits and symbols pass through unchanged.
/// The result never contains Latin letters, which makes a second application
/// a no-op.
pub fn convert_token(token: &str) -> String {
    let mut buf = token.to_string();
    for (pattern, kana) in PHONETIC_RULES {
        if buf.contains(pattern) {
            buf = buf.replace(pattern, kana);
        }
    }

    let buf = LATIN_RUN.replace_all(&buf, PLACEHOLDER).to_string();

    if buf.is_empty() {
        log::debug!("[RuleEngine] token '{}' produced nothing, emitting placeholder", token);
        PLACEHOLDER.to_string()
    } else {
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(convert_token("xyz"), "クスヤズ");
        assert_eq!(convert_token("abc"), "アブク");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(convert_token("xyz9"), "クスヤズ9");
        assert_eq!(convert_token("42"), "42");
    }

    #[test]
    fn test_multigraphs_before_singles() {
        // "tion" must fire before t/i/o/n individually
        assert_eq!(convert_token("nation"), "ンアション");
        // "ight" before "gh"/"g"/"h"
        assert_eq!(convert_token("sight"), "スアイト");
        // "ing" fires before "th" gets at the token
        assert_eq!(convert_token("thing"), "スイング");
    }

    #[test]
    fn test_common_digraphs() {
        assert_eq!(convert_token("food"), "フウード");
        assert_eq!(convert_token("rain"), "ルエイン");
        assert_eq!(convert_token("jump"), "ジウンプ");
    }

    #[test]
    fn test_placeholder_per_run_not_per_char() {
        // Accented Latin has no rule; the whole run collapses to one glyph
        assert_eq!(convert_token("øø"), "？");
        assert_eq!(convert_token("øø9øø"), "？9？");
    }

    #[test]
    fn test_empty_yields_placeholder() {
        assert_eq!(convert_token(""), "？");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = convert_token("strange");
        assert_eq!(convert_token(&once), once);
    }

    #[test]
    fn test_no_latin_survives() {
        for word in ["queue", "rhythm", "crwth", "syzygy", "übermensch"] {
            let kana = convert_token(word);
            assert!(
                !kana.chars().any(|c| c.is_ascii_alphabetic()),
                "latin left in {:?} -> {:?}",
                word,
                kana
            );
        }
    }
}
