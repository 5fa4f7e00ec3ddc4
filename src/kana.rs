// src/kana.rs
//
// Kana helpers shared by the converter core and the Japanese-output path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for a single unmapped run of Latin letters.
pub const PLACEHOLDER: &str = "？";

/// Marker for input that produced no usable output at all.
pub const UNKNOWN: &str = "？？？";

// Full-width hiragana (U+3041-U+309F) and katakana (U+30A0-U+30FF) blocks.
// The katakana block already covers the prolonged sound mark ー and the
// middle dot ・. Half-width katakana (U+FF65-U+FF9F) is deliberately not
// part of this set.
static KANA_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\u{3041}-\u{309F}\u{30A0}-\u{30FF}]+$").unwrap()
});

static KANA_TOKEN_WITH_HALF_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\u{3041}-\u{309F}\u{30A0}-\u{30FF}\u{FF65}-\u{FF9F}]+$").unwrap()
});

static NON_KANA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\u{3041}-\u{309F}\u{30A0}-\u{30FF}\s]").unwrap()
});

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Whether the token consists solely of kana code points.
pub fn is_kana_token(token: &str) -> bool {
    !token.is_empty() && KANA_TOKEN.is_match(token)
}

/// Variant used when a settings profile opts in to half-width katakana.
pub fn is_kana_token_allowing_half_width(token: &str) -> bool {
    !token.is_empty() && KANA_TOKEN_WITH_HALF_WIDTH.is_match(token)
}

/// Shift hiragana code points into the katakana block (U+3040 block + 0x60).
/// Everything outside the hiragana block passes through unchanged.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{309F}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Strip everything that is not kana, shift hiragana to katakana and collapse
/// whitespace. Yields the unknown marker when nothing survives.
pub fn extract_kana(text: &str) -> String {
    let kept = NON_KANA.replace_all(text, "");
    let shifted = hiragana_to_katakana(&kept);
    let collapsed = MULTI_SPACE.replace_all(shifted.trim(), " ").to_string();
    if collapsed.is_empty() {
        UNKNOWN.to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kana_token_detection() {
        assert!(is_kana_token("ハロー"));
        assert!(is_kana_token("ガラ"));
        assert!(is_kana_token("アイ・ドンノ"));
        assert!(is_kana_token("わかった"));
        assert!(!is_kana_token("hello"));
        assert!(!is_kana_token("ハローworld"));
        assert!(!is_kana_token(""));
        assert!(!is_kana_token("？"));
    }

    #[test]
    fn test_half_width_excluded_by_default() {
        assert!(!is_kana_token("ﾊﾛｰ"));
        assert!(is_kana_token_allowing_half_width("ﾊﾛｰ"));
    }

    #[test]
    fn test_hiragana_shift() {
        assert_eq!(hiragana_to_katakana("わたしは"), "ワタシハ");
        assert_eq!(hiragana_to_katakana("ごーいんぐ"), "ゴーイング");
        // Katakana and everything else is untouched
        assert_eq!(hiragana_to_katakana("ワント abc"), "ワント abc");
    }

    #[test]
    fn test_extract_kana() {
        assert_eq!(extract_kana("私はわんと行く"), "ハワントク");
        assert_eq!(extract_kana("アイ  ワント   ゴー"), "アイ ワント ゴー");
        assert_eq!(extract_kana("hello world"), UNKNOWN);
        assert_eq!(extract_kana(""), UNKNOWN);
    }
}
