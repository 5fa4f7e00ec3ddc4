// src/normalizer.rs
//
// First stage of the conversion pipeline. Lowercases, strips punctuation
// (keeping apostrophes inside words, so "don't" survives) and collapses
// whitespace. Idempotent on already-normalized input.

/// Normalize raw recognizer output for phrase and word matching.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut cleaned = String::with_capacity(lowered.len());

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() || c == '・' {
            cleaned.push(c);
        } else if c == '\'' {
            // Apostrophes only survive between word characters
            let prev_is_word = i > 0 && chars[i - 1].is_alphanumeric();
            let next_is_word = chars.get(i + 1).map_or(false, |n| n.is_alphanumeric());
            if prev_is_word && next_is_word {
                cleaned.push(c);
            }
        } else {
            // Punctuation and whitespace both become token separators
            cleaned.push(' ');
        }
    }

    let mut collapsed = String::with_capacity(cleaned.len());
    let mut last_was_space = true;
    for c in cleaned.chars() {
        if c == ' ' {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }
    collapsed.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(normalize("Got To  Go"), "got to go");
        assert_eq!(normalize("  Hello   World  "), "hello world");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(normalize("Hello, world!"), "hello world");
        assert_eq!(normalize("well...maybe"), "well maybe");
        assert_eq!(normalize("(hello)"), "hello");
    }

    #[test]
    fn test_apostrophes_inside_words_preserved() {
        assert_eq!(normalize("I don't know."), "i don't know");
        assert_eq!(normalize("'quoted'"), "quoted");
        assert_eq!(normalize("rock 'n roll"), "rock n roll");
    }

    #[test]
    fn test_kana_untouched() {
        assert_eq!(normalize("ハロー ワールド"), "ハロー ワールド");
        assert_eq!(normalize("アイ・ドンノ"), "アイ・ドンノ");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Don't STOP, believing!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t \n"), "");
    }
}
