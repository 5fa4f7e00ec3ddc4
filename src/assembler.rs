// src/assembler.rs
//
// Final stage: joins resolved tokens and removes the doubled-transcript
// artifact the recognizer occasionally produces. The guard only fires on an
// even-length result of at least `min_len` characters whose halves match
// exactly, so legitimately short repeated syllables survive.

/// Join kana pieces with single spaces and apply the repetition guard.
pub fn assemble(parts: &[String], min_len: usize) -> String {
    let joined = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    collapse_doubled(&joined, min_len)
}

/// Collapse `XX` to `X` when the string is one exact doubling.
fn collapse_doubled(text: &str, min_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len >= min_len && len % 2 == 0 {
        let half = len / 2;
        if chars[..half] == chars[half..] {
            log::debug!("[Assembler] collapsed doubled output ({} chars)", len);
            return chars[..half].iter().collect::<String>().trim().to_string();
        }
    }
    text.to_string()
}
