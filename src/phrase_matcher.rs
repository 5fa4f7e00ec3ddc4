// src/phrase_matcher.rs
//
// Longest-match-first substitution of multi-word idioms and contractions.
// Matches are only taken at whitespace boundaries, and replaced text is
// carried as an opaque kana segment so later word-level processing can
// neither re-split nor re-merge it.

use crate::tables::SORTED_PHRASE_RULES;

/// A piece of the input after phrase substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Untouched normalized text, still subject to word-level resolution.
    Text(String),
    /// Output of a phrase rule. `pattern` is the matched source text.
    Phrase { pattern: String, kana: String },
}

/// Apply the phrase rule table to normalized text.
///
/// Each rule is applied longest pattern first over the remaining text
/// segments only, so a shorter rule can never pre-empt a longer one and a
/// rule can never match inside an earlier rule's kana output.
pub fn apply(text: &str) -> Vec<Segment> {
    let mut segments = vec![Segment::Text(text.to_string())];

    for (pattern, kana) in SORTED_PHRASE_RULES.iter() {
        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Phrase { .. } => next.push(segment),
                Segment::Text(body) => split_on_pattern(&body, pattern, kana, &mut next),
            }
        }
        segments = next;
    }

    segments
}

/// Split one text segment on boundary-safe occurrences of `pattern`.
fn split_on_pattern(body: &str, pattern: &str, kana: &str, out: &mut Vec<Segment>) {
    let mut rest = body;

    while let Some(start) = find_at_boundary(rest, pattern) {
        let before = rest[..start].trim();
        if !before.is_empty() {
            out.push(Segment::Text(before.to_string()));
        }
        out.push(Segment::Phrase {
            pattern: pattern.to_string(),
            kana: kana.to_string(),
        });
        log::debug!("[PhraseMatcher] '{}' -> '{}'", pattern, kana);
        rest = &rest[start + pattern.len()..];
    }
    let tail = rest.trim();
    if !tail.is_empty() {
        out.push(Segment::Text(tail.to_string()));
    }
}

/// Find the first occurrence of `pattern` in `text` that sits on whitespace
/// boundaries on both sides (or the ends of the segment).
fn find_at_boundary(text: &str, pattern: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(relative) = text[search_from..].find(pattern) {
        let start = search_from + relative;
        let end = start + pattern.len();
        let left_ok = start == 0
            || text[..start].chars().next_back().map_or(true, char::is_whitespace);
        let right_ok = end == text.len()
            || text[end..].chars().next().map_or(true, char::is_whitespace);
        if left_ok && right_ok {
            return Some(start);
        }
        // Advance past this char to keep searching
        search_from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
