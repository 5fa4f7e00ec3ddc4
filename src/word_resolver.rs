// src/word_resolver.rs
//
// Per-token resolution: kana passthrough, then dictionary, then the phonetic
// rule engine. Always yields non-empty output for non-empty input.

use serde::{Deserialize, Serialize};

use crate::kana;
use crate::rule_engine;
use crate::tables::WORD_DICT;

/// Where a token's kana came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
    Phrase,
    Dictionary,
    Rule,
    Passthrough,
}

/// Resolve one whitespace-delimited token to kana.
pub fn resolve(token: &str, allow_half_width: bool) -> (String, TokenSource) {
    let already_kana = if allow_half_width {
        kana::is_kana_token_allowing_half_width(token)
    } else {
        kana::is_kana_token(token)
    };
    if already_kana {
        return (token.to_string(), TokenSource::Passthrough);
    }

    if let Some(kana) = WORD_DICT.get(token) {
        log::debug!("[WordResolver] '{}' -> '{}' (dictionary)", token, kana);
        return ((*kana).to_string(), TokenSource::Dictionary);
    }

    let kana = rule_engine::convert_token(token);
    log::debug!("[WordResolver] '{}' -> '{}' (rules)", token, kana);
    (kana, TokenSource::Rule)
}
