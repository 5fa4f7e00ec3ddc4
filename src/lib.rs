// src/lib.rs
//
// Katakana pronunciation engine: deterministic transliteration of recognized
// English text into how it actually sounds, plus acceptability scoring of a
// recognized utterance against a reference phrase.

pub mod assembler;
pub mod config;
pub mod converter;
pub mod kana;
pub mod normalizer;
pub mod phrase_matcher;
pub mod rule_engine;
pub mod scorer;
pub mod tables;
pub mod transcriber;
pub mod word_resolver;

pub use config::EngineSettings;
pub use converter::{convert, convert_detailed, ConversionResult, TokenTrace};
pub use scorer::{score, score_with_threshold, AcceptabilityResult, PronunciationLevel};
pub use transcriber::{
    init_shared_transcriber, shared_transcriber, PracticeOutcome, PronunciationAnalysis,
    PronunciationPipeline, ReadingSegmenter, RecognitionError, SegmentReading, Transcriber,
    Transcription,
};
pub use word_resolver::TokenSource;
