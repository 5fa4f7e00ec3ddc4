// src/transcriber.rs
//
// Speech recognition is an external collaborator behind a trait. The pipeline
// owns an injected handle; a process-wide shared handle is available for
// callers that want exactly one, guarded by single initialization.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::SETTINGS;
use crate::converter::{self, ConversionResult};
use crate::kana;
use crate::scorer::{self, AcceptabilityResult};

/// What the recognizer produced for one utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub detected_language: Option<String>,
}

/// Failures of the recognition collaborator. An empty transcript is NOT an
/// error; it is a well-defined state the pipeline reports via `empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    NoAudio,
    Collaborator(String),
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionError::NoAudio => write!(f, "No audio input available"),
            RecognitionError::Collaborator(msg) => write!(f, "Recognition failed: {}", msg),
        }
    }
}

impl std::error::Error for RecognitionError {}

/// Speech-to-text collaborator contract.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> Result<Transcription, RecognitionError>;
}

/// One segmented piece of Japanese text with its phonetic reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentReading {
    pub surface: String,
    pub reading: String,
}

/// Reading-lookup collaborator for Japanese recognizer output.
pub trait ReadingSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<SegmentReading>, String>;
}

/// Katakana rendering of Japanese text via a segmenter's readings.
///
/// Only the readings are consumed; hiragana shifts to katakana and segments
/// with no usable reading degrade to the placeholder.
pub fn japanese_to_katakana(
    segmenter: &dyn ReadingSegmenter,
    text: &str,
) -> Result<String, String> {
    let segments = segmenter.segment(text)?;
    let mut out = String::new();
    for segment in segments {
        let cleaned = kana::extract_kana(&segment.reading);
        if cleaned == kana::UNKNOWN {
            log::debug!("[Transcriber] no reading for '{}'", segment.surface);
            out.push_str(kana::PLACEHOLDER);
        } else {
            out.push_str(&cleaned);
        }
    }
    if out.is_empty() {
        Ok(kana::UNKNOWN.to_string())
    } else {
        Ok(out)
    }
}

/// Conversion of one recognized utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronunciationAnalysis {
    pub transcription: Transcription,
    pub conversion: ConversionResult,
    /// True when the recognizer returned no words at all.
    pub empty: bool,
}

/// Outcome of one practice attempt against a reference phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeOutcome {
    pub analysis: PronunciationAnalysis,
    pub score: AcceptabilityResult,
}

/// Recognition plus conversion plus scoring around an injected collaborator.
pub struct PronunciationPipeline {
    transcriber: Arc<dyn Transcriber>,
}

impl PronunciationPipeline {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }

    /// Transcribe the audio and convert the transcript to katakana.
    pub fn analyze(&self, audio: &Path) -> Result<PronunciationAnalysis, RecognitionError> {
        let transcription = self.transcriber.transcribe(audio)?;
        let empty = transcription.text.trim().is_empty();
        if empty {
            log::info!("[Pipeline] recognizer returned an empty transcript");
        }
        let conversion = converter::convert_detailed(&transcription.text);
        Ok(PronunciationAnalysis {
            transcription,
            conversion,
            empty,
        })
    }

    /// Analyze the audio and score it against a reference phrase.
    pub fn practice(
        &self,
        audio: &Path,
        reference: &str,
    ) -> Result<PracticeOutcome, RecognitionError> {
        let analysis = self.analyze(audio)?;
        let score = scorer::score_with_threshold(
            reference,
            &analysis.transcription.text,
            SETTINGS.acceptance_threshold,
        );
        Ok(PracticeOutcome { analysis, score })
    }
}

static SHARED_TRANSCRIBER: OnceCell<Arc<dyn Transcriber>> = OnceCell::new();

/// Install the process-wide recognizer handle. Fails on a second call.
pub fn init_shared_transcriber(transcriber: Arc<dyn Transcriber>) -> Result<(), String> {
    SHARED_TRANSCRIBER
        .set(transcriber)
        .map_err(|_| "Shared transcriber already initialized".to_string())
}

/// The process-wide recognizer handle, if one was installed.
pub fn shared_transcriber() -> Option<Arc<dyn Transcriber>> {
    SHARED_TRANSCRIBER.get().cloned()
}
