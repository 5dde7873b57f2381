//! Utterance and normalized-input representations.
//!
//! An [`Utterance`] is one turn of raw user input; a [`NormalizedInput`] is
//! the same turn after normalization, language detection, and numeral
//! extraction have run.

use crate::core::command::Unit;
use serde::{Deserialize, Serialize};

/// Detected language of an utterance.
///
/// Classification is a letter-count heuristic over Hangul vs ASCII letters;
/// see [`crate::text::detect_language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Predominantly Hangul text.
    Korean,

    /// Predominantly ASCII-letter text.
    English,

    /// Neither language dominates.
    Mixed,

    /// The text contains no letters at all.
    Unknown,
}

/// Locale used when composing a reply.
///
/// Replies are rendered in exactly one of two lexicons. For
/// [`Language::Mixed`] and [`Language::Unknown`] input the engine falls back
/// to the caller-configured locale (or the utterance's own hint) rather than
/// consulting any system locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyLocale {
    /// Korean reply templates.
    Korean,

    /// English reply templates.
    English,
}

/// One turn of raw user input.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::{ReplyLocale, Utterance};
///
/// let plain = Utterance::new("3세트 기록해줘");
/// assert!(plain.locale_hint().is_none());
///
/// let hinted = Utterance::with_locale_hint("ok 시작", ReplyLocale::English);
/// assert_eq!(hinted.locale_hint(), Some(ReplyLocale::English));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Raw text as transcribed or typed.
    text: String,

    /// Optional caller-supplied locale hint, used as a tiebreaker when the
    /// detected language is mixed or unknown.
    locale_hint: Option<ReplyLocale>,
}

impl Utterance {
    /// Creates an utterance with no locale hint.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale_hint: None,
        }
    }

    /// Creates an utterance carrying a locale hint.
    #[must_use]
    pub fn with_locale_hint(text: impl Into<String>, hint: ReplyLocale) -> Self {
        Self {
            text: text.into(),
            locale_hint: Some(hint),
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the locale hint, if the caller supplied one.
    #[must_use]
    pub const fn locale_hint(&self) -> Option<ReplyLocale> {
        self.locale_hint
    }

    /// Returns `true` when the text is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for Utterance {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Utterance {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// An utterance after the text pipeline has run.
///
/// Carries the normalized text, the detected language, every number found
/// (in scan order), and the first unit keyword found, ready for intent
/// matching and slot extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// Normalized text (lowercased, particles and punctuation stripped).
    pub text: String,

    /// Detected language of the raw utterance.
    pub language: Language,

    /// Extracted numbers in scan order: Arabic runs, Korean numerals,
    /// English number words.
    pub numbers: Vec<i64>,

    /// First unit keyword found in the normalized text.
    pub unit: Option<Unit>,
}

impl NormalizedInput {
    /// Creates a normalized input.
    #[must_use]
    pub const fn new(
        text: String,
        language: Language,
        numbers: Vec<i64>,
        unit: Option<Unit>,
    ) -> Self {
        Self {
            text,
            language,
            numbers,
            unit,
        }
    }

    /// Returns the first number found, honoring the scan-order convention.
    #[must_use]
    pub fn first_number(&self) -> Option<i64> {
        self.numbers.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_new() {
        let utterance = Utterance::new("hello");
        assert_eq!(utterance.text(), "hello");
        assert!(utterance.locale_hint().is_none());
        assert!(!utterance.is_blank());
    }

    #[test]
    fn test_utterance_blank() {
        assert!(Utterance::new("").is_blank());
        assert!(Utterance::new("   \t ").is_blank());
        assert!(!Utterance::new(" x ").is_blank());
    }

    #[test]
    fn test_utterance_from_str() {
        let utterance: Utterance = "안녕하세요".into();
        assert_eq!(utterance.text(), "안녕하세요");
    }

    #[test]
    fn test_utterance_locale_hint() {
        let utterance = Utterance::with_locale_hint("ok go", ReplyLocale::Korean);
        assert_eq!(utterance.locale_hint(), Some(ReplyLocale::Korean));
    }

    #[test]
    fn test_first_number() {
        let input = NormalizedInput::new(
            "3세트 5회".to_string(),
            Language::Korean,
            vec![3, 5],
            None,
        );
        assert_eq!(input.first_number(), Some(3));

        let empty = NormalizedInput::new("세트".to_string(), Language::Korean, vec![], None);
        assert_eq!(empty.first_number(), None);
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::Mixed);
        assert!(json.is_ok());
        #[allow(clippy::unwrap_used)]
        let json = json.unwrap();
        assert_eq!(json, "\"mixed\"");
    }
}
