//! Language detection.
//!
//! Classifies an utterance by the ratio of Hangul letters to ASCII letters.
//! Total over all strings; every input maps to one of the four
//! [`Language`] variants.

use crate::core::Language;

/// Hangul dominance threshold above which text is classified as Korean.
const KOREAN_THRESHOLD: f64 = 0.8;

/// Hangul dominance threshold below which text is classified as English.
const ENGLISH_THRESHOLD: f64 = 0.2;

/// Detects the language of raw utterance text.
///
/// Counts letters in the Hangul syllable, jamo, and compatibility-jamo
/// ranges against ASCII letters. A Hangul share above 0.8 is Korean, below
/// 0.2 is English, anything between is mixed. Text without a single letter
/// is unknown.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::Language;
/// use coach_nlu::text::detect_language;
///
/// assert_eq!(detect_language("안녕하세요"), Language::Korean);
/// assert_eq!(detect_language("hello there"), Language::English);
/// assert_eq!(detect_language("오늘 session 시작"), Language::Mixed);
/// assert_eq!(detect_language("123 !!"), Language::Unknown);
/// ```
#[must_use]
pub fn detect_language(raw: &str) -> Language {
    let mut korean = 0usize;
    let mut english = 0usize;

    for c in raw.chars() {
        if is_hangul(c) {
            korean += 1;
        } else if c.is_ascii_alphabetic() {
            english += 1;
        }
    }

    let total = korean + english;
    if total == 0 {
        return Language::Unknown;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = korean as f64 / total as f64;
    if ratio > KOREAN_THRESHOLD {
        Language::Korean
    } else if ratio < ENGLISH_THRESHOLD {
        Language::English
    } else {
        Language::Mixed
    }
}

/// Returns `true` for letters in the Hangul syllable block, jamo block, or
/// compatibility-jamo block.
const fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}
