//! Numeral extraction across Arabic digits and Korean/English number words.
//!
//! [`NumeralLexicon`] produces every number found in normalized text, in a
//! fixed scan order: Arabic digit runs first, then Korean numerals, then
//! English number words. Extraction is total — an unparsable token is
//! omitted, never an error — and nothing is deduplicated, because slot
//! extraction binds the first number found.

use crate::error::Result;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Sino-Korean digits 영..구.
const SINO_DIGITS: &[(&str, i64)] = &[
    ("영", 0),
    ("일", 1),
    ("이", 2),
    ("삼", 3),
    ("사", 4),
    ("오", 5),
    ("육", 6),
    ("칠", 7),
    ("팔", 8),
    ("구", 9),
];

/// Sino-Korean ten, the only compounding multiplier.
const SINO_TEN: &str = "십";

/// Sino-Korean hundred, matched as a bare value.
const SINO_HUNDRED: &str = "백";

/// Native Korean number words 하나..서른.
const NATIVE_WORDS: &[(&str, i64)] = &[
    ("하나", 1),
    ("둘", 2),
    ("셋", 3),
    ("넷", 4),
    ("다섯", 5),
    ("여섯", 6),
    ("일곱", 7),
    ("여덟", 8),
    ("아홉", 9),
    ("열", 10),
    ("스물", 20),
    ("서른", 30),
];

/// English number words zero..fifty, matched as exact words only.
const ENGLISH_WORDS: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
];

/// What a scanned Korean token contributes to composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    /// Single Sino-Korean digit (영..구).
    Digit,

    /// The Sino-Korean ten multiplier (십).
    Ten,

    /// The Sino-Korean hundred (백), a bare value.
    Hundred,

    /// A native Korean word, already a complete value.
    Word,
}

/// One scanned Korean numeral token with its byte position.
///
/// Compounding replaces tokens by position, never by value, so two
/// unrelated tokens with the same numeric value cannot collide.
#[derive(Debug, Clone, Copy)]
struct KoreanToken {
    start: usize,
    len: usize,
    value: i64,
    kind: TokenKind,
}

/// Extracts numbers from normalized text.
///
/// Built once at startup and injected wherever numbers are needed; the
/// digit-run pattern is compiled exactly once.
///
/// # Examples
///
/// ```
/// use coach_nlu::text::NumeralLexicon;
///
/// let lexicon = NumeralLexicon::new().unwrap();
/// assert_eq!(lexicon.extract("3세트 기록해줘"), vec![3]);
/// assert_eq!(lexicon.extract("이십삼 회"), vec![23]);
/// assert_eq!(lexicon.extract("twenty three reps"), vec![20, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct NumeralLexicon {
    digit_runs: Regex,
}

impl NumeralLexicon {
    /// Creates the lexicon, compiling the digit-run scanner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] if the digit-run pattern fails to
    /// compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            digit_runs: Regex::new("[0-9]+")?,
        })
    }

    /// Returns every number found in the text.
    ///
    /// Scan order is fixed: Arabic digit runs, then Korean numerals, then
    /// English number words, each group in text order. Matches are not
    /// deduplicated. Tokens that cannot be parsed (for example a digit run
    /// overflowing `i64`) are silently omitted.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<i64> {
        let mut numbers = self.scan_arabic(text);
        numbers.extend(scan_korean(text).into_iter().map(|(_, value)| value));
        numbers.extend(scan_english(text));
        numbers
    }

    /// Arabic digit runs, in text order.
    fn scan_arabic(&self, text: &str) -> Vec<i64> {
        self.digit_runs
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<i64>().ok())
            .collect()
    }
}

/// Korean numerals as `(start offset, value)` pairs, in text order.
fn scan_korean(text: &str) -> Vec<(usize, i64)> {
    compose_tens(&tokenize_korean(text))
}

/// Scans the text for Korean numeral tokens, native words first so that
/// 일곱 is never read as Sino 일 + 곱.
fn tokenize_korean(text: &str) -> Vec<KoreanToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(&(word, value)) = NATIVE_WORDS
            .iter()
            .filter(|(word, _)| rest.starts_with(word))
            .max_by_key(|(word, _)| word.len())
        {
            tokens.push(KoreanToken {
                start: pos,
                len: word.len(),
                value,
                kind: TokenKind::Word,
            });
            pos += word.len();
            continue;
        }

        if rest.starts_with(SINO_TEN) {
            tokens.push(KoreanToken {
                start: pos,
                len: SINO_TEN.len(),
                value: 10,
                kind: TokenKind::Ten,
            });
            pos += SINO_TEN.len();
            continue;
        }

        if rest.starts_with(SINO_HUNDRED) {
            tokens.push(KoreanToken {
                start: pos,
                len: SINO_HUNDRED.len(),
                value: 100,
                kind: TokenKind::Hundred,
            });
            pos += SINO_HUNDRED.len();
            continue;
        }

        if let Some(&(digit, value)) = SINO_DIGITS.iter().find(|(digit, _)| rest.starts_with(digit))
        {
            tokens.push(KoreanToken {
                start: pos,
                len: digit.len(),
                value,
                kind: TokenKind::Digit,
            });
            pos += digit.len();
            continue;
        }

        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    tokens
}

/// Composes Sino-Korean tens by position.
///
/// For each 십 token, an immediately preceding digit becomes the tens
/// multiplier and an immediately trailing digit the ones component. The
/// composed value replaces its component tokens by position; unconsumed
/// tokens pass through unchanged.
fn compose_tens(tokens: &[KoreanToken]) -> Vec<(usize, i64)> {
    let mut consumed = vec![false; tokens.len()];
    let mut numbers = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Ten {
            continue;
        }

        let mut start = token.start;
        let mut value = 10;

        if i > 0 && !consumed[i - 1] {
            let prev = &tokens[i - 1];
            if prev.kind == TokenKind::Digit
                && (1..=9).contains(&prev.value)
                && prev.start + prev.len == token.start
            {
                value = prev.value * 10;
                start = prev.start;
                consumed[i - 1] = true;
            }
        }

        if let Some(next) = tokens.get(i + 1) {
            if next.kind == TokenKind::Digit
                && (1..=9).contains(&next.value)
                && token.start + token.len == next.start
            {
                value += next.value;
                consumed[i + 1] = true;
            }
        }

        consumed[i] = true;
        numbers.push((start, value));
    }

    for (i, token) in tokens.iter().enumerate() {
        if !consumed[i] {
            numbers.push((token.start, token.value));
        }
    }

    numbers.sort_unstable_by_key(|&(start, _)| start);
    numbers
}

/// English number words matched as exact words, in text order.
fn scan_english(text: &str) -> Vec<i64> {
    text.unicode_words()
        .filter_map(|word| {
            ENGLISH_WORDS
                .iter()
                .find(|(name, _)| *name == word)
                .map(|&(_, value)| value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn lexicon() -> NumeralLexicon {
        #[allow(clippy::unwrap_used)]
        let lexicon = NumeralLexicon::new().unwrap();
        lexicon
    }

    #[test_case("3세트", &[3]; "arabic run")]
    #[test_case("10회 5세트", &[10, 5]; "two arabic runs in text order")]
    #[test_case("삼 세트", &[3]; "bare sino digit")]
    #[test_case("십", &[10]; "bare ten")]
    #[test_case("십오", &[15]; "ten plus ones")]
    #[test_case("이십", &[20]; "digit times ten")]
    #[test_case("이십삼", &[23]; "full tens compound")]
    #[test_case("백", &[100]; "bare hundred")]
    #[test_case("영", &[0]; "sino zero")]
    #[test_case("하나", &[1]; "native one")]
    #[test_case("다섯", &[5]; "native five")]
    #[test_case("스물", &[20]; "native twenty")]
    #[test_case("서른", &[30]; "native thirty")]
    #[test_case("일곱", &[7]; "native seven is not sino one")]
    #[test_case("five sets", &[5]; "english word")]
    #[test_case("twenty three", &[20, 3]; "english words stay uncompounded")]
    #[test_case("fifty", &[50]; "english upper bound")]
    #[test_case("기록해줘", &[]; "no numerals")]
    #[test_case("", &[]; "empty")]
    fn test_extract(text: &str, expected: &[i64]) {
        assert_eq!(lexicon().extract(text), expected);
    }

    #[test]
    fn test_scan_order_arabic_before_korean_before_english() {
        // Arabic runs come first regardless of text position.
        assert_eq!(lexicon().extract("삼 세트 2회 one more"), vec![2, 3, 1]);
    }

    #[test]
    fn test_compound_does_not_collide_with_equal_values() {
        // A standalone 이 (2) earlier in the utterance must survive the
        // 이십삼 composition even though both contain the digit value 2.
        assert_eq!(lexicon().extract("이 분 이십삼 회"), vec![2, 23]);
    }

    #[test]
    fn test_adjacent_compounds() {
        // 이십삼 consumes 삼, so the following 십 stands alone.
        assert_eq!(lexicon().extract("이십삼십"), vec![23, 10]);
    }

    #[test]
    fn test_compound_requires_adjacency() {
        // A space breaks the compound: 이 and 십 are separate numbers.
        assert_eq!(lexicon().extract("이 십"), vec![2, 10]);
    }

    #[test]
    fn test_zero_is_not_a_tens_multiplier() {
        assert_eq!(lexicon().extract("영십"), vec![0, 10]);
    }

    #[test]
    fn test_overflowing_digit_run_is_omitted() {
        let huge = "9".repeat(40);
        assert_eq!(lexicon().extract(&huge), Vec::<i64>::new());
        assert_eq!(lexicon().extract(&format!("{huge} 3세트")), vec![3]);
    }

    #[test]
    fn test_english_requires_exact_word() {
        // "tensions" contains "ten" but is not the word "ten".
        assert_eq!(lexicon().extract("tensions rising"), Vec::<i64>::new());
    }

    #[test]
    fn test_no_deduplication() {
        assert_eq!(lexicon().extract("3세트 3회"), vec![3, 3]);
    }

    #[test]
    fn test_korean_offsets_track_positions() {
        let tokens = tokenize_korean("이십삼");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[1].start, "이".len());
        assert_eq!(tokens[2].start, "이십".len());

        let composed = compose_tens(&tokens);
        assert_eq!(composed, vec![(0, 23)]);
    }
}
