//! Utterance normalization.
//!
//! Normalization lowercases, removes sentence punctuation, collapses
//! whitespace, and strips trailing Korean grammatical particles from each
//! word. The result is the canonical form that rule patterns and keyword
//! tables are written against.

/// Korean grammatical particles stripped from word ends, longest first so
/// that 에서/으로 win over their single-character suffixes.
pub const PARTICLES: &[&str] = &[
    "에서", "으로", "을", "를", "이", "가", "은", "는", "에", "로",
];

/// Sentence punctuation removed wholesale.
const PUNCTUATION: &[char] = &['!', '.', ',', '?'];

/// Normalizes raw utterance text.
///
/// Lowercases, removes `! . , ?`, collapses whitespace runs to single
/// spaces, trims, and strips grammatical particles from the end of each
/// word. Stripping repeats until no particle suffix remains but never
/// empties a word.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)` for all `x`.
///
/// # Examples
///
/// ```
/// use coach_nlu::text::normalize;
///
/// assert_eq!(normalize("  Hello,   World!  "), "hello world");
/// assert_eq!(normalize("3세트를 기록해줘"), "3세트 기록해줘");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !PUNCTUATION.contains(c)).collect();

    stripped
        .split_whitespace()
        .map(strip_particles)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips particle suffixes from one word, repeating until stable.
fn strip_particles(word: &str) -> &str {
    let mut stem = word;
    loop {
        let mut stripped = false;
        for particle in PARTICLES {
            if let Some(rest) = stem.strip_suffix(particle) {
                if !rest.is_empty() {
                    stem = rest;
                    stripped = true;
                    break;
                }
            }
        }
        if !stripped {
            return stem;
        }
    }
}
