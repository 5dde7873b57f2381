//! Fixed keyword tables for units and named entities.
//!
//! Tables are immutable and injected wherever keyword lookup is needed.
//! Detection returns the match that occurs earliest in the text; ties fall
//! back to table order.

use crate::core::Unit;

/// Unit keywords, Korean counters alongside English words.
const UNIT_KEYWORDS: &[(&str, Unit)] = &[
    ("세트", Unit::Sets),
    ("sets", Unit::Sets),
    ("set", Unit::Sets),
    ("회", Unit::Reps),
    ("개", Unit::Reps),
    ("번", Unit::Reps),
    ("reps", Unit::Reps),
    ("rep", Unit::Reps),
    ("분", Unit::Minutes),
    ("minutes", Unit::Minutes),
    ("minute", Unit::Minutes),
    ("초", Unit::Seconds),
    ("seconds", Unit::Seconds),
    ("second", Unit::Seconds),
    ("시간", Unit::Hours),
    ("hours", Unit::Hours),
    ("hour", Unit::Hours),
];

/// Technique keywords mapped to their canonical slot values.
const TECHNIQUE_KEYWORDS: &[(&str, &str)] = &[
    ("백핸드", "backhand"),
    ("포핸드", "forehand"),
    ("서브", "serve"),
    ("발리", "volley"),
    ("드롭", "drop"),
    ("backhand", "backhand"),
    ("forehand", "forehand"),
    ("serve", "serve"),
    ("volley", "volley"),
    ("drop", "drop"),
];

/// Difficulty keywords mapped to their canonical slot values.
const DIFFICULTY_KEYWORDS: &[(&str, &str)] = &[
    ("쉽게", "easy"),
    ("쉬운", "easy"),
    ("easy", "easy"),
    ("보통", "medium"),
    ("중간", "medium"),
    ("medium", "medium"),
    ("어렵게", "hard"),
    ("어려운", "hard"),
    ("hard", "hard"),
];

/// Immutable keyword lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    units: &'static [(&'static str, Unit)],
    techniques: &'static [(&'static str, &'static str)],
    difficulties: &'static [(&'static str, &'static str)],
}

impl KeywordTable {
    /// Creates the table with the built-in keyword sets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            units: UNIT_KEYWORDS,
            techniques: TECHNIQUE_KEYWORDS,
            difficulties: DIFFICULTY_KEYWORDS,
        }
    }

    /// Returns the unit whose keyword occurs earliest in the text.
    #[must_use]
    pub fn detect_unit(&self, text: &str) -> Option<Unit> {
        earliest(self.units, text)
    }

    /// Returns the canonical technique named earliest in the text.
    #[must_use]
    pub fn detect_technique(&self, text: &str) -> Option<&'static str> {
        earliest(self.techniques, text)
    }

    /// Returns the canonical difficulty named earliest in the text.
    #[must_use]
    pub fn detect_difficulty(&self, text: &str) -> Option<&'static str> {
        earliest(self.difficulties, text)
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// First table entry by text position, then by table order.
fn earliest<T: Copy>(table: &'static [(&'static str, T)], text: &str) -> Option<T> {
    table
        .iter()
        .filter_map(|&(keyword, value)| text.find(keyword).map(|pos| (pos, value)))
        .min_by_key(|&(pos, _)| pos)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_unit_korean() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_unit("3세트 기록해줘"), Some(Unit::Sets));
        assert_eq!(table.detect_unit("30분 운동했어"), Some(Unit::Minutes));
        assert_eq!(table.detect_unit("10회 했어"), Some(Unit::Reps));
        assert_eq!(table.detect_unit("1시간 했어"), Some(Unit::Hours));
        assert_eq!(table.detect_unit("40초 버텼어"), Some(Unit::Seconds));
    }

    #[test]
    fn test_detect_unit_english() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_unit("did 3 sets"), Some(Unit::Sets));
        assert_eq!(table.detect_unit("ran for 30 minutes"), Some(Unit::Minutes));
    }

    #[test]
    fn test_detect_unit_earliest_wins() {
        let table = KeywordTable::new();
        // 분 appears before 세트.
        assert_eq!(table.detect_unit("30분 동안 3세트"), Some(Unit::Minutes));
    }

    #[test]
    fn test_detect_unit_absent() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_unit("안녕하세요"), None);
    }

    #[test]
    fn test_detect_technique() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_technique("백핸드 자세"), Some("backhand"));
        assert_eq!(table.detect_technique("my serve is weak"), Some("serve"));
        assert_eq!(table.detect_technique("오늘 컨디션 좋다"), None);
    }

    #[test]
    fn test_detect_difficulty() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_difficulty("좀 쉽게 해줘"), Some("easy"));
        assert_eq!(table.detect_difficulty("make it hard"), Some("hard"));
        assert_eq!(table.detect_difficulty("보통으로"), Some("medium"));
        assert_eq!(table.detect_difficulty("그냥 해줘"), None);
    }

    #[test]
    fn test_korean_alias_maps_to_canonical_value() {
        let table = KeywordTable::new();
        assert_eq!(table.detect_technique("발리 연습하고 싶어"), Some("volley"));
        assert_eq!(table.detect_difficulty("어렵게 부탁해"), Some("hard"));
    }
}
