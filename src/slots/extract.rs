//! Intent-keyed slot extraction.

use crate::core::{
    Intent, NormalizedInput, SLOT_DIFFICULTY, SLOT_TECHNIQUE, SLOT_UNIT, SLOT_VALUE,
};
use crate::slots::KeywordTable;
use std::collections::HashMap;

/// Extracts the slot map for a matched intent.
///
/// Numeric intents bind the first extracted number to `value` and the
/// detected unit keyword to `unit`. Technique and difficulty entities are
/// extracted for every intent, so a greeting that happens to name a
/// technique still carries the `technique` slot. Absent slots are absent
/// keys.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::{Intent, Language, NormalizedInput, SLOT_VALUE, Unit};
/// use coach_nlu::slots::{KeywordTable, extract_slots};
///
/// let input = NormalizedInput::new(
///     "3세트 기록해줘".to_string(),
///     Language::Korean,
///     vec![3],
///     Some(Unit::Sets),
/// );
/// let slots = extract_slots(Intent::LogSets, &input, &KeywordTable::new());
/// assert_eq!(slots.get(SLOT_VALUE).map(String::as_str), Some("3"));
/// ```
#[must_use]
pub fn extract_slots(
    intent: Intent,
    input: &NormalizedInput,
    keywords: &KeywordTable,
) -> HashMap<String, String> {
    let mut slots = HashMap::new();

    match intent {
        Intent::SetGoal
        | Intent::LogSets
        | Intent::LogReps
        | Intent::LogDuration => {
            if let Some(number) = input.first_number() {
                slots.insert(SLOT_VALUE.to_string(), number.to_string());
            }
            if let Some(unit) = input.unit {
                slots.insert(SLOT_UNIT.to_string(), unit.slot_value().to_string());
            }
        }
        Intent::Greeting
        | Intent::StartWorkout
        | Intent::EndWorkout
        | Intent::AskTechnique
        | Intent::AdjustDifficulty
        | Intent::AskProgress
        | Intent::Thanks
        | Intent::Unknown => {}
    }

    // Entity extraction runs regardless of the matched intent.
    if let Some(technique) = keywords.detect_technique(&input.text) {
        slots.insert(SLOT_TECHNIQUE.to_string(), technique.to_string());
    }
    if let Some(difficulty) = keywords.detect_difficulty(&input.text) {
        slots.insert(SLOT_DIFFICULTY.to_string(), difficulty.to_string());
    }

    slots
}
