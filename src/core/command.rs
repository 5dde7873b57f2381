//! Intent tags, units, and the structured command produced per turn.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot key for the primary numeric value.
pub const SLOT_VALUE: &str = "value";

/// Slot key for the unit bound to the primary numeric value.
pub const SLOT_UNIT: &str = "unit";

/// Slot key for a recognized technique name.
pub const SLOT_TECHNIQUE: &str = "technique";

/// Slot key for a recognized difficulty level.
pub const SLOT_DIFFICULTY: &str = "difficulty";

/// A recognized user goal driving one turn of the dialogue.
///
/// Matching resolves to exactly one variant; unmatched input yields
/// [`Intent::Unknown`]. Dispatch on intents is always an exhaustive `match`
/// so that adding a variant surfaces every site that must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting or wake word.
    Greeting,

    /// Set or discuss a training goal.
    SetGoal,

    /// Begin a workout session.
    StartWorkout,

    /// Finish the current workout session.
    EndWorkout,

    /// Record a number of sets.
    LogSets,

    /// Record a number of repetitions.
    LogReps,

    /// Record a workout duration.
    LogDuration,

    /// Ask about a technique or form.
    AskTechnique,

    /// Ask to make sessions easier or harder.
    AdjustDifficulty,

    /// Ask for a progress summary.
    AskProgress,

    /// Express thanks.
    Thanks,

    /// No rule matched.
    Unknown,
}

impl Intent {
    /// Returns `true` for [`Intent::Unknown`].
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Unit bound to the primary numeric slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Exercise sets.
    Sets,

    /// Repetitions.
    Reps,

    /// Minutes.
    Minutes,

    /// Seconds.
    Seconds,

    /// Hours.
    Hours,
}

impl Unit {
    /// Canonical slot-map value for this unit.
    #[must_use]
    pub const fn slot_value(self) -> &'static str {
        match self {
            Self::Sets => "sets",
            Self::Reps => "reps",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Hours => "hours",
        }
    }
}

/// The structured result of interpreting one utterance.
///
/// A command pairs the matched intent with the original raw text and the
/// extracted slot map. An absent slot is an absent key, never an empty
/// string or other sentinel.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::{Command, Intent, SLOT_VALUE};
/// use std::collections::HashMap;
///
/// let mut slots = HashMap::new();
/// slots.insert(SLOT_VALUE.to_string(), "3".to_string());
/// let command = Command::new(Intent::LogSets, "3세트 기록해줘", slots);
///
/// assert_eq!(command.slot(SLOT_VALUE), Some("3"));
/// assert_eq!(command.slot("unit"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The matched intent.
    pub intent: Intent,

    /// Original raw utterance text.
    pub raw_text: String,

    /// Extracted slots; a missing key means the slot was not found.
    pub slots: HashMap<String, String>,
}

impl Command {
    /// Creates a command.
    #[must_use]
    pub fn new(intent: Intent, raw_text: impl Into<String>, slots: HashMap<String, String>) -> Self {
        Self {
            intent,
            raw_text: raw_text.into(),
            slots,
        }
    }

    /// Returns the value of a slot, if present.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Returns `true` when the slot is present.
    #[must_use]
    pub fn has_slot(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}
