//! Conversation states and the intent-to-state transition.

use crate::core::Intent;
use serde::{Deserialize, Serialize};

/// The current stage of the guided multi-turn exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Exchanging greetings.
    Greeting,

    /// Discussing a training goal.
    GoalSetting,

    /// Planning or logging a workout.
    WorkoutPlanning,

    /// Discussing a technique.
    TechniqueDiscussion,

    /// Reviewing progress.
    ProgressReview,

    /// Initial and fallback state.
    #[default]
    General,
}

impl ConversationState {
    /// Pure transition: maps a recognized intent to its state.
    ///
    /// Memoryless — no transition depends on anything but the intent;
    /// unmapped intents fall back to [`ConversationState::General`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coach_nlu::core::Intent;
    /// use coach_nlu::dialogue::ConversationState;
    ///
    /// assert_eq!(
    ///     ConversationState::for_intent(Intent::Greeting),
    ///     ConversationState::Greeting,
    /// );
    /// assert_eq!(
    ///     ConversationState::for_intent(Intent::Unknown),
    ///     ConversationState::General,
    /// );
    /// ```
    #[must_use]
    pub const fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::Greeting => Self::Greeting,
            Intent::SetGoal => Self::GoalSetting,
            Intent::StartWorkout
            | Intent::EndWorkout
            | Intent::LogSets
            | Intent::LogReps
            | Intent::LogDuration => Self::WorkoutPlanning,
            Intent::AskTechnique | Intent::AdjustDifficulty => Self::TechniqueDiscussion,
            Intent::AskProgress => Self::ProgressReview,
            Intent::Thanks | Intent::Unknown => Self::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general() {
        assert_eq!(ConversationState::default(), ConversationState::General);
    }

    #[test]
    fn test_every_intent_maps_to_one_state() {
        let cases = [
            (Intent::Greeting, ConversationState::Greeting),
            (Intent::SetGoal, ConversationState::GoalSetting),
            (Intent::StartWorkout, ConversationState::WorkoutPlanning),
            (Intent::EndWorkout, ConversationState::WorkoutPlanning),
            (Intent::LogSets, ConversationState::WorkoutPlanning),
            (Intent::LogReps, ConversationState::WorkoutPlanning),
            (Intent::LogDuration, ConversationState::WorkoutPlanning),
            (Intent::AskTechnique, ConversationState::TechniqueDiscussion),
            (Intent::AdjustDifficulty, ConversationState::TechniqueDiscussion),
            (Intent::AskProgress, ConversationState::ProgressReview),
            (Intent::Thanks, ConversationState::General),
            (Intent::Unknown, ConversationState::General),
        ];
        for (intent, expected) in cases {
            assert_eq!(ConversationState::for_intent(intent), expected);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConversationState::WorkoutPlanning);
        assert!(json.is_ok());
        #[allow(clippy::unwrap_used)]
        let json = json.unwrap();
        assert_eq!(json, "\"workout_planning\"");
    }
}
