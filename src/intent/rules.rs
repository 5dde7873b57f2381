//! The intent rule table.
//!
//! Rules are `(pattern, intent)` pairs evaluated in declaration order
//! against normalized text. The table is built once at startup, validated,
//! and injected into the engine — there is no process-wide mutable state.

use crate::core::Intent;
use crate::error::{Error, Result};
use tracing::trace;

/// One classification rule: a substring pattern and the intent it signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pattern: String,
    intent: Intent,
}

impl IntentRule {
    /// Creates a rule. Patterns are matched against normalized text, so
    /// they should themselves be lowercase with no stripped particles.
    #[must_use]
    pub fn new(pattern: impl Into<String>, intent: Intent) -> Self {
        Self {
            pattern: pattern.into(),
            intent,
        }
    }

    /// Returns the rule's pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the rule's intent.
    #[must_use]
    pub const fn intent(&self) -> Intent {
        self.intent
    }
}

/// Declaration-ordered, immutable intent rule table.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::Intent;
/// use coach_nlu::intent::RuleTable;
///
/// let table = RuleTable::with_defaults();
/// assert_eq!(table.match_intent("안녕하세요"), Intent::Greeting);
/// assert_eq!(table.match_intent("무슨 말인지 모르겠다"), Intent::Unknown);
/// ```
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<IntentRule>,
}

impl RuleTable {
    /// Builds a table from caller-supplied rules, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a rule has a blank pattern or maps to
    /// [`Intent::Unknown`] (which is reserved for the no-match result).
    pub fn new(rules: Vec<IntentRule>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.pattern.trim().is_empty() {
                return Err(Error::config(format!("rule {index} has a blank pattern")));
            }
            if rule.intent.is_unknown() {
                return Err(Error::config(format!(
                    "rule {index} maps to the reserved Unknown intent"
                )));
            }
        }
        Ok(Self { rules })
    }

    /// Builds the default bilingual rule table.
    ///
    /// Greeting rules are declared first; logging rules precede the
    /// broader session-control rules so that an utterance like
    /// "3세트 시작" classifies as a log entry.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Returns the intent of the first rule whose pattern occurs anywhere
    /// in the text, or [`Intent::Unknown`] if none does.
    ///
    /// Deterministic: identical input and table always yield the same
    /// intent.
    #[must_use]
    pub fn match_intent(&self, text: &str) -> Intent {
        for rule in &self.rules {
            if text.contains(&rule.pattern) {
                trace!(pattern = %rule.pattern, intent = ?rule.intent, "rule matched");
                return rule.intent;
            }
        }
        Intent::Unknown
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, IntentRule> {
        self.rules.iter()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a IntentRule;
    type IntoIter = std::slice::Iter<'a, IntentRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// The built-in rule set. Order is load-bearing.
fn default_rules() -> Vec<IntentRule> {
    use Intent::{
        AdjustDifficulty, AskProgress, AskTechnique, EndWorkout, Greeting, LogDuration, LogReps,
        LogSets, SetGoal, StartWorkout, Thanks,
    };

    [
        // Greetings and wake words come first.
        ("안녕", Greeting),
        ("반가워", Greeting),
        ("hello", Greeting),
        ("good morning", Greeting),
        ("hi coach", Greeting),
        // Goals.
        ("목표", SetGoal),
        ("goal", SetGoal),
        // Logging rules precede session control: an utterance naming an
        // amount is a log entry even when it also says "시작" or "start".
        ("세트", LogSets),
        ("sets", LogSets),
        ("set", LogSets),
        ("분", LogDuration),
        ("시간", LogDuration),
        ("초", LogDuration),
        ("minute", LogDuration),
        ("hour", LogDuration),
        ("second", LogDuration),
        ("회", LogReps),
        ("개", LogReps),
        ("번", LogReps),
        ("rep", LogReps),
        // Technique and difficulty.
        ("백핸드", AskTechnique),
        ("포핸드", AskTechnique),
        ("서브", AskTechnique),
        ("발리", AskTechnique),
        ("드롭", AskTechnique),
        ("자세", AskTechnique),
        ("폼", AskTechnique),
        ("backhand", AskTechnique),
        ("forehand", AskTechnique),
        ("serve", AskTechnique),
        ("volley", AskTechnique),
        ("drop", AskTechnique),
        ("technique", AskTechnique),
        ("form", AskTechnique),
        ("쉽게", AdjustDifficulty),
        ("어렵게", AdjustDifficulty),
        ("난이도", AdjustDifficulty),
        ("easier", AdjustDifficulty),
        ("harder", AdjustDifficulty),
        ("difficulty", AdjustDifficulty),
        // Progress review.
        ("진행", AskProgress),
        ("통계", AskProgress),
        ("얼마나", AskProgress),
        ("기록 보여", AskProgress),
        ("progress", AskProgress),
        ("stats", AskProgress),
        ("how much", AskProgress),
        // Session control.
        ("운동 시작", StartWorkout),
        ("시작", StartWorkout),
        ("start", StartWorkout),
        ("begin", StartWorkout),
        ("운동 끝", EndWorkout),
        ("끝", EndWorkout),
        ("그만", EndWorkout),
        ("종료", EndWorkout),
        ("finish", EndWorkout),
        ("stop", EndWorkout),
        ("done", EndWorkout),
        // Pleasantries.
        ("고마워", Thanks),
        ("감사", Thanks),
        ("thanks", Thanks),
        ("thank you", Thanks),
    ]
    .into_iter()
    .map(|(pattern, intent)| IntentRule::new(pattern, intent))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("안녕하세요", Intent::Greeting; "korean greeting")]
    #[test_case("hello coach", Intent::Greeting; "english greeting")]
    #[test_case("3세트 기록해줘", Intent::LogSets; "log sets")]
    #[test_case("30분 운동했어", Intent::LogDuration; "log duration")]
    #[test_case("10회 했다", Intent::LogReps; "log reps")]
    #[test_case("목표 정하자", Intent::SetGoal; "set goal korean")]
    #[test_case("my goal is level five", Intent::SetGoal; "set goal english")]
    #[test_case("백핸드 알려줘", Intent::AskTechnique; "technique korean")]
    #[test_case("how do i hit a volley", Intent::AskTechnique; "technique english")]
    #[test_case("좀 쉽게 해줘", Intent::AdjustDifficulty; "difficulty korean")]
    #[test_case("make it harder", Intent::AdjustDifficulty; "difficulty english")]
    #[test_case("진행 상황 알려줘", Intent::AskProgress; "progress korean")]
    #[test_case("운동 시작할게", Intent::StartWorkout; "start workout")]
    #[test_case("오늘은 그만", Intent::EndWorkout; "end workout")]
    #[test_case("고마워", Intent::Thanks; "thanks")]
    #[test_case("뭐라고 해야할지", Intent::Unknown; "no rule")]
    #[test_case("", Intent::Unknown; "empty text")]
    fn test_default_table(text: &str, expected: Intent) {
        assert_eq!(RuleTable::with_defaults().match_intent(text), expected);
    }

    #[test]
    fn test_declaration_order_wins() {
        // "3세트 시작" holds both a LogSets and a StartWorkout pattern; the
        // earlier rule takes precedence.
        let table = RuleTable::with_defaults();
        assert_eq!(table.match_intent("3세트 시작"), Intent::LogSets);
    }

    #[test]
    fn test_deterministic() {
        let table = RuleTable::with_defaults();
        let first = table.match_intent("운동 시작하고 싶어");
        for _ in 0..5 {
            assert_eq!(table.match_intent("운동 시작하고 싶어"), first);
        }
    }

    #[test]
    fn test_custom_table_order() {
        #[allow(clippy::unwrap_used)]
        let table = RuleTable::new(vec![
            IntentRule::new("끝", Intent::EndWorkout),
            IntentRule::new("운동", Intent::StartWorkout),
        ])
        .unwrap();

        assert_eq!(table.match_intent("운동 끝"), Intent::EndWorkout);
        assert_eq!(table.match_intent("운동 좀 하자"), Intent::StartWorkout);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_blank_pattern_rejected() {
        let result = RuleTable::new(vec![IntentRule::new("  ", Intent::Greeting)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_intent_rejected() {
        let result = RuleTable::new(vec![IntentRule::new("huh", Intent::Unknown)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_accessors() {
        let rule = IntentRule::new("세트", Intent::LogSets);
        assert_eq!(rule.pattern(), "세트");
        assert_eq!(rule.intent(), Intent::LogSets);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let table = RuleTable::with_defaults();
        let first = table.iter().next();
        assert!(first.is_some_and(|rule| rule.intent() == Intent::Greeting));
    }
}
