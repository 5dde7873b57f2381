//! Deterministic template selection and substitution.

use crate::core::{
    Command, Intent, ReplyLocale, SLOT_DIFFICULTY, SLOT_TECHNIQUE, SLOT_UNIT, SLOT_VALUE,
};
use crate::reply::ProfileSource;

/// Korean clarification reply for unrecognized or blank input.
const FALLBACK_KO: &str = "죄송해요, 잘 이해하지 못했어요. 다시 한번 말씀해 주시겠어요?";

/// English clarification reply for unrecognized or blank input.
const FALLBACK_EN: &str = "Sorry, I didn't quite get that. Could you rephrase?";

/// Sessions remaining until the next level, at ten sessions per level.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn sessions_needed(current_level: u32, total_sessions: u32) -> i64 {
    (current_level as i64 + 1) * 10 - total_sessions as i64
}

/// Whole weeks needed to complete `sessions` at `weekly_pace` sessions per
/// week, rounded up.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn weeks_needed(sessions: i64, weekly_pace: f64) -> i64 {
    (sessions as f64 / weekly_pace).ceil() as i64
}

/// Derived goal arithmetic for the goal-setting templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEstimate {
    /// Sessions remaining until the next level.
    pub sessions: i64,

    /// Whole weeks those sessions take at the profile's weekly pace.
    pub weeks: i64,
}

impl GoalEstimate {
    /// Computes the estimate from the profile.
    ///
    /// Returns `None` when the profile has no positive weekly pace or the
    /// next level is already reached, in which case the composer falls back
    /// to a template without the estimate.
    #[must_use]
    pub fn compute(profile: &dyn ProfileSource) -> Option<Self> {
        let sessions = sessions_needed(profile.level(), profile.total_sessions());
        let pace = profile.weekly_pace();
        if sessions <= 0 || pace <= 0.0 {
            return None;
        }
        Some(Self {
            sessions,
            weeks: weeks_needed(sessions, pace),
        })
    }
}

/// Deterministic reply composer.
///
/// Selection is keyed by the matched intent, which slots are present, and
/// the reply locale. When a slot the richest template expects is absent the
/// composer falls back to a slot-less variant of the same intent's template;
/// composition never fails.
///
/// # Examples
///
/// ```
/// use coach_nlu::core::{Command, Intent, ReplyLocale, SLOT_VALUE};
/// use coach_nlu::reply::{ReplyComposer, StaticProfile};
/// use std::collections::HashMap;
///
/// let mut slots = HashMap::new();
/// slots.insert(SLOT_VALUE.to_string(), "3".to_string());
/// let command = Command::new(Intent::LogSets, "3세트 기록해줘", slots);
///
/// let reply = ReplyComposer::new().compose(
///     &command,
///     ReplyLocale::Korean,
///     &StaticProfile::default(),
/// );
/// assert!(reply.contains("3세트"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyComposer;

impl ReplyComposer {
    /// Creates a composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the clarification reply used for unrecognized and blank
    /// input.
    #[must_use]
    pub const fn fallback_reply(self, locale: ReplyLocale) -> &'static str {
        match locale {
            ReplyLocale::Korean => FALLBACK_KO,
            ReplyLocale::English => FALLBACK_EN,
        }
    }

    /// Composes the reply for an interpreted command.
    #[must_use]
    pub fn compose(
        self,
        command: &Command,
        locale: ReplyLocale,
        profile: &dyn ProfileSource,
    ) -> String {
        match command.intent {
            Intent::Greeting => greeting(locale, profile),
            Intent::SetGoal => set_goal(command.slot(SLOT_VALUE), locale, profile),
            Intent::StartWorkout => start_workout(locale),
            Intent::EndWorkout => end_workout(locale),
            Intent::LogSets => log_sets(command.slot(SLOT_VALUE), locale),
            Intent::LogReps => log_reps(command.slot(SLOT_VALUE), locale),
            Intent::LogDuration => {
                log_duration(command.slot(SLOT_VALUE), command.slot(SLOT_UNIT), locale)
            }
            Intent::AskTechnique => ask_technique(command.slot(SLOT_TECHNIQUE), locale),
            Intent::AdjustDifficulty => adjust_difficulty(command.slot(SLOT_DIFFICULTY), locale),
            Intent::AskProgress => ask_progress(locale, profile),
            Intent::Thanks => match locale {
                ReplyLocale::Korean => "별말씀을요! 필요하면 언제든 불러주세요.".to_string(),
                ReplyLocale::English => "You're welcome! I'm here whenever you need me.".to_string(),
            },
            Intent::Unknown => self.fallback_reply(locale).to_string(),
        }
    }
}

fn greeting(locale: ReplyLocale, profile: &dyn ProfileSource) -> String {
    let streak = profile.streak_days();
    match locale {
        ReplyLocale::Korean if streak > 0 => {
            format!("안녕하세요! {streak}일 연속 운동 중이시네요. 오늘도 함께해요.")
        }
        ReplyLocale::Korean => "안녕하세요! 무엇을 도와드릴까요?".to_string(),
        ReplyLocale::English if streak > 0 => {
            format!("Hello! You're on a {streak}-day streak. Let's keep it going.")
        }
        ReplyLocale::English => "Hello! What can I help you with today?".to_string(),
    }
}

fn set_goal(value: Option<&str>, locale: ReplyLocale, profile: &dyn ProfileSource) -> String {
    let estimate = GoalEstimate::compute(profile);
    match (value, estimate, locale) {
        (Some(v), Some(e), ReplyLocale::Korean) => format!(
            "주 {v}회 목표로 설정했어요. 다음 레벨까지 {}회, 지금 페이스면 약 {}주 남았어요.",
            e.sessions, e.weeks
        ),
        (Some(v), Some(e), ReplyLocale::English) => format!(
            "Goal set: {v} sessions a week. {} sessions to the next level, about {} weeks at your pace.",
            e.sessions, e.weeks
        ),
        (None, Some(e), ReplyLocale::Korean) => format!(
            "다음 레벨까지 {}회 남았어요. 지금 페이스면 약 {}주 걸려요.",
            e.sessions, e.weeks
        ),
        (None, Some(e), ReplyLocale::English) => format!(
            "{} sessions to go until the next level, about {} weeks at your pace.",
            e.sessions, e.weeks
        ),
        (Some(v), None, ReplyLocale::Korean) => format!("주 {v}회 목표로 설정했어요."),
        (Some(v), None, ReplyLocale::English) => format!("Goal set: {v} sessions a week."),
        (None, None, ReplyLocale::Korean) => "어떤 목표를 세우고 싶으세요?".to_string(),
        (None, None, ReplyLocale::English) => "What goal would you like to set?".to_string(),
    }
}

fn start_workout(locale: ReplyLocale) -> String {
    match locale {
        ReplyLocale::Korean => "좋아요, 운동을 시작해볼까요? 마치면 기록을 말씀해 주세요.".to_string(),
        ReplyLocale::English => "Great, let's get started! Tell me what you do and I'll log it.".to_string(),
    }
}

fn end_workout(locale: ReplyLocale) -> String {
    match locale {
        ReplyLocale::Korean => "수고하셨어요! 오늘 운동을 마무리할게요.".to_string(),
        ReplyLocale::English => "Nice work! Wrapping up today's session.".to_string(),
    }
}

fn log_sets(value: Option<&str>, locale: ReplyLocale) -> String {
    match (value, locale) {
        (Some(v), ReplyLocale::Korean) => format!("{v}세트 기록했어요!"),
        (Some(v), ReplyLocale::English) => format!("Logged {v} sets!"),
        (None, ReplyLocale::Korean) => "몇 세트 하셨어요?".to_string(),
        (None, ReplyLocale::English) => "How many sets did you do?".to_string(),
    }
}

fn log_reps(value: Option<&str>, locale: ReplyLocale) -> String {
    match (value, locale) {
        (Some(v), ReplyLocale::Korean) => format!("{v}회 기록했어요!"),
        (Some(v), ReplyLocale::English) => format!("Logged {v} reps!"),
        (None, ReplyLocale::Korean) => "몇 회 하셨어요?".to_string(),
        (None, ReplyLocale::English) => "How many reps did you do?".to_string(),
    }
}

fn log_duration(value: Option<&str>, unit: Option<&str>, locale: ReplyLocale) -> String {
    match (value, unit, locale) {
        (Some(v), Some(u), ReplyLocale::Korean) => {
            format!("{v}{} 운동했네요, 기록해둘게요!", korean_unit(u))
        }
        (Some(v), Some(u), ReplyLocale::English) => format!("Logged {v} {u} of exercise!"),
        (_, _, ReplyLocale::Korean) => "얼마나 운동하셨어요?".to_string(),
        (_, _, ReplyLocale::English) => "How long did you work out?".to_string(),
    }
}

fn ask_technique(technique: Option<&str>, locale: ReplyLocale) -> String {
    match (technique, locale) {
        (Some(t), ReplyLocale::Korean) => format!(
            "{} 연습해볼까요? 기본 자세부터 차근차근 해봐요.",
            korean_technique(t)
        ),
        (Some(t), ReplyLocale::English) => {
            format!("Let's work on your {t}. Start slow and focus on form.")
        }
        (None, ReplyLocale::Korean) => "어떤 기술이 궁금하세요?".to_string(),
        (None, ReplyLocale::English) => "Which technique would you like to work on?".to_string(),
    }
}

fn adjust_difficulty(difficulty: Option<&str>, locale: ReplyLocale) -> String {
    match (difficulty, locale) {
        (Some(d), ReplyLocale::Korean) => {
            format!("알겠어요, {} 조정할게요.", korean_difficulty(d))
        }
        (Some(d), ReplyLocale::English) => format!("Okay, I'll make it {d} from now on."),
        (None, ReplyLocale::Korean) => "난이도를 어떻게 바꿔드릴까요?".to_string(),
        (None, ReplyLocale::English) => "How should I adjust the difficulty?".to_string(),
    }
}

fn ask_progress(locale: ReplyLocale, profile: &dyn ProfileSource) -> String {
    let level = profile.level();
    let total = profile.total_sessions();
    let streak = profile.streak_days();

    let mut reply = match locale {
        ReplyLocale::Korean => {
            format!("지금 레벨 {level}, 총 {total}회 운동했고 {streak}일 연속이에요.")
        }
        ReplyLocale::English => {
            format!("You're level {level} with {total} sessions and a {streak}-day streak.")
        }
    };

    if let Some(intensity) = profile.recent_intensity() {
        reply.push_str(&match locale {
            ReplyLocale::Korean => format!(" 최근 평균 강도는 {intensity:.1}이에요."),
            ReplyLocale::English => format!(" Recent average intensity is {intensity:.1}."),
        });
    }
    if let Some(fatigue) = profile.recent_fatigue() {
        reply.push_str(&match locale {
            ReplyLocale::Korean => format!(" 평균 피로도는 {fatigue:.1}이에요."),
            ReplyLocale::English => format!(" Average fatigue is {fatigue:.1}."),
        });
    }

    reply
}

/// Korean counter for a canonical unit slot value.
fn korean_unit(unit: &str) -> &str {
    match unit {
        "sets" => "세트",
        "reps" => "회",
        "minutes" => "분",
        "seconds" => "초",
        "hours" => "시간",
        other => other,
    }
}

/// Korean rendering of a canonical technique slot value.
fn korean_technique(technique: &str) -> &str {
    match technique {
        "backhand" => "백핸드",
        "forehand" => "포핸드",
        "serve" => "서브",
        "volley" => "발리",
        "drop" => "드롭",
        other => other,
    }
}

/// Korean adverbial rendering of a canonical difficulty slot value.
fn korean_difficulty(difficulty: &str) -> &str {
    match difficulty {
        "easy" => "더 쉽게",
        "medium" => "보통 난이도로",
        "hard" => "더 어렵게",
        other => other,
    }
}
