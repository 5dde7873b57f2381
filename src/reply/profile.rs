//! Read-only access to the host's user profile.

/// Read-only view of the user profile and workout history aggregates.
///
/// Implemented by the host over whatever store it keeps profiles in; the
/// NLU core only ever reads from it, and only while composing a reply.
pub trait ProfileSource {
    /// Current training level.
    fn level(&self) -> u32;

    /// Total completed sessions across all time.
    fn total_sessions(&self) -> u32;

    /// Current consecutive-day streak.
    fn streak_days(&self) -> u32;

    /// Average sessions per week the user trains at.
    fn weekly_pace(&self) -> f64;

    /// Average intensity over recent sessions, when the host tracks it.
    fn recent_intensity(&self) -> Option<f64> {
        None
    }

    /// Average fatigue over recent sessions, when the host tracks it.
    fn recent_fatigue(&self) -> Option<f64> {
        None
    }
}

/// A plain-value [`ProfileSource`], useful for tests and for hosts that
/// load the profile up front.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticProfile {
    /// Current training level.
    pub level: u32,

    /// Total completed sessions.
    pub total_sessions: u32,

    /// Current consecutive-day streak.
    pub streak_days: u32,

    /// Average sessions per week.
    pub weekly_pace: f64,

    /// Recent average intensity, if tracked.
    pub recent_intensity: Option<f64>,

    /// Recent average fatigue, if tracked.
    pub recent_fatigue: Option<f64>,
}

impl ProfileSource for StaticProfile {
    fn level(&self) -> u32 {
        self.level
    }

    fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    fn streak_days(&self) -> u32 {
        self.streak_days
    }

    fn weekly_pace(&self) -> f64 {
        self.weekly_pace
    }

    fn recent_intensity(&self) -> Option<f64> {
        self.recent_intensity
    }

    fn recent_fatigue(&self) -> Option<f64> {
        self.recent_fatigue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_profile_roundtrip() {
        let profile = StaticProfile {
            level: 3,
            total_sessions: 22,
            streak_days: 4,
            weekly_pace: 3.5,
            recent_intensity: Some(6.2),
            recent_fatigue: None,
        };

        assert_eq!(profile.level(), 3);
        assert_eq!(profile.total_sessions(), 22);
        assert_eq!(profile.streak_days(), 4);
        assert!((profile.weekly_pace() - 3.5).abs() < f64::EPSILON);
        assert_eq!(profile.recent_intensity(), Some(6.2));
        assert_eq!(profile.recent_fatigue(), None);
    }

    #[test]
    fn test_trait_defaults_report_untracked_averages() {
        struct LevelOnly;

        impl ProfileSource for LevelOnly {
            fn level(&self) -> u32 {
                1
            }
            fn total_sessions(&self) -> u32 {
                0
            }
            fn streak_days(&self) -> u32 {
                0
            }
            fn weekly_pace(&self) -> f64 {
                0.0
            }
        }

        assert_eq!(LevelOnly.recent_intensity(), None);
        assert_eq!(LevelOnly.recent_fatigue(), None);
    }
}
