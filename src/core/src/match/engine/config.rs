use crate::r#match::ball::BallPhysicsConfig;
use crate::r#match::FieldConfig;

pub const DEFAULT_MATCH_DURATION: f32 = 90.0;
pub const DEFAULT_AI_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTimingConfig {
    /// Seconds after an accepted goal during which further goals are ignored
    pub celebration_duration: f32,
    /// Minimum seconds between two accepted goals
    pub min_goal_interval: f32,
    /// Goal-line checks run at most once per this many seconds
    pub goal_check_interval: f32,
}

impl Default for MatchTimingConfig {
    fn default() -> Self {
        MatchTimingConfig {
            celebration_duration: 3.0,
            min_goal_interval: 1.0,
            goal_check_interval: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub duration: f32,
    pub timing: MatchTimingConfig,
    pub field: FieldConfig,
    pub ball: BallPhysicsConfig,
    pub seed: u64,
}

impl MatchConfig {
    pub fn with_duration(mut self, duration: f32) -> Self {
        if duration.is_finite() && duration > 0.0 {
            self.duration = duration;
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            duration: DEFAULT_MATCH_DURATION,
            timing: MatchTimingConfig::default(),
            field: FieldConfig::default(),
            ball: BallPhysicsConfig::default(),
            seed: DEFAULT_AI_SEED,
        }
    }
}
