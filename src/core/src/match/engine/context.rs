use crate::r#match::{GoalDetector, MatchClock, MatchConfig};

/// Per-match state shared by the frame update: configuration, the clock and
/// the simulation time that drives every throttle and cooldown.
pub struct MatchContext {
    pub config: MatchConfig,
    pub clock: MatchClock,
    pub detector: GoalDetector,
    time: f32,
}

impl MatchContext {
    pub fn new(config: MatchConfig) -> Self {
        MatchContext {
            clock: MatchClock::new(config.duration, &config.timing),
            detector: GoalDetector::new(config.timing.goal_check_interval),
            config,
            time: 0.0,
        }
    }

    /// Simulation seconds since construction, advanced by every processed frame.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::MatchPhase;

    #[test]
    fn test_new_context_is_ready() {
        let context = MatchContext::new(MatchConfig::default().with_duration(60.0));

        assert_eq!(context.clock.phase(), MatchPhase::Ready);
        assert_eq!(context.clock.duration(), 60.0);
        assert_eq!(context.time(), 0.0);
    }
}
