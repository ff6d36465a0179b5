use crate::r#match::events::{
    EventCollection, GoalScoredEvent, MatchEndEvent, MatchEvent, StateChangeEvent,
};
use crate::r#match::{
    MatchOutcome, MatchPhase, MatchTimingConfig, Score, Team, DEFAULT_MATCH_DURATION,
};
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTick {
    /// The celebration window closed during this tick
    pub celebration_finished: bool,
    /// The match reached its duration during this tick
    pub ended: bool,
}

/// Match phase, elapsed time and score. The score only changes through `score_goal`.
#[derive(Debug, Clone)]
pub struct MatchClock {
    phase: MatchPhase,
    elapsed: f32,
    duration: f32,
    score: Score,
    last_goal_time: Option<f32>,
    celebration_remaining: f32,
    celebration_duration: f32,
    min_goal_interval: f32,
    result: Option<MatchOutcome>,
}

impl MatchClock {
    pub fn new(duration: f32, timing: &MatchTimingConfig) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            warn!("invalid match duration {}, using {}", duration, DEFAULT_MATCH_DURATION);
            DEFAULT_MATCH_DURATION
        };

        MatchClock {
            phase: MatchPhase::Ready,
            elapsed: 0.0,
            duration,
            score: Score::default(),
            last_goal_time: None,
            celebration_remaining: 0.0,
            celebration_duration: timing.celebration_duration,
            min_goal_interval: timing.min_goal_interval,
            result: None,
        }
    }

    pub fn start(&mut self, events: &mut EventCollection) -> bool {
        self.transition(MatchPhase::Ready, MatchPhase::Playing, events)
    }

    pub fn pause(&mut self, events: &mut EventCollection) -> bool {
        self.transition(MatchPhase::Playing, MatchPhase::Paused, events)
    }

    pub fn resume(&mut self, events: &mut EventCollection) -> bool {
        self.transition(MatchPhase::Paused, MatchPhase::Playing, events)
    }

    fn transition(
        &mut self,
        from: MatchPhase,
        to: MatchPhase,
        events: &mut EventCollection,
    ) -> bool {
        if self.phase != from {
            debug!("clock transition {} -> {} rejected in {}", from, to, self.phase);
            return false;
        }

        self.set_phase(to, events);

        true
    }

    fn set_phase(&mut self, phase: MatchPhase, events: &mut EventCollection) {
        info!("match {} at {:.2}s, score {}", phase, self.elapsed, self.score);

        self.phase = phase;

        events.add(MatchEvent::StateChange(StateChangeEvent {
            phase,
            time: self.elapsed,
            score: self.score,
        }));
    }

    /// Single entry point for changing the score.
    pub fn score_goal(&mut self, team: Team, events: &mut EventCollection) -> bool {
        if self.phase != MatchPhase::Playing {
            debug!("goal for {} rejected, match is {}", team, self.phase);
            return false;
        }

        if self.is_celebrating() {
            debug!("goal for {} rejected during celebration", team);
            return false;
        }

        if let Some(last_goal_time) = self.last_goal_time {
            if self.elapsed - last_goal_time < self.min_goal_interval {
                debug!("goal for {} rejected, too close to previous goal", team);
                return false;
            }
        }

        self.score.increment(team);
        self.last_goal_time = Some(self.elapsed);
        self.celebration_remaining = self.celebration_duration;

        info!("GOAL {} at {:.2}s, score {}", team, self.elapsed, self.score);

        events.add(MatchEvent::GoalScored(GoalScoredEvent {
            team,
            score: self.score,
            time: self.elapsed,
        }));

        true
    }

    /// Advances match time. Does nothing unless the match is being played.
    pub fn tick(&mut self, dt: f32, events: &mut EventCollection) -> ClockTick {
        let mut tick = ClockTick::default();

        if self.phase != MatchPhase::Playing {
            return tick;
        }

        if !dt.is_finite() || dt < 0.0 {
            warn!("clock tick ignored, invalid dt: {}", dt);
            return tick;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);

        if self.celebration_remaining > 0.0 {
            self.celebration_remaining -= dt;
            if self.celebration_remaining <= 0.0 {
                self.celebration_remaining = 0.0;
                tick.celebration_finished = true;
            }
        }

        if self.elapsed >= self.duration {
            self.finish(events);
            tick.ended = true;
        }

        tick
    }

    fn finish(&mut self, events: &mut EventCollection) {
        let result = self.score.outcome();

        self.result = Some(result);
        self.celebration_remaining = 0.0;

        info!("match finished {} ({})", self.score, result);

        events.add(MatchEvent::MatchEnd(MatchEndEvent {
            result,
            score: self.score,
            duration: self.elapsed,
        }));

        self.set_phase(MatchPhase::Ended, events);
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn result(&self) -> Option<MatchOutcome> {
        self.result
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration_remaining > 0.0
    }
}
