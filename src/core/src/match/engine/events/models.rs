use crate::r#match::{MatchOutcome, MatchPhase, Score, Team};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    GoalScored,
    MatchEnd,
    StateChange,
    PossessionChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalScoredEvent {
    pub team: Team,
    pub score: Score,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchEndEvent {
    pub result: MatchOutcome,
    pub score: Score,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateChangeEvent {
    pub phase: MatchPhase,
    pub time: f32,
    pub score: Score,
}

/// Observability only, never feeds back into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PossessionChangedEvent {
    pub team: Team,
    pub gained: bool,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MatchEvent {
    GoalScored(GoalScoredEvent),
    MatchEnd(MatchEndEvent),
    StateChange(StateChangeEvent),
    PossessionChanged(PossessionChangedEvent),
}

impl MatchEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            MatchEvent::GoalScored(_) => EventKind::GoalScored,
            MatchEvent::MatchEnd(_) => EventKind::MatchEnd,
            MatchEvent::StateChange(_) => EventKind::StateChange,
            MatchEvent::PossessionChanged(_) => EventKind::PossessionChanged,
        }
    }
}
