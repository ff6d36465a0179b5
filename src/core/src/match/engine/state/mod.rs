mod clock;

pub use clock::*;

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchPhase {
    Ready,
    Playing,
    Paused,
    /// Terminal, a finished clock is never restarted
    Ended,
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        *self == MatchPhase::Ended
    }
}

impl Display for MatchPhase {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MatchPhase::Ready => write!(f, "ready"),
            MatchPhase::Playing => write!(f, "playing"),
            MatchPhase::Paused => write!(f, "paused"),
            MatchPhase::Ended => write!(f, "ended"),
        }
    }
}
