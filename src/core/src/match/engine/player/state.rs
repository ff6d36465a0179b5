use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AiState {
    #[default]
    Idle,
    ChaseBall,
    Dribble,
    Shoot,
    Defend,
    ReturnToPosition,
}

impl Display for AiState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            AiState::Idle => write!(f, "Idle"),
            AiState::ChaseBall => write!(f, "Chase ball"),
            AiState::Dribble => write!(f, "Dribble"),
            AiState::Shoot => write!(f, "Shoot"),
            AiState::Defend => write!(f, "Defend"),
            AiState::ReturnToPosition => write!(f, "Return to position"),
        }
    }
}
