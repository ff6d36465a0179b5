use crate::r#match::{AiState, MatchPhase};
use nalgebra::Vector3;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    /// Human-controlled side, attacks the goal at +x
    Player,
    /// Computer-controlled side, attacks the goal at -x
    Ai,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::Player => Team::Ai,
            Team::Ai => Team::Player,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Team::Player => write!(f, "player"),
            Team::Ai => write!(f, "ai"),
        }
    }
}

/// Final result from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Win,
    Lose,
    Draw,
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "win"),
            MatchOutcome::Lose => write!(f, "lose"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new(player: u8, ai: u8) -> Self {
        Score { player, ai }
    }

    pub fn get(&self, team: Team) -> u8 {
        match team {
            Team::Player => self.player,
            Team::Ai => self.ai,
        }
    }

    pub(crate) fn increment(&mut self, team: Team) {
        match team {
            Team::Player => self.player = self.player.saturating_add(1),
            Team::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        if self.player > self.ai {
            MatchOutcome::Win
        } else if self.player < self.ai {
            MatchOutcome::Lose
        } else {
            MatchOutcome::Draw
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.player, self.ai)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodySnapshot {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub facing: f32,
}

/// Read-only view handed to rendering and persistence collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub time: f32,
    pub elapsed: f32,
    pub phase: MatchPhase,
    pub score: Score,
    pub celebrating: bool,
    pub ball: BodySnapshot,
    pub player: BodySnapshot,
    pub opponent: BodySnapshot,
    pub ai_state: AiState,
}

pub trait VectorExtensions {
    fn distance_to(&self, other: &Vector3<f32>) -> f32;
    fn horizontal(&self) -> Vector3<f32>;
    fn horizontal_distance_to(&self, other: &Vector3<f32>) -> f32;
    fn is_finite_vector(&self) -> bool;
}

impl VectorExtensions for Vector3<f32> {
    #[inline]
    fn distance_to(&self, other: &Vector3<f32>) -> f32 {
        let diff = self - other;
        diff.dot(&diff).sqrt()
    }

    /// Projection onto the ground plane (y = 0).
    #[inline]
    fn horizontal(&self) -> Vector3<f32> {
        Vector3::new(self.x, 0.0, self.z)
    }

    #[inline]
    fn horizontal_distance_to(&self, other: &Vector3<f32>) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    #[inline]
    fn is_finite_vector(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
