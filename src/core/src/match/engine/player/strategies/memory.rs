use crate::r#match::AiState;
use nalgebra::Vector3;

/// Mutable AI bookkeeping. Every timer is a simulation-time accumulator in seconds.
#[derive(Debug, Clone, Default)]
pub struct AiMemory {
    pub state: AiState,
    pub previous_state: AiState,
    pub decision_timer: f32,
    pub state_timer: f32,
    /// Counts down to zero, no shot is taken while positive
    pub action_cooldown: f32,
    pub target: Option<Vector3<f32>>,
    pub dribble_direction: Option<Vector3<f32>>,
    pub has_ball: bool,
    pub possession_timer: f32,
    pub last_kick_time: Option<f32>,
    /// Time since the last dribble touch
    pub kick_timer: f32,
    /// Time spent lining up the current shot
    pub aim_timer: f32,
}

impl AiMemory {
    pub fn advance(&mut self, dt: f32) {
        self.decision_timer += dt;
        self.state_timer += dt;
        self.action_cooldown = (self.action_cooldown - dt).max(0.0);
    }

    /// Returns false when already in `state`.
    pub fn change_state(&mut self, state: AiState) -> bool {
        if self.state == state {
            return false;
        }

        self.previous_state = self.state;
        self.state = state;
        self.state_timer = 0.0;
        self.kick_timer = 0.0;
        self.aim_timer = 0.0;

        true
    }

    /// Updates the possession flag, returning the new value on an edge.
    pub fn update_possession(&mut self, has_ball: bool, dt: f32) -> Option<bool> {
        if has_ball == self.has_ball {
            if has_ball {
                self.possession_timer += dt;
            }
            return None;
        }

        self.has_ball = has_ball;
        self.possession_timer = 0.0;

        Some(has_ball)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_state_resets_state_timers() {
        let mut memory = AiMemory::default();
        memory.advance(0.4);
        memory.kick_timer = 0.3;

        assert!(memory.change_state(AiState::Dribble));
        assert_eq!(memory.previous_state, AiState::Idle);
        assert_eq!(memory.state_timer, 0.0);
        assert_eq!(memory.kick_timer, 0.0);
        assert!((memory.decision_timer - 0.4).abs() < 1e-6);

        assert!(!memory.change_state(AiState::Dribble));
    }

    #[test]
    fn test_possession_is_edge_triggered() {
        let mut memory = AiMemory::default();

        assert_eq!(memory.update_possession(false, 0.1), None);
        assert_eq!(memory.update_possession(true, 0.1), Some(true));
        assert_eq!(memory.update_possession(true, 0.1), None);
        assert!((memory.possession_timer - 0.1).abs() < 1e-6);
        assert_eq!(memory.update_possession(false, 0.1), Some(false));
    }

    #[test]
    fn test_cooldown_does_not_go_negative() {
        let mut memory = AiMemory {
            action_cooldown: 0.2,
            ..Default::default()
        };

        memory.advance(0.5);

        assert_eq!(memory.action_cooldown, 0.0);
    }
}
