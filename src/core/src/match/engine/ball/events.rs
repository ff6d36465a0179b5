use crate::r#match::Team;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GoalSide {
    /// Goal at -x, defended by the human player
    Left,
    /// Goal at +x, defended by the AI
    Right,
}

impl GoalSide {
    pub fn attacked_by(team: Team) -> GoalSide {
        match team {
            Team::Player => GoalSide::Right,
            Team::Ai => GoalSide::Left,
        }
    }

    /// Team credited when the ball goes into this goal.
    pub fn scoring_team(&self) -> Team {
        match self {
            GoalSide::Left => Team::Ai,
            GoalSide::Right => Team::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BallGoalEventMetadata {
    pub side: GoalSide,
    pub team: Team,
}

impl BallGoalEventMetadata {
    pub fn new(side: GoalSide) -> Self {
        BallGoalEventMetadata {
            side,
            team: side.scoring_team(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacked_goal_credits_attacker() {
        for team in [Team::Player, Team::Ai] {
            assert_eq!(GoalSide::attacked_by(team).scoring_team(), team);
        }
    }
}
