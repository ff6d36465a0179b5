use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    AiChaseBallState, AiDefendState, AiDribbleState, AiIdleState, AiMemory, AiProfile,
    AiReturnState, AiShootState, AiState, FieldGeometry, Movable, MovementIntent,
    PositionQueryable, RandomSource, Team,
};
use nalgebra::Vector3;

/// Distance in front of the own goal line the AI falls back to.
const HOME_DISTANCE_FROM_GOAL: f32 = 8.0;

/// What the AI sees of the world on a given frame.
#[derive(Debug, Clone, Copy)]
pub struct AiPerception {
    pub team: Team,
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub max_speed: f32,
    pub control_radius: f32,
    pub ball_position: Vector3<f32>,
    pub ball_velocity: Vector3<f32>,
    pub opponent_position: Vector3<f32>,
    pub target_goal: Vector3<f32>,
    pub own_goal: Vector3<f32>,
    pub goal_width: f32,
    pub home: Vector3<f32>,
}

impl AiPerception {
    pub fn new<B, K, O>(
        team: Team,
        geometry: &FieldGeometry,
        body: &B,
        ball: &K,
        opponent: &O,
    ) -> Self
    where
        B: Movable + ?Sized,
        K: PositionQueryable + ?Sized,
        O: PositionQueryable + ?Sized,
    {
        let target_goal = geometry.attacking_goal(team);
        let own_goal = geometry.own_goal(team);

        AiPerception {
            team,
            position: body.position(),
            velocity: body.velocity(),
            max_speed: body.max_speed(),
            control_radius: body.control_radius(),
            ball_position: ball.position(),
            ball_velocity: ball.velocity(),
            opponent_position: opponent.position(),
            target_goal: target_goal.center(),
            own_goal: own_goal.center(),
            goal_width: target_goal.width,
            home: own_goal.center() - Vector3::x() * own_goal.inward() * HOME_DISTANCE_FROM_GOAL,
        }
    }

    pub fn distance_to_ball(&self) -> f32 {
        self.position.horizontal_distance_to(&self.ball_position)
    }

    pub fn opponent_distance_to_ball(&self) -> f32 {
        self.opponent_position
            .horizontal_distance_to(&self.ball_position)
    }

    pub fn distance_to_opponent(&self) -> f32 {
        self.position.horizontal_distance_to(&self.opponent_position)
    }

    pub fn distance_to_target_goal(&self) -> f32 {
        self.position.horizontal_distance_to(&self.target_goal)
    }

    pub fn distance_to_own_goal(&self) -> f32 {
        self.position.horizontal_distance_to(&self.own_goal)
    }

    pub fn distance_to_home(&self) -> f32 {
        self.position.horizontal_distance_to(&self.home)
    }

    /// The ball sits within the control radius and low enough to play.
    pub fn has_ball(&self) -> bool {
        self.distance_to_ball() <= self.control_radius
            && self.ball_position.y <= self.control_radius
    }

    /// Unit ground direction from `from` toward the target goal.
    pub fn goal_direction_from(&self, from: &Vector3<f32>) -> Vector3<f32> {
        let to_goal = (self.target_goal - from).horizontal();
        let length = to_goal.norm();

        if length > f32::EPSILON {
            to_goal / length
        } else {
            Vector3::x() * self.target_goal.x.signum()
        }
    }

    /// True when the ball rolls toward the goal this agent attacks.
    pub fn ball_moving_to_target_goal(&self) -> bool {
        const MIN_SPEED: f32 = 1.0;

        self.ball_velocity.x * self.target_goal.x.signum() > MIN_SPEED
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickCommand {
    pub direction: Vector3<f32>,
    pub power: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StateChangeResult {
    pub state: Option<AiState>,
    pub intent: Option<MovementIntent>,
    pub kick: Option<KickCommand>,
}

impl StateChangeResult {
    pub fn with_state(state: AiState) -> Self {
        StateChangeResult {
            state: Some(state),
            ..Default::default()
        }
    }

    pub fn with_state_and_kick(state: AiState, kick: KickCommand) -> Self {
        StateChangeResult {
            state: Some(state),
            intent: Some(MovementIntent::Idle),
            kick: Some(kick),
        }
    }

    pub fn with_kick(kick: KickCommand) -> Self {
        StateChangeResult {
            kick: Some(kick),
            ..Default::default()
        }
    }
}

pub struct StateProcessingContext<'a> {
    pub perception: &'a AiPerception,
    pub profile: &'a AiProfile,
    pub memory: &'a mut AiMemory,
    pub rng: &'a mut dyn RandomSource,
    pub dt: f32,
}

pub trait StateProcessingHandler {
    /// Forced transitions and actions, evaluated every frame before movement.
    fn try_fast(&self, ctx: &mut StateProcessingContext) -> Option<StateChangeResult>;

    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent;
}

pub struct AiStateProcessor;

impl AiStateProcessor {
    pub fn handler(state: AiState) -> &'static dyn StateProcessingHandler {
        match state {
            AiState::Idle => &AiIdleState,
            AiState::ChaseBall => &AiChaseBallState,
            AiState::Dribble => &AiDribbleState,
            AiState::Shoot => &AiShootState,
            AiState::Defend => &AiDefendState,
            AiState::ReturnToPosition => &AiReturnState,
        }
    }

    /// Executes `state` for one frame. The result always carries a movement intent.
    pub fn process(state: AiState, ctx: &mut StateProcessingContext) -> StateChangeResult {
        let mut result = Self::handler(state)
            .try_fast(ctx)
            .unwrap_or_default();

        if result.intent.is_none() {
            let active = result.state.unwrap_or(state);
            result.intent = Some(Self::handler(active).movement(ctx));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{AgentSkills, Ball, BallPhysicsConfig, MatchPlayer, PlayerPhysical};

    #[test]
    fn test_perception_for_ai_team() {
        let geometry = FieldGeometry::default();
        let body = MatchPlayer::new(
            Team::Ai,
            Vector3::new(5.0, 0.0, 0.0),
            PlayerPhysical::default(),
            AgentSkills::default(),
        );
        let opponent = MatchPlayer::new(
            Team::Player,
            Vector3::new(-5.0, 0.0, 0.0),
            PlayerPhysical::default(),
            AgentSkills::default(),
        );
        let ball = Ball::with_position(Vector3::new(5.5, 0.11, 0.0), BallPhysicsConfig::default());

        let perception = AiPerception::new(Team::Ai, &geometry, &body, &ball, &opponent);

        assert_eq!(perception.target_goal.x, -30.0);
        assert_eq!(perception.own_goal.x, 30.0);
        assert_eq!(perception.home.x, 22.0);
        assert!(perception.has_ball());
        assert!((perception.distance_to_target_goal() - 35.0).abs() < 1e-5);
        assert_eq!(perception.goal_direction_from(&body.position), Vector3::new(-1.0, 0.0, 0.0));
    }
}
