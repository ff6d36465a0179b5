use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    MovementIntent, StateChangeResult, StateProcessingContext, StateProcessingHandler,
};

const MAX_COVER_OFFSET: f32 = 6.0;
const COVER_FRACTION: f32 = 0.35;
const SPRINT_BALL_DISTANCE: f32 = 8.0;

pub struct AiDefendState;

impl StateProcessingHandler for AiDefendState {
    fn try_fast(&self, _ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        None
    }

    /// Stands on the line from the ball to the own goal.
    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        let perception = ctx.perception;
        let ball = perception.ball_position.horizontal();

        let to_goal = perception.own_goal - ball;
        let distance = to_goal.norm();

        let target = if distance > f32::EPSILON {
            ball + to_goal / distance * (distance * COVER_FRACTION).min(MAX_COVER_OFFSET)
        } else {
            ball
        };

        ctx.memory.target = Some(target);

        MovementIntent::MoveTo {
            target,
            sprint: perception.distance_to_ball() < SPRINT_BALL_DISTANCE,
        }
    }
}
