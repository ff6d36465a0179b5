use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    MovementIntent, StateChangeResult, StateProcessingContext, StateProcessingHandler,
};

const MAX_LOOKAHEAD: f32 = 0.5;
const SPRINT_DISTANCE: f32 = 5.0;
const COUNTER_ATTACK_THRESHOLD: f32 = 0.6;

pub struct AiChaseBallState;

impl StateProcessingHandler for AiChaseBallState {
    fn try_fast(&self, _ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        None
    }

    /// Runs to where the ball will be, not where it is.
    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        let perception = ctx.perception;
        let distance = perception.distance_to_ball();

        let lookahead = if perception.max_speed > 0.0 {
            (distance / perception.max_speed).min(MAX_LOOKAHEAD)
        } else {
            0.0
        };

        let target = (perception.ball_position + perception.ball_velocity * lookahead).horizontal();

        let sprint = distance < SPRINT_DISTANCE
            || perception.opponent_distance_to_ball() < distance
            || (ctx.profile.counter_attack > COUNTER_ATTACK_THRESHOLD
                && perception.ball_moving_to_target_goal());

        ctx.memory.target = Some(target);

        MovementIntent::MoveTo { target, sprint }
    }
}
