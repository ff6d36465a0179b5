use super::rotate_horizontal;
use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    AiState, KickCommand, MovementIntent, StateChangeResult, StateProcessingContext,
    StateProcessingHandler,
};
use log::debug;

const SHOT_LIFT: f32 = 0.12;
const SHOT_COOLDOWN: f32 = 1.0;

pub struct AiShootState;

impl StateProcessingHandler for AiShootState {
    fn try_fast(&self, ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        if !ctx.perception.has_ball() {
            return Some(StateChangeResult::with_state(AiState::ChaseBall));
        }

        ctx.memory.aim_timer += ctx.dt;

        if ctx.memory.aim_timer < ctx.profile.aim_delay() {
            return None;
        }

        let perception = ctx.perception;
        let ball = perception.ball_position;

        let distance = ball.horizontal_distance_to(&perception.target_goal);
        let error = ctx.profile.shot_error(distance) * ctx.rng.symmetric();

        let mut direction = rotate_horizontal(perception.goal_direction_from(&ball), error);
        direction.y = SHOT_LIFT;

        ctx.memory.action_cooldown = SHOT_COOLDOWN;
        ctx.memory.dribble_direction = None;

        debug!("ai shoots from {:.1}m, error {:.3} rad", distance, error);

        Some(StateChangeResult::with_state_and_kick(
            AiState::ChaseBall,
            KickCommand {
                direction,
                power: ctx.profile.shot_power(),
            },
        ))
    }

    /// Plants the feet while lining up.
    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        ctx.memory.target = None;
        MovementIntent::Idle
    }
}
