use super::rotate_horizontal;
use crate::r#match::{
    AiState, KickCommand, MovementIntent, StateChangeResult, StateProcessingContext,
    StateProcessingHandler,
};
use nalgebra::Vector3;

/// How far ahead of the body the dribble target sits.
const DRIBBLE_LEAD: f32 = 2.5;

pub struct AiDribbleState;

impl AiDribbleState {
    fn direction(ctx: &StateProcessingContext) -> Vector3<f32> {
        ctx.memory
            .dribble_direction
            .unwrap_or_else(|| ctx.perception.goal_direction_from(&ctx.perception.position))
    }
}

impl StateProcessingHandler for AiDribbleState {
    fn try_fast(&self, ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        if !ctx.perception.has_ball() {
            return Some(StateChangeResult::with_state(AiState::ChaseBall));
        }

        ctx.memory.kick_timer += ctx.dt;

        if ctx.memory.kick_timer < ctx.profile.dribble_kick_interval() {
            return None;
        }

        ctx.memory.kick_timer = 0.0;

        let error = ctx.profile.dribble_error() * ctx.rng.symmetric();

        Some(StateChangeResult::with_kick(KickCommand {
            direction: rotate_horizontal(Self::direction(ctx), error),
            power: ctx.profile.dribble_power(),
        }))
    }

    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        let target = ctx.perception.position + Self::direction(ctx) * DRIBBLE_LEAD;
        ctx.memory.target = Some(target);

        MovementIntent::MoveTo {
            target,
            sprint: false,
        }
    }
}
