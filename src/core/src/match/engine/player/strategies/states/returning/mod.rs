use crate::r#match::{
    AiState, MovementIntent, StateChangeResult, StateProcessingContext, StateProcessingHandler,
};

const HOME_ARRIVAL_DISTANCE: f32 = 2.0;

pub struct AiReturnState;

impl StateProcessingHandler for AiReturnState {
    fn try_fast(&self, ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        if ctx.perception.distance_to_home() < HOME_ARRIVAL_DISTANCE {
            return Some(StateChangeResult::with_state(AiState::Idle));
        }

        None
    }

    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        let target = ctx.perception.home;
        ctx.memory.target = Some(target);

        MovementIntent::MoveTo {
            target,
            sprint: false,
        }
    }
}
