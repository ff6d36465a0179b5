use crate::r#match::{
    MovementIntent, StateChangeResult, StateProcessingContext, StateProcessingHandler,
};

pub struct AiIdleState;

impl StateProcessingHandler for AiIdleState {
    fn try_fast(&self, _ctx: &mut StateProcessingContext) -> Option<StateChangeResult> {
        None
    }

    fn movement(&self, ctx: &mut StateProcessingContext) -> MovementIntent {
        ctx.memory.target = None;
        MovementIntent::Idle
    }
}
