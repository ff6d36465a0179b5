use crate::r#match::{
    AgentSkills, AiDecision, AiMemory, AiPerception, AiProfile, AiState, AiStateProcessor,
    FieldGeometry, Kickable, Movable, PositionQueryable, RandomSource, StateProcessingContext,
    Team,
};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AiTickResult {
    pub state: AiState,
    /// `Some(true)` when possession was gained this frame, `Some(false)` when lost
    pub possession: Option<bool>,
    pub kicked: bool,
}

/// Behaviour state machine for one computer-controlled agent.
pub struct AiDecisionEngine<R: RandomSource = StdRng> {
    team: Team,
    profile: AiProfile,
    memory: AiMemory,
    rng: R,
}

impl AiDecisionEngine<StdRng> {
    pub fn new(team: Team, skills: &AgentSkills, seed: u64) -> Self {
        AiDecisionEngine::with_random_source(team, skills, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> AiDecisionEngine<R> {
    pub fn with_random_source(team: Team, skills: &AgentSkills, rng: R) -> Self {
        AiDecisionEngine {
            team,
            profile: AiProfile::from_skills(skills),
            memory: AiMemory::default(),
            rng,
        }
    }

    /// Perceives and decides when the reaction delay has passed, then always
    /// executes the current state: sets the body's movement intent and applies
    /// any kick to the ball.
    pub fn update(
        &mut self,
        dt: f32,
        time: f32,
        geometry: &FieldGeometry,
        body: &mut dyn Movable,
        ball: &mut dyn Kickable,
        opponent: &dyn PositionQueryable,
    ) -> AiTickResult {
        if !dt.is_finite() || dt < 0.0 {
            warn!("ai update ignored, invalid dt: {}", dt);
            return AiTickResult {
                state: self.memory.state,
                ..Default::default()
            };
        }

        let perception = AiPerception::new(self.team, geometry, &*body, &*ball, opponent);

        let possession = self.memory.update_possession(perception.has_ball(), dt);
        if let Some(gained) = possession {
            debug!(
                "{} {} the ball at {:.2}s",
                self.team,
                if gained { "won" } else { "lost" },
                time
            );
        }

        self.memory.advance(dt);

        let mut ctx = StateProcessingContext {
            perception: &perception,
            profile: &self.profile,
            memory: &mut self.memory,
            rng: &mut self.rng,
            dt,
        };

        if ctx.memory.decision_timer >= ctx.profile.reaction_delay {
            ctx.memory.decision_timer = 0.0;

            let next = AiDecision::decide(&mut ctx);
            Self::change_state(ctx.memory, next);
        }

        let current = ctx.memory.state;
        let result = AiStateProcessor::process(current, &mut ctx);

        if let Some(state) = result.state {
            Self::change_state(ctx.memory, state);
        }

        if let Some(intent) = result.intent {
            body.set_intent(intent);
        }

        let mut kicked = false;
        if let Some(kick) = result.kick {
            if ball.kick(kick.direction, kick.power) {
                self.memory.last_kick_time = Some(time);
                kicked = true;
            }
        }

        AiTickResult {
            state: self.memory.state,
            possession,
            kicked,
        }
    }

    fn change_state(memory: &mut AiMemory, state: AiState) {
        let previous = memory.state;
        if memory.change_state(state) {
            debug!("ai state {} -> {}", previous, state);
        }
    }

    /// Back to IDLE with fresh timers, used at kickoff.
    pub fn reset(&mut self) {
        self.memory = AiMemory::default();
    }

    pub fn state(&self) -> AiState {
        self.memory.state
    }

    pub fn memory(&self) -> &AiMemory {
        &self.memory
    }

    pub fn profile(&self) -> &AiProfile {
        &self.profile
    }

    pub fn team(&self) -> Team {
        self.team
    }
}
