use crate::r#match::events::{
    EventCollection, EventKind, EventRegistry, ListenerId, ListenerResult, MatchEvent,
    PossessionChangedEvent,
};
use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    AgentSkills, AiDecisionEngine, AiState, Ball, BodySnapshot, FieldGeometry, Kickable,
    MatchConfig, MatchContext, MatchField, MatchOutcome, MatchPhase, MatchPlayer, MatchSnapshot,
    Movable, MovementIntent, RandomSource, Score, Team,
};
use log::{debug, info, warn};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

pub const MAX_KICK_POWER: f32 = 30.0;
const HUMAN_KICK_COOLDOWN: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
struct KickRequest {
    direction: Vector3<f32>,
    power: f32,
}

/// One match between the human agent and the AI, advanced frame by frame.
pub struct MatchSimulation<R: RandomSource = StdRng> {
    field: MatchField,
    context: MatchContext,
    ai: AiDecisionEngine<R>,
    registry: EventRegistry,
    commands: VecDeque<KickRequest>,
    human_kick_cooldown: f32,
}

impl MatchSimulation<StdRng> {
    pub fn new(config: MatchConfig, player_skills: AgentSkills, ai_skills: AgentSkills) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        MatchSimulation::with_random_source(config, player_skills, ai_skills, rng)
    }
}

impl<R: RandomSource> MatchSimulation<R> {
    pub fn with_random_source(
        config: MatchConfig,
        player_skills: AgentSkills,
        ai_skills: AgentSkills,
        rng: R,
    ) -> Self {
        let field = MatchField::new(config.field, config.ball, player_skills, ai_skills);

        MatchSimulation {
            ai: AiDecisionEngine::with_random_source(Team::Ai, &ai_skills, rng),
            field,
            context: MatchContext::new(config),
            registry: EventRegistry::new(),
            commands: VecDeque::new(),
            human_kick_cooldown: 0.0,
        }
    }

    pub fn start(&mut self) -> bool {
        let mut events = EventCollection::new();
        let started = self.context.clock.start(&mut events);
        self.registry.dispatch_all(events);
        started
    }

    pub fn pause(&mut self) -> bool {
        let mut events = EventCollection::new();
        let paused = self.context.clock.pause(&mut events);
        self.registry.dispatch_all(events);
        paused
    }

    pub fn resume(&mut self) -> bool {
        let mut events = EventCollection::new();
        let resumed = self.context.clock.resume(&mut events);
        self.registry.dispatch_all(events);
        resumed
    }

    /// Advances one frame. Only a playing match moves, every other phase
    /// freezes the frame. Returns whether the frame was simulated.
    pub fn update(&mut self, dt: f32) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            warn!("frame ignored, invalid dt: {}", dt);
            return false;
        }

        if !self.context.clock.is_playing() {
            return false;
        }

        let mut events = EventCollection::new();

        self.context.advance(dt);
        self.human_kick_cooldown = (self.human_kick_cooldown - dt).max(0.0);

        self.apply_commands();
        self.play_ball(dt);
        self.check_goal(&mut events);

        let tick = self.context.clock.tick(dt, &mut events);
        if tick.celebration_finished && !tick.ended {
            self.kickoff();
        }

        if !tick.ended {
            self.play_ai(dt, &mut events);
        }

        self.play_players(dt);

        self.registry.dispatch_all(events);

        true
    }

    fn apply_commands(&mut self) {
        while let Some(request) = self.commands.pop_front() {
            if self.human_kick_cooldown > 0.0 {
                debug!("player kick dropped, cooldown {:.2}s", self.human_kick_cooldown);
                continue;
            }

            let distance = self
                .field
                .player
                .position
                .horizontal_distance_to(&self.field.ball.position);

            if distance > self.field.player.control_radius() {
                debug!("player kick dropped, ball {:.2}m away", distance);
                continue;
            }

            if self.field.ball.kick(request.direction, request.power) {
                self.human_kick_cooldown = HUMAN_KICK_COOLDOWN;
            }
        }
    }

    fn play_ball(&mut self, dt: f32) {
        let colliders = [self.field.player.collider(), self.field.opponent.collider()];

        self.field
            .ball
            .update(dt, &self.field.geometry, &colliders);
    }

    fn check_goal(&mut self, events: &mut EventCollection) {
        let goal = self.context.detector.check(
            &mut self.field.ball,
            &self.field.geometry,
            self.context.time(),
            self.context.clock.is_playing(),
        );

        if let Some(goal) = goal {
            self.context.clock.score_goal(goal.team, events);
        }
    }

    fn play_ai(&mut self, dt: f32, events: &mut EventCollection) {
        let result = self.ai.update(
            dt,
            self.context.time(),
            &self.field.geometry,
            &mut self.field.opponent,
            &mut self.field.ball,
            &self.field.player,
        );

        if let Some(gained) = result.possession {
            events.add(MatchEvent::PossessionChanged(PossessionChangedEvent {
                team: self.ai.team(),
                gained,
                time: self.context.clock.elapsed(),
            }));
        }
    }

    fn play_players(&mut self, dt: f32) {
        let geometry = self.field.geometry;

        self.field.player.update(dt, &geometry);
        self.field.opponent.update(dt, &geometry);
    }

    fn kickoff(&mut self) {
        info!("kickoff at {:.2}s", self.context.clock.elapsed());

        self.field.ball.reset();
        self.field.reset_players_positions();
        self.ai.reset();
        self.commands.clear();
        self.human_kick_cooldown = 0.0;
    }

    /// Queues a kick by the human agent, applied at the start of the next frame.
    pub fn queue_kick(&mut self, direction: Vector3<f32>, power: f32) -> bool {
        if !direction.is_finite_vector() || !power.is_finite() || power < 0.0 {
            warn!("kick request ignored, direction: {:?}, power: {}", direction, power);
            return false;
        }

        self.commands.push_back(KickRequest {
            direction,
            power: power.min(MAX_KICK_POWER),
        });

        true
    }

    /// Steers the human agent. A zero direction stops it.
    pub fn set_player_input(&mut self, direction: Vector3<f32>, sprint: bool) -> bool {
        if !direction.is_finite_vector() {
            warn!("player input ignored, direction: {:?}", direction);
            return false;
        }

        let intent = if direction.horizontal().norm() > f32::EPSILON {
            MovementIntent::Direction { direction, sprint }
        } else {
            MovementIntent::Idle
        };

        self.field.player.set_intent(intent)
    }

    /// Puts the ball back on the centre spot and re-arms goal detection.
    pub fn reset_ball(&mut self) {
        self.field.ball.reset();
    }

    pub fn reset_ball_to(&mut self, position: Vector3<f32>) -> bool {
        self.field.ball.reset_position(position)
    }

    /// Scores directly through the clock, subject to the same rejections as
    /// a goal found by the detector.
    pub fn score_goal(&mut self, team: Team) -> bool {
        let mut events = EventCollection::new();
        let scored = self.context.clock.score_goal(team, &mut events);
        self.registry.dispatch_all(events);
        scored
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&MatchEvent) -> ListenerResult + Send + 'static,
    {
        self.registry.on(kind, listener)
    }

    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.registry.off(kind, id)
    }

    pub fn geometry(&self) -> &FieldGeometry {
        &self.field.geometry
    }

    pub fn ball(&self) -> &Ball {
        &self.field.ball
    }

    pub fn player(&self) -> &MatchPlayer {
        &self.field.player
    }

    pub fn opponent(&self) -> &MatchPlayer {
        &self.field.opponent
    }

    pub fn score(&self) -> Score {
        self.context.clock.score()
    }

    pub fn phase(&self) -> MatchPhase {
        self.context.clock.phase()
    }

    pub fn elapsed(&self) -> f32 {
        self.context.clock.elapsed()
    }

    pub fn time(&self) -> f32 {
        self.context.time()
    }

    pub fn is_celebrating(&self) -> bool {
        self.context.clock.is_celebrating()
    }

    pub fn ai_state(&self) -> AiState {
        self.ai.state()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.context.clock.result()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            time: self.context.time(),
            elapsed: self.elapsed(),
            phase: self.phase(),
            score: self.score(),
            celebrating: self.is_celebrating(),
            ball: BodySnapshot {
                position: self.field.ball.position,
                velocity: self.field.ball.velocity,
                facing: 0.0,
            },
            player: Self::body_snapshot(&self.field.player),
            opponent: Self::body_snapshot(&self.field.opponent),
            ai_state: self.ai_state(),
        }
    }

    fn body_snapshot(player: &MatchPlayer) -> BodySnapshot {
        BodySnapshot {
            position: player.position,
            velocity: player.velocity,
            facing: player.facing,
        }
    }
}
