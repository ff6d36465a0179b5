use crate::r#match::ball::PlayerCollider;
use crate::r#match::result::VectorExtensions;
use crate::r#match::{
    AgentSkills, FieldGeometry, Movable, MovementIntegrator, MovementIntent, PositionQueryable,
    Team,
};
use log::warn;
use nalgebra::Vector3;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPhysical {
    pub max_speed: f32,
    pub sprint_speed: f32,
    /// Maximum change of velocity per second
    pub acceleration: f32,
    /// Possession threshold around the feet
    pub control_radius: f32,
    /// Radius of the collision sphere
    pub radius: f32,
    /// Heading easing rate per second
    pub turn_rate: f32,
}

impl Default for PlayerPhysical {
    fn default() -> Self {
        PlayerPhysical {
            max_speed: 6.0,
            sprint_speed: 8.5,
            acceleration: 12.0,
            control_radius: 1.2,
            radius: 0.5,
            turn_rate: 8.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub team: Team,
    pub position: Vector3<f32>,
    pub start_position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    /// Radians around the y axis, 0 faces +x
    pub facing: f32,
    pub physical: PlayerPhysical,
    pub skills: AgentSkills,
    pub intent: MovementIntent,
}

impl MatchPlayer {
    pub fn new(
        team: Team,
        position: Vector3<f32>,
        physical: PlayerPhysical,
        skills: AgentSkills,
    ) -> Self {
        MatchPlayer {
            team,
            position,
            start_position: position,
            velocity: Vector3::zeros(),
            facing: Self::kickoff_facing(team),
            physical,
            skills,
            intent: MovementIntent::Idle,
        }
    }

    fn kickoff_facing(team: Team) -> f32 {
        match team {
            Team::Player => 0.0,
            Team::Ai => PI,
        }
    }

    pub fn update(&mut self, dt: f32, geometry: &FieldGeometry) -> bool {
        MovementIntegrator::step(self, dt, geometry)
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector3::zeros();
        self.facing = Self::kickoff_facing(self.team);
        self.intent = MovementIntent::Idle;
    }

    pub fn reset_position(&mut self, position: Vector3<f32>) -> bool {
        if !position.is_finite_vector() {
            warn!("{} reset ignored, invalid position: {:?}", self.team, position);
            return false;
        }

        self.position = Vector3::new(position.x, 0.0, position.z);
        self.velocity = Vector3::zeros();
        self.intent = MovementIntent::Idle;

        true
    }

    pub fn collider(&self) -> PlayerCollider {
        PlayerCollider {
            position: self.position,
            velocity: self.velocity,
            radius: self.physical.radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}

impl PositionQueryable for MatchPlayer {
    fn position(&self) -> Vector3<f32> {
        self.position
    }

    fn velocity(&self) -> Vector3<f32> {
        self.velocity
    }
}

impl Movable for MatchPlayer {
    fn set_intent(&mut self, intent: MovementIntent) -> bool {
        if !intent.is_valid() {
            warn!("{} intent ignored: {:?}", self.team, intent);
            return false;
        }

        self.intent = intent;

        true
    }

    fn max_speed(&self) -> f32 {
        self.physical.max_speed
    }

    fn control_radius(&self) -> f32 {
        self.physical.control_radius
    }
}
