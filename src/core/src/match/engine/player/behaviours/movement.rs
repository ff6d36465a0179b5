use crate::r#match::result::VectorExtensions;
use crate::r#match::{FieldGeometry, MatchPlayer, SteeringBehavior};
use nalgebra::Vector3;
use std::f32::consts::{PI, TAU};

const ARRIVE_SLOWING_DISTANCE: f32 = 1.5;

/// What a body has been told to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MovementIntent {
    #[default]
    Idle,
    MoveTo {
        target: Vector3<f32>,
        sprint: bool,
    },
    Direction {
        direction: Vector3<f32>,
        sprint: bool,
    },
}

impl MovementIntent {
    pub fn is_valid(&self) -> bool {
        match self {
            MovementIntent::Idle => true,
            MovementIntent::MoveTo { target, .. } => target.is_finite_vector(),
            MovementIntent::Direction { direction, .. } => direction.is_finite_vector(),
        }
    }

    pub fn is_sprint(&self) -> bool {
        match self {
            MovementIntent::Idle => false,
            MovementIntent::MoveTo { sprint, .. } | MovementIntent::Direction { sprint, .. } => {
                *sprint
            }
        }
    }
}

/// Kinematic stepper shared by the human and the AI bodies.
pub struct MovementIntegrator;

impl MovementIntegrator {
    pub fn step(player: &mut MatchPlayer, dt: f32, geometry: &FieldGeometry) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            return false;
        }

        let speed = if player.intent.is_sprint() {
            player.physical.sprint_speed
        } else {
            player.physical.max_speed
        };

        let behavior = match player.intent {
            MovementIntent::Idle => SteeringBehavior::Brake,
            MovementIntent::MoveTo { target, .. } => SteeringBehavior::Arrive {
                target,
                speed,
                slowing_distance: ARRIVE_SLOWING_DISTANCE,
            },
            MovementIntent::Direction { direction, .. } => {
                if direction.horizontal().norm() > f32::EPSILON {
                    SteeringBehavior::Seek {
                        target: player.position + direction.horizontal(),
                        speed,
                    }
                } else {
                    SteeringBehavior::Brake
                }
            }
        };

        let output = behavior.calculate(player, dt);

        player.velocity = output.velocity;
        player.facing = Self::ease_heading(
            player.facing,
            output.rotation,
            player.physical.turn_rate * dt,
        );

        let moved = player.position + player.velocity * dt;
        let clamped = geometry.clamp_to_bounds(moved);

        if clamped.x != moved.x {
            player.velocity.x = 0.0;
        }
        if clamped.z != moved.z {
            player.velocity.z = 0.0;
        }

        player.position = clamped;

        true
    }

    /// Moves `current` toward `target` by a fraction of the shortest angular gap.
    pub fn ease_heading(current: f32, target: f32, factor: f32) -> f32 {
        let mut delta = (target - current) % TAU;
        if delta > PI {
            delta -= TAU;
        } else if delta < -PI {
            delta += TAU;
        }

        let heading = current + delta * factor.clamp(0.0, 1.0);

        // keep the heading in (-PI, PI]
        if heading > PI {
            heading - TAU
        } else if heading <= -PI {
            heading + TAU
        } else {
            heading
        }
    }
}
