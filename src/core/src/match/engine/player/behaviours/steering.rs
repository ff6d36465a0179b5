use crate::r#match::MatchPlayer;
use nalgebra::Vector3;

pub enum SteeringBehavior {
    Seek {
        target: Vector3<f32>,
        speed: f32,
    },
    Arrive {
        target: Vector3<f32>,
        speed: f32,
        slowing_distance: f32,
    },
    Brake,
}

impl SteeringBehavior {
    /// Velocity change is bounded by the player's acceleration over `dt`.
    pub fn calculate(&self, player: &MatchPlayer, dt: f32) -> SteeringOutput {
        let max_force = player.physical.acceleration * dt;

        match self {
            SteeringBehavior::Seek { target, speed } => {
                let to_target = Self::flatten(*target - player.position);
                let desired_velocity = if to_target.norm() > 0.0 {
                    to_target.normalize() * *speed
                } else {
                    Vector3::zeros()
                };

                Self::steer(player, desired_velocity, max_force, *speed)
            }
            SteeringBehavior::Arrive {
                target,
                speed,
                slowing_distance,
            } => {
                const ARRIVAL_DEADZONE: f32 = 0.1;

                let to_target = Self::flatten(*target - player.position);
                let distance = to_target.norm();

                if distance < ARRIVAL_DEADZONE {
                    return Self::steer(player, Vector3::zeros(), max_force, *speed);
                }

                let safe_slowing_distance = slowing_distance.max(0.5);
                let desired_speed = if distance < safe_slowing_distance {
                    *speed * distance / safe_slowing_distance
                } else {
                    *speed
                };

                let desired_velocity = to_target / distance * desired_speed;

                Self::steer(player, desired_velocity, max_force, *speed)
            }
            SteeringBehavior::Brake => Self::steer(player, Vector3::zeros(), max_force, 0.0),
        }
    }

    fn steer(
        player: &MatchPlayer,
        desired_velocity: Vector3<f32>,
        max_force: f32,
        max_speed: f32,
    ) -> SteeringOutput {
        let steering = Self::limit_magnitude(desired_velocity - player.velocity, max_force);

        // never exceed the current cap, but let an over-speed body slow down gradually
        let speed_cap = max_speed.max(player.velocity.norm() - max_force).max(0.0);
        let velocity = Self::limit_magnitude(player.velocity + steering, speed_cap);

        let rotation = if desired_velocity.norm() > 0.0 {
            desired_velocity.z.atan2(desired_velocity.x)
        } else {
            player.facing
        };

        SteeringOutput { velocity, rotation }
    }

    fn flatten(v: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(v.x, 0.0, v.z)
    }

    pub fn limit_magnitude(v: Vector3<f32>, max_magnitude: f32) -> Vector3<f32> {
        let current_magnitude = v.norm();
        if current_magnitude > max_magnitude && current_magnitude > 0.0 {
            v * (max_magnitude / current_magnitude)
        } else {
            v
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SteeringOutput {
    pub velocity: Vector3<f32>,
    /// Heading the body wants to face, radians around the y axis
    pub rotation: f32,
}
