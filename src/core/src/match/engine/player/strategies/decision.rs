use crate::r#match::result::VectorExtensions;
use crate::r#match::{AiState, StateProcessingContext};
use nalgebra::Vector3;

/// Angle the goal mouth subtends from `distance` away, in radians.
pub fn shooting_angle(goal_width: f32, distance: f32) -> f32 {
    if distance <= f32::EPSILON {
        return std::f32::consts::PI;
    }

    2.0 * ((goal_width / 2.0) / distance).atan()
}

/// Smallest acceptable shooting angle. Better players settle for narrower windows.
pub fn min_shooting_angle(skill: f32) -> f32 {
    0.1 + 0.2 * (1.0 - skill.clamp(0.0, 1.0))
}

pub struct AiDecision;

impl AiDecision {
    /// Picks the next state. Random draws happen only in the branches that need them.
    pub fn decide(ctx: &mut StateProcessingContext) -> AiState {
        const OPPONENT_PRESSURE_DISTANCE: f32 = 3.0;
        const LONG_DRIBBLE_DISTANCE: f32 = 15.0;
        const LONG_DRIBBLE_CHANCE: f32 = 0.3;
        const CHASE_DISTANCE: f32 = 10.0;

        let perception = ctx.perception;

        if perception.has_ball() {
            let goal_distance = perception.distance_to_target_goal();
            let goal_direction = perception.goal_direction_from(&perception.position);

            if goal_distance < ctx.profile.shooting_distance()
                && ctx.memory.action_cooldown <= 0.0
                && Self::has_shooting_angle(ctx, goal_distance)
            {
                return AiState::Shoot;
            }

            if perception.distance_to_opponent() < OPPONENT_PRESSURE_DISTANCE
                && ctx.rng.unit() < ctx.profile.dribbling_tendency
            {
                ctx.memory.dribble_direction = Some(Self::evasive_direction(ctx, goal_direction));
                return AiState::Dribble;
            }

            if goal_distance > LONG_DRIBBLE_DISTANCE && ctx.rng.unit() < LONG_DRIBBLE_CHANCE {
                ctx.memory.dribble_direction = Some(goal_direction);
                return AiState::Dribble;
            }

            if ctx.memory.dribble_direction.is_none() {
                ctx.memory.dribble_direction = Some(goal_direction);
            }

            return AiState::Dribble;
        }

        let ball_distance = perception.distance_to_ball();

        if ball_distance < 1.5 * perception.control_radius {
            return AiState::ChaseBall;
        }

        if perception.opponent_distance_to_ball() < ball_distance
            && perception.distance_to_own_goal() < ctx.profile.defensive_radius()
        {
            return AiState::Defend;
        }

        if ball_distance < CHASE_DISTANCE {
            return AiState::ChaseBall;
        }

        AiState::ReturnToPosition
    }

    fn has_shooting_angle(ctx: &StateProcessingContext, goal_distance: f32) -> bool {
        shooting_angle(ctx.perception.goal_width, goal_distance)
            > min_shooting_angle(ctx.profile.skill)
    }

    /// 70% toward goal, 30% sideways away from the opponent, bending toward the middle.
    fn evasive_direction(ctx: &StateProcessingContext, goal_direction: Vector3<f32>) -> Vector3<f32> {
        let perception = ctx.perception;

        let to_opponent = (perception.opponent_position - perception.position).horizontal();
        let to_opponent = if to_opponent.norm() > f32::EPSILON {
            to_opponent.normalize()
        } else {
            goal_direction
        };

        let mut perpendicular = Vector3::new(-to_opponent.z, 0.0, to_opponent.x);

        let half = if perception.position.z >= 0.0 { 1.0 } else { -1.0 };
        if perpendicular.z * half > 0.0 {
            perpendicular = -perpendicular;
        }

        let blended = goal_direction * 0.7 + perpendicular * 0.3;

        if blended.norm() > f32::EPSILON {
            blended.normalize()
        } else {
            goal_direction
        }
    }
}
