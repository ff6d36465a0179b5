use crate::r#match::ball::events::GoalSide;
use crate::r#match::result::VectorExtensions;
use crate::r#match::{FieldGeometry, GoalGeometry, Kickable, PositionQueryable};
use log::{debug, warn};
use nalgebra::Vector3;

/// Tolerance above the resting height that still counts as touching the ground.
const GROUND_CONTACT_EPSILON: f32 = 0.005;
/// Below this vertical speed a ground contact kills the bounce.
const BOUNCE_THRESHOLD: f32 = 0.1;
/// Residual speed clamped to zero while resting on the ground.
const RESTING_SPEED_THRESHOLD: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPhysicsConfig {
    pub radius: f32,
    pub bounciness: f32,
    /// Multiplier applied to horizontal velocity on every grounded step
    pub rolling_friction: f32,
    /// Multiplier applied to the whole velocity on every step
    pub air_resistance: f32,
    pub gravity: Vector3<f32>,
    /// Kick impulse per unit of power, kept below 1 so kicks stay sane
    pub kick_scale: f32,
    /// Base impulse a player body gives the ball on contact
    pub player_push: f32,
}

impl Default for BallPhysicsConfig {
    fn default() -> Self {
        BallPhysicsConfig {
            radius: 0.11,
            bounciness: 0.65,
            rolling_friction: 0.985,
            air_resistance: 0.998,
            gravity: Vector3::new(0.0, -9.81, 0.0),
            kick_scale: 0.5,
            player_push: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BallFlags {
    pub inside_left_goal: bool,
    pub inside_right_goal: bool,
    /// Simulation time of the last goal-line check
    pub last_goal_check: Option<f32>,
}

impl BallFlags {
    pub fn reset(&mut self) {
        self.inside_left_goal = false;
        self.inside_right_goal = false;
        self.last_goal_check = None;
    }

    pub fn is_inside(&self, side: GoalSide) -> bool {
        match side {
            GoalSide::Left => self.inside_left_goal,
            GoalSide::Right => self.inside_right_goal,
        }
    }

    pub fn set_inside(&mut self, side: GoalSide, inside: bool) {
        match side {
            GoalSide::Left => self.inside_left_goal = inside,
            GoalSide::Right => self.inside_right_goal = inside,
        }
    }
}

/// Sphere a player body presents to the ball. `position` is at the feet.
#[derive(Debug, Clone, Copy)]
pub struct PlayerCollider {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub start_position: Vector3<f32>,
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    /// Accumulated roll angles, only used for drawing
    pub rotation: Vector3<f32>,
    pub config: BallPhysicsConfig,
    pub flags: BallFlags,
}

impl Ball {
    pub fn with_position(position: Vector3<f32>, config: BallPhysicsConfig) -> Self {
        Ball {
            start_position: position,
            position,
            velocity: Vector3::zeros(),
            rotation: Vector3::zeros(),
            config,
            flags: BallFlags::default(),
        }
    }

    /// One physics step: integrate, then resolve every collision primitive.
    /// Returns false and leaves the ball untouched when `dt` is not a usable step.
    pub fn update(
        &mut self,
        dt: f32,
        geometry: &FieldGeometry,
        players: &[PlayerCollider],
    ) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            warn!("ball update ignored, invalid dt: {}", dt);
            return false;
        }

        self.integrate(dt);

        for player in players {
            self.resolve_player_collision(player);
        }

        for goal in geometry.goals() {
            self.resolve_post_collisions(goal);
            self.resolve_crossbar_collision(goal);
        }

        self.resolve_boundary_collision(geometry);
        self.resolve_ground_collision();
        self.settle();

        true
    }

    pub fn integrate(&mut self, dt: f32) {
        let previous_velocity = self.velocity;

        // the ground carries a resting or rolling ball, never one that is still falling
        let supported = self.is_grounded()
            && self.velocity.y <= 0.0
            && self.velocity.y >= -BOUNCE_THRESHOLD;
        if supported {
            self.velocity.y = 0.0;
        } else {
            self.velocity += self.config.gravity * dt;
        }

        self.velocity *= self.config.air_resistance;

        self.position += (previous_velocity + self.velocity) * 0.5 * dt;

        let radius = self.config.radius;
        self.rotation.x += self.velocity.z * dt / radius;
        self.rotation.z -= self.velocity.x * dt / radius;
    }

    pub fn resolve_ground_collision(&mut self) {
        let radius = self.config.radius;

        if self.position.y > radius {
            return;
        }

        self.position.y = radius;

        if self.velocity.y.abs() <= BOUNCE_THRESHOLD {
            self.velocity.y = 0.0;
        } else if self.velocity.y < 0.0 {
            self.velocity.y = -self.velocity.y * self.config.bounciness;
        }

        self.velocity.x *= self.config.rolling_friction;
        self.velocity.z *= self.config.rolling_friction;
    }

    pub fn resolve_boundary_collision(&mut self, geometry: &FieldGeometry) {
        let radius = self.config.radius;
        let bounciness = self.config.bounciness;
        let config = &geometry.config;

        // touchlines
        let max_z = config.half_width - radius;
        if self.position.z.abs() > max_z {
            self.position.z = max_z.copysign(self.position.z);
            if self.velocity.z * self.position.z > 0.0 {
                self.velocity.z = -self.velocity.z * bounciness;
            }
        }

        let goal = if self.position.x >= 0.0 {
            &geometry.right_goal
        } else {
            &geometry.left_goal
        };

        let inward = goal.inward();
        let half_mouth = goal.width / 2.0;
        let past_line = (self.position.x - goal.line_x) * inward > 0.0;

        if past_line
            && self.position.z.abs() <= half_mouth
            && self.position.y <= goal.height + radius
        {
            // inside the net: side netting, roof and the hard back boundary
            let max_net_z = half_mouth - radius;
            if self.position.z.abs() > max_net_z {
                self.position.z = max_net_z.copysign(self.position.z);
                if self.velocity.z * self.position.z > 0.0 {
                    self.velocity.z = -self.velocity.z * bounciness;
                }
            }

            let roof = goal.height - radius;
            if self.position.y > roof {
                self.position.y = roof;
                if self.velocity.y > 0.0 {
                    self.velocity.y = -self.velocity.y * bounciness;
                }
            }

            let back_x = goal.back_x() - inward * radius;
            if (self.position.x - back_x) * inward > 0.0 {
                self.position.x = back_x;
                if self.velocity.x * inward > 0.0 {
                    self.velocity.x = -self.velocity.x * bounciness;
                }
            }

            return;
        }

        let in_mouth = self.position.z.abs() < half_mouth && self.position.y < goal.height;
        let wall_x = goal.line_x - inward * radius;

        if !in_mouth && (self.position.x - wall_x) * inward > 0.0 {
            self.position.x = wall_x;
            if self.velocity.x * inward > 0.0 {
                self.velocity.x = -self.velocity.x * bounciness;
            }
        }
    }

    /// Posts are vertical cylinders between the ground and the crossbar.
    pub fn resolve_post_collisions(&mut self, goal: &GoalGeometry) {
        if self.position.y < 0.0 || self.position.y > goal.height {
            return;
        }

        let min_distance = self.config.radius + goal.post_radius;

        for post in &goal.posts {
            let offset = Vector3::new(self.position.x - post.x, 0.0, self.position.z - post.z);
            let distance = offset.norm();

            if distance >= min_distance {
                continue;
            }

            let normal = if distance > f32::EPSILON {
                offset / distance
            } else {
                Vector3::new(-goal.inward(), 0.0, 0.0)
            };

            self.position.x = post.x + normal.x * min_distance;
            self.position.z = post.z + normal.z * min_distance;

            let approach_speed = self.velocity.dot(&normal);
            if approach_speed < 0.0 {
                self.velocity -= normal * approach_speed * (1.0 + self.config.bounciness);
                debug!("ball hit {:?} post at speed {:.2}", goal.side, -approach_speed);
            }
        }
    }

    pub fn resolve_crossbar_collision(&mut self, goal: &GoalGeometry) {
        let reach = self.config.radius + goal.crossbar_thickness;

        let near_x = (self.position.x - goal.crossbar.x).abs() < reach;
        let near_y = (self.position.y - goal.crossbar.y).abs() < reach;
        let between_posts = self.position.z.abs() < goal.width / 2.0;

        if !(near_x && near_y && between_posts) {
            return;
        }

        if self.velocity.y > 0.0 && self.position.y < goal.crossbar.y {
            self.velocity.y = -self.velocity.y * self.config.bounciness;
            self.position.y = goal.crossbar.y - reach;
            debug!("ball hit {:?} crossbar from below", goal.side);
        } else if self.velocity.y < 0.0 && self.position.y > goal.crossbar.y {
            self.velocity.y = -self.velocity.y * self.config.bounciness;
            self.position.y = goal.crossbar.y + reach;
            debug!("ball dropped onto {:?} crossbar", goal.side);
        }
    }

    pub fn resolve_player_collision(&mut self, player: &PlayerCollider) {
        let center = player.position + Vector3::new(0.0, player.radius, 0.0);
        let offset = self.position - center;
        let distance = offset.norm();
        let min_distance = self.config.radius + player.radius;

        if distance >= min_distance {
            return;
        }

        let normal = if distance > f32::EPSILON {
            offset / distance
        } else {
            Vector3::x()
        };

        self.position = center + normal * min_distance;

        let relative_velocity = self.velocity - player.velocity;
        if relative_velocity.dot(&normal) < 0.0 {
            let player_speed = player.velocity.norm();
            self.velocity += normal * (self.config.player_push + player_speed);
        }
    }

    fn settle(&mut self) {
        if self.is_grounded() && self.velocity.norm() < RESTING_SPEED_THRESHOLD {
            self.velocity = Vector3::zeros();
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.position.y <= self.config.radius + GROUND_CONTACT_EPSILON
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector3::zeros();

        self.flags.reset();
    }

    pub fn reset_position(&mut self, position: Vector3<f32>) -> bool {
        if !position.is_finite_vector() {
            warn!("ball reset ignored, invalid position: {:?}", position);
            return false;
        }

        self.position = position;
        self.position.y = self.position.y.max(self.config.radius);
        self.velocity = Vector3::zeros();

        self.flags.reset();

        true
    }
}

impl PositionQueryable for Ball {
    fn position(&self) -> Vector3<f32> {
        self.position
    }

    fn velocity(&self) -> Vector3<f32> {
        self.velocity
    }
}

impl Kickable for Ball {
    fn kick(&mut self, direction: Vector3<f32>, power: f32) -> bool {
        if !direction.is_finite_vector() || !power.is_finite() || power < 0.0 {
            warn!("kick ignored, direction: {:?}, power: {}", direction, power);
            return false;
        }

        let length = direction.norm();
        if length <= f32::EPSILON {
            warn!("kick ignored, zero direction");
            return false;
        }

        self.velocity += direction / length * power * self.config.kick_scale;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ball_at(position: Vector3<f32>) -> Ball {
        Ball::with_position(position, BallPhysicsConfig::default())
    }

    fn resting_ball() -> Ball {
        let radius = BallPhysicsConfig::default().radius;
        ball_at(Vector3::new(0.0, radius, 0.0))
    }

    #[test]
    fn test_integrate_displacement_is_bounded() {
        let gravity = BallPhysicsConfig::default().gravity.norm();

        for dt in [0.0, 0.001, DT, 0.05, 0.1] {
            let mut ball = ball_at(Vector3::new(0.0, 5.0, 0.0));
            ball.velocity = Vector3::new(7.0, 3.0, -2.0);

            let before = ball.position;
            let speed = ball.velocity.norm();
            ball.integrate(dt);

            let displacement = (ball.position - before).norm();
            let bound = speed * dt + 0.5 * gravity * dt * dt;
            assert!(displacement <= bound + 1e-5, "dt {}: {} > {}", dt, displacement, bound);
        }
    }

    #[test]
    fn test_ball_never_ends_below_radius() {
        let geometry = FieldGeometry::default();
        let mut ball = ball_at(Vector3::new(0.0, 8.0, 0.0));
        ball.velocity = Vector3::new(3.0, -20.0, 1.0);

        for _ in 0..600 {
            ball.update(DT, &geometry, &[]);
            assert!(ball.position.y >= ball.config.radius);
        }
    }

    #[test]
    fn test_ground_bounce_reflects_vertical_velocity() {
        let mut ball = resting_ball();
        ball.position.y = ball.config.radius - 0.02;
        ball.velocity = Vector3::new(0.0, -5.0, 0.0);

        ball.resolve_ground_collision();

        assert_eq!(ball.position.y, ball.config.radius);
        assert!((ball.velocity.y - 5.0 * ball.config.bounciness).abs() < 1e-6);
    }

    #[test]
    fn test_dropped_ball_bounces_on_first_contact() {
        let geometry = FieldGeometry::default();

        for step in 0..250 {
            let height = 0.5 + step as f32 * 0.01;
            let mut ball = ball_at(Vector3::new(0.0, height, 0.0));
            let mut bounced = false;

            for _ in 0..300 {
                let mut predicted = ball.clone();
                predicted.integrate(DT);

                ball.update(DT, &geometry, &[]);

                if predicted.position.y <= ball.config.radius {
                    let incoming = predicted.velocity.y;
                    assert!(incoming.abs() > BOUNCE_THRESHOLD, "height {}", height);
                    assert!(
                        (ball.velocity.y + incoming * ball.config.bounciness).abs() < 1e-4,
                        "height {}: vy {} after incoming {}",
                        height,
                        ball.velocity.y,
                        incoming
                    );
                    bounced = true;
                    break;
                }
            }

            assert!(bounced, "ball dropped from {} never reached the ground", height);
        }
    }

    #[test]
    fn test_falling_ball_just_above_ground_still_bounces() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.position.y = ball.config.radius + 0.004;
        ball.velocity = Vector3::new(0.0, -5.0, 0.0);

        ball.update(DT, &geometry, &[]);

        assert_eq!(ball.position.y, ball.config.radius);
        assert!(ball.velocity.y > 5.0 * ball.config.bounciness * 0.9);
    }

    #[test]
    fn test_small_ground_bounce_is_killed() {
        let mut ball = resting_ball();
        ball.position.y = ball.config.radius - 0.001;
        ball.velocity = Vector3::new(2.0, -0.1, 0.0);

        ball.resolve_ground_collision();

        assert_eq!(ball.velocity.y, 0.0);
        assert!((ball.velocity.x - 2.0 * ball.config.rolling_friction).abs() < 1e-6);
    }

    #[test]
    fn test_resting_ball_does_not_jitter() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();

        for _ in 0..300 {
            ball.update(DT, &geometry, &[]);
        }

        assert_eq!(ball.position, Vector3::new(0.0, ball.config.radius, 0.0));
        assert_eq!(ball.velocity, Vector3::zeros());
    }

    #[test]
    fn test_rolling_ball_comes_to_exact_stop() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.velocity = Vector3::new(3.0, 0.0, 0.0);

        for _ in 0..2000 {
            ball.update(DT, &geometry, &[]);
        }

        assert_eq!(ball.velocity, Vector3::zeros());
        assert!(ball.position.x > 0.0);
    }

    #[test]
    fn test_kick_from_rest() {
        let mut ball = resting_ball();

        assert!(ball.kick(Vector3::new(-1.0, 0.0, 0.0), 2.0));

        assert!(ball.velocity.x < 0.0);
        assert!((ball.velocity.x.abs() - 2.0 * ball.config.kick_scale).abs() < 1e-6);
        assert!(ball.config.kick_scale < 1.0);
    }

    #[test]
    fn test_kick_normalizes_direction() {
        let mut ball = resting_ball();

        ball.kick(Vector3::new(0.0, 0.0, 10.0), 4.0);

        assert!((ball.velocity.z - 4.0 * ball.config.kick_scale).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_kick_is_noop() {
        let mut ball = resting_ball();

        assert!(!ball.kick(Vector3::new(f32::NAN, 0.0, 0.0), 2.0));
        assert!(!ball.kick(Vector3::zeros(), 2.0));
        assert!(!ball.kick(Vector3::new(1.0, 0.0, 0.0), f32::INFINITY));
        assert!(!ball.kick(Vector3::new(1.0, 0.0, 0.0), -1.0));

        assert_eq!(ball.velocity, Vector3::zeros());
    }

    #[test]
    fn test_invalid_dt_is_noop() {
        let geometry = FieldGeometry::default();
        let mut ball = ball_at(Vector3::new(1.0, 3.0, 1.0));
        ball.velocity = Vector3::new(1.0, 1.0, 1.0);

        assert!(!ball.update(f32::NAN, &geometry, &[]));
        assert!(!ball.update(-0.1, &geometry, &[]));

        assert_eq!(ball.position, Vector3::new(1.0, 3.0, 1.0));
        assert_eq!(ball.velocity, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_touchline_reflects() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.position.z = 19.95;
        ball.velocity = Vector3::new(0.0, 0.0, 4.0);

        ball.resolve_boundary_collision(&geometry);

        assert!(ball.position.z <= geometry.config.half_width - ball.config.radius);
        assert!((ball.velocity.z + 4.0 * ball.config.bounciness).abs() < 1e-6);
    }

    #[test]
    fn test_goal_line_reflects_outside_mouth() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.position = Vector3::new(29.95, ball.config.radius, 10.0);
        ball.velocity = Vector3::new(5.0, 0.0, 0.0);

        ball.resolve_boundary_collision(&geometry);

        assert!(ball.position.x < 30.0);
        assert!(ball.velocity.x < 0.0);
    }

    #[test]
    fn test_goal_mouth_lets_ball_through() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.position = Vector3::new(29.95, ball.config.radius, 0.0);
        ball.velocity = Vector3::new(5.0, 0.0, 0.0);

        for _ in 0..6 {
            ball.update(DT, &geometry, &[]);
        }

        assert!(ball.position.x > 30.0);
        assert!(ball.velocity.x > 0.0);
    }

    #[test]
    fn test_back_of_net_holds_ball() {
        let geometry = FieldGeometry::default();
        let mut ball = resting_ball();
        ball.position = Vector3::new(-31.0, ball.config.radius, 1.0);
        ball.velocity = Vector3::new(-20.0, 0.0, 0.0);

        for _ in 0..30 {
            ball.update(DT, &geometry, &[]);
            assert!(ball.position.x >= -32.0 + ball.config.radius - 1e-4);
        }
    }

    #[test]
    fn test_post_pushes_out_and_reflects() {
        let geometry = FieldGeometry::default();
        let goal = geometry.right_goal;
        let post = goal.posts[1];

        let mut ball = resting_ball();
        ball.position = Vector3::new(post.x - 0.1, 0.5, post.z);
        ball.velocity = Vector3::new(6.0, 0.0, 0.0);

        ball.resolve_post_collisions(&goal);

        let horizontal = Vector3::new(ball.position.x - post.x, 0.0, ball.position.z - post.z);
        assert!((horizontal.norm() - (ball.config.radius + goal.post_radius)).abs() < 1e-5);
        assert!((ball.velocity.x + 6.0 * ball.config.bounciness).abs() < 1e-5);
    }

    #[test]
    fn test_post_ignores_ball_moving_away() {
        let geometry = FieldGeometry::default();
        let goal = geometry.right_goal;
        let post = goal.posts[0];

        let mut ball = resting_ball();
        ball.position = Vector3::new(post.x - 0.1, 0.5, post.z);
        ball.velocity = Vector3::new(-3.0, 0.0, 0.0);

        ball.resolve_post_collisions(&goal);

        assert_eq!(ball.velocity, Vector3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn test_post_ignored_above_crossbar() {
        let geometry = FieldGeometry::default();
        let goal = geometry.left_goal;
        let post = goal.posts[0];

        let mut ball = resting_ball();
        ball.position = Vector3::new(post.x + 0.1, goal.height + 1.0, post.z);
        ball.velocity = Vector3::new(-3.0, 0.0, 0.0);

        ball.resolve_post_collisions(&goal);

        assert_eq!(ball.velocity.x, -3.0);
    }

    #[test]
    fn test_crossbar_reflects_rising_ball() {
        let geometry = FieldGeometry::default();
        let goal = geometry.right_goal;

        let mut ball = resting_ball();
        ball.position = Vector3::new(goal.line_x, goal.height - 0.1, 0.5);
        ball.velocity = Vector3::new(4.0, 3.0, 0.0);

        ball.resolve_crossbar_collision(&goal);

        assert!((ball.velocity.y + 3.0 * ball.config.bounciness).abs() < 1e-6);
        assert!(ball.position.y < goal.height);
    }

    #[test]
    fn test_player_contact_separates_and_pushes() {
        let mut ball = resting_ball();
        ball.position = Vector3::new(0.3, 0.5, 0.0);

        let player = PlayerCollider {
            position: Vector3::zeros(),
            velocity: Vector3::new(2.0, 0.0, 0.0),
            radius: 0.5,
        };

        ball.resolve_player_collision(&player);

        let center = Vector3::new(0.0, 0.5, 0.0);
        assert!(((ball.position - center).norm() - (ball.config.radius + 0.5)).abs() < 1e-5);
        assert!((ball.velocity.x - (ball.config.player_push + 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_reset_clears_goal_flags() {
        let mut ball = resting_ball();
        ball.position = Vector3::new(31.0, 0.5, 0.0);
        ball.velocity = Vector3::new(1.0, 0.0, 0.0);
        ball.flags.set_inside(GoalSide::Right, true);
        ball.flags.last_goal_check = Some(4.0);

        ball.reset();

        assert_eq!(ball.position, ball.start_position);
        assert_eq!(ball.velocity, Vector3::zeros());
        assert!(!ball.flags.is_inside(GoalSide::Right));
        assert!(ball.flags.last_goal_check.is_none());
    }

    #[test]
    fn test_reset_position_rejects_nan() {
        let mut ball = resting_ball();

        assert!(!ball.reset_position(Vector3::new(f32::NAN, 0.0, 0.0)));
        assert!(ball.reset_position(Vector3::new(3.0, 0.0, 2.0)));
        assert_eq!(ball.position, Vector3::new(3.0, ball.config.radius, 2.0));
    }
}
