use crate::r#match::ball::{Ball, BallGoalEventMetadata};
use crate::r#match::FieldGeometry;
use log::debug;

/// Edge-triggered goal-line watcher. The per-goal "inside" flags live on the ball
/// so that resetting the ball also re-arms the detector.
#[derive(Debug, Clone, Copy)]
pub struct GoalDetector {
    check_interval: f32,
}

impl GoalDetector {
    pub fn new(check_interval: f32) -> Self {
        GoalDetector {
            check_interval: check_interval.max(0.0),
        }
    }

    /// Inspects the ball at simulation time `time`. Checks are throttled to one per
    /// `check_interval`, and nothing happens while the match is not being played.
    pub fn check(
        &self,
        ball: &mut Ball,
        geometry: &FieldGeometry,
        time: f32,
        is_playing: bool,
    ) -> Option<BallGoalEventMetadata> {
        if !is_playing || !time.is_finite() {
            return None;
        }

        if let Some(last_check) = ball.flags.last_goal_check {
            if time - last_check < self.check_interval {
                return None;
            }
        }

        ball.flags.last_goal_check = Some(time);

        let mut goal = None;

        for goal_geometry in geometry.goals() {
            let inside = goal_geometry.is_within_mouth(&ball.position)
                && goal_geometry.has_crossed_line(&ball.position);

            let was_inside = ball.flags.is_inside(goal_geometry.side);
            let moving_in = ball.velocity.x * goal_geometry.inward() > 0.0;

            if inside && !was_inside && moving_in && goal.is_none() {
                debug!(
                    "ball crossed {:?} goal line at {:?}",
                    goal_geometry.side, ball.position
                );
                goal = Some(BallGoalEventMetadata::new(goal_geometry.side));
            }

            ball.flags.set_inside(goal_geometry.side, inside);
        }

        goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::ball::{BallPhysicsConfig, GoalSide};
    use crate::r#match::Team;
    use nalgebra::Vector3;

    const DT: f32 = 1.0 / 60.0;

    fn ball_at(position: Vector3<f32>, velocity: Vector3<f32>) -> Ball {
        let mut ball = Ball::with_position(position, BallPhysicsConfig::default());
        ball.velocity = velocity;
        ball
    }

    #[test]
    fn test_crossing_right_line_scores_for_player() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(29.5, 0.5, 0.0), Vector3::new(5.0, 0.0, 0.0));

        assert!(detector.check(&mut ball, &geometry, 0.0, true).is_none());

        ball.position.x = 30.2;
        let goal = detector.check(&mut ball, &geometry, 0.2, true).expect("goal");

        assert_eq!(goal.side, GoalSide::Right);
        assert_eq!(goal.team, Team::Player);
    }

    #[test]
    fn test_crossing_left_line_scores_for_ai() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(-30.4, 1.0, -2.0), Vector3::new(-8.0, 0.0, 0.0));

        let goal = detector.check(&mut ball, &geometry, 1.0, true).expect("goal");

        assert_eq!(goal.team, Team::Ai);
    }

    #[test]
    fn test_ball_held_in_goal_scores_once() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(30.5, 0.5, 0.0), Vector3::new(0.5, 0.0, 0.0));

        let mut goals = 0;
        let mut time = 0.0;
        for _ in 0..600 {
            if detector.check(&mut ball, &geometry, time, true).is_some() {
                goals += 1;
            }
            time += DT;
        }

        assert_eq!(goals, 1);
    }

    #[test]
    fn test_reentry_after_leaving_scores_again() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(30.5, 0.5, 0.0), Vector3::new(1.0, 0.0, 0.0));

        assert!(detector.check(&mut ball, &geometry, 0.0, true).is_some());

        ball.position.x = 28.0;
        assert!(detector.check(&mut ball, &geometry, 0.5, true).is_none());

        ball.position.x = 30.5;
        assert!(detector.check(&mut ball, &geometry, 1.0, true).is_some());
    }

    #[test]
    fn test_checks_are_throttled() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(29.0, 0.5, 0.0), Vector3::new(5.0, 0.0, 0.0));

        assert!(detector.check(&mut ball, &geometry, 1.0, true).is_none());

        ball.position.x = 30.3;
        assert!(detector.check(&mut ball, &geometry, 1.05, true).is_none());
        assert!(!ball.flags.is_inside(GoalSide::Right));

        assert!(detector.check(&mut ball, &geometry, 1.1, true).is_some());
    }

    #[test]
    fn test_ball_over_crossbar_or_wide_does_not_score() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);

        let mut high = ball_at(Vector3::new(30.5, 3.0, 0.0), Vector3::new(5.0, 0.0, 0.0));
        assert!(detector.check(&mut high, &geometry, 0.0, true).is_none());

        let mut wide = ball_at(Vector3::new(30.5, 0.5, 4.0), Vector3::new(5.0, 0.0, 0.0));
        assert!(detector.check(&mut wide, &geometry, 0.0, true).is_none());
    }

    #[test]
    fn test_ball_moving_out_does_not_score() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(30.5, 0.5, 0.0), Vector3::new(-3.0, 0.0, 0.0));

        assert!(detector.check(&mut ball, &geometry, 0.0, true).is_none());
        assert!(ball.flags.is_inside(GoalSide::Right));
    }

    #[test]
    fn test_disabled_when_not_playing() {
        let geometry = FieldGeometry::default();
        let detector = GoalDetector::new(0.1);
        let mut ball = ball_at(Vector3::new(30.5, 0.5, 0.0), Vector3::new(5.0, 0.0, 0.0));

        assert!(detector.check(&mut ball, &geometry, 0.0, false).is_none());
        assert!(ball.flags.last_goal_check.is_none());
        assert!(!ball.flags.is_inside(GoalSide::Right));
    }
}
