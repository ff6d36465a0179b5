use crate::r#match::ball::{Ball, BallPhysicsConfig, GoalSide};
use crate::r#match::{AgentSkills, MatchPlayer, PlayerPhysical, Team};
use nalgebra::Vector3;

/// Static pitch dimensions. y is up, x runs between the goals, z across the pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub half_length: f32,
    pub half_width: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub goal_depth: f32,
    pub post_radius: f32,
    pub crossbar_thickness: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            half_length: 30.0,
            half_width: 20.0,
            goal_width: 7.32,
            goal_height: 2.44,
            goal_depth: 2.0,
            post_radius: 0.06,
            crossbar_thickness: 0.06,
        }
    }
}

/// Immutable geometry of one goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalGeometry {
    pub side: GoalSide,
    pub posts: [Vector3<f32>; 2],
    pub crossbar: Vector3<f32>,
    pub line_x: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub post_radius: f32,
    pub crossbar_thickness: f32,
}

impl GoalGeometry {
    pub fn new(config: &FieldConfig, side: GoalSide) -> Self {
        let line_x = match side {
            GoalSide::Left => -config.half_length,
            GoalSide::Right => config.half_length,
        };

        let half_width = config.goal_width / 2.0;

        GoalGeometry {
            side,
            posts: [
                Vector3::new(line_x, 0.0, -half_width),
                Vector3::new(line_x, 0.0, half_width),
            ],
            crossbar: Vector3::new(line_x, config.goal_height, 0.0),
            line_x,
            width: config.goal_width,
            height: config.goal_height,
            depth: config.goal_depth,
            post_radius: config.post_radius,
            crossbar_thickness: config.crossbar_thickness,
        }
    }

    /// Sign of the x axis pointing from the pitch into the net.
    #[inline]
    pub fn inward(&self) -> f32 {
        self.line_x.signum()
    }

    /// Center of the goal mouth on the ground.
    #[inline]
    pub fn center(&self) -> Vector3<f32> {
        Vector3::new(self.line_x, 0.0, 0.0)
    }

    #[inline]
    pub fn back_x(&self) -> f32 {
        self.line_x + self.inward() * self.depth
    }

    pub fn has_crossed_line(&self, position: &Vector3<f32>) -> bool {
        (position.x - self.line_x) * self.inward() >= 0.0
    }

    /// Height and lateral checks of the scoring volume.
    pub fn is_within_mouth(&self, position: &Vector3<f32>) -> bool {
        position.y >= 0.0 && position.y <= self.height && position.z.abs() <= self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldGeometry {
    pub config: FieldConfig,
    pub left_goal: GoalGeometry,
    pub right_goal: GoalGeometry,
}

impl FieldGeometry {
    pub fn new(config: FieldConfig) -> Self {
        FieldGeometry {
            config,
            left_goal: GoalGeometry::new(&config, GoalSide::Left),
            right_goal: GoalGeometry::new(&config, GoalSide::Right),
        }
    }

    pub fn goals(&self) -> [&GoalGeometry; 2] {
        [&self.left_goal, &self.right_goal]
    }

    pub fn goal(&self, side: GoalSide) -> &GoalGeometry {
        match side {
            GoalSide::Left => &self.left_goal,
            GoalSide::Right => &self.right_goal,
        }
    }

    /// Goal the team shoots at.
    pub fn attacking_goal(&self, team: Team) -> &GoalGeometry {
        self.goal(GoalSide::attacked_by(team))
    }

    /// Goal the team defends.
    pub fn own_goal(&self, team: Team) -> &GoalGeometry {
        self.goal(GoalSide::attacked_by(team.opponent()))
    }

    pub fn center_spot(&self) -> Vector3<f32> {
        Vector3::zeros()
    }

    pub fn kickoff_position(&self, team: Team) -> Vector3<f32> {
        const KICKOFF_DISTANCE: f32 = 5.0;

        let own_goal = self.own_goal(team);
        Vector3::new(own_goal.inward() * KICKOFF_DISTANCE, 0.0, 0.0)
    }

    /// Ground area agents may occupy: the pitch plus the depth of the goals.
    pub fn clamp_to_bounds(&self, position: Vector3<f32>) -> Vector3<f32> {
        let max_x = self.config.half_length + self.config.goal_depth;

        Vector3::new(
            position.x.clamp(-max_x, max_x),
            0.0,
            position.z.clamp(-self.config.half_width, self.config.half_width),
        )
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        FieldGeometry::new(FieldConfig::default())
    }
}

/// Everything that moves on the pitch for one match.
pub struct MatchField {
    pub geometry: FieldGeometry,
    pub ball: Ball,
    pub player: MatchPlayer,
    pub opponent: MatchPlayer,
}

impl MatchField {
    pub fn new(
        config: FieldConfig,
        ball_config: BallPhysicsConfig,
        player_skills: AgentSkills,
        opponent_skills: AgentSkills,
    ) -> Self {
        let geometry = FieldGeometry::new(config);

        let ball_start = geometry.center_spot() + Vector3::new(0.0, ball_config.radius, 0.0);

        MatchField {
            ball: Ball::with_position(ball_start, ball_config),
            player: MatchPlayer::new(
                Team::Player,
                geometry.kickoff_position(Team::Player),
                PlayerPhysical::default(),
                player_skills,
            ),
            opponent: MatchPlayer::new(
                Team::Ai,
                geometry.kickoff_position(Team::Ai),
                PlayerPhysical::default(),
                opponent_skills,
            ),
            geometry,
        }
    }

    pub fn reset_players_positions(&mut self) {
        self.player.reset();
        self.opponent.reset();
    }

    pub fn player_mut(&mut self, team: Team) -> &mut MatchPlayer {
        match team {
            Team::Player => &mut self.player,
            Team::Ai => &mut self.opponent,
        }
    }
}
