use crate::r#match::AgentSkills;

/// Skill-derived AI constants, fixed for the lifetime of the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    pub skill: f32,
    pub finishing: f32,
    pub technique: f32,
    pub accuracy: f32,
    pub aggressiveness: f32,
    pub decision_speed: f32,
    pub dribbling_tendency: f32,
    pub counter_attack: f32,
    /// Seconds between two decision steps
    pub reaction_delay: f32,
}

impl AiProfile {
    pub fn from_skills(skills: &AgentSkills) -> Self {
        const BASE_REACTION_DELAY: f32 = 0.5;

        let skill = skills.skill_level();

        AiProfile {
            skill,
            finishing: AgentSkills::normalize(skills.finishing),
            technique: AgentSkills::normalize(skills.technique),
            accuracy: skills.accuracy(),
            aggressiveness: AgentSkills::normalize(skills.aggressiveness),
            decision_speed: AgentSkills::normalize(skills.decision_speed),
            dribbling_tendency: AgentSkills::normalize(skills.dribbling_tendency),
            counter_attack: AgentSkills::normalize(skills.counter_attack),
            reaction_delay: BASE_REACTION_DELAY * (1.5 - skill),
        }
    }

    pub fn shooting_distance(&self) -> f32 {
        14.0 + 8.0 * self.finishing
    }

    /// How far from its own goal the agent still drops back to defend.
    pub fn defensive_radius(&self) -> f32 {
        18.0 + 8.0 * (1.0 - self.aggressiveness)
    }

    pub fn aim_delay(&self) -> f32 {
        let readiness = (self.skill + self.decision_speed) / 2.0;
        0.25 + 0.5 * (1.0 - readiness)
    }

    pub fn shot_power(&self) -> f32 {
        18.0 + 12.0 * self.finishing
    }

    /// Maximum angular error of a shot, in radians, at `distance` from the goal.
    pub fn shot_error(&self, distance: f32) -> f32 {
        (0.02 + distance.max(0.0) * 0.004) * (1.5 - self.accuracy)
    }

    pub fn dribble_kick_interval(&self) -> f32 {
        0.5 / (0.5 + self.skill)
    }

    /// Maximum angular error of a dribble touch, in radians.
    pub fn dribble_error(&self) -> f32 {
        dribble_error(self.skill)
    }

    pub fn dribble_power(&self) -> f32 {
        4.0 + 2.0 * self.technique
    }
}

pub fn dribble_error(skill: f32) -> f32 {
    0.05 + 0.35 * (1.0 - skill.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_delay_shrinks_with_skill() {
        let novice = AiProfile::from_skills(&AgentSkills::uniform(0.0));
        let average = AiProfile::from_skills(&AgentSkills::uniform(50.0));
        let expert = AiProfile::from_skills(&AgentSkills::uniform(100.0));

        assert!((novice.reaction_delay - 0.75).abs() < 1e-6);
        assert!((average.reaction_delay - 0.5).abs() < 1e-6);
        assert!((expert.reaction_delay - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_dribble_error_strictly_decreases_with_skill() {
        let errors: Vec<f32> = (0..=10).map(|step| dribble_error(step as f32 / 10.0)).collect();

        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_shot_error_grows_with_distance_and_shrinks_with_accuracy() {
        let average = AiProfile::from_skills(&AgentSkills::uniform(50.0));
        let expert = AiProfile::from_skills(&AgentSkills::uniform(100.0));

        assert!(average.shot_error(20.0) > average.shot_error(5.0));
        assert!(expert.shot_error(20.0) < average.shot_error(20.0));
    }
}
