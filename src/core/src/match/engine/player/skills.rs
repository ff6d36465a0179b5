/// Agent ratings on the 0-100 roster scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSkills {
    pub overall: f32,
    pub finishing: f32,
    pub composure: f32,
    pub technique: f32,
    pub aggressiveness: f32,
    pub decision_speed: f32,
    pub dribbling_tendency: f32,
    pub counter_attack: f32,
}

impl AgentSkills {
    pub fn uniform(rating: f32) -> Self {
        AgentSkills {
            overall: rating,
            finishing: rating,
            composure: rating,
            technique: rating,
            aggressiveness: rating,
            decision_speed: rating,
            dribbling_tendency: rating,
            counter_attack: rating,
        }
    }

    #[inline]
    pub fn normalize(rating: f32) -> f32 {
        if rating.is_finite() {
            (rating / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Overall rating in 0..1
    pub fn skill_level(&self) -> f32 {
        Self::normalize(self.overall)
    }

    /// Shot accuracy in 0..1, blended from finishing, composure and technique.
    pub fn accuracy(&self) -> f32 {
        0.4 * Self::normalize(self.finishing)
            + 0.3 * Self::normalize(self.composure)
            + 0.3 * Self::normalize(self.technique)
    }
}

impl Default for AgentSkills {
    fn default() -> Self {
        AgentSkills::uniform(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clamps_ratings() {
        assert_eq!(AgentSkills::normalize(150.0), 1.0);
        assert_eq!(AgentSkills::normalize(-10.0), 0.0);
        assert_eq!(AgentSkills::normalize(f32::NAN), 0.0);
        assert!((AgentSkills::normalize(70.0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_accuracy_blend() {
        let skills = AgentSkills {
            finishing: 100.0,
            composure: 0.0,
            technique: 50.0,
            ..AgentSkills::default()
        };

        assert!((skills.accuracy() - 0.55).abs() < 1e-6);
        assert!((AgentSkills::uniform(100.0).accuracy() - 1.0).abs() < 1e-6);
    }
}
