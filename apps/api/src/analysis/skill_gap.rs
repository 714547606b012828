use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::SkillGapRequest;
use crate::models::career::{CareerPath, Priority, SkillGap};

const MAX_GAPS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillGapFormError {
    #[error("Please enter a target career")]
    MissingTargetCareer,

    #[error("Please enter your current skills")]
    MissingCurrentSkills,
}

/// Free-text skill-gap form. `current_skills` is a comma-separated list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGapForm {
    #[serde(default)]
    pub target_career: String,
    #[serde(default)]
    pub current_skills: String,
}

impl SkillGapForm {
    pub fn validate(&self) -> Result<SkillGapRequest, SkillGapFormError> {
        let target_career = self.target_career.trim();
        if target_career.is_empty() {
            return Err(SkillGapFormError::MissingTargetCareer);
        }

        let current_skills: Vec<String> = self
            .current_skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if current_skills.is_empty() {
            return Err(SkillGapFormError::MissingCurrentSkills);
        }

        Ok(SkillGapRequest {
            target_career: target_career.to_string(),
            current_skills,
        })
    }
}

/// Illustrative gaps for a career's first five required skills. The two leading skills
/// are high priority, the next two medium, the rest low.
pub fn generate_skill_gaps<R: Rng + ?Sized>(career: &CareerPath, rng: &mut R) -> Vec<SkillGap> {
    career
        .required_skills
        .iter()
        .take(MAX_GAPS)
        .enumerate()
        .map(|(index, skill)| {
            let (priority, estimated_time) = match index {
                0 | 1 => (Priority::High, "3-6 months"),
                2 | 3 => (Priority::Medium, "2-4 months"),
                _ => (Priority::Low, "1-2 months"),
            };
            SkillGap {
                skill: skill.clone(),
                current_level: rng.gen_range(1..=5),
                required_level: rng.gen_range(7..=9),
                priority,
                estimated_time: estimated_time.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_career;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn form(target: &str, skills: &str) -> SkillGapForm {
        SkillGapForm {
            target_career: target.to_string(),
            current_skills: skills.to_string(),
        }
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            form("", "Python").validate(),
            Err(SkillGapFormError::MissingTargetCareer)
        );
        assert_eq!(
            form("Data Scientist", "   ").validate(),
            Err(SkillGapFormError::MissingCurrentSkills)
        );
        assert_eq!(
            form("Data Scientist", " , ,").validate(),
            Err(SkillGapFormError::MissingCurrentSkills)
        );
    }

    #[test]
    fn test_skills_split_on_commas() {
        let request = form(" Data Scientist ", "Python, SQL ,Excel").validate().unwrap();
        assert_eq!(request.target_career, "Data Scientist");
        assert_eq!(request.current_skills, vec!["Python", "SQL", "Excel"]);
    }

    #[test]
    fn test_generated_gaps_levels_and_priorities() {
        let career = find_career("data-scientist").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let gaps = generate_skill_gaps(career, &mut rng);

        assert_eq!(gaps.len(), 5);
        assert_eq!(gaps[0].skill, "Statistics");
        for gap in &gaps {
            assert!((1..=5).contains(&gap.current_level));
            assert!((7..=9).contains(&gap.required_level));
        }
        assert_eq!(gaps[1].priority, Priority::High);
        assert_eq!(gaps[1].estimated_time, "3-6 months");
        assert_eq!(gaps[3].priority, Priority::Medium);
        assert_eq!(gaps[4].priority, Priority::Low);
        assert_eq!(gaps[4].estimated_time, "1-2 months");
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let career = find_career("teacher").unwrap();
        let a = generate_skill_gaps(career, &mut StdRng::seed_from_u64(1));
        let b = generate_skill_gaps(career, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
