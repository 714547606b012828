use serde::{Deserialize, Serialize};

/// How hot the job market is for a career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    Medium,
    Growing,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Growing => "Growing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub average_salary: String,
    pub growth_rate: String,
    pub required_skills: Vec<String>,
    pub education_level: String,
    pub work_environment: String,
    pub demand_level: DemandLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Certification,
    Bootcamp,
    Tutorial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub duration: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One skill the user still has to build for a career.
/// Levels are on a 1–10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: u8,
    pub required_level: u8,
    pub priority: Priority,
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub stipend: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub posted: String,
    pub apply_url: String,
}

/// Entry in the general-purpose resource library (not tied to a single career).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryResource {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub provider: String,
    pub level: Level,
    pub rating: f32,
}

/// Average salary for a role, in lakhs per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPoint {
    pub name: String,
    pub salary: f32,
}

/// Job-posting index per sector, 2020 = 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: String,
    pub tech: u32,
    pub health: u32,
    pub creative: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub items: Vec<String>,
}
