//! Records for the "try this career out" flow.
//!
//! These travel to and from the remote analysis endpoint, so they use the backend's
//! camelCase field names on the wire.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A beginner-friendly task that gives a taste of a career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration: String,
    pub icon: String,
    #[serde(default)]
    pub requires_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// What the user reported for one task, in the shape the analysis endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSubmission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub user_answer: String,
    pub time_spent: String,
    pub completed: bool,
}

/// Optional self-description sent alongside task submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis: CareerAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onet_data: Option<OnetData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    /// 0–100, computed server-side.
    pub fit_score: f64,
    #[serde(default)]
    pub fit_label: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
    #[serde(default)]
    pub personality_insights: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub alternative_careers: Vec<String>,
    #[serde(default)]
    pub motivational_message: String,
}

/// Supplementary occupational statistics looked up server-side from O*NET.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnetData {
    #[serde(default)]
    pub onet_url: String,
    #[serde(default)]
    pub bright_outlook: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlook: Option<String>,
    #[serde(default)]
    pub top_skills: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// An uploaded photo of the user's work, held in memory until analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageAttachment {
    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}
