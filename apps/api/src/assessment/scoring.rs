//! Assessment results: backend recommendations with a local fallback.
//!
//! The backend scores answers with AI. When it is unreachable, errors, or recommends
//! nothing, the catalog is scored locally instead:
//!
//! 1. Each career starts at 70 plus a random 0–24.
//! 2. Every `right` swipe adds a category boost: +3 Technology, +3 Design/Creative,
//!    +2 Healthcare/Education.
//! 3. The score is clamped to [65, 98].
//! 4. Careers are sorted by score, highest first, and the top 5 kept.

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::assessment::swipe::{SwipeAnswers, SwipeChoice};
use crate::backend::{AiInsight, CareerBackend};
use crate::catalog::career_paths;
use crate::catalog::mapping::from_backend;
use crate::models::career::CareerPath;

pub const BASE_SCORE: u32 = 70;
pub const SCORE_JITTER: u32 = 25;
pub const MIN_MATCH_SCORE: u32 = 65;
pub const MAX_MATCH_SCORE: u32 = 98;
pub const TOP_CAREERS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub careers: Vec<CareerPath>,
    pub ai_insight: Option<AiInsight>,
    /// True when the careers were scored locally because the backend gave nothing usable.
    pub fallback: bool,
}

fn category_boost(category: &str) -> u32 {
    match category {
        "Technology" => 3,
        "Design" | "Creative" => 3,
        "Healthcare" | "Education" => 2,
        _ => 0,
    }
}

/// Scores `careers` locally. Deterministic for a seeded `rng`.
pub fn fallback_recommendations<R: Rng + ?Sized>(
    careers: &[CareerPath],
    answers: &SwipeAnswers,
    rng: &mut R,
) -> Vec<CareerPath> {
    let right_swipes = answers
        .values()
        .filter(|c| **c == SwipeChoice::Right)
        .count() as u32;

    let mut scored: Vec<CareerPath> = careers
        .iter()
        .map(|career| {
            let score = BASE_SCORE
                + rng.gen_range(0..SCORE_JITTER)
                + right_swipes * category_boost(&career.category);
            CareerPath {
                match_score: Some(score.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE)),
                ..career.clone()
            }
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(TOP_CAREERS);
    scored
}

/// Submits completed answers and falls back to local scoring on any failure.
pub async fn resolve_results(backend: &dyn CareerBackend, answers: &SwipeAnswers) -> AssessmentOutcome {
    match backend.submit_assessment(answers).await {
        Ok(response) if !response.recommended_careers.is_empty() => {
            info!(
                "Backend recommended {} careers",
                response.recommended_careers.len()
            );
            AssessmentOutcome {
                careers: response.recommended_careers.iter().map(from_backend).collect(),
                ai_insight: response.ai_insights,
                fallback: false,
            }
        }
        Ok(response) => {
            warn!("Backend returned no careers; scoring locally");
            AssessmentOutcome {
                careers: fallback_recommendations(career_paths(), answers, &mut rand::thread_rng()),
                ai_insight: response.ai_insights,
                fallback: true,
            }
        }
        Err(e) => {
            warn!("Error submitting assessment: {e}; scoring locally");
            AssessmentOutcome {
                careers: fallback_recommendations(career_paths(), answers, &mut rand::thread_rng()),
                ai_insight: None,
                fallback: true,
            }
        }
    }
}
