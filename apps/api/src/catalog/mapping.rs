use crate::backend::{BackendCareer, SuggestionRequest};
use crate::catalog::careers::career_paths;
use crate::models::career::{CareerPath, DemandLevel};

/// Score shown when the backend recommends a career without scoring it.
pub const DEFAULT_MATCH_SCORE: u32 = 85;
const FALLBACK_SUGGESTION_COUNT: usize = 5;

/// "Data Scientist" -> "data-scientist". Whitespace runs collapse to one dash.
pub fn career_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Converts a backend career into the shape the rest of the app renders.
/// The backend carries fewer fields, so growth, environment, demand, pros and cons get defaults.
pub fn from_backend(career: &BackendCareer) -> CareerPath {
    let match_score = career
        .match_score
        .filter(|s| *s > 0.0)
        .map(|s| s.round().min(100.0) as u32)
        .unwrap_or(DEFAULT_MATCH_SCORE);

    CareerPath {
        id: career_slug(&career.name),
        title: career.name.clone(),
        category: career
            .stream
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "General".to_string()),
        description: career.description.clone(),
        average_salary: career.salary.clone(),
        growth_rate: "Growing".to_string(),
        required_skills: career.skills.clone(),
        education_level: career.education.clone(),
        work_environment: "Office, Remote, Hybrid".to_string(),
        demand_level: DemandLevel::High,
        match_score: Some(match_score),
        pros: vec![
            "High demand".to_string(),
            "Good growth".to_string(),
            "Rewarding work".to_string(),
        ],
        cons: vec![
            "Requires dedication".to_string(),
            "Continuous learning needed".to_string(),
        ],
    }
}

/// Offline stand-in for the suggestions endpoint: catalog careers whose title, category
/// or skills mention the interest or subject. With no hit, the first few catalog careers.
pub fn local_suggestions(request: &SuggestionRequest) -> Vec<CareerPath> {
    let terms: Vec<String> = [&request.interest, &request.subject]
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let hits: Vec<CareerPath> = career_paths()
        .iter()
        .filter(|c| {
            terms.iter().any(|term| {
                c.title.to_lowercase().contains(term)
                    || c.category.to_lowercase().contains(term)
                    || c.required_skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(term))
            })
        })
        .cloned()
        .collect();

    if hits.is_empty() {
        career_paths()
            .iter()
            .take(FALLBACK_SUGGESTION_COUNT)
            .cloned()
            .collect()
    } else {
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::stub::backend_career;

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(career_slug("Data  Scientist"), "data-scientist");
        assert_eq!(career_slug(" UX Designer "), "ux-designer");
    }

    #[test]
    fn test_from_backend_keeps_backend_score() {
        let career = from_backend(&backend_career("Game Developer", "Technology", Some(91.4)));
        assert_eq!(career.id, "game-developer");
        assert_eq!(career.category, "Technology");
        assert_eq!(career.match_score, Some(91));
    }

    #[test]
    fn test_from_backend_defaults_missing_score_and_stream() {
        let mut raw = backend_career("Nurse", "", None);
        raw.stream = None;
        let career = from_backend(&raw);
        assert_eq!(career.match_score, Some(DEFAULT_MATCH_SCORE));
        assert_eq!(career.category, "General");
        assert_eq!(career.pros.len(), 3);
        assert_eq!(career.cons.len(), 2);
    }

    #[test]
    fn test_zero_score_treated_as_missing() {
        let career = from_backend(&backend_career("Chef", "Arts", Some(0.0)));
        assert_eq!(career.match_score, Some(DEFAULT_MATCH_SCORE));
    }

    #[test]
    fn test_local_suggestions_match_skills() {
        let request = SuggestionRequest {
            interest: "statistics".to_string(),
            subject: String::new(),
            class_level: "12".to_string(),
        };
        let hits = local_suggestions(&request);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "data-scientist");
    }

    #[test]
    fn test_local_suggestions_without_hits_falls_back_to_catalog_head() {
        let request = SuggestionRequest {
            interest: "astronomy".to_string(),
            subject: "latin".to_string(),
            class_level: "10".to_string(),
        };
        let hits = local_suggestions(&request);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].id, "software-engineer");
    }
}
