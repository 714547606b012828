use serde::Deserialize;

use crate::models::career::CareerPath;

/// Query parameters of the career explorer. `"all"` and absent mean "no filter".
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExplorerFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub demand: Option<String>,
}

impl ExplorerFilter {
    pub fn matches(&self, career: &CareerPath) -> bool {
        let matches_search = match self.q.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                career.title.to_lowercase().contains(&q)
                    || career.description.to_lowercase().contains(&q)
            }
        };
        let matches_category = match self.category.as_deref() {
            None | Some("all") => true,
            Some(c) => career.category == c,
        };
        let matches_demand = match self.demand.as_deref() {
            None | Some("all") => true,
            Some(d) => career.demand_level.as_str() == d,
        };

        matches_search && matches_category && matches_demand
    }
}

pub fn filter_careers<'a>(careers: &'a [CareerPath], filter: &ExplorerFilter) -> Vec<&'a CareerPath> {
    careers.iter().filter(|c| filter.matches(c)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(careers: &[CareerPath]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for career in careers {
        if !seen.contains(&career.category) {
            seen.push(career.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::career_paths;

    fn filter(q: Option<&str>, category: Option<&str>, demand: Option<&str>) -> ExplorerFilter {
        ExplorerFilter {
            q: q.map(String::from),
            category: category.map(String::from),
            demand: demand.map(String::from),
        }
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let hits = filter_careers(career_paths(), &ExplorerFilter::default());
        assert_eq!(hits.len(), career_paths().len());
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let hits = filter_careers(career_paths(), &filter(Some("CYBER THREATS"), None, None));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "cybersecurity");
    }

    #[test]
    fn test_category_and_demand_combine() {
        let hits = filter_careers(
            career_paths(),
            &filter(None, Some("Technology"), Some("High")),
        );
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["software-engineer", "data-scientist", "cybersecurity"]);
    }

    #[test]
    fn test_all_is_a_wildcard() {
        let hits = filter_careers(career_paths(), &filter(Some(""), Some("all"), Some("Medium")));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_careers(career_paths(), &filter(Some("astronaut"), None, None)).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let cats = categories(career_paths());
        assert_eq!(cats[0], "Technology");
        assert_eq!(cats[1], "Design");
        assert_eq!(cats.len(), 10);
    }
}
