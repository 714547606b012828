use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::career::{Level, LearningResource, LibraryResource, ResourceType};

type Seed = (
    &'static str,
    &'static str,
    &'static str,
    ResourceType,
    &'static str,
    Level,
    &'static str,
);

const LEARNING_SEEDS: &[(&str, &[Seed])] = &[
    (
        "software-engineer",
        &[
            ("cs50", "CS50's Introduction to Computer Science", "Harvard University (edX)", ResourceType::Course, "12 weeks", Level::Beginner, "https://www.edx.org/learn/computer-science/harvard-university-cs50-s-introduction-to-computer-science"),
            ("fullstack-open", "Full Stack Open", "University of Helsinki", ResourceType::Course, "12-15 weeks", Level::Intermediate, "https://fullstackopen.com/en/"),
            ("algorithms-coursera", "Algorithms Specialization", "Stanford (Coursera)", ResourceType::Course, "6 months", Level::Intermediate, "https://www.coursera.org/specializations/algorithms"),
        ],
    ),
    (
        "data-scientist",
        &[
            ("python-data-science", "Python for Data Science", "IBM (Coursera)", ResourceType::Course, "8 weeks", Level::Beginner, "https://www.coursera.org/professional-certificates/ibm-data-science"),
            ("ml-specialization", "Machine Learning Specialization", "Andrew Ng (Coursera)", ResourceType::Course, "3 months", Level::Intermediate, "https://www.coursera.org/specializations/machine-learning-introduction"),
            ("data-science-bootcamp", "Data Science Bootcamp", "DataCamp", ResourceType::Bootcamp, "4 months", Level::Intermediate, "https://www.datacamp.com/tracks/data-scientist-with-python"),
        ],
    ),
    (
        "ux-designer",
        &[
            ("google-ux", "Google UX Design Certificate", "Google (Coursera)", ResourceType::Certification, "6 months", Level::Beginner, "https://www.coursera.org/professional-certificates/google-ux-design"),
            ("interaction-design", "Interaction Design Specialization", "UC San Diego (Coursera)", ResourceType::Course, "5 months", Level::Intermediate, "https://www.coursera.org/specializations/interaction-design"),
            ("figma-mastery", "Figma UI/UX Design Essentials", "Udemy", ResourceType::Course, "10 hours", Level::Beginner, "https://www.udemy.com/course/figma-ux-ui-design-user-experience-tutorial-course/"),
        ],
    ),
    (
        "product-manager",
        &[
            ("pm-fundamentals", "Product Management Fundamentals", "Product School", ResourceType::Course, "8 weeks", Level::Beginner, "https://productschool.com/product-management-certification/"),
            ("digital-product-management", "Digital Product Management", "University of Virginia (Coursera)", ResourceType::Course, "4 months", Level::Intermediate, "https://www.coursera.org/specializations/product-management"),
            ("agile-product-management", "Agile Product Management", "Scrum Alliance", ResourceType::Certification, "2 weeks", Level::Intermediate, "https://www.scrumalliance.org/get-certified"),
        ],
    ),
    (
        "digital-marketer",
        &[
            ("google-digital-marketing", "Google Digital Marketing Certificate", "Google (Coursera)", ResourceType::Certification, "6 months", Level::Beginner, "https://www.coursera.org/professional-certificates/google-digital-marketing-ecommerce"),
            ("seo-training", "SEO Training Course", "Moz", ResourceType::Course, "4 weeks", Level::Intermediate, "https://moz.com/beginners-guide-to-seo"),
            ("content-marketing", "Content Marketing Certification", "HubSpot Academy", ResourceType::Certification, "3 hours", Level::Beginner, "https://academy.hubspot.com/courses/content-marketing"),
        ],
    ),
];

const LIBRARY: &[(u32, &str, &str, &str, Level, f32)] = &[
    (1, "Complete Web Development Bootcamp", "Technology", "Udemy", Level::Beginner, 4.8),
    (2, "Digital Marketing Masterclass", "Marketing", "Coursera", Level::Intermediate, 4.7),
    (3, "Financial Analysis Fundamentals", "Finance", "LinkedIn Learning", Level::Beginner, 4.6),
    (4, "UX Design for Beginners", "Design", "Skillshare", Level::Beginner, 4.9),
    (5, "Data Science Specialization", "Technology", "edX", Level::Advanced, 4.5),
];

fn learning_index() -> &'static HashMap<&'static str, Vec<LearningResource>> {
    static INDEX: OnceLock<HashMap<&'static str, Vec<LearningResource>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        LEARNING_SEEDS
            .iter()
            .map(|(career_id, seeds)| {
                let resources = seeds
                    .iter()
                    .map(|(id, title, provider, kind, duration, level, url)| LearningResource {
                        id: id.to_string(),
                        title: title.to_string(),
                        provider: provider.to_string(),
                        resource_type: *kind,
                        duration: duration.to_string(),
                        level: *level,
                        url: Some(url.to_string()),
                    })
                    .collect();
                (*career_id, resources)
            })
            .collect()
    })
}

/// Curated courses for a career. Careers without a curated list get an empty slice.
pub fn learning_resources(career_id: &str) -> &'static [LearningResource] {
    learning_index()
        .get(career_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn library() -> Vec<LibraryResource> {
    LIBRARY
        .iter()
        .map(|(id, title, category, provider, level, rating)| LibraryResource {
            id: *id,
            title: title.to_string(),
            category: category.to_string(),
            provider: provider.to_string(),
            level: *level,
            rating: *rating,
        })
        .collect()
}

/// Case-insensitive search over title and provider, optionally narrowed to one category.
pub fn search_library(query: Option<&str>, category: Option<&str>) -> Vec<LibraryResource> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    library()
        .into_iter()
        .filter(|r| {
            needle.is_empty()
                || r.title.to_lowercase().contains(&needle)
                || r.provider.to_lowercase().contains(&needle)
        })
        .filter(|r| match category {
            None | Some("all") => true,
            Some(c) => r.category == c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_resources_for_known_career() {
        let resources = learning_resources("data-scientist");
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[2].resource_type, ResourceType::Bootcamp);
    }

    #[test]
    fn test_uncurated_career_has_no_resources() {
        assert!(learning_resources("teacher").is_empty());
    }

    #[test]
    fn test_library_search_matches_provider_case_insensitively() {
        let hits = search_library(Some("COURSERA"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Digital Marketing Masterclass");
    }

    #[test]
    fn test_library_category_filter() {
        let hits = search_library(None, Some("Technology"));
        assert_eq!(hits.len(), 2);
        assert_eq!(search_library(Some(""), Some("all")).len(), 5);
    }
}
