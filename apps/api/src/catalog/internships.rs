use crate::models::career::Internship;

const INTERNSHIPS: &[(u32, &str, &str, &str, &str, &str, &[&str], &str, &str)] = &[
    (1, "Software Engineering Intern", "TechFlow Solutions", "Bangalore (Remote)", "₹25,000/mo", "6 Months",
        &["React", "Node.js", "Startup"], "2 days ago", "https://internshala.com/internships/web-development-internship/"),
    (2, "Social Media Marketing Intern", "BuzzCreate Agency", "Mumbai", "₹15,000/mo", "3 Months",
        &["Instagram", "Content", "Creative"], "5 hours ago", "https://internshala.com/internships/social-media-marketing-internship/"),
    (3, "Data Analytics Intern", "FinServe Corp", "Gurgaon (Hybrid)", "₹30,000/mo", "6 Months",
        &["SQL", "Python", "Finance"], "1 week ago", "https://www.naukri.com/data-analytics-internship-jobs"),
    (4, "UI/UX Design Intern", "Creative Pulse", "Remote", "₹20,000/mo", "4 Months",
        &["Figma", "User Research"], "3 days ago", "https://internshala.com/internships/ui-ux-design-internship/"),
    (5, "Machine Learning Intern", "AI Labs India", "Hyderabad (Hybrid)", "₹35,000/mo", "6 Months",
        &["Python", "TensorFlow", "Research"], "Today", "https://www.linkedin.com/jobs/machine-learning-intern-jobs/"),
    (6, "Business Development Intern", "StartupX", "Delhi (Remote)", "₹12,000/mo", "3 Months",
        &["Sales", "Strategy", "Startup"], "4 days ago", "https://internshala.com/internships/business-development-internship/"),
];

pub fn internships() -> Vec<Internship> {
    INTERNSHIPS
        .iter()
        .map(
            |(id, role, company, location, stipend, duration, tags, posted, apply_url)| Internship {
                id: *id,
                role: role.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                stipend: stipend.to_string(),
                duration: duration.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                posted: posted.to_string(),
                apply_url: apply_url.to_string(),
            },
        )
        .collect()
}

/// Matches role, company, or any tag, case-insensitively. A blank query returns everything.
pub fn search_internships(query: Option<&str>) -> Vec<Internship> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    internships()
        .into_iter()
        .filter(|i| {
            needle.is_empty()
                || i.role.to_lowercase().contains(&needle)
                || i.company.to_lowercase().contains(&needle)
                || i.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
