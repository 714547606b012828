use serde::Serialize;

use crate::models::career::{RoadmapPhase, SalaryPoint, TrendPoint};

const SALARIES: &[(&str, f32)] = &[
    ("Software Engineer", 16.5),
    ("Data Scientist", 20.0),
    ("Product Manager", 23.5),
    ("UX Designer", 12.0),
    ("Digital Marketer", 8.0),
    ("Financial Analyst", 10.0),
];

const TRENDS: &[(&str, u32, u32, u32)] = &[
    ("2020", 100, 100, 100),
    ("2021", 120, 110, 105),
    ("2022", 150, 125, 110),
    ("2023", 170, 135, 120),
    ("2024", 200, 150, 135),
];

const ROADMAP: &[(&str, [&str; 4])] = &[
    ("Phase 1: Foundation (0-6 months)", [
        "Complete foundational courses in core skills",
        "Build a strong understanding of industry basics",
        "Start working on small personal projects",
        "Join online communities and forums",
    ]),
    ("Phase 2: Skill Building (6-12 months)", [
        "Take advanced courses and certifications",
        "Build a portfolio of projects",
        "Contribute to open source or collaborative projects",
        "Network with professionals in the field",
    ]),
    ("Phase 3: Experience (12-18 months)", [
        "Apply for internships or entry-level positions",
        "Attend industry conferences and workshops",
        "Seek mentorship from experienced professionals",
        "Continue expanding your portfolio",
    ]),
    ("Phase 4: Career Launch (18-24 months)", [
        "Apply for full-time positions",
        "Prepare for technical interviews",
        "Build your personal brand online",
        "Continue learning and staying updated",
    ]),
];

/// Chart data for the market-insights view.
#[derive(Debug, Clone, Serialize)]
pub struct MarketInsights {
    /// Lakhs per year.
    pub salaries: Vec<SalaryPoint>,
    pub growth_trends: Vec<TrendPoint>,
}

pub fn market_insights() -> MarketInsights {
    MarketInsights {
        salaries: SALARIES
            .iter()
            .map(|(name, salary)| SalaryPoint {
                name: name.to_string(),
                salary: *salary,
            })
            .collect(),
        growth_trends: TRENDS
            .iter()
            .map(|(year, tech, health, creative)| TrendPoint {
                year: year.to_string(),
                tech: *tech,
                health: *health,
                creative: *creative,
            })
            .collect(),
    }
}

/// The generic four-phase journey shown under a recommended career.
pub fn career_roadmap() -> Vec<RoadmapPhase> {
    ROADMAP
        .iter()
        .map(|(phase, items)| RoadmapPhase {
            phase: phase.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        })
        .collect()
}
