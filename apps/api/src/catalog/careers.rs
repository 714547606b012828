use std::sync::OnceLock;

use crate::models::career::{CareerPath, DemandLevel};

struct CareerSeed {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    average_salary: &'static str,
    growth_rate: &'static str,
    required_skills: [&'static str; 5],
    education_level: &'static str,
    work_environment: &'static str,
    demand_level: DemandLevel,
    pros: [&'static str; 3],
    cons: [&'static str; 3],
}

const SEEDS: &[CareerSeed] = &[
    CareerSeed {
        id: "software-engineer",
        title: "Software Engineer",
        category: "Technology",
        description: "Design, develop, and maintain software applications and systems. Work on cutting-edge technologies and solve complex problems.",
        average_salary: "₹8L - ₹25L per year",
        growth_rate: "22% (Much faster than average)",
        required_skills: ["Programming", "Problem Solving", "Data Structures", "Algorithms", "Version Control"],
        education_level: "Bachelor's in Computer Science or related field",
        work_environment: "Office, Remote, Hybrid",
        demand_level: DemandLevel::High,
        pros: ["High salary potential", "Remote work flexibility", "Creative problem solving"],
        cons: ["High stress deadlines", "Sedentary lifestyle", "Constant need to upskill"],
    },
    CareerSeed {
        id: "data-scientist",
        title: "Data Scientist",
        category: "Technology",
        description: "Extract insights from data using statistical analysis, machine learning, and visualization techniques to drive business decisions.",
        average_salary: "₹10L - ₹30L per year",
        growth_rate: "35% (Much faster than average)",
        required_skills: ["Statistics", "Machine Learning", "Python/R", "Data Visualization", "SQL"],
        education_level: "Bachelor's or Master's in Data Science, Statistics, or related field",
        work_environment: "Office, Remote, Hybrid",
        demand_level: DemandLevel::High,
        pros: ["Intellectually challenging", "High impact on decisions", "Lucrative compensation"],
        cons: ["Data cleaning is tedious", "High pressure for accuracy", "Complex stakeholder communication"],
    },
    CareerSeed {
        id: "ux-designer",
        title: "UX/UI Designer",
        category: "Design",
        description: "Create intuitive and engaging user experiences for digital products through research, prototyping, and visual design.",
        average_salary: "₹6L - ₹18L per year",
        growth_rate: "13% (Faster than average)",
        required_skills: ["User Research", "Prototyping", "Figma/Sketch", "Visual Design", "User Testing"],
        education_level: "Bachelor's in Design, HCI, or related field",
        work_environment: "Office, Remote, Hybrid",
        demand_level: DemandLevel::Growing,
        pros: ["Blend of creativity & logic", "Visible impact of work", "Collaborative environment"],
        cons: ["Subjective feedback loops", "Keeping up with design trends", "Balancing aesthetics with function"],
    },
    CareerSeed {
        id: "product-manager",
        title: "Product Manager",
        category: "Business",
        description: "Lead product development from conception to launch, defining strategy and working with cross-functional teams.",
        average_salary: "₹12L - ₹35L per year",
        growth_rate: "18% (Much faster than average)",
        required_skills: ["Strategic Thinking", "Communication", "Data Analysis", "Agile/Scrum", "User Empathy"],
        education_level: "Bachelor's in Business, CS, or related field; MBA preferred",
        work_environment: "Office, Hybrid",
        demand_level: DemandLevel::High,
        pros: ["Leadership opportunity", "Central role in company", "Diverse daily tasks"],
        cons: ["High responsibility with low authority", "Constant meetings", "Ambiguity in decision making"],
    },
    CareerSeed {
        id: "digital-marketer",
        title: "Digital Marketing Specialist",
        category: "Marketing",
        description: "Develop and execute online marketing campaigns across various channels to grow brand awareness and drive conversions.",
        average_salary: "₹4L - ₹12L per year",
        growth_rate: "10% (Faster than average)",
        required_skills: ["SEO/SEM", "Content Marketing", "Social Media", "Analytics", "Email Marketing"],
        education_level: "Bachelor's in Marketing, Communications, or related field",
        work_environment: "Office, Remote, Hybrid",
        demand_level: DemandLevel::High,
        pros: ["Fast-paced & dynamic", "Immediate results visibility", "Creativity meets data"],
        cons: ["Constant algorithm changes", "Pressure for immediate ROI", "24/7 social media cycle"],
    },
    CareerSeed {
        id: "financial-analyst",
        title: "Financial Analyst",
        category: "Finance",
        description: "Analyze financial data, create reports, and provide insights to help organizations make informed investment decisions.",
        average_salary: "₹5L - ₹15L per year",
        growth_rate: "6% (Average)",
        required_skills: ["Financial Modeling", "Excel", "Data Analysis", "Forecasting", "Business Acumen"],
        education_level: "Bachelor's in Finance, Economics, or related field",
        work_environment: "Office",
        demand_level: DemandLevel::Medium,
        pros: ["Clear career progression", "Performance-based bonuses", "Gain investment knowledge"],
        cons: ["Long working hours", "High pressure environment", "Repetitive tasks"],
    },
    CareerSeed {
        id: "healthcare-admin",
        title: "Healthcare Administrator",
        category: "Healthcare",
        description: "Manage healthcare facilities, ensuring quality patient care, regulatory compliance, and operational efficiency.",
        average_salary: "₹6L - ₹20L per year",
        growth_rate: "28% (Much faster than average)",
        required_skills: ["Healthcare Management", "Leadership", "Compliance", "Budgeting", "Communication"],
        education_level: "Bachelor's or Master's in Healthcare Administration",
        work_environment: "Hospital, Clinic, Office",
        demand_level: DemandLevel::High,
        pros: ["Stable industry", "Helping community indirectly", "Good benefits"],
        cons: ["Regulatory red tape", "High stress environment", "Dealing with bureaucracy"],
    },
    CareerSeed {
        id: "content-creator",
        title: "Content Creator/Writer",
        category: "Creative",
        description: "Produce engaging content across various platforms including blogs, social media, video, and podcasts.",
        average_salary: "₹3L - ₹10L per year",
        growth_rate: "9% (Average)",
        required_skills: ["Writing", "SEO", "Social Media", "Video Editing", "Storytelling"],
        education_level: "Bachelor's in Communications, Journalism, or related field",
        work_environment: "Remote, Office, Flexible",
        demand_level: DemandLevel::Growing,
        pros: ["Creative freedom", "Flexible schedule", "Build personal brand"],
        cons: ["Inconsistent income", "Creative burnout", "Platform algorithm dependency"],
    },
    CareerSeed {
        id: "cybersecurity",
        title: "Cybersecurity Analyst",
        category: "Technology",
        description: "Protect organizations from cyber threats by monitoring systems, implementing security measures, and responding to incidents.",
        average_salary: "₹7L - ₹22L per year",
        growth_rate: "33% (Much faster than average)",
        required_skills: ["Network Security", "Threat Analysis", "Risk Assessment", "Security Tools", "Incident Response"],
        education_level: "Bachelor's in Cybersecurity, CS, or related field",
        work_environment: "Office, Remote, Hybrid",
        demand_level: DemandLevel::High,
        pros: ["High job security", "Solving puzzles", "Protecting important assets"],
        cons: ["High stress (on call)", "Constant threat monitoring", "Blame when things go wrong"],
    },
    CareerSeed {
        id: "environmental-scientist",
        title: "Environmental Scientist",
        category: "Science",
        description: "Study environmental issues and develop solutions to protect human health and the natural environment.",
        average_salary: "₹5L - ₹12L per year",
        growth_rate: "8% (Average)",
        required_skills: ["Environmental Science", "Data Analysis", "Research", "GIS", "Report Writing"],
        education_level: "Bachelor's or Master's in Environmental Science",
        work_environment: "Field, Laboratory, Office",
        demand_level: DemandLevel::Growing,
        pros: ["Meaningful work", "Mix of field & office", "Contributing to planet health"],
        cons: ["Field work can be physically demanding", "Slow policy changes", "Funding uncertainty"],
    },
    CareerSeed {
        id: "teacher",
        title: "Education Specialist/Teacher",
        category: "Education",
        description: "Educate and mentor students, develop curriculum, and create engaging learning experiences.",
        average_salary: "₹4L - ₹10L per year",
        growth_rate: "5% (Average)",
        required_skills: ["Subject Expertise", "Communication", "Classroom Management", "Curriculum Design", "Patience"],
        education_level: "Bachelor's in Education + Teaching License",
        work_environment: "School, Online",
        demand_level: DemandLevel::Medium,
        pros: ["Shaping future generations", "Vacation time", "Emotional rewards"],
        cons: ["Low pay relative to effort", "Emotional burnout", "Administrative paperwork"],
    },
    CareerSeed {
        id: "mechanical-engineer",
        title: "Mechanical Engineer",
        category: "Engineering",
        description: "Design, develop, and test mechanical devices and systems across various industries.",
        average_salary: "₹6L - ₹18L per year",
        growth_rate: "7% (Average)",
        required_skills: ["CAD Software", "Thermodynamics", "Materials Science", "Problem Solving", "Project Management"],
        education_level: "Bachelor's in Mechanical Engineering",
        work_environment: "Office, Manufacturing, Field",
        demand_level: DemandLevel::Medium,
        pros: ["Tangible results", "Wide industry application", "Understanding how things work"],
        cons: ["Safety risks in manufacturing", "Slow project lifecycles", "Rigid design constraints"],
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl From<&CareerSeed> for CareerPath {
    fn from(seed: &CareerSeed) -> Self {
        CareerPath {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            category: seed.category.to_string(),
            description: seed.description.to_string(),
            average_salary: seed.average_salary.to_string(),
            growth_rate: seed.growth_rate.to_string(),
            required_skills: strings(&seed.required_skills),
            education_level: seed.education_level.to_string(),
            work_environment: seed.work_environment.to_string(),
            demand_level: seed.demand_level,
            match_score: None,
            pros: strings(&seed.pros),
            cons: strings(&seed.cons),
        }
    }
}

/// The built-in career list, in display order.
pub fn career_paths() -> &'static [CareerPath] {
    static CAREERS: OnceLock<Vec<CareerPath>> = OnceLock::new();
    CAREERS.get_or_init(|| SEEDS.iter().map(CareerPath::from).collect())
}

pub fn find_career(id: &str) -> Option<&'static CareerPath> {
    career_paths().iter().find(|c| c.id == id)
}
