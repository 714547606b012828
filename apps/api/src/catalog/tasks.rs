use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::analysis::CareerTask;

/// (title, duration, icon, photo prompt when the task produces something visual)
type TaskSeed = (&'static str, &'static str, &'static str, Option<&'static str>);

const TASK_SEEDS: &[(&str, [TaskSeed; 4])] = &[
    ("software-engineer", [
        ("Watch a 'Day in the Life of a Software Engineer' video", "15 min", "🎥", None),
        ("Try coding a simple calculator using any language", "30 min", "💻", Some("a screenshot of your calculator code or output")),
        ("Solve a beginner coding challenge on LeetCode or HackerRank", "20 min", "🧩", None),
        ("Read about Git and create your first GitHub repository", "25 min", "🔄", None),
    ]),
    ("data-scientist", [
        ("Explore a dataset on Kaggle and analyze basic statistics", "30 min", "📊", None),
        ("Watch a video on 'What is Machine Learning?'", "15 min", "🎥", None),
        ("Create a simple visualization using Excel or Google Sheets", "20 min", "📈", Some("your chart")),
        ("Try a Python basics tutorial on Codecademy", "40 min", "🐍", None),
    ]),
    ("ux-designer", [
        ("Sketch 5 different app icon designs on paper", "20 min", "✏️", Some("your icon sketches")),
        ("Redesign a button or form you use daily (draw it!)", "15 min", "🎨", Some("your redesign")),
        ("Watch a UX design case study video", "20 min", "🎥", None),
        ("Create a free Figma account and explore the interface", "25 min", "🖼️", None),
    ]),
    ("product-manager", [
        ("Write a one-page feature proposal for an app you use", "30 min", "📝", None),
        ("Prioritize 5 features for a hypothetical product", "20 min", "🎯", None),
        ("Watch a 'Day in the Life of a PM' video", "15 min", "🎥", None),
        ("Read about Agile/Scrum methodology basics", "25 min", "📚", None),
    ]),
    ("digital-marketer", [
        ("Create 3 social media captions for a brand you like", "20 min", "📱", None),
        ("Analyze why a viral post went viral (write down reasons)", "15 min", "🔍", None),
        ("Design a simple poster or graphic using Canva", "30 min", "🎨", Some("your poster or graphic")),
        ("Watch a video on SEO basics", "20 min", "🎥", None),
    ]),
    ("financial-analyst", [
        ("Track your personal expenses for a week in a spreadsheet", "Daily", "💰", None),
        ("Read a financial news article and summarize key points", "20 min", "📰", None),
        ("Learn basic Excel formulas (SUM, AVERAGE, IF)", "30 min", "📊", None),
        ("Watch a video on 'How Stock Markets Work'", "15 min", "🎥", None),
    ]),
    ("healthcare-admin", [
        ("Research healthcare policies in your country", "25 min", "📋", None),
        ("Watch a video about hospital management systems", "20 min", "🎥", None),
        ("Create a mock patient appointment schedule", "20 min", "📅", None),
        ("Read about healthcare compliance regulations", "30 min", "📚", None),
    ]),
    ("content-creator", [
        ("Record a 30-second video about something you're passionate about", "20 min", "🎬", None),
        ("Write a blog post or article (300-500 words)", "40 min", "✍️", None),
        ("Edit a photo using free tools like Snapseed or VSCO", "15 min", "📸", Some("your edited photo")),
        ("Brainstorm 10 content ideas for a YouTube channel", "20 min", "💡", None),
    ]),
    ("cybersecurity", [
        ("Learn about common cybersecurity threats (phishing, malware)", "25 min", "🛡️", None),
        ("Try a beginner Capture The Flag (CTF) challenge online", "40 min", "🚩", None),
        ("Watch a documentary on famous cyber attacks", "30 min", "🎥", None),
        ("Set up two-factor authentication on your accounts", "15 min", "🔐", None),
    ]),
    ("environmental-scientist", [
        ("Track your carbon footprint for a day", "Daily", "🌍", None),
        ("Research a local environmental issue and write about it", "30 min", "📝", None),
        ("Watch a documentary on climate change", "45 min", "🎥", None),
        ("Start a small sustainability project (e.g., recycling plan)", "30 min", "♻️", None),
    ]),
    ("teacher", [
        ("Teach a 10-minute lesson on any topic to a friend/family", "20 min", "👨‍🏫", None),
        ("Create a fun quiz with 10 questions on your favorite subject", "25 min", "📝", None),
        ("Watch a TED talk on education and teaching methods", "20 min", "🎥", None),
        ("Design a creative classroom activity or game", "30 min", "🎮", None),
    ]),
    ("mechanical-engineer", [
        ("Disassemble and reassemble a simple device (pen, toy)", "20 min", "🔧", None),
        ("Watch a video on 'How Engines Work'", "15 min", "🎥", None),
        ("Sketch a simple mechanical design idea you have", "25 min", "✏️", Some("your design sketch")),
        ("Learn basic CAD software (Tinkercad is free!)", "40 min", "💻", None),
    ]),
];

fn task_index() -> &'static HashMap<&'static str, Vec<CareerTask>> {
    static INDEX: OnceLock<HashMap<&'static str, Vec<CareerTask>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        TASK_SEEDS
            .iter()
            .map(|(career_id, seeds)| {
                let tasks = seeds
                    .iter()
                    .enumerate()
                    .map(|(i, (title, duration, icon, prompt))| CareerTask {
                        id: (i + 1).to_string(),
                        title: title.to_string(),
                        description: String::new(),
                        duration: duration.to_string(),
                        icon: icon.to_string(),
                        requires_image: prompt.is_some(),
                        image_prompt: prompt.map(str::to_string),
                    })
                    .collect();
                (*career_id, tasks)
            })
            .collect()
    })
}

/// Try-out tasks for a career. Task ids are "1".."4" within each career.
pub fn career_tasks(career_id: &str) -> &'static [CareerTask] {
    task_index()
        .get(career_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
