use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Tech,
    Creative,
    Social,
    Analytical,
    Impact,
    Entrepreneurial,
    Healthcare,
    Dynamic,
    Ambitious,
}

/// One swipe card: swipe right for "yes", left for "no".
#[derive(Debug, Clone, Serialize)]
pub struct SwipeQuestion {
    pub id: u32,
    pub emoji: &'static str,
    pub prompt: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub category: QuestionCategory,
}

const fn q(
    id: u32,
    emoji: &'static str,
    prompt: &'static str,
    left_label: &'static str,
    right_label: &'static str,
    category: QuestionCategory,
) -> SwipeQuestion {
    SwipeQuestion {
        id,
        emoji,
        prompt,
        left_label,
        right_label,
        category,
    }
}

use QuestionCategory::*;

pub const SWIPE_QUESTIONS: &[SwipeQuestion] = &[
    q(1, "💻", "Spending all day with technology?", "Nah, not my thing", "Yes! Love it!", Tech),
    q(2, "🎨", "Creating art and designs?", "Not really", "Absolutely!", Creative),
    q(3, "👥", "Working with lots of people?", "Prefer solo", "Sounds fun!", Social),
    q(4, "🎮", "Gaming or coding in your free time?", "Not my vibe", "All the time!", Tech),
    q(5, "📱", "Always on social media creating content?", "Nope", "24/7!", Creative),
    q(6, "🎬", "Making videos or taking photos?", "Not interested", "Love it!", Creative),
    q(7, "🧮", "Solving puzzles and math problems?", "Hard pass", "Challenge accepted!", Analytical),
    q(8, "💬", "Talking and presenting in front of people?", "Scary!", "Bring it on!", Social),
    q(9, "🌍", "Helping make the world a better place?", "Not priority", "My dream!", Impact),
    q(10, "💰", "Starting your own business one day?", "Too risky", "Hell yeah!", Entrepreneurial),
    q(11, "📚", "Reading and researching stuff?", "Boring", "Interesting!", Analytical),
    q(12, "🎵", "Music, dance, or performing arts?", "Not my thing", "Yesss!", Creative),
    q(13, "🏥", "Taking care of people's health?", "Nah", "Would love to!", Healthcare),
    q(14, "⚡", "Fast-paced, exciting work environment?", "Too stressful", "Bring the energy!", Dynamic),
    q(15, "🎯", "Setting big goals and crushing them?", "Meh", "Always!", Ambitious),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ids_are_sequential() {
        for (i, question) in SWIPE_QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, i + 1);
        }
        assert_eq!(SWIPE_QUESTIONS.len(), 15);
    }
}
