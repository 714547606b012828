// Career try-outs (tasks, photos, AI analysis) and the skill-gap analyser.

pub mod handlers;
pub mod skill_gap;
pub mod tryout;
