//! "Try this career out" sessions.
//!
//! A session holds a career's beginner tasks plus what the user has reported for each:
//! completion, a written answer, time spent and an optional photo of their work. Analysis
//! turns every task into a full `TaskSubmission`, with unreported fields left empty.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::{CareerTaskAnalysis, ExplorationSummary, TaskEvaluation};
use crate::catalog::career_tasks;
use crate::models::analysis::{CareerTask, ImageAttachment, TaskSubmission, UserContext};
use crate::models::career::CareerPath;

pub const TIME_SPENT_OPTIONS: [&str; 5] =
    ["< 5 min", "5-15 min", "15-30 min", "30-60 min", "> 1 hour"];

pub const ACCEPTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum TryOutError {
    #[error("Task {0} not found")]
    UnknownTask(String),

    #[error("Invalid time spent '{0}'")]
    InvalidTimeSpent(String),

    #[error("Unsupported image type '{0}'. Use JPEG, PNG, WEBP or GIF")]
    UnsupportedImageType(String),

    #[error("Image is {size} bytes; the limit is 10 MB")]
    ImageTooLarge { size: usize },

    #[error("Career title is required")]
    MissingTitle,
}

/// Checks MIME type and size of an uploaded photo.
pub fn validate_image(content_type: &str, size: usize) -> Result<(), TryOutError> {
    if !ACCEPTED_IMAGE_TYPES.contains(&content_type) {
        return Err(TryOutError::UnsupportedImageType(content_type.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(TryOutError::ImageTooLarge { size });
    }
    Ok(())
}

/// Partial update for one task. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub time_spent: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct TaskProgress {
    completed: bool,
    user_answer: String,
    time_spent: String,
    image: Option<ImageAttachment>,
}

#[derive(Debug, Clone)]
pub struct TryOutSession {
    pub id: Uuid,
    pub career_id: Option<String>,
    pub career_title: String,
    pub created_at: DateTime<Utc>,
    tasks: Vec<CareerTask>,
    progress: HashMap<String, TaskProgress>,
    user_context: UserContext,
}

impl TryOutSession {
    /// Starts a session with the catalog tasks for `career`. Careers without
    /// curated tasks start with none.
    pub fn for_career(career: &CareerPath) -> Result<Self, TryOutError> {
        let mut session = Self::custom(&career.title, career_tasks(&career.id).to_vec())?;
        session.career_id = Some(career.id.clone());
        Ok(session)
    }

    /// Starts a session with an explicit title and task list.
    pub fn custom(career_title: &str, tasks: Vec<CareerTask>) -> Result<Self, TryOutError> {
        let career_title = career_title.trim();
        if career_title.is_empty() {
            return Err(TryOutError::MissingTitle);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            career_id: None,
            career_title: career_title.to_string(),
            created_at: Utc::now(),
            tasks,
            progress: HashMap::new(),
            user_context: UserContext::default(),
        })
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[CareerTask] {
        &self.tasks
    }

    pub fn set_user_context(&mut self, context: UserContext) {
        self.user_context = context;
    }

    fn task(&self, task_id: &str) -> Result<&CareerTask, TryOutError> {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| TryOutError::UnknownTask(task_id.to_string()))
    }

    fn progress_mut(&mut self, task_id: &str) -> Result<&mut TaskProgress, TryOutError> {
        self.task(task_id)?;
        Ok(self.progress.entry(task_id.to_string()).or_default())
    }

    /// Merges `update` into the task's progress. An empty time-spent clears it.
    pub fn update_task(&mut self, task_id: &str, update: TaskUpdate) -> Result<(), TryOutError> {
        if let Some(time) = update.time_spent.as_deref() {
            if !time.is_empty() && !TIME_SPENT_OPTIONS.contains(&time) {
                return Err(TryOutError::InvalidTimeSpent(time.to_string()));
            }
        }

        let progress = self.progress_mut(task_id)?;
        if let Some(completed) = update.completed {
            progress.completed = completed;
        }
        if let Some(answer) = update.user_answer {
            progress.user_answer = answer;
        }
        if let Some(time) = update.time_spent {
            progress.time_spent = time;
        }
        Ok(())
    }

    /// Attaches a photo to a task, replacing any earlier one, and marks it completed.
    pub fn attach_image(&mut self, task_id: &str, image: ImageAttachment) -> Result<(), TryOutError> {
        validate_image(&image.content_type, image.bytes.len())?;
        let progress = self.progress_mut(task_id)?;
        progress.image = Some(image);
        progress.completed = true;
        Ok(())
    }

    /// Removes a task's photo. Completion is left unchanged. Returns whether one was attached.
    pub fn remove_image(&mut self, task_id: &str) -> Result<bool, TryOutError> {
        let progress = self.progress_mut(task_id)?;
        Ok(progress.image.take().is_some())
    }

    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| self.progress.get(&t.id).is_some_and(|p| p.completed))
            .count()
    }

    pub fn completion_percent(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64 * 100.0
    }

    fn submission_for(&self, task: &CareerTask) -> TaskSubmission {
        let progress = self.progress.get(&task.id);
        TaskSubmission {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            user_answer: progress.map(|p| p.user_answer.clone()).unwrap_or_default(),
            time_spent: progress.map(|p| p.time_spent.clone()).unwrap_or_default(),
            completed: progress.is_some_and(|p| p.completed),
        }
    }

    pub fn submission(&self, task_id: &str) -> Result<TaskSubmission, TryOutError> {
        Ok(self.submission_for(self.task(task_id)?))
    }

    /// One submission per task, in task order.
    pub fn submissions(&self) -> Vec<TaskSubmission> {
        self.tasks.iter().map(|t| self.submission_for(t)).collect()
    }

    /// The first attached photo in task order.
    pub fn first_image(&self) -> Option<&ImageAttachment> {
        self.tasks
            .iter()
            .find_map(|t| self.progress.get(&t.id).and_then(|p| p.image.as_ref()))
    }

    pub fn analysis_request(&self) -> CareerTaskAnalysis {
        CareerTaskAnalysis {
            career_title: self.career_title.clone(),
            tasks: self.submissions(),
            user_context: self.user_context.clone(),
            image: self.first_image().cloned(),
        }
    }

    pub fn view(&self) -> TryOutView {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                let progress = self.progress.get(&task.id);
                TaskView {
                    task: task.clone(),
                    completed: progress.is_some_and(|p| p.completed),
                    user_answer: progress.map(|p| p.user_answer.clone()).unwrap_or_default(),
                    time_spent: progress.map(|p| p.time_spent.clone()).unwrap_or_default(),
                    image: progress.and_then(|p| p.image.as_ref()).map(|img| ImageView {
                        file_name: img.file_name.clone(),
                        content_type: img.content_type.clone(),
                        size_kb: img.size_kb(),
                    }),
                }
            })
            .collect();

        TryOutView {
            id: self.id,
            career_id: self.career_id.clone(),
            career_title: self.career_title.clone(),
            completed_count: self.completed_count(),
            total: self.tasks.len(),
            completion_percent: self.completion_percent(),
            tasks,
            user_context: self.user_context.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageView {
    pub file_name: String,
    pub content_type: String,
    pub size_kb: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub task: CareerTask,
    pub completed: bool,
    pub user_answer: String,
    pub time_spent: String,
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TryOutView {
    pub id: Uuid,
    pub career_id: Option<String>,
    pub career_title: String,
    pub completed_count: usize,
    pub total: usize,
    pub completion_percent: f64,
    pub tasks: Vec<TaskView>,
    pub user_context: UserContext,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBand {
    Strong,
    Good,
    Moderate,
    Low,
}

impl FitBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            FitBand::Strong
        } else if score >= 60.0 {
            FitBand::Good
        } else if score >= 40.0 {
            FitBand::Moderate
        } else {
            FitBand::Low
        }
    }
}

pub fn fallback_evaluation(task: &TaskSubmission) -> TaskEvaluation {
    TaskEvaluation {
        feedback: format!(
            "Great effort on \"{}\"! Every attempt builds real skills. Keep going!",
            task.title
        ),
        score: None,
        passed: None,
        fallback: true,
    }
}

pub fn fallback_summary(session: &TryOutSession) -> ExplorationSummary {
    let summary = match session.completed_count() {
        0 => format!(
            "You've taken the first step toward exploring {}. Try a task or two to see how it feels!",
            session.career_title
        ),
        done => format!(
            "Awesome work! You completed {done} of {} tasks and got a real taste of being a {}. Keep exploring!",
            session.tasks.len(),
            session.career_title
        ),
    };
    ExplorationSummary {
        summary,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_career;
    use bytes::Bytes;

    fn catalog_session(career_id: &str) -> TryOutSession {
        TryOutSession::for_career(find_career(career_id).unwrap()).unwrap()
    }

    fn image(name: &str, content_type: &str, size: usize) -> ImageAttachment {
        ImageAttachment {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: Bytes::from(vec![0u8; size]),
        }
    }

    #[test]
    fn test_for_career_loads_catalog_tasks() {
        let session = catalog_session("ux-designer");
        assert_eq!(session.career_id.as_deref(), Some("ux-designer"));
        assert_eq!(session.tasks().len(), 4);
        assert_eq!(session.completed_count(), 0);
        assert_eq!(session.completion_percent(), 0.0);
    }

    #[test]
    fn test_career_without_catalog_tasks_starts_empty() {
        let career = crate::catalog::mapping::from_backend(
            &crate::backend::stub::backend_career("Game Designer", "Arts", Some(90.0)),
        );
        let mut session = TryOutSession::for_career(&career).unwrap();
        assert_eq!(session.career_id.as_deref(), Some("game-designer"));
        assert_eq!(session.career_title, "Game Designer");
        assert!(session.tasks().is_empty());
        assert_eq!(session.completion_percent(), 0.0);
        assert_eq!(
            session.update_task("t1", TaskUpdate::default()).unwrap_err(),
            TryOutError::UnknownTask("t1".to_string())
        );
    }

    #[test]
    fn test_custom_session_needs_title() {
        assert_eq!(
            TryOutSession::custom("  ", vec![]).unwrap_err(),
            TryOutError::MissingTitle
        );
        let empty = TryOutSession::custom("Chef", vec![]).unwrap();
        assert_eq!(empty.completion_percent(), 0.0);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut session = catalog_session("software-engineer");
        session
            .update_task(
                "1",
                TaskUpdate {
                    user_answer: Some("print('hi')".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        session
            .update_task(
                "1",
                TaskUpdate {
                    completed: Some(true),
                    time_spent: Some("5-15 min".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let submission = session.submission("1").unwrap();
        assert_eq!(submission.user_answer, "print('hi')");
        assert_eq!(submission.time_spent, "5-15 min");
        assert!(submission.completed);
        assert_eq!(session.completion_percent(), 25.0);
    }

    #[test]
    fn test_invalid_time_spent_rejected() {
        let mut session = catalog_session("software-engineer");
        let err = session
            .update_task(
                "1",
                TaskUpdate {
                    time_spent: Some("2 hours".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, TryOutError::InvalidTimeSpent("2 hours".to_string()));
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn test_unknown_task_rejected() {
        let mut session = catalog_session("software-engineer");
        assert_eq!(
            session.update_task("9", TaskUpdate::default()).unwrap_err(),
            TryOutError::UnknownTask("9".to_string())
        );
    }

    #[test]
    fn test_image_validation() {
        assert!(validate_image("image/png", 1024).is_ok());
        assert!(validate_image("image/gif", MAX_IMAGE_BYTES).is_ok());
        assert_eq!(
            validate_image("application/pdf", 10),
            Err(TryOutError::UnsupportedImageType("application/pdf".to_string()))
        );
        assert_eq!(
            validate_image("image/jpeg", MAX_IMAGE_BYTES + 1),
            Err(TryOutError::ImageTooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
    }

    #[test]
    fn test_attaching_image_completes_task() {
        let mut session = catalog_session("ux-designer");
        session
            .attach_image("2", image("wireframe.png", "image/png", 2048))
            .unwrap();
        assert!(session.submission("2").unwrap().completed);

        assert!(session.remove_image("2").unwrap());
        assert!(!session.remove_image("2").unwrap());
        assert!(session.submission("2").unwrap().completed);
        assert!(session.first_image().is_none());
    }

    #[test]
    fn test_first_image_follows_task_order() {
        let mut session = catalog_session("ux-designer");
        session
            .attach_image("2", image("second.png", "image/png", 10))
            .unwrap();
        session
            .attach_image("1", image("first.jpg", "image/jpeg", 10))
            .unwrap();
        assert_eq!(session.first_image().unwrap().file_name, "first.jpg");
    }

    #[test]
    fn test_analysis_request_has_submission_for_every_task() {
        let mut session = catalog_session("data-scientist");
        session
            .update_task(
                "2",
                TaskUpdate {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        session.set_user_context(UserContext {
            age: Some("17".to_string()),
            ..Default::default()
        });

        let request = session.analysis_request();
        assert_eq!(request.career_title, "Data Scientist");
        assert_eq!(request.tasks.len(), 4);
        assert!(request.tasks[1].completed);
        assert!(!request.tasks[0].completed);
        assert_eq!(request.tasks[0].user_answer, "");
        assert_eq!(request.user_context.age.as_deref(), Some("17"));
        assert!(request.image.is_none());
    }

    #[test]
    fn test_fit_band_thresholds() {
        assert_eq!(FitBand::from_score(80.0), FitBand::Strong);
        assert_eq!(FitBand::from_score(79.9), FitBand::Good);
        assert_eq!(FitBand::from_score(60.0), FitBand::Good);
        assert_eq!(FitBand::from_score(40.0), FitBand::Moderate);
        assert_eq!(FitBand::from_score(39.0), FitBand::Low);
    }

    #[test]
    fn test_fallback_summary_mentions_progress() {
        let mut session = catalog_session("teacher");
        assert!(fallback_summary(&session).summary.contains("first step"));
        session
            .update_task(
                "1",
                TaskUpdate {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        let summary = fallback_summary(&session);
        assert!(summary.fallback);
        assert!(summary.summary.contains("1 of 4"));
    }
}
