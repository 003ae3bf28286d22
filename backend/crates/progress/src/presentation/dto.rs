//! API DTOs (Data Transfer Objects)

use kernel::id::SubjectId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LevelResultDraft;

/// `GET /progress` query; both fields arrive as raw strings so that
/// missing and malformed values get their own messages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressQuery {
    pub user_id: Option<String>,
    pub subject_id: Option<String>,
}

/// `POST /progress` body; absent fields default to zero and are caught by
/// validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitProgressRequest {
    pub user_id: i64,
    pub subject_id: String,
    pub level_number: i32,
    pub stars_earned: i32,
    pub quiz_score: i32,
    pub total_questions: i32,
}

impl From<SubmitProgressRequest> for LevelResultDraft {
    fn from(req: SubmitProgressRequest) -> Self {
        Self {
            user_id: req.user_id,
            subject_id: req.subject_id,
            level_number: req.level_number,
            stars_earned: req.stars_earned,
            quiz_score: req.quiz_score,
            total_questions: req.total_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitProgressResponse {
    pub subject_id: SubjectId,
    pub total_stars: i32,
    pub stars_earned: i32,
    pub level: i32,
}
