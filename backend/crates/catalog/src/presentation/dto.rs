//! API DTOs (Data Transfer Objects)
//!
//! Request bodies default every field so that missing values reach
//! validation and get its messages rather than a generic parse error.

use kernel::id::LevelId;
use serde::{Deserialize, Serialize};

use crate::domain::drafts::{LevelDraft, PuzzleDraft, QuestionDraft, SubjectDraft};

// ============================================================================
// Queries
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectQuery {
    pub subject_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelQuery {
    pub level_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PuzzleIdQuery {
    pub id: Option<String>,
}

// ============================================================================
// Subjects & Levels
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateSubjectRequest {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub gradient_start: String,
    pub gradient_end: String,
}

impl From<CreateSubjectRequest> for SubjectDraft {
    fn from(req: CreateSubjectRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            emoji: req.emoji,
            gradient_start: req.gradient_start,
            gradient_end: req.gradient_end,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateLevelRequest {
    pub subject_id: String,
    pub level_number: i32,
    pub title: String,
    pub icon: String,
    pub stars_required: i32,
}

impl From<CreateLevelRequest> for LevelDraft {
    fn from(req: CreateLevelRequest) -> Self {
        Self {
            subject_id: req.subject_id,
            level_number: req.level_number,
            title: req.title,
            icon: req.icon,
            stars_required: req.stars_required,
        }
    }
}

// ============================================================================
// Questions
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestionRequest {
    pub question_text: String,
    pub image_url: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_index: i32,
    pub fun_fact: String,
}

impl From<QuestionRequest> for QuestionDraft {
    fn from(req: QuestionRequest) -> Self {
        Self {
            question_text: req.question_text,
            image_url: req.image_url,
            option_a: req.option_a,
            option_b: req.option_b,
            option_c: req.option_c,
            option_d: req.option_d,
            correct_index: req.correct_index,
            fun_fact: req.fun_fact,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BatchQuestionsRequest {
    pub level_id: i64,
    pub questions: Vec<QuestionRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsSavedResponse {
    pub level_id: LevelId,
    pub count: usize,
}

// ============================================================================
// Puzzles
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePuzzleRequest {
    pub title: String,
    pub image_url: String,
    pub piece_count: i32,
    pub category: String,
    pub difficulty: String,
}

impl From<CreatePuzzleRequest> for PuzzleDraft {
    fn from(req: CreatePuzzleRequest) -> Self {
        Self {
            title: req.title,
            image_url: req.image_url,
            piece_count: req.piece_count,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}
