//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use kernel::envelope::ApiResponse;
use kernel::extract::{JsonBody, QueryParams};
use kernel::id::{LevelId, PuzzleId, SubjectId};

use crate::application::questions::CreateQuestionsOutput;
use crate::application::{
    CreateLevelUseCase, CreatePuzzleUseCase, CreateQuestionsUseCase, CreateSubjectUseCase,
    DeletePuzzleUseCase, FullQuizUseCase, ListCoursesUseCase, ListLevelsUseCase,
    ListPuzzlesUseCase, ListQuestionsUseCase, ListSubjectsUseCase,
};
use crate::domain::entities::{Course, FullQuiz, Level, Puzzle, Question, Subject};
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    BatchQuestionsRequest, CategoryQuery, CreateLevelRequest, CreatePuzzleRequest,
    CreateSubjectRequest, LevelQuery, PuzzleIdQuery, QuestionsSavedResponse, SubjectQuery,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Public
// ============================================================================

/// GET /courses?category=
pub async fn list_courses<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> CatalogResult<ApiResponse<Vec<Course>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let courses = ListCoursesUseCase::new(state.repo.clone())
        .execute(query.category.as_deref())
        .await?;

    Ok(ApiResponse::ok("Courses retrieved successfully", courses))
}

/// GET /puzzles?category= (also GET /admin/puzzles)
pub async fn list_puzzles<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> CatalogResult<ApiResponse<Vec<Puzzle>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let puzzles = ListPuzzlesUseCase::new(state.repo.clone())
        .execute(query.category.as_deref())
        .await?;

    Ok(ApiResponse::ok("Puzzles retrieved", puzzles))
}

// ============================================================================
// Admin: subjects, levels, questions, quiz
// ============================================================================

/// GET /admin/subjects
pub async fn list_subjects<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<ApiResponse<Vec<Subject>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let subjects = ListSubjectsUseCase::new(state.repo.clone()).execute().await?;
    Ok(ApiResponse::ok("Subjects retrieved", subjects))
}

/// POST /admin/subjects
pub async fn create_subject<R>(
    State(state): State<CatalogAppState<R>>,
    JsonBody(req): JsonBody<CreateSubjectRequest>,
) -> CatalogResult<ApiResponse<Subject>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let subject = CreateSubjectUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;
    Ok(ApiResponse::created("Subject created", subject))
}

/// GET /admin/levels?subject_id=
pub async fn list_levels<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<SubjectQuery>,
) -> CatalogResult<ApiResponse<Vec<Level>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let subject_id = optional_subject(query.subject_id)?;
    let levels = ListLevelsUseCase::new(state.repo.clone())
        .execute(subject_id)
        .await?;
    Ok(ApiResponse::ok("Levels retrieved", levels))
}

/// POST /admin/levels
pub async fn create_level<R>(
    State(state): State<CatalogAppState<R>>,
    JsonBody(req): JsonBody<CreateLevelRequest>,
) -> CatalogResult<ApiResponse<Level>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let level = CreateLevelUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;
    Ok(ApiResponse::created("Level created", level))
}

/// GET /admin/questions?level_id=
pub async fn list_questions<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<LevelQuery>,
) -> CatalogResult<ApiResponse<Vec<Question>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let level_id = LevelId::from_raw(required_id(query.level_id, "level_id")?);
    let questions = ListQuestionsUseCase::new(state.repo.clone())
        .execute(level_id)
        .await?;
    Ok(ApiResponse::ok("Questions retrieved", questions))
}

/// POST /admin/questions
pub async fn create_questions<R>(
    State(state): State<CatalogAppState<R>>,
    JsonBody(req): JsonBody<BatchQuestionsRequest>,
) -> CatalogResult<ApiResponse<QuestionsSavedResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let drafts = req.questions.into_iter().map(Into::into).collect();
    let CreateQuestionsOutput { level_id, count } = CreateQuestionsUseCase::new(state.repo.clone())
        .execute(req.level_id, drafts)
        .await?;

    Ok(ApiResponse::ok(
        format!("{count} questions saved successfully"),
        QuestionsSavedResponse { level_id, count },
    ))
}

/// GET /admin/quiz?subject_id=
pub async fn full_quiz<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<SubjectQuery>,
) -> CatalogResult<ApiResponse<FullQuiz>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let subject_id = optional_subject(query.subject_id)?
        .ok_or_else(|| CatalogError::Validation("subject_id is required".to_string()))?;

    let quiz = FullQuizUseCase::new(state.repo.clone())
        .execute(&subject_id)
        .await?;
    Ok(ApiResponse::ok("Quiz retrieved", quiz))
}

// ============================================================================
// Admin: puzzles
// ============================================================================

/// POST /admin/puzzles
pub async fn create_puzzle<R>(
    State(state): State<CatalogAppState<R>>,
    JsonBody(req): JsonBody<CreatePuzzleRequest>,
) -> CatalogResult<ApiResponse<Puzzle>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let puzzle = CreatePuzzleUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;
    Ok(ApiResponse::created("Puzzle created", puzzle))
}

/// DELETE /admin/puzzles?id=
pub async fn delete_puzzle<R>(
    State(state): State<CatalogAppState<R>>,
    QueryParams(query): QueryParams<PuzzleIdQuery>,
) -> CatalogResult<ApiResponse<()>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let id = PuzzleId::from_raw(required_id(query.id, "id")?);
    DeletePuzzleUseCase::new(state.repo.clone())
        .execute(id)
        .await?;
    Ok(ApiResponse::message("Puzzle deleted"))
}

// ============================================================================
// Query helpers
// ============================================================================

fn required_id(raw: Option<String>, field: &str) -> CatalogResult<i64> {
    let raw = raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CatalogError::Validation(format!("{field} is required")))?;

    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CatalogError::Validation(format!("{field} must be a positive integer")))
}

fn optional_subject(raw: Option<String>) -> CatalogResult<Option<SubjectId>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => SubjectId::new(raw)
            .map(Some)
            .map_err(|e| CatalogError::Validation(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_id() {
        assert_eq!(required_id(Some(" 12 ".to_string()), "id").unwrap(), 12);
        assert_eq!(
            required_id(None, "level_id").unwrap_err().to_string(),
            "level_id is required"
        );
        assert_eq!(
            required_id(Some("x".to_string()), "id").unwrap_err().to_string(),
            "id must be a positive integer"
        );
        assert!(required_id(Some("0".to_string()), "id").is_err());
    }

    #[test]
    fn test_optional_subject() {
        assert!(optional_subject(None).unwrap().is_none());
        assert!(optional_subject(Some("  ".to_string())).unwrap().is_none());
        assert_eq!(
            optional_subject(Some("science".to_string())).unwrap().unwrap().as_str(),
            "science"
        );
    }
}
