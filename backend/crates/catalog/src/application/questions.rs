//! Question Use Cases

use std::sync::Arc;

use kernel::id::LevelId;

use crate::domain::drafts::{QuestionDraft, validate_batch};
use crate::domain::entities::Question;
use crate::domain::repository::QuizRepository;
use crate::error::CatalogResult;

pub struct ListQuestionsUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> ListQuestionsUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, level_id: LevelId) -> CatalogResult<Vec<Question>> {
        self.repo.list_questions(level_id).await
    }
}

/// Batch question insert; nothing is stored unless every question is valid
/// and the level exists
pub struct CreateQuestionsUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

/// Count of stored questions
#[derive(Debug)]
pub struct CreateQuestionsOutput {
    pub level_id: LevelId,
    pub count: usize,
}

impl<R> CreateQuestionsUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        level_id: i64,
        drafts: Vec<QuestionDraft>,
    ) -> CatalogResult<CreateQuestionsOutput> {
        let batch = validate_batch(level_id, drafts)?;
        let count = self.repo.create_questions(&batch).await?;

        tracing::info!(level_id = %batch.level_id, count, "Questions saved");

        Ok(CreateQuestionsOutput {
            level_id: batch.level_id,
            count,
        })
    }
}
