//! Level Use Cases

use std::sync::Arc;

use kernel::id::SubjectId;

use crate::domain::drafts::LevelDraft;
use crate::domain::entities::Level;
use crate::domain::repository::QuizRepository;
use crate::error::CatalogResult;

pub struct ListLevelsUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> ListLevelsUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, subject_id: Option<SubjectId>) -> CatalogResult<Vec<Level>> {
        self.repo.list_levels(subject_id.as_ref()).await
    }
}

pub struct CreateLevelUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> CreateLevelUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: LevelDraft) -> CatalogResult<Level> {
        let new_level = draft.validate()?;
        let level = self.repo.create_level(&new_level).await?;

        tracing::info!(
            level_id = %level.id,
            subject_id = %level.subject_id,
            level_number = level.level_number,
            "Level created"
        );

        Ok(level)
    }
}
