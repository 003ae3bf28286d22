//! Subject Use Cases

use std::sync::Arc;

use crate::domain::drafts::SubjectDraft;
use crate::domain::entities::Subject;
use crate::domain::repository::QuizRepository;
use crate::error::CatalogResult;

pub struct ListSubjectsUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> ListSubjectsUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Subject>> {
        self.repo.list_subjects().await
    }
}

pub struct CreateSubjectUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> CreateSubjectUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: SubjectDraft) -> CatalogResult<Subject> {
        let new_subject = draft.validate()?;
        let subject = self.repo.create_subject(&new_subject).await?;

        tracing::info!(subject_id = %subject.id, "Subject created");

        Ok(subject)
    }
}
