//! Full Quiz Use Case
//!
//! Assembles subject → levels → questions for the game client.

use std::sync::Arc;

use kernel::id::SubjectId;

use crate::domain::entities::{FullQuiz, FullQuizLevel};
use crate::domain::repository::QuizRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct FullQuizUseCase<R>
where
    R: QuizRepository,
{
    repo: Arc<R>,
}

impl<R> FullQuizUseCase<R>
where
    R: QuizRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, subject_id: &SubjectId) -> CatalogResult<FullQuiz> {
        let subject = self
            .repo
            .find_subject(subject_id)
            .await?
            .ok_or(CatalogError::SubjectNotFound)?;

        let levels = self.repo.list_levels(Some(subject_id)).await?;

        let mut full_levels = Vec::with_capacity(levels.len());
        for level in levels {
            let questions = self.repo.list_questions(level.id).await?;
            full_levels.push(FullQuizLevel { level, questions });
        }

        Ok(FullQuiz {
            subject,
            levels: full_levels,
        })
    }
}
