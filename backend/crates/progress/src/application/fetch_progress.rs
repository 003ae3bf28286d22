//! Fetch Progress Use Case
//!
//! Reads one subject, or every configured subject when none is given.

use std::sync::Arc;

use kernel::id::{SubjectId, UserId};

use crate::application::config::ProgressConfig;
use crate::domain::entities::SubjectProgress;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

#[derive(Debug)]
pub struct FetchProgressInput {
    pub user_id: UserId,
    pub subject_id: Option<SubjectId>,
}

#[derive(Debug)]
pub enum FetchProgressOutput {
    Subject(SubjectProgress),
    All(Vec<SubjectProgress>),
}

pub struct FetchProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R> FetchProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: FetchProgressInput) -> ProgressResult<FetchProgressOutput> {
        if !input.user_id.is_valid() {
            return Err(ProgressError::Validation(
                "user_id must be a positive integer".to_string(),
            ));
        }

        if let Some(subject_id) = input.subject_id {
            let progress = self
                .repo
                .find_subject_progress(input.user_id, &subject_id)
                .await?;
            return Ok(FetchProgressOutput::Subject(progress));
        }

        let mut all = Vec::with_capacity(self.config.known_subjects.len());
        for subject_id in &self.config.known_subjects {
            match self.repo.find_subject_progress(input.user_id, subject_id).await {
                Ok(progress) => all.push(progress),
                Err(e) => {
                    tracing::warn!(
                        user_id = %input.user_id,
                        subject_id = %subject_id,
                        error = %e,
                        "Skipping subject in progress overview"
                    );
                }
            }
        }

        Ok(FetchProgressOutput::All(all))
    }
}
