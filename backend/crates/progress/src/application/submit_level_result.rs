//! Submit Level Result Use Case

use std::sync::Arc;

use crate::domain::entities::SubmitOutcome;
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::LevelResultDraft;
use crate::error::ProgressResult;

pub struct SubmitLevelResultUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitLevelResultUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: LevelResultDraft) -> ProgressResult<SubmitOutcome> {
        let result = draft.validate()?;

        let total_stars = self.repo.record_level_result(&result).await?;

        tracing::info!(
            user_id = %result.user_id(),
            subject_id = %result.subject_id(),
            level = result.level_number(),
            stars = result.stars_earned(),
            total_stars,
            "Level result recorded"
        );

        Ok(SubmitOutcome {
            subject_id: result.subject_id().clone(),
            level_number: result.level_number(),
            stars_earned: result.stars_earned(),
            total_stars,
        })
    }
}
