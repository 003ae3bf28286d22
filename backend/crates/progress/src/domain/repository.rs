//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{SubjectId, UserId};

use crate::domain::entities::SubjectProgress;
use crate::domain::value_objects::LevelResult;
use crate::error::ProgressResult;

/// Progress ledger repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Upsert the level completion, recompute the subject total and store
    /// it, all-or-nothing. Returns the new subject total.
    async fn record_level_result(&self, result: &LevelResult) -> ProgressResult<i32>;

    /// Progress for one subject; an unknown pair yields
    /// [`SubjectProgress::empty`]
    async fn find_subject_progress(
        &self,
        user_id: UserId,
        subject_id: &SubjectId,
    ) -> ProgressResult<SubjectProgress>;
}
