//! In-memory repository for tests and local runs without a database

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::{SubjectId, UserId};

use crate::domain::entities::{LevelCompletion, SubjectProgress};
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::{LevelResult, star_total_overflow};
use crate::error::{ProgressError, ProgressResult};

type CompletionKey = (UserId, SubjectId, i32);

#[derive(Default)]
struct Ledger {
    completions: BTreeMap<CompletionKey, LevelCompletion>,
    totals: BTreeMap<(UserId, SubjectId), i32>,
}

#[derive(Clone, Default)]
pub struct InMemoryProgressRepository {
    ledger: Arc<Mutex<Ledger>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ProgressResult<MutexGuard<'_, Ledger>> {
        self.ledger
            .lock()
            .map_err(|_| ProgressError::Internal("progress ledger lock poisoned".to_string()))
    }

    /// Stored completion for a key, if any
    pub fn completion(
        &self,
        user_id: UserId,
        subject_id: &SubjectId,
        level_number: i32,
    ) -> Option<LevelCompletion> {
        self.lock().ok().and_then(|ledger| {
            ledger
                .completions
                .get(&(user_id, subject_id.clone(), level_number))
                .cloned()
        })
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    async fn record_level_result(&self, result: &LevelResult) -> ProgressResult<i32> {
        let mut ledger = self.lock()?;
        let now = Utc::now();
        let user_id = result.user_id();
        let subject_id = result.subject_id().clone();

        let key = (user_id, subject_id.clone(), result.level_number());

        let completion = match ledger.completions.get(&key) {
            Some(existing) => {
                let mut merged = existing.clone();
                merged.merge(result, now);
                merged
            }
            None => LevelCompletion::first(result, now),
        };

        // Total is checked before anything is written
        let total_stars = ledger
            .completions
            .iter()
            .filter(|((u, s, level), _)| {
                *u == user_id && *s == subject_id && *level != result.level_number()
            })
            .try_fold(completion.stars_earned, |acc, (_, c)| {
                acc.checked_add(c.stars_earned)
            })
            .ok_or_else(star_total_overflow)?;

        ledger.completions.insert(key, completion);
        ledger.totals.insert((user_id, subject_id), total_stars);

        Ok(total_stars)
    }

    async fn find_subject_progress(
        &self,
        user_id: UserId,
        subject_id: &SubjectId,
    ) -> ProgressResult<SubjectProgress> {
        let ledger = self.lock()?;

        let Some(&total_stars) = ledger.totals.get(&(user_id, subject_id.clone())) else {
            return Ok(SubjectProgress::empty(subject_id.clone()));
        };

        // BTreeMap key order yields ascending level numbers
        let completed_levels = ledger
            .completions
            .keys()
            .filter(|(u, s, _)| *u == user_id && s == subject_id)
            .map(|(_, _, level)| *level)
            .collect();

        Ok(SubjectProgress {
            subject_id: subject_id.clone(),
            total_stars,
            completed_levels,
        })
    }
}
