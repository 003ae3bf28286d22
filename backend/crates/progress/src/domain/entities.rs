//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{SubjectId, UserId};
use serde::Serialize;

use crate::domain::value_objects::LevelResult;

/// Best result for one (user, subject, level)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCompletion {
    pub user_id: UserId,
    pub subject_id: SubjectId,
    pub level_number: i32,
    pub stars_earned: i32,
    pub quiz_score: i32,
    pub total_questions: i32,
    pub completed_at: DateTime<Utc>,
}

impl LevelCompletion {
    /// First completion of a level
    pub fn first(result: &LevelResult, now: DateTime<Utc>) -> Self {
        Self {
            user_id: result.user_id(),
            subject_id: result.subject_id().clone(),
            level_number: result.level_number(),
            stars_earned: result.stars_earned(),
            quiz_score: result.quiz_score(),
            total_questions: result.total_questions(),
            completed_at: now,
        }
    }

    /// Fold a repeat attempt in: stars and score keep their maximum,
    /// total questions and the timestamp follow the latest attempt.
    pub fn merge(&mut self, result: &LevelResult, now: DateTime<Utc>) {
        self.stars_earned = self.stars_earned.max(result.stars_earned());
        self.quiz_score = self.quiz_score.max(result.quiz_score());
        self.total_questions = result.total_questions();
        self.completed_at = now;
    }
}

/// Per-subject view returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectProgress {
    pub subject_id: SubjectId,
    pub total_stars: i32,
    /// Strictly ascending level numbers
    pub completed_levels: Vec<i32>,
}

impl SubjectProgress {
    /// Zero total, no levels
    pub fn empty(subject_id: SubjectId) -> Self {
        Self {
            subject_id,
            total_stars: 0,
            completed_levels: Vec::new(),
        }
    }
}

/// Result of recording one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub subject_id: SubjectId,
    pub level_number: i32,
    pub stars_earned: i32,
    pub total_stars: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LevelResultDraft;
    use chrono::TimeDelta;

    fn result(stars: i32, score: i32, total: i32) -> LevelResult {
        LevelResultDraft {
            user_id: 1,
            subject_id: "science".to_string(),
            level_number: 2,
            stars_earned: stars,
            quiz_score: score,
            total_questions: total,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_merge_keeps_maximum_stars_and_score() {
        let t0 = Utc::now();
        let mut completion = LevelCompletion::first(&result(2, 70, 5), t0);

        completion.merge(&result(1, 90, 6), t0 + TimeDelta::seconds(5));
        assert_eq!(completion.stars_earned, 2);
        assert_eq!(completion.quiz_score, 90);
        assert_eq!(completion.total_questions, 6);
        assert_eq!(completion.completed_at, t0 + TimeDelta::seconds(5));

        completion.merge(&result(3, 10, 4), t0 + TimeDelta::seconds(9));
        assert_eq!(completion.stars_earned, 3);
        assert_eq!(completion.quiz_score, 90);
        assert_eq!(completion.total_questions, 4);
    }

    #[test]
    fn test_identical_merge_is_idempotent_except_timestamp() {
        let t0 = Utc::now();
        let mut completion = LevelCompletion::first(&result(2, 50, 5), t0);
        let before = completion.clone();

        completion.merge(&result(2, 50, 5), t0);
        assert_eq!(completion, before);
    }
}
