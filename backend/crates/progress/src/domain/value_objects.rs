//! Value Objects

use kernel::id::{SubjectId, SubjectIdError, UserId};

use crate::error::{ProgressError, ProgressResult};

/// Level result as submitted by the client, before validation
#[derive(Debug, Clone, Default)]
pub struct LevelResultDraft {
    pub user_id: i64,
    pub subject_id: String,
    pub level_number: i32,
    pub stars_earned: i32,
    pub quiz_score: i32,
    pub total_questions: i32,
}

impl LevelResultDraft {
    /// Validate into a [`LevelResult`]; nothing is written on failure
    pub fn validate(self) -> ProgressResult<LevelResult> {
        if self.user_id == 0 || self.subject_id.trim().is_empty() || self.level_number == 0 {
            return Err(ProgressError::Validation(
                "user_id, subject_id and level_number are required".to_string(),
            ));
        }

        if self.user_id < 0 || self.level_number < 0 {
            return Err(ProgressError::Validation(
                "user_id and level_number must be positive".to_string(),
            ));
        }

        if self.stars_earned < 0 || self.quiz_score < 0 || self.total_questions < 0 {
            return Err(ProgressError::Validation(
                "stars_earned, quiz_score and total_questions must not be negative".to_string(),
            ));
        }

        let subject_id = SubjectId::new(&self.subject_id).map_err(subject_error)?;

        Ok(LevelResult {
            user_id: UserId::from_raw(self.user_id),
            subject_id,
            level_number: self.level_number,
            stars_earned: self.stars_earned,
            quiz_score: self.quiz_score,
            total_questions: self.total_questions,
        })
    }
}

pub(crate) fn subject_error(err: SubjectIdError) -> ProgressError {
    ProgressError::Validation(err.to_string())
}

/// The subject total no longer fits the stored star count
pub(crate) fn star_total_overflow() -> ProgressError {
    ProgressError::Validation("total stars for this subject are out of range".to_string())
}

/// Validated outcome of one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResult {
    user_id: UserId,
    subject_id: SubjectId,
    level_number: i32,
    stars_earned: i32,
    quiz_score: i32,
    total_questions: i32,
}

impl LevelResult {
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    pub fn level_number(&self) -> i32 {
        self.level_number
    }

    pub fn stars_earned(&self) -> i32 {
        self.stars_earned
    }

    pub fn quiz_score(&self) -> i32 {
        self.quiz_score
    }

    pub fn total_questions(&self) -> i32 {
        self.total_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LevelResultDraft {
        LevelResultDraft {
            user_id: 7,
            subject_id: " biology ".to_string(),
            level_number: 1,
            stars_earned: 3,
            quiz_score: 80,
            total_questions: 5,
        }
    }

    #[test]
    fn test_valid_draft() {
        let result = draft().validate().unwrap();
        assert_eq!(result.subject_id().as_str(), "biology");
        assert_eq!(result.user_id().get(), 7);
    }

    #[test]
    fn test_missing_required_fields() {
        for broken in [
            LevelResultDraft { user_id: 0, ..draft() },
            LevelResultDraft { subject_id: "  ".to_string(), ..draft() },
            LevelResultDraft { level_number: 0, ..draft() },
        ] {
            let err = broken.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "user_id, subject_id and level_number are required"
            );
        }
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(LevelResultDraft { user_id: -1, ..draft() }.validate().is_err());
        assert!(LevelResultDraft { level_number: -2, ..draft() }.validate().is_err());
        assert!(LevelResultDraft { stars_earned: -1, ..draft() }.validate().is_err());
        assert!(LevelResultDraft { quiz_score: -5, ..draft() }.validate().is_err());
        assert!(LevelResultDraft { total_questions: -1, ..draft() }.validate().is_err());
    }

    #[test]
    fn test_zero_stars_is_a_valid_completion() {
        assert!(LevelResultDraft { stars_earned: 0, quiz_score: 0, ..draft() }
            .validate()
            .is_ok());
    }
}
