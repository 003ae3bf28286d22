//! Drafts
//!
//! Client input as received, and the validated records built from it.
//! Validation fills the documented defaults.

use kernel::id::{LevelId, SubjectId};

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_SUBJECT_EMOJI: &str = "📚";
pub const DEFAULT_GRADIENT_START: &str = "#4FC3F7";
pub const DEFAULT_GRADIENT_END: &str = "#0288D1";
pub const DEFAULT_LEVEL_ICON: &str = "🎯";
pub const DEFAULT_PIECE_COUNT: i32 = 16;
pub const DEFAULT_PUZZLE_CATEGORY: &str = "General";
pub const DEFAULT_PUZZLE_DIFFICULTY: &str = "Medium";

fn validation(message: impl Into<String>) -> CatalogError {
    CatalogError::Validation(message.into())
}

fn or_default(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct SubjectDraft {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub gradient_start: String,
    pub gradient_end: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub id: SubjectId,
    pub name: String,
    pub emoji: String,
    pub gradient_start: String,
    pub gradient_end: String,
}

impl SubjectDraft {
    pub fn validate(self) -> CatalogResult<NewSubject> {
        let name = self.name.trim();
        if self.id.trim().is_empty() || name.is_empty() {
            return Err(validation("id and name are required"));
        }
        let id = SubjectId::new(&self.id).map_err(|e| validation(e.to_string()))?;

        Ok(NewSubject {
            id,
            name: name.to_string(),
            emoji: or_default(self.emoji, DEFAULT_SUBJECT_EMOJI),
            gradient_start: or_default(self.gradient_start, DEFAULT_GRADIENT_START),
            gradient_end: or_default(self.gradient_end, DEFAULT_GRADIENT_END),
        })
    }
}

// ============================================================================
// Level
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct LevelDraft {
    pub subject_id: String,
    pub level_number: i32,
    pub title: String,
    pub icon: String,
    pub stars_required: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLevel {
    pub subject_id: SubjectId,
    pub level_number: i32,
    pub title: String,
    pub icon: String,
    pub stars_required: i32,
}

impl LevelDraft {
    pub fn validate(self) -> CatalogResult<NewLevel> {
        let title = self.title.trim();
        if self.subject_id.trim().is_empty() || self.level_number == 0 || title.is_empty() {
            return Err(validation("subject_id, level_number and title are required"));
        }
        if self.level_number < 0 {
            return Err(validation("level_number must be positive"));
        }
        if self.stars_required < 0 {
            return Err(validation("stars_required must not be negative"));
        }
        let subject_id = SubjectId::new(&self.subject_id).map_err(|e| validation(e.to_string()))?;

        Ok(NewLevel {
            subject_id,
            level_number: self.level_number,
            title: title.to_string(),
            icon: or_default(self.icon, DEFAULT_LEVEL_ICON),
            stars_required: self.stars_required,
        })
    }
}

// ============================================================================
// Questions
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub question_text: String,
    pub image_url: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_index: i32,
    pub fun_fact: String,
}

/// Validated question; `sort_order` is its position in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub image_url: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_index: i32,
    pub fun_fact: String,
    pub sort_order: i32,
}

/// A batch is either valid as a whole or rejected as a whole
#[derive(Debug, Clone)]
pub struct QuestionBatch {
    pub level_id: LevelId,
    pub questions: Vec<NewQuestion>,
}

/// Validate a whole batch before anything is written. Errors name the
/// offending question by its 1-based position.
pub fn validate_batch(level_id: i64, drafts: Vec<QuestionDraft>) -> CatalogResult<QuestionBatch> {
    if level_id == 0 || drafts.is_empty() {
        return Err(validation("level_id and at least one question are required"));
    }
    let level_id = LevelId::from_raw(level_id);
    if !level_id.is_valid() {
        return Err(validation("level_id must be a positive integer"));
    }

    let questions = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| draft.validate(index))
        .collect::<CatalogResult<Vec<_>>>()?;

    Ok(QuestionBatch {
        level_id,
        questions,
    })
}

impl QuestionDraft {
    fn validate(self, index: usize) -> CatalogResult<NewQuestion> {
        let position = index + 1;
        let options = [&self.option_a, &self.option_b, &self.option_c, &self.option_d];
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(validation(format!(
                "Question {position}: all 4 options are required"
            )));
        }
        if self.question_text.trim().is_empty() {
            return Err(validation(format!(
                "Question {position}: question_text is required"
            )));
        }
        if !(0..=3).contains(&self.correct_index) {
            return Err(validation(format!(
                "Question {position}: correct_index must be between 0 and 3"
            )));
        }
        let sort_order = i32::try_from(index)
            .map_err(|_| validation("Too many questions in one batch"))?;

        Ok(NewQuestion {
            question_text: self.question_text.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            option_a: self.option_a.trim().to_string(),
            option_b: self.option_b.trim().to_string(),
            option_c: self.option_c.trim().to_string(),
            option_d: self.option_d.trim().to_string(),
            correct_index: self.correct_index,
            fun_fact: self.fun_fact.trim().to_string(),
            sort_order,
        })
    }
}

// ============================================================================
// Puzzle
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PuzzleDraft {
    pub title: String,
    pub image_url: String,
    pub piece_count: i32,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPuzzle {
    pub title: String,
    pub image_url: String,
    pub piece_count: i32,
    pub category: String,
    pub difficulty: String,
}

impl PuzzleDraft {
    pub fn validate(self) -> CatalogResult<NewPuzzle> {
        let title = self.title.trim();
        let image_url = self.image_url.trim();
        if title.is_empty() || image_url.is_empty() {
            return Err(validation("title and image_url are required"));
        }
        let piece_count = match self.piece_count {
            0 => DEFAULT_PIECE_COUNT,
            n if n < 0 => return Err(validation("piece_count must be positive")),
            n => n,
        };

        Ok(NewPuzzle {
            title: title.to_string(),
            image_url: image_url.to_string(),
            piece_count,
            category: or_default(self.category, DEFAULT_PUZZLE_CATEGORY),
            difficulty: or_default(self.difficulty, DEFAULT_PUZZLE_DIFFICULTY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> QuestionDraft {
        QuestionDraft {
            question_text: text.to_string(),
            option_a: "Sun".to_string(),
            option_b: "Moon".to_string(),
            option_c: "Mars".to_string(),
            option_d: "Venus".to_string(),
            correct_index: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_subject_defaults() {
        let subject = SubjectDraft {
            id: "science".to_string(),
            name: " Science ".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(subject.name, "Science");
        assert_eq!(subject.emoji, "📚");
        assert_eq!(subject.gradient_start, "#4FC3F7");
        assert_eq!(subject.gradient_end, "#0288D1");
    }

    #[test]
    fn test_subject_requires_id_and_name() {
        let err = SubjectDraft {
            name: "Science".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "id and name are required");
    }

    #[test]
    fn test_level_rules() {
        let level = LevelDraft {
            subject_id: "science".to_string(),
            level_number: 1,
            title: "Plants".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(level.icon, "🎯");

        let err = LevelDraft {
            subject_id: "science".to_string(),
            title: "Plants".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "subject_id, level_number and title are required");

        assert!(
            LevelDraft {
                subject_id: "science".to_string(),
                level_number: -1,
                title: "Plants".to_string(),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_batch_assigns_sort_order() {
        let batch = validate_batch(4, vec![question("Q1"), question("Q2"), question("Q3")]).unwrap();
        let orders: Vec<i32> = batch.questions.iter().map(|q| q.sort_order).collect();
        assert_eq!(orders, [0, 1, 2]);
        assert_eq!(batch.level_id.get(), 4);
    }

    #[test]
    fn test_batch_names_the_broken_question() {
        let mut broken = question("Q2");
        broken.option_c = " ".to_string();

        let err = validate_batch(4, vec![question("Q1"), broken]).unwrap_err();
        assert_eq!(err.to_string(), "Question 2: all 4 options are required");
    }

    #[test]
    fn test_batch_requires_level_and_questions() {
        let err = validate_batch(0, vec![question("Q1")]).unwrap_err();
        assert_eq!(err.to_string(), "level_id and at least one question are required");
        assert!(validate_batch(4, Vec::new()).is_err());
        assert!(validate_batch(-4, vec![question("Q1")]).is_err());
    }

    #[test]
    fn test_correct_index_range() {
        let mut bad = question("Q1");
        bad.correct_index = 4;
        let err = validate_batch(1, vec![bad]).unwrap_err();
        assert_eq!(err.to_string(), "Question 1: correct_index must be between 0 and 3");
    }

    #[test]
    fn test_puzzle_defaults() {
        let puzzle = PuzzleDraft {
            title: "Elephant".to_string(),
            image_url: "http://host/uploads/1.png".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(puzzle.piece_count, 16);
        assert_eq!(puzzle.category, "General");
        assert_eq!(puzzle.difficulty, "Medium");

        let err = PuzzleDraft {
            title: "Elephant".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "title and image_url are required");
    }
}
