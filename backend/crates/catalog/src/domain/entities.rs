//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CourseId, LevelId, PuzzleId, QuestionId, SubjectId};
use serde::Serialize;

/// Read-only catalog course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Mobile clients read this field as `imageUrl`
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub instructor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub emoji: String,
    pub gradient_start: String,
    pub gradient_end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    pub id: LevelId,
    pub subject_id: SubjectId,
    pub level_number: i32,
    pub title: String,
    pub icon: String,
    pub stars_required: i32,
}

/// Multiple-choice question with exactly four options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub level_id: LevelId,
    pub question_text: String,
    pub image_url: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// 0..=3, index into the options
    pub correct_index: i32,
    pub fun_fact: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub title: String,
    pub image_url: String,
    pub piece_count: i32,
    pub category: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

/// Subject with its levels, each with its questions
#[derive(Debug, Clone, Serialize)]
pub struct FullQuiz {
    #[serde(flatten)]
    pub subject: Subject,
    pub levels: Vec<FullQuizLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FullQuizLevel {
    #[serde(flatten)]
    pub level: Level,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_uses_camel_case_image_url() {
        let course = Course {
            id: CourseId::from_raw(1),
            title: "Colours".to_string(),
            category: "Art".to_string(),
            description: "Mixing paint".to_string(),
            image_url: "http://img/colours.png".to_string(),
            instructor: "Ms. Perera".to_string(),
        };
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["imageUrl"], "http://img/colours.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_full_quiz_is_flattened() {
        let subject = Subject {
            id: SubjectId::new("science").unwrap(),
            name: "Science".to_string(),
            emoji: "🔬".to_string(),
            gradient_start: "#4FC3F7".to_string(),
            gradient_end: "#0288D1".to_string(),
        };
        let level = Level {
            id: LevelId::from_raw(3),
            subject_id: subject.id.clone(),
            level_number: 1,
            title: "Plants".to_string(),
            icon: "🌱".to_string(),
            stars_required: 0,
        };
        let quiz = FullQuiz {
            subject,
            levels: vec![FullQuizLevel {
                level,
                questions: Vec::new(),
            }],
        };

        let json = serde_json::to_value(&quiz).unwrap();
        assert_eq!(json["id"], "science");
        assert_eq!(json["levels"][0]["id"], 3);
        assert_eq!(json["levels"][0]["questions"], serde_json::json!([]));
    }
}
