//! Domain Layer
//!
//! - Entities (Course, Subject, Level, Question, Puzzle, FullQuiz)
//! - Drafts: unvalidated input plus the rules that turn it into new records
//! - Repository traits

pub mod drafts;
pub mod entities;
pub mod repository;
