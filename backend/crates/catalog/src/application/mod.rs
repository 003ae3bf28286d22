//! Application Layer
//!
//! Use cases and application services.

pub mod courses;
pub mod full_quiz;
pub mod levels;
pub mod puzzles;
pub mod questions;
pub mod subjects;

// Re-exports
pub use courses::ListCoursesUseCase;
pub use full_quiz::FullQuizUseCase;
pub use levels::{CreateLevelUseCase, ListLevelsUseCase};
pub use puzzles::{CreatePuzzleUseCase, DeletePuzzleUseCase, ListPuzzlesUseCase};
pub use questions::{CreateQuestionsUseCase, ListQuestionsUseCase};
pub use subjects::{CreateSubjectUseCase, ListSubjectsUseCase};
