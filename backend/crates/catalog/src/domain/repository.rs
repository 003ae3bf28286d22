//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{LevelId, PuzzleId, SubjectId};

use crate::domain::drafts::{NewLevel, NewPuzzle, NewSubject, QuestionBatch};
use crate::domain::entities::{Course, Level, Puzzle, Question, Subject};
use crate::error::CatalogResult;

#[trait_variant::make(CourseRepository: Send)]
pub trait LocalCourseRepository {
    /// All courses, or only those in `category`
    async fn list_courses(&self, category: Option<&str>) -> CatalogResult<Vec<Course>>;
}

#[trait_variant::make(QuizRepository: Send)]
pub trait LocalQuizRepository {
    /// Ordered by id
    async fn list_subjects(&self) -> CatalogResult<Vec<Subject>>;

    /// Fails with `DuplicateSubject` when the id is taken
    async fn create_subject(&self, subject: &NewSubject) -> CatalogResult<Subject>;

    async fn find_subject(&self, id: &SubjectId) -> CatalogResult<Option<Subject>>;

    /// One subject ordered by level number, or all ordered by
    /// (subject, level number)
    async fn list_levels(&self, subject_id: Option<&SubjectId>) -> CatalogResult<Vec<Level>>;

    /// Fails with `SubjectNotFound` or `DuplicateLevel`
    async fn create_level(&self, level: &NewLevel) -> CatalogResult<Level>;

    /// Ordered by sort order
    async fn list_questions(&self, level_id: LevelId) -> CatalogResult<Vec<Question>>;

    /// Insert the whole batch or nothing; fails with `LevelNotFound`
    async fn create_questions(&self, batch: &QuestionBatch) -> CatalogResult<usize>;
}

#[trait_variant::make(PuzzleRepository: Send)]
pub trait LocalPuzzleRepository {
    /// Newest first
    async fn list_puzzles(&self, category: Option<&str>) -> CatalogResult<Vec<Puzzle>>;

    async fn create_puzzle(&self, puzzle: &NewPuzzle) -> CatalogResult<Puzzle>;

    /// Returns false when no puzzle had that id
    async fn delete_puzzle(&self, id: PuzzleId) -> CatalogResult<bool>;
}

/// Everything the catalog routers need from one store
pub trait CatalogRepository: CourseRepository + QuizRepository + PuzzleRepository {}

impl<T> CatalogRepository for T where T: CourseRepository + QuizRepository + PuzzleRepository {}
