//! In-memory repository for tests and local runs without a database

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::{LevelId, PuzzleId, QuestionId, SubjectId};

use crate::domain::drafts::{NewLevel, NewPuzzle, NewSubject, QuestionBatch};
use crate::domain::entities::{Course, Level, Puzzle, Question, Subject};
use crate::domain::repository::{CourseRepository, PuzzleRepository, QuizRepository};
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
struct Store {
    courses: Vec<Course>,
    subjects: BTreeMap<SubjectId, Subject>,
    levels: Vec<Level>,
    questions: Vec<Question>,
    puzzles: Vec<Puzzle>,
    next_level_id: i64,
    next_question_id: i64,
    next_puzzle_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Courses are read-only through the API; seed them here
    pub fn with_courses(courses: Vec<Course>) -> Self {
        let repo = Self::default();
        if let Ok(mut store) = repo.store.lock() {
            store.courses = courses;
        }
        repo
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| CatalogError::Internal("catalog store lock poisoned".to_string()))
    }
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl CourseRepository for InMemoryCatalogRepository {
    async fn list_courses(&self, category: Option<&str>) -> CatalogResult<Vec<Course>> {
        Ok(self
            .lock()?
            .courses
            .iter()
            .filter(|c| category.is_none_or(|cat| c.category == cat))
            .cloned()
            .collect())
    }
}

impl QuizRepository for InMemoryCatalogRepository {
    async fn list_subjects(&self) -> CatalogResult<Vec<Subject>> {
        Ok(self.lock()?.subjects.values().cloned().collect())
    }

    async fn create_subject(&self, subject: &NewSubject) -> CatalogResult<Subject> {
        let mut store = self.lock()?;
        if store.subjects.contains_key(&subject.id) {
            return Err(CatalogError::DuplicateSubject);
        }
        let created = Subject {
            id: subject.id.clone(),
            name: subject.name.clone(),
            emoji: subject.emoji.clone(),
            gradient_start: subject.gradient_start.clone(),
            gradient_end: subject.gradient_end.clone(),
        };
        store.subjects.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn find_subject(&self, id: &SubjectId) -> CatalogResult<Option<Subject>> {
        Ok(self.lock()?.subjects.get(id).cloned())
    }

    async fn list_levels(&self, subject_id: Option<&SubjectId>) -> CatalogResult<Vec<Level>> {
        let mut levels: Vec<Level> = self
            .lock()?
            .levels
            .iter()
            .filter(|l| subject_id.is_none_or(|s| &l.subject_id == s))
            .cloned()
            .collect();
        levels.sort_by(|a, b| {
            (&a.subject_id, a.level_number).cmp(&(&b.subject_id, b.level_number))
        });
        Ok(levels)
    }

    async fn create_level(&self, level: &NewLevel) -> CatalogResult<Level> {
        let mut store = self.lock()?;
        if !store.subjects.contains_key(&level.subject_id) {
            return Err(CatalogError::SubjectNotFound);
        }
        if store
            .levels
            .iter()
            .any(|l| l.subject_id == level.subject_id && l.level_number == level.level_number)
        {
            return Err(CatalogError::DuplicateLevel);
        }
        let created = Level {
            id: LevelId::from_raw(next_id(&mut store.next_level_id)),
            subject_id: level.subject_id.clone(),
            level_number: level.level_number,
            title: level.title.clone(),
            icon: level.icon.clone(),
            stars_required: level.stars_required,
        };
        store.levels.push(created.clone());
        Ok(created)
    }

    async fn list_questions(&self, level_id: LevelId) -> CatalogResult<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .lock()?
            .questions
            .iter()
            .filter(|q| q.level_id == level_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| (q.sort_order, q.id));
        Ok(questions)
    }

    async fn create_questions(&self, batch: &QuestionBatch) -> CatalogResult<usize> {
        let mut store = self.lock()?;
        if !store.levels.iter().any(|l| l.id == batch.level_id) {
            return Err(CatalogError::LevelNotFound);
        }
        for question in &batch.questions {
            let id = QuestionId::from_raw(next_id(&mut store.next_question_id));
            store.questions.push(Question {
                id,
                level_id: batch.level_id,
                question_text: question.question_text.clone(),
                image_url: question.image_url.clone(),
                option_a: question.option_a.clone(),
                option_b: question.option_b.clone(),
                option_c: question.option_c.clone(),
                option_d: question.option_d.clone(),
                correct_index: question.correct_index,
                fun_fact: question.fun_fact.clone(),
                sort_order: question.sort_order,
            });
        }
        Ok(batch.questions.len())
    }
}

impl PuzzleRepository for InMemoryCatalogRepository {
    async fn list_puzzles(&self, category: Option<&str>) -> CatalogResult<Vec<Puzzle>> {
        Ok(self
            .lock()?
            .puzzles
            .iter()
            .rev()
            .filter(|p| category.is_none_or(|cat| p.category == cat))
            .cloned()
            .collect())
    }

    async fn create_puzzle(&self, puzzle: &NewPuzzle) -> CatalogResult<Puzzle> {
        let mut store = self.lock()?;
        let created = Puzzle {
            id: PuzzleId::from_raw(next_id(&mut store.next_puzzle_id)),
            title: puzzle.title.clone(),
            image_url: puzzle.image_url.clone(),
            piece_count: puzzle.piece_count,
            category: puzzle.category.clone(),
            difficulty: puzzle.difficulty.clone(),
            created_at: Utc::now(),
        };
        store.puzzles.push(created.clone());
        Ok(created)
    }

    async fn delete_puzzle(&self, id: PuzzleId) -> CatalogResult<bool> {
        let mut store = self.lock()?;
        let before = store.puzzles.len();
        store.puzzles.retain(|p| p.id != id);
        Ok(store.puzzles.len() != before)
    }
}
