//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_foreign_key_violation, is_unique_violation};
use kernel::id::{CourseId, LevelId, PuzzleId, QuestionId, SubjectId};
use sqlx::PgPool;

use crate::domain::drafts::{NewLevel, NewPuzzle, NewSubject, QuestionBatch};
use crate::domain::entities::{Course, Level, Puzzle, Question, Subject};
use crate::domain::repository::{CourseRepository, PuzzleRepository, QuizRepository};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed catalog
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const QUESTION_COLUMNS: &str = r#"
    id, level_id, question_text, image_url, option_a, option_b, option_c, option_d,
    correct_index, fun_fact, sort_order
"#;

impl CourseRepository for PgCatalogRepository {
    async fn list_courses(&self, category: Option<&str>) -> CatalogResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, category, description, image_url, instructor
            FROM courses
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }
}

impl QuizRepository for PgCatalogRepository {
    async fn list_subjects(&self) -> CatalogResult<Vec<Subject>> {
        let rows = sqlx::query_as::<_, SubjectRow>(
            r#"
            SELECT id, name, emoji, gradient_start, gradient_end
            FROM quiz_subjects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SubjectRow::into_subject).collect()
    }

    async fn create_subject(&self, subject: &NewSubject) -> CatalogResult<Subject> {
        sqlx::query(
            r#"
            INSERT INTO quiz_subjects (id, name, emoji, gradient_start, gradient_end)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(subject.id.as_str())
        .bind(&subject.name)
        .bind(&subject.emoji)
        .bind(&subject.gradient_start)
        .bind(&subject.gradient_end)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CatalogError::DuplicateSubject
            } else {
                CatalogError::Database(e)
            }
        })?;

        Ok(Subject {
            id: subject.id.clone(),
            name: subject.name.clone(),
            emoji: subject.emoji.clone(),
            gradient_start: subject.gradient_start.clone(),
            gradient_end: subject.gradient_end.clone(),
        })
    }

    async fn find_subject(&self, id: &SubjectId) -> CatalogResult<Option<Subject>> {
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            SELECT id, name, emoji, gradient_start, gradient_end
            FROM quiz_subjects
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SubjectRow::into_subject).transpose()
    }

    async fn list_levels(&self, subject_id: Option<&SubjectId>) -> CatalogResult<Vec<Level>> {
        let rows = sqlx::query_as::<_, LevelRow>(
            r#"
            SELECT id, subject_id, level_number, title, icon, stars_required
            FROM quiz_levels
            WHERE $1::TEXT IS NULL OR subject_id = $1
            ORDER BY subject_id, level_number
            "#,
        )
        .bind(subject_id.map(SubjectId::as_str))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LevelRow::into_level).collect()
    }

    async fn create_level(&self, level: &NewLevel) -> CatalogResult<Level> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO quiz_levels (subject_id, level_number, title, icon, stars_required)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(level.subject_id.as_str())
        .bind(level.level_number)
        .bind(&level.title)
        .bind(&level.icon)
        .bind(level.stars_required)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CatalogError::SubjectNotFound
            } else if is_unique_violation(&e) {
                CatalogError::DuplicateLevel
            } else {
                CatalogError::Database(e)
            }
        })?;

        Ok(Level {
            id: LevelId::from_raw(id),
            subject_id: level.subject_id.clone(),
            level_number: level.level_number,
            title: level.title.clone(),
            icon: level.icon.clone(),
            stars_required: level.stars_required,
        })
    }

    async fn list_questions(&self, level_id: LevelId) -> CatalogResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM quiz_questions WHERE level_id = $1 ORDER BY sort_order, id"
        );
        let rows = sqlx::query_as::<_, QuestionRow>(&sql)
            .bind(level_id.get())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn create_questions(&self, batch: &QuestionBatch) -> CatalogResult<usize> {
        // Dropping the transaction without commit rolls it back
        let mut tx = self.pool.begin().await?;

        for question in &batch.questions {
            sqlx::query(
                r#"
                INSERT INTO quiz_questions
                    (level_id, question_text, image_url, option_a, option_b, option_c, option_d,
                     correct_index, fun_fact, sort_order)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(batch.level_id.get())
            .bind(&question.question_text)
            .bind(&question.image_url)
            .bind(&question.option_a)
            .bind(&question.option_b)
            .bind(&question.option_c)
            .bind(&question.option_d)
            .bind(question.correct_index)
            .bind(&question.fun_fact)
            .bind(question.sort_order)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CatalogError::LevelNotFound
                } else {
                    CatalogError::Database(e)
                }
            })?;
        }

        tx.commit().await?;

        Ok(batch.questions.len())
    }
}

impl PuzzleRepository for PgCatalogRepository {
    async fn list_puzzles(&self, category: Option<&str>) -> CatalogResult<Vec<Puzzle>> {
        let rows = sqlx::query_as::<_, PuzzleRow>(
            r#"
            SELECT id, title, image_url, piece_count, category, difficulty, created_at
            FROM puzzles
            WHERE $1::TEXT IS NULL OR category = $1
            ORDER BY id DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PuzzleRow::into_puzzle).collect())
    }

    async fn create_puzzle(&self, puzzle: &NewPuzzle) -> CatalogResult<Puzzle> {
        let row = sqlx::query_as::<_, PuzzleRow>(
            r#"
            INSERT INTO puzzles (title, image_url, piece_count, category, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, image_url, piece_count, category, difficulty, created_at
            "#,
        )
        .bind(&puzzle.title)
        .bind(&puzzle.image_url)
        .bind(puzzle.piece_count)
        .bind(&puzzle.category)
        .bind(&puzzle.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_puzzle())
    }

    async fn delete_puzzle(&self, id: PuzzleId) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM puzzles WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    category: String,
    description: String,
    image_url: String,
    instructor: String,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            id: CourseId::from_raw(self.id),
            title: self.title,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            instructor: self.instructor,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubjectRow {
    id: String,
    name: String,
    emoji: String,
    gradient_start: String,
    gradient_end: String,
}

impl SubjectRow {
    fn into_subject(self) -> CatalogResult<Subject> {
        Ok(Subject {
            id: stored_subject_id(&self.id)?,
            name: self.name,
            emoji: self.emoji,
            gradient_start: self.gradient_start,
            gradient_end: self.gradient_end,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LevelRow {
    id: i64,
    subject_id: String,
    level_number: i32,
    title: String,
    icon: String,
    stars_required: i32,
}

impl LevelRow {
    fn into_level(self) -> CatalogResult<Level> {
        Ok(Level {
            id: LevelId::from_raw(self.id),
            subject_id: stored_subject_id(&self.subject_id)?,
            level_number: self.level_number,
            title: self.title,
            icon: self.icon,
            stars_required: self.stars_required,
        })
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    level_id: i64,
    question_text: String,
    image_url: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    correct_index: i32,
    fun_fact: String,
    sort_order: i32,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: QuestionId::from_raw(self.id),
            level_id: LevelId::from_raw(self.level_id),
            question_text: self.question_text,
            image_url: self.image_url,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            correct_index: self.correct_index,
            fun_fact: self.fun_fact,
            sort_order: self.sort_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PuzzleRow {
    id: i64,
    title: String,
    image_url: String,
    piece_count: i32,
    category: String,
    difficulty: String,
    created_at: DateTime<Utc>,
}

impl PuzzleRow {
    fn into_puzzle(self) -> Puzzle {
        Puzzle {
            id: PuzzleId::from_raw(self.id),
            title: self.title,
            image_url: self.image_url,
            piece_count: self.piece_count,
            category: self.category,
            difficulty: self.difficulty,
            created_at: self.created_at,
        }
    }
}

fn stored_subject_id(raw: &str) -> CatalogResult<SubjectId> {
    SubjectId::new(raw)
        .map_err(|e| CatalogError::Internal(format!("stored subject id {raw:?}: {e}")))
}
