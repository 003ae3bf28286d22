//! PostgreSQL Repository Implementations

use kernel::error::conversions::is_foreign_key_violation;
use kernel::id::{SubjectId, UserId};
use sqlx::PgPool;

use crate::domain::entities::SubjectProgress;
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::{LevelResult, star_total_overflow};
use crate::error::{ProgressError, ProgressResult};

/// PostgreSQL-backed progress ledger
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn record_level_result(&self, result: &LevelResult) -> ProgressResult<i32> {
        let mut tx = self.pool.begin().await?;

        // Make sure the (user, subject) row exists, then lock it so that
        // concurrent submissions for the pair run one after another.
        sqlx::query(
            r#"
            INSERT INTO user_subject_progress (user_id, subject_id, total_stars)
            VALUES ($1, $2, 0)
            ON CONFLICT (user_id, subject_id) DO NOTHING
            "#,
        )
        .bind(result.user_id().get())
        .bind(result.subject_id().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ProgressError::UnknownUser
            } else {
                ProgressError::Database(e)
            }
        })?;

        sqlx::query(
            r#"
            SELECT 1 FROM user_subject_progress
            WHERE user_id = $1 AND subject_id = $2
            FOR UPDATE
            "#,
        )
        .bind(result.user_id().get())
        .bind(result.subject_id().as_str())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_level_completions
                (user_id, subject_id, level_number, stars_earned, quiz_score, total_questions, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (user_id, subject_id, level_number) DO UPDATE SET
                stars_earned = GREATEST(user_level_completions.stars_earned, EXCLUDED.stars_earned),
                quiz_score = GREATEST(user_level_completions.quiz_score, EXCLUDED.quiz_score),
                total_questions = EXCLUDED.total_questions,
                completed_at = NOW()
            "#,
        )
        .bind(result.user_id().get())
        .bind(result.subject_id().as_str())
        .bind(result.level_number())
        .bind(result.stars_earned())
        .bind(result.quiz_score())
        .bind(result.total_questions())
        .execute(&mut *tx)
        .await?;

        // SUM over INTEGER is BIGINT; dropping `tx` on overflow rolls back
        let sum = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(stars_earned), 0)::BIGINT
            FROM user_level_completions
            WHERE user_id = $1 AND subject_id = $2
            "#,
        )
        .bind(result.user_id().get())
        .bind(result.subject_id().as_str())
        .fetch_one(&mut *tx)
        .await?;
        let total_stars = i32::try_from(sum).map_err(|_| star_total_overflow())?;

        sqlx::query(
            r#"
            UPDATE user_subject_progress
            SET total_stars = $3, updated_at = NOW()
            WHERE user_id = $1 AND subject_id = $2
            "#,
        )
        .bind(result.user_id().get())
        .bind(result.subject_id().as_str())
        .bind(total_stars)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(total_stars)
    }

    async fn find_subject_progress(
        &self,
        user_id: UserId,
        subject_id: &SubjectId,
    ) -> ProgressResult<SubjectProgress> {
        let total_stars = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT total_stars FROM user_subject_progress
            WHERE user_id = $1 AND subject_id = $2
            "#,
        )
        .bind(user_id.get())
        .bind(subject_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(total_stars) = total_stars else {
            return Ok(SubjectProgress::empty(subject_id.clone()));
        };

        let completed_levels = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT level_number FROM user_level_completions
            WHERE user_id = $1 AND subject_id = $2
            ORDER BY level_number
            "#,
        )
        .bind(user_id.get())
        .bind(subject_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(SubjectProgress {
            subject_id: subject_id.clone(),
            total_stars,
            completed_levels,
        })
    }
}
