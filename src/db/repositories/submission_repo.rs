//! Submission repository

use async_trait::async_trait;
use sqlx::{types::Json, PgExecutor, PgPool};
use uuid::Uuid;

use super::SubmissionStore;
use crate::{
    error::AppResult,
    models::{NewSubmission, Submission},
};

/// Repository for submission database operations
#[derive(Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Delete every submission of a quiz on the given executor (pool or transaction)
pub(crate) async fn delete_for_quiz<'e, E>(executor: E, quiz_id: &Uuid) -> AppResult<u64>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(r#"DELETE FROM submissions WHERE quiz_id = $1"#)
        .bind(quiz_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[async_trait]
impl SubmissionStore for SubmissionRepository {
    async fn record(&self, new: NewSubmission) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                id, quiz_id, owner_teacher_id, student_name, student_email,
                answers, score, total_questions, percentage, time_spent_seconds
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.quiz_id)
        .bind(new.owner_teacher_id)
        .bind(&new.student_name)
        .bind(&new.student_email)
        .bind(Json(&new.answers))
        .bind(new.score_result.score)
        .bind(new.score_result.total_questions)
        .bind(new.score_result.percentage)
        .bind(new.time_spent_seconds)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(submission)
    }

    async fn find_by_quiz(&self, quiz_id: &Uuid) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE quiz_id = $1
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn delete_all_for_quiz(&self, quiz_id: &Uuid) -> AppResult<u64> {
        delete_for_quiz(&self.pool, quiz_id).await
    }
}
