//! Quiz repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

use super::{submission_repo, QuizStore};
use crate::{
    error::{AppError, AppResult},
    models::{Question, QuizDefinition},
};

/// Row shape of the `quizzes` table
#[derive(Debug, FromRow)]
struct QuizRow {
    id: Uuid,
    title: String,
    subject: String,
    owner_id: Uuid,
    questions: Json<serde_json::Value>,
    time_limit_minutes: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuizRow> for QuizDefinition {
    type Error = AppError;

    fn try_from(row: QuizRow) -> Result<Self, Self::Error> {
        let subject = row
            .subject
            .parse()
            .map_err(|_| AppError::Database(format!("Quiz {} has unknown subject {}", row.id, row.subject)))?;
        let time_limit_minutes = u32::try_from(row.time_limit_minutes).map_err(|_| {
            AppError::Database(format!("Quiz {} has a negative time limit", row.id))
        })?;

        let questions: Vec<Question> = serde_json::from_value(row.questions.0).map_err(|e| {
            AppError::MalformedQuiz(format!("Quiz {} has unreadable questions: {}", row.id, e))
        })?;
        for (index, question) in questions.iter().enumerate() {
            question.check().map_err(|e| {
                AppError::MalformedQuiz(format!("Quiz {} question {}: {}", row.id, index, e))
            })?;
        }

        Ok(QuizDefinition {
            id: row.id,
            title: row.title,
            subject,
            owner_id: row.owner_id,
            questions,
            time_limit_minutes,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

/// Repository for quiz database operations
#[derive(Clone)]
pub struct QuizRepository {
    pool: PgPool,
}

impl QuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for QuizRepository {
    async fn insert(&self, quiz: &QuizDefinition) -> AppResult<()> {
        let time_limit = i32::try_from(quiz.time_limit_minutes)
            .map_err(|_| AppError::Validation("Time limit is too large".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO quizzes (id, title, subject, owner_id, questions, time_limit_minutes, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(quiz.id)
        .bind(&quiz.title)
        .bind(quiz.subject.as_str())
        .bind(quiz.owner_id)
        .bind(Json(&quiz.questions))
        .bind(time_limit)
        .bind(quiz.is_active)
        .bind(quiz.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizDefinition>> {
        let row = sqlx::query_as::<_, QuizRow>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(QuizDefinition::try_from).transpose()
    }

    async fn list_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<QuizDefinition>> {
        let rows = sqlx::query_as::<_, QuizRow>(
            r#"
            SELECT * FROM quizzes
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QuizDefinition::try_from).collect()
    }

    async fn delete_with_submissions(&self, id: &Uuid) -> AppResult<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        let removed = submission_repo::delete_for_quiz(&mut *tx, id).await?;

        let deleted = sqlx::query(r#"DELETE FROM quizzes WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(removed))
    }
}
