//! Quiz service
//!
//! Student-facing quiz reads and the cascading quiz delete. Quiz authoring
//! lives outside this service.

use uuid::Uuid;

use crate::{
    db::repositories::QuizStore,
    error::{AppError, AppResult},
    handlers::quizzes::response::{PublicQuestion, PublicQuizResponse},
    models::QuizDefinition,
};

/// Quiz service for business logic
pub struct QuizService;

impl QuizService {
    /// Load a quiz or fail with `NotFound`
    pub async fn get_quiz(quizzes: &dyn QuizStore, id: &Uuid) -> AppResult<QuizDefinition> {
        quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    /// Quiz as shown to a student: no correct answers, open quizzes only
    pub async fn get_public_quiz(quizzes: &dyn QuizStore, id: &Uuid) -> AppResult<PublicQuizResponse> {
        let quiz = Self::get_quiz(quizzes, id).await?;

        if !quiz.is_active {
            return Err(AppError::QuizInactive);
        }

        Ok(PublicQuizResponse {
            id: quiz.id,
            title: quiz.title,
            subject: quiz.subject,
            time_limit_minutes: quiz.time_limit_minutes,
            question_count: quiz.questions.len(),
            questions: quiz
                .questions
                .into_iter()
                .enumerate()
                .map(|(index, q)| PublicQuestion {
                    index: index as u32,
                    text: q.text,
                    options: q.options.to_vec(),
                })
                .collect(),
        })
    }

    /// Delete a quiz owned by `teacher_id` together with all of its submissions.
    ///
    /// Returns how many submissions were removed.
    pub async fn delete_quiz(quizzes: &dyn QuizStore, id: &Uuid, teacher_id: &Uuid) -> AppResult<u64> {
        let quiz = Self::get_quiz(quizzes, id).await?;

        if quiz.owner_id != *teacher_id {
            return Err(AppError::Forbidden("Cannot delete another teacher's quiz".to_string()));
        }

        let removed = quizzes
            .delete_with_submissions(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        tracing::info!(
            quiz_id = %id,
            teacher_id = %teacher_id,
            submissions_removed = removed,
            "Quiz deleted"
        );

        Ok(removed)
    }
}
