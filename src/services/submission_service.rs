//! Submission service

use uuid::Uuid;

use crate::{
    constants::OPTIONS_PER_QUESTION,
    db::repositories::{QuizStore, SubmissionStore},
    error::{AppError, AppResult},
    handlers::submissions::request::{AnswerPayload, SubmitQuizRequest},
    models::{NewSubmission, QuizDefinition, Submission, SubmittedAnswer},
    services::ScoringService,
    utils::validation::{normalize_email, validate_student_name},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Score a student's attempt and record it.
    ///
    /// Every call that passes validation creates a new submission; there is
    /// no de-duplication of repeated attempts.
    pub async fn score_and_submit(
        quizzes: &dyn QuizStore,
        submissions: &dyn SubmissionStore,
        quiz_id: &Uuid,
        payload: SubmitQuizRequest,
    ) -> AppResult<Submission> {
        let quiz = quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if !quiz.is_active {
            tracing::info!(quiz_id = %quiz.id, "Submission rejected: quiz is closed");
            return Err(AppError::QuizInactive);
        }

        let student_name = validate_student_name(&payload.student_name)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let student_email = normalize_email(&payload.student_email);
        if student_email.is_empty() {
            return Err(AppError::Validation("Student email is required".to_string()));
        }

        let answers = Self::normalize_answers(&quiz, &payload.answers)?;

        let score_result = ScoringService::score(&quiz, &answers, payload.elapsed_seconds)
            .inspect_err(|e| {
                tracing::info!(quiz_id = %quiz.id, error = %e, "Submission rejected");
            })?;

        let time_spent_seconds = match payload.elapsed_seconds {
            Some(seconds) => i32::try_from(seconds)
                .map_err(|_| AppError::Validation("elapsed_seconds is out of range".to_string()))?,
            None => 0,
        };

        let submission = submissions
            .record(NewSubmission {
                quiz_id: quiz.id,
                owner_teacher_id: quiz.owner_id,
                student_name,
                student_email,
                answers,
                score_result,
                time_spent_seconds,
            })
            .await?;

        tracing::info!(
            quiz_id = %quiz.id,
            submission_id = %submission.id,
            score = submission.score_result.score,
            total_questions = submission.score_result.total_questions,
            percentage = submission.score_result.percentage,
            "Submission recorded"
        );

        Ok(submission)
    }

    /// Get submission by ID
    pub async fn get_submission(submissions: &dyn SubmissionStore, id: &Uuid) -> AppResult<Submission> {
        submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Turn client answers into exactly one entry per question, in order.
    ///
    /// Questions the client did not mention are recorded as unanswered.
    fn normalize_answers(
        quiz: &QuizDefinition,
        payload: &[AnswerPayload],
    ) -> AppResult<Vec<SubmittedAnswer>> {
        let question_count = quiz.question_count();
        let mut answers: Vec<SubmittedAnswer> = (0..question_count)
            .map(|i| SubmittedAnswer::unanswered(i as u32))
            .collect();
        let mut seen = vec![false; question_count];

        for answer in payload {
            let index = usize::try_from(answer.question_index)
                .ok()
                .filter(|&i| i < question_count)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "Answer references question {} but the quiz has {} questions",
                        answer.question_index, question_count
                    ))
                })?;

            if std::mem::replace(&mut seen[index], true) {
                return Err(AppError::Validation(format!(
                    "Question {} is answered more than once",
                    index
                )));
            }

            let selected = match answer.selected_option_index {
                None => None,
                Some(option) => Some(
                    u8::try_from(option)
                        .ok()
                        .filter(|&o| usize::from(o) < OPTIONS_PER_QUESTION)
                        .ok_or_else(|| {
                            AppError::Validation(format!(
                                "Selected option {} for question {} is out of range",
                                option, index
                            ))
                        })?,
                ),
            };

            answers[index].selected_option_index = selected;
        }

        Ok(answers)
    }
}
