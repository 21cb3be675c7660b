//! Correction view builder
//!
//! The submission id acts as the access token for a correction: anyone who
//! holds it can see the answer key for that attempt. No viewer ownership
//! check is performed.

use uuid::Uuid;

use crate::{
    db::repositories::{QuizStore, SubmissionStore},
    error::{AppError, AppResult},
    handlers::submissions::response::{CorrectionItem, CorrectionView},
    models::{QuizDefinition, Submission},
    services::SubmissionService,
};

/// Correction service for business logic
pub struct CorrectionService;

impl CorrectionService {
    /// Build the student-vs-key view for one submission
    pub async fn build_correction(
        quizzes: &dyn QuizStore,
        submissions: &dyn SubmissionStore,
        submission_id: &Uuid,
    ) -> AppResult<CorrectionView> {
        let submission = SubmissionService::get_submission(submissions, submission_id).await?;

        let quiz = quizzes.find_by_id(&submission.quiz_id).await?.ok_or_else(|| {
            tracing::warn!(
                submission_id = %submission.id,
                quiz_id = %submission.quiz_id,
                "Submission references a missing quiz"
            );
            AppError::NotFound("Quiz not found".to_string())
        })?;

        Ok(Self::assemble(&quiz, submission))
    }

    fn assemble(quiz: &QuizDefinition, submission: Submission) -> CorrectionView {
        let items = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = submission
                    .answers
                    .iter()
                    .find(|a| a.question_index as usize == index)
                    .and_then(|a| a.selected_option_index);

                CorrectionItem {
                    question_index: index as u32,
                    question: question.text.clone(),
                    options: question.options.to_vec(),
                    selected_option_index: selected,
                    correct_option_index: question.correct_option_index,
                    was_correct: question.is_correct(selected),
                }
            })
            .collect();

        CorrectionView {
            submission_id: submission.id,
            quiz: quiz.summary(),
            student_name: submission.student_name,
            result: submission.score_result,
            time_spent_seconds: submission.time_spent_seconds,
            submitted_at: submission.submitted_at,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        handlers::submissions::request::{AnswerPayload, SubmitQuizRequest},
        models::{Question, Subject},
    };

    fn quiz() -> QuizDefinition {
        let questions = [0u8, 1, 2, 3]
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Question::new(
                    format!("Question {}", i),
                    ["w".into(), "x".into(), "y".into(), "z".into()],
                    c,
                )
                .unwrap()
            })
            .collect();
        QuizDefinition::new("Correction", Subject::Biology, Uuid::new_v4(), questions, 0).unwrap()
    }

    #[tokio::test]
    async fn test_build_correction_side_by_side() {
        let store = MemoryStore::new();
        let quiz = quiz();
        QuizStore::insert(&store, &quiz).await.unwrap();

        let submission = SubmissionService::score_and_submit(
            &store,
            &store,
            &quiz.id,
            SubmitQuizRequest {
                student_name: "Grace".to_string(),
                student_email: "grace@school.test".to_string(),
                answers: vec![
                    AnswerPayload { question_index: 0, selected_option_index: Some(0) },
                    AnswerPayload { question_index: 1, selected_option_index: Some(3) },
                    AnswerPayload { question_index: 3, selected_option_index: Some(3) },
                ],
                elapsed_seconds: None,
            },
        )
        .await
        .unwrap();

        let view = CorrectionService::build_correction(&store, &store, &submission.id)
            .await
            .unwrap();

        assert_eq!(view.submission_id, submission.id);
        assert_eq!(view.student_name, "Grace");
        assert_eq!(view.result.score, 2);
        assert_eq!(view.result.percentage, 50);
        assert_eq!(view.items.len(), 4);

        let flags: Vec<(Option<u8>, u8, bool)> = view
            .items
            .iter()
            .map(|i| (i.selected_option_index, i.correct_option_index, i.was_correct))
            .collect();
        assert_eq!(
            flags,
            vec![
                (Some(0), 0, true),
                (Some(3), 1, false),
                (None, 2, false),
                (Some(3), 3, true),
            ]
        );
        assert_eq!(view.items[2].question, "Question 2");
        assert_eq!(view.items[2].options, vec!["w", "x", "y", "z"]);
    }

    #[tokio::test]
    async fn test_unknown_submission_is_not_found() {
        let store = MemoryStore::new();
        let err = CorrectionService::build_correction(&store, &store, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_correction_after_quiz_deletion_is_not_found() {
        let store = MemoryStore::new();
        let quiz = quiz();
        QuizStore::insert(&store, &quiz).await.unwrap();
        let submission = SubmissionService::score_and_submit(
            &store,
            &store,
            &quiz.id,
            SubmitQuizRequest {
                student_name: "Grace".to_string(),
                student_email: "grace@school.test".to_string(),
                answers: vec![],
                elapsed_seconds: None,
            },
        )
        .await
        .unwrap();

        store.delete_with_submissions(&quiz.id).await.unwrap();

        let err = CorrectionService::build_correction(&store, &store, &submission.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
