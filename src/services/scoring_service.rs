//! Scoring engine
//!
//! Pure functions over a quiz and a set of answers: no storage access, no
//! clock, no shared state. Identical inputs always produce the same result.

use std::collections::HashSet;

use crate::{
    constants::TIME_LIMIT_GRACE_SECONDS,
    error::{AppError, AppResult},
    models::{QuizDefinition, ScoreResult, SubmittedAnswer},
    utils::rounded_percentage,
};

/// Scoring service for business logic
pub struct ScoringService;

impl ScoringService {
    /// Score a submission attempt.
    ///
    /// Rejects closed quizzes and attempts that ran past the time limit plus
    /// the grace period. Answers pointing at a question that does not exist,
    /// unanswered questions, and repeated question indices (after the first)
    /// are counted as wrong rather than rejected.
    pub fn score(
        quiz: &QuizDefinition,
        answers: &[SubmittedAnswer],
        elapsed_seconds: Option<i64>,
    ) -> AppResult<ScoreResult> {
        if !quiz.is_active {
            return Err(AppError::QuizInactive);
        }

        Self::check_time_limit(quiz, elapsed_seconds)?;

        Self::tally(quiz, answers)
    }

    /// Fail when `elapsed_seconds` is past the quiz deadline plus grace.
    ///
    /// Unlimited quizzes and attempts without a reported duration always pass.
    pub fn check_time_limit(quiz: &QuizDefinition, elapsed_seconds: Option<i64>) -> AppResult<()> {
        let (Some(limit), Some(elapsed)) = (quiz.time_limit_seconds(), elapsed_seconds) else {
            return Ok(());
        };

        let allowed_seconds = limit + TIME_LIMIT_GRACE_SECONDS;
        if elapsed > allowed_seconds {
            return Err(AppError::TimeLimitExceeded {
                elapsed_seconds: elapsed,
                allowed_seconds,
            });
        }

        Ok(())
    }

    /// Count correct answers without checking whether the quiz is open.
    ///
    /// Used directly when re-scoring stored submissions.
    pub fn tally(quiz: &QuizDefinition, answers: &[SubmittedAnswer]) -> AppResult<ScoreResult> {
        let total = quiz.question_count();
        if total == 0 {
            return Err(AppError::MalformedQuiz(format!(
                "quiz {} has no questions",
                quiz.id
            )));
        }

        let mut seen = HashSet::with_capacity(answers.len());
        let score = answers
            .iter()
            .filter(|answer| seen.insert(answer.question_index))
            .filter(|answer| {
                usize::try_from(answer.question_index)
                    .ok()
                    .and_then(|index| quiz.questions.get(index))
                    .is_some_and(|question| question.is_correct(answer.selected_option_index))
            })
            .count();

        let percentage = rounded_percentage(score as u64, total as u64)
            .ok_or_else(|| AppError::MalformedQuiz(format!("quiz {} has no questions", quiz.id)))?;

        let total_questions = i32::try_from(total).map_err(|_| {
            AppError::MalformedQuiz(format!("quiz {} has too many questions", quiz.id))
        })?;

        Ok(ScoreResult {
            // score <= total, so this cannot truncate once total fits
            score: score as i32,
            total_questions,
            percentage: percentage as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{Question, Subject};

    fn quiz_with_correct(correct: &[u8], time_limit_minutes: u32) -> QuizDefinition {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Question::new(
                    format!("Question {}", i + 1),
                    ["A".into(), "B".into(), "C".into(), "D".into()],
                    c,
                )
                .unwrap()
            })
            .collect();
        QuizDefinition::new("Scoring", Subject::Mathematics, Uuid::new_v4(), questions, time_limit_minutes)
            .unwrap()
    }

    fn answers(selected: &[Option<u8>]) -> Vec<SubmittedAnswer> {
        selected
            .iter()
            .enumerate()
            .map(|(i, &s)| SubmittedAnswer {
                question_index: i as u32,
                selected_option_index: s,
            })
            .collect()
    }

    #[test]
    fn test_all_correct() {
        let quiz = quiz_with_correct(&[0, 1, 2, 3], 0);
        let result = ScoringService::score(&quiz, &answers(&[Some(0), Some(1), Some(2), Some(3)]), None).unwrap();
        assert_eq!(result, ScoreResult { score: 4, total_questions: 4, percentage: 100 });
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let quiz = quiz_with_correct(&[0, 1, 2, 3], 0);
        let result = ScoringService::score(&quiz, &answers(&[Some(0), Some(1), None, Some(3)]), None).unwrap();
        assert_eq!(result.score, 3);
        assert_eq!(result.percentage, 75);
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let quiz = quiz_with_correct(&[0, 1, 2, 3], 0);
        let result = ScoringService::score(&quiz, &[], None).unwrap();
        assert_eq!(result, ScoreResult { score: 0, total_questions: 4, percentage: 0 });

        let padded = ScoringService::score(&quiz, &answers(&[None, None, None, None]), None).unwrap();
        assert_eq!(padded, result);
    }

    #[test]
    fn test_out_of_range_question_is_wrong_not_error() {
        let quiz = quiz_with_correct(&[0, 1], 0);
        let result = ScoringService::score(
            &quiz,
            &[SubmittedAnswer::answered(0, 0), SubmittedAnswer::answered(7, 0)],
            None,
        )
        .unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 50);
    }

    #[test]
    fn test_duplicate_question_index_counts_once() {
        let quiz = quiz_with_correct(&[2], 0);
        let repeated = vec![SubmittedAnswer::answered(0, 2); 5];
        let result = ScoringService::score(&quiz, &repeated, None).unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 100);

        // Only the first answer for an index is considered
        let wrong_then_right = [SubmittedAnswer::answered(0, 1), SubmittedAnswer::answered(0, 2)];
        assert_eq!(ScoringService::score(&quiz, &wrong_then_right, None).unwrap().score, 0);
    }

    #[test]
    fn test_rounding_half_up() {
        let quiz = quiz_with_correct(&[0; 8], 0);
        let mut selected = vec![None; 8];
        selected[0] = Some(0);
        // 100 * 1 / 8 = 12.5
        assert_eq!(ScoringService::score(&quiz, &answers(&selected), None).unwrap().percentage, 13);

        let quiz = quiz_with_correct(&[0; 3], 0);
        assert_eq!(
            ScoringService::score(&quiz, &answers(&[Some(0), Some(0), None]), None).unwrap().percentage,
            67
        );
    }

    #[test]
    fn test_score_bounds_hold_for_every_answer_pattern() {
        let quiz = quiz_with_correct(&[0, 1, 2], 0);
        let choices = [None, Some(0), Some(1), Some(2), Some(3)];
        for a in choices {
            for b in choices {
                for c in choices {
                    let result = ScoringService::score(&quiz, &answers(&[a, b, c]), None).unwrap();
                    assert!((0..=3).contains(&result.score));
                    assert_eq!(result.total_questions, 3);
                    let expected = rounded_percentage(result.score as u64, 3).unwrap() as i32;
                    assert_eq!(result.percentage, expected);
                }
            }
        }
    }

    #[test]
    fn test_inactive_quiz_rejected() {
        let mut quiz = quiz_with_correct(&[0], 0);
        quiz.is_active = false;
        let err = ScoringService::score(&quiz, &answers(&[Some(0)]), None).unwrap_err();
        assert!(matches!(err, AppError::QuizInactive));
    }

    #[test]
    fn test_time_limit_grace_boundary() {
        let quiz = quiz_with_correct(&[0], 10);

        assert!(ScoringService::score(&quiz, &answers(&[Some(0)]), Some(630)).is_ok());

        let err = ScoringService::score(&quiz, &answers(&[Some(0)]), Some(631)).unwrap_err();
        assert!(matches!(
            err,
            AppError::TimeLimitExceeded { elapsed_seconds: 631, allowed_seconds: 630 }
        ));

        // No reported duration: nothing to check
        assert!(ScoringService::score(&quiz, &answers(&[Some(0)]), None).is_ok());
    }

    #[test]
    fn test_unlimited_quiz_ignores_elapsed() {
        let quiz = quiz_with_correct(&[0], 0);
        assert!(ScoringService::score(&quiz, &answers(&[Some(0)]), Some(1_000_000)).is_ok());
    }

    #[test]
    fn test_zero_question_quiz_is_malformed() {
        let mut quiz = quiz_with_correct(&[0], 0);
        quiz.questions.clear();
        let err = ScoringService::score(&quiz, &[], None).unwrap_err();
        assert!(matches!(err, AppError::MalformedQuiz(_)));
    }

    #[test]
    fn test_deterministic() {
        let quiz = quiz_with_correct(&[3, 2, 1, 0], 5);
        let submitted = answers(&[Some(3), None, Some(0), Some(0)]);
        let first = ScoringService::score(&quiz, &submitted, Some(120)).unwrap();
        let second = ScoringService::score(&quiz, &submitted, Some(120)).unwrap();
        assert_eq!(first, second);
    }
}
