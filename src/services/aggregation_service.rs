//! Results aggregation service
//!
//! Rolls per-submission scores up into per-quiz and per-teacher statistics.
//! Read-only: repeated calls without intervening writes return equal results.

use uuid::Uuid;

use crate::{
    db::repositories::{QuizStore, SubmissionStore},
    error::{AppError, AppResult},
    handlers::results::response::{QuizAggregate, TeacherOverview},
    models::{QuizDefinition, Submission},
    utils::rounded_mean,
};

/// Aggregation service for business logic
pub struct AggregationService;

impl AggregationService {
    /// Aggregates for every quiz of `teacher_id` that has at least one submission.
    ///
    /// Quizzes without submissions are left out. Ordered by quiz creation
    /// time, newest first.
    pub async fn aggregate_by_quiz(
        quizzes: &dyn QuizStore,
        submissions: &dyn SubmissionStore,
        teacher_id: &Uuid,
    ) -> AppResult<Vec<QuizAggregate>> {
        let owned = quizzes.list_by_owner(teacher_id).await?;
        let per_quiz = Self::load_submissions(submissions, owned).await?;

        let aggregates: Vec<QuizAggregate> = per_quiz
            .into_iter()
            .filter(|(_, subs)| !subs.is_empty())
            .map(|(quiz, subs)| Self::build_aggregate(&quiz, subs))
            .collect();

        tracing::debug!(
            teacher_id = %teacher_id,
            quizzes = aggregates.len(),
            "Aggregated results by quiz"
        );

        Ok(aggregates)
    }

    /// Aggregate for one quiz, including quizzes with no submissions yet.
    ///
    /// Fails with `Forbidden` when the quiz belongs to another teacher.
    pub async fn aggregate_one_quiz(
        quizzes: &dyn QuizStore,
        submissions: &dyn SubmissionStore,
        quiz_id: &Uuid,
        teacher_id: &Uuid,
    ) -> AppResult<QuizAggregate> {
        let quiz = quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if quiz.owner_id != *teacher_id {
            tracing::warn!(
                quiz_id = %quiz_id,
                teacher_id = %teacher_id,
                "Teacher requested results for a quiz they do not own"
            );
            return Err(AppError::Forbidden(
                "Cannot view results of another teacher's quiz".to_string(),
            ));
        }

        let subs = submissions.find_by_quiz(&quiz.id).await?;
        Ok(Self::build_aggregate(&quiz, subs))
    }

    /// Totals across all of a teacher's quizzes
    pub async fn teacher_overview(
        quizzes: &dyn QuizStore,
        submissions: &dyn SubmissionStore,
        teacher_id: &Uuid,
    ) -> AppResult<TeacherOverview> {
        let owned = quizzes.list_by_owner(teacher_id).await?;
        let quiz_count = owned.len();
        let active_quiz_count = owned.iter().filter(|q| q.is_active).count();

        let per_quiz = Self::load_submissions(submissions, owned).await?;

        let quizzes_with_submissions = per_quiz.iter().filter(|(_, subs)| !subs.is_empty()).count();
        let all: Vec<&Submission> = per_quiz.iter().flat_map(|(_, subs)| subs).collect();

        Ok(TeacherOverview {
            quiz_count,
            active_quiz_count,
            quizzes_with_submissions,
            submission_count: all.len(),
            average_percentage: Self::average_percentage(all.iter().copied()),
        })
    }

    /// Fetch submissions for each quiz concurrently, keeping quiz order
    async fn load_submissions(
        submissions: &dyn SubmissionStore,
        owned: Vec<QuizDefinition>,
    ) -> AppResult<Vec<(QuizDefinition, Vec<Submission>)>> {
        let fetched = futures::future::try_join_all(
            owned.iter().map(|quiz| submissions.find_by_quiz(&quiz.id)),
        )
        .await?;

        Ok(owned.into_iter().zip(fetched).collect())
    }

    fn build_aggregate(quiz: &QuizDefinition, submissions: Vec<Submission>) -> QuizAggregate {
        QuizAggregate {
            quiz: quiz.summary(),
            submission_count: submissions.len(),
            average_percentage: Self::average_percentage(submissions.iter()),
            submissions,
        }
    }

    /// Round-half-up mean of the submissions' percentages; `None` when empty
    fn average_percentage<'a, I>(submissions: I) -> Option<i32>
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        rounded_mean(
            submissions
                .into_iter()
                .map(|s| s.score_result.percentage.max(0) as u64),
        )
        .map(|avg| avg as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        models::{NewSubmission, Question, ScoreResult, Subject, SubmittedAnswer},
    };

    fn quiz(owner: Uuid, title: &str, created_offset_secs: i64) -> QuizDefinition {
        let questions = (0..4)
            .map(|_| Question::new("Q", ["A".into(), "B".into(), "C".into(), "D".into()], 0).unwrap())
            .collect();
        let mut quiz = QuizDefinition::new(title, Subject::Physics, owner, questions, 0).unwrap();
        quiz.created_at += chrono::Duration::seconds(created_offset_secs);
        quiz
    }

    async fn submit(store: &MemoryStore, quiz: &QuizDefinition, score: i32) -> Submission {
        let submission = store
            .record(NewSubmission {
                quiz_id: quiz.id,
                owner_teacher_id: quiz.owner_id,
                student_name: "Student".to_string(),
                student_email: "student@school.test".to_string(),
                answers: (0..4).map(SubmittedAnswer::unanswered).collect(),
                score_result: ScoreResult {
                    score,
                    total_questions: 4,
                    percentage: score * 25,
                },
                time_spent_seconds: 0,
            })
            .await
            .unwrap();
        // keep submitted_at strictly increasing
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        submission
    }

    #[tokio::test]
    async fn test_aggregate_by_quiz_excludes_empty_and_orders() {
        let store = MemoryStore::new();
        let teacher = Uuid::new_v4();
        let older = quiz(teacher, "Older", 0);
        let newer = quiz(teacher, "Newer", 60);
        let empty = quiz(teacher, "Empty", 120);
        let foreign = quiz(Uuid::new_v4(), "Foreign", 30);
        for q in [&older, &newer, &empty, &foreign] {
            QuizStore::insert(&store, q).await.unwrap();
        }

        submit(&store, &older, 4).await; // 100
        submit(&store, &older, 3).await; // 75
        let latest = submit(&store, &newer, 1).await; // 25
        submit(&store, &foreign, 2).await;

        let aggregates = AggregationService::aggregate_by_quiz(&store, &store, &teacher)
            .await
            .unwrap();

        assert_eq!(
            aggregates.iter().map(|a| a.quiz.title.as_str()).collect::<Vec<_>>(),
            vec!["Newer", "Older"]
        );
        assert_eq!(aggregates[0].submission_count, 1);
        assert_eq!(aggregates[0].submissions[0].id, latest.id);
        assert_eq!(aggregates[0].average_percentage, Some(25));
        assert_eq!(aggregates[1].submission_count, 2);
        // mean(100, 75) = 87.5 rounds up
        assert_eq!(aggregates[1].average_percentage, Some(88));
        assert_eq!(aggregates[1].submissions[0].score_result.percentage, 75);
    }

    #[tokio::test]
    async fn test_aggregate_by_quiz_is_idempotent() {
        let store = MemoryStore::new();
        let teacher = Uuid::new_v4();
        let q = quiz(teacher, "Only", 0);
        QuizStore::insert(&store, &q).await.unwrap();
        submit(&store, &q, 2).await;

        let first = AggregationService::aggregate_by_quiz(&store, &store, &teacher).await.unwrap();
        let second = AggregationService::aggregate_by_quiz(&store, &store, &teacher).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_adding_a_submission_updates_count_and_mean() {
        let store = MemoryStore::new();
        let teacher = Uuid::new_v4();
        let q = quiz(teacher, "Growing", 0);
        QuizStore::insert(&store, &q).await.unwrap();
        submit(&store, &q, 1).await; // 25

        let before = AggregationService::aggregate_one_quiz(&store, &store, &q.id, &teacher)
            .await
            .unwrap();
        submit(&store, &q, 4).await; // 100
        let after = AggregationService::aggregate_one_quiz(&store, &store, &q.id, &teacher)
            .await
            .unwrap();

        assert_eq!(before.submission_count + 1, after.submission_count);
        assert_eq!(before.average_percentage, Some(25));
        // mean(25, 100) = 62.5 rounds up
        assert_eq!(after.average_percentage, Some(63));
    }

    #[tokio::test]
    async fn test_aggregate_one_quiz_shows_empty_quiz() {
        let store = MemoryStore::new();
        let teacher = Uuid::new_v4();
        let q = quiz(teacher, "Quiet", 0);
        QuizStore::insert(&store, &q).await.unwrap();

        let aggregate = AggregationService::aggregate_one_quiz(&store, &store, &q.id, &teacher)
            .await
            .unwrap();
        assert!(aggregate.submissions.is_empty());
        assert_eq!(aggregate.submission_count, 0);
        assert_eq!(aggregate.average_percentage, None);

        let listed = AggregationService::aggregate_by_quiz(&store, &store, &teacher).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_one_quiz_checks_ownership() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let q = quiz(owner, "Private", 0);
        QuizStore::insert(&store, &q).await.unwrap();

        let err = AggregationService::aggregate_one_quiz(&store, &store, &q.id, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let err = AggregationService::aggregate_one_quiz(&store, &store, &Uuid::new_v4(), &owner)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_teacher_overview() {
        let store = MemoryStore::new();
        let teacher = Uuid::new_v4();
        let a = quiz(teacher, "A", 0);
        let mut b = quiz(teacher, "B", 10);
        b.is_active = false;
        let c = quiz(teacher, "C", 20);
        for q in [&a, &b, &c] {
            QuizStore::insert(&store, q).await.unwrap();
        }
        submit(&store, &a, 4).await; // 100
        submit(&store, &b, 2).await; // 50
        submit(&store, &b, 1).await; // 25

        let overview = AggregationService::teacher_overview(&store, &store, &teacher).await.unwrap();
        assert_eq!(
            overview,
            TeacherOverview {
                quiz_count: 3,
                active_quiz_count: 2,
                quizzes_with_submissions: 2,
                submission_count: 3,
                // mean(100, 50, 25) = 58.33
                average_percentage: Some(58),
            }
        );

        let nobody = AggregationService::teacher_overview(&store, &store, &Uuid::new_v4()).await.unwrap();
        assert_eq!(nobody.submission_count, 0);
        assert_eq!(nobody.average_percentage, None);
    }
}
