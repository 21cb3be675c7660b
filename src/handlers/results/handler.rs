//! Results handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedTeacher,
    services::AggregationService,
    state::AppState,
};

use super::response::{QuizAggregate, TeacherOverview};

/// Results of every quiz with submissions, grouped by quiz
pub async fn list_results(
    State(state): State<AppState>,
    teacher: AuthenticatedTeacher,
) -> AppResult<Json<Vec<QuizAggregate>>> {
    let aggregates =
        AggregationService::aggregate_by_quiz(state.quizzes(), state.submissions(), &teacher.id)
            .await?;

    Ok(Json(aggregates))
}

/// Totals across the teacher's quizzes
pub async fn get_overview(
    State(state): State<AppState>,
    teacher: AuthenticatedTeacher,
) -> AppResult<Json<TeacherOverview>> {
    let overview =
        AggregationService::teacher_overview(state.quizzes(), state.submissions(), &teacher.id)
            .await?;

    Ok(Json(overview))
}

/// Results of a single quiz, even when nobody has submitted yet
pub async fn get_quiz_results(
    State(state): State<AppState>,
    teacher: AuthenticatedTeacher,
    Path(quiz_id): Path<Uuid>,
) -> AppResult<Json<QuizAggregate>> {
    let aggregate = AggregationService::aggregate_one_quiz(
        state.quizzes(),
        state.submissions(),
        &quiz_id,
        &teacher.id,
    )
    .await?;

    Ok(Json(aggregate))
}
