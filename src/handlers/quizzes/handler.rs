//! Quiz handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedTeacher,
    services::QuizService,
    state::AppState,
};

use super::response::{DeleteQuizResponse, PublicQuizResponse};

/// Get an open quiz for a student to take
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PublicQuizResponse>> {
    let quiz = QuizService::get_public_quiz(state.quizzes(), &id).await?;
    Ok(Json(quiz))
}

/// Delete a quiz and all of its submissions
pub async fn delete_quiz(
    State(state): State<AppState>,
    teacher: AuthenticatedTeacher,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteQuizResponse>> {
    let removed = QuizService::delete_quiz(state.quizzes(), &id, &teacher.id).await?;

    Ok(Json(DeleteQuizResponse {
        id,
        submissions_removed: removed,
        message: "Quiz deleted successfully".to_string(),
    }))
}
