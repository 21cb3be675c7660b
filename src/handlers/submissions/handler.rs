//! Submission handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::{CorrectionService, SubmissionService},
    state::AppState,
};

use super::{
    request::SubmitQuizRequest,
    response::{CorrectionView, SubmitQuizResponse},
};

/// Score a student's answers and record the attempt
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Json(payload): Json<SubmitQuizRequest>,
) -> AppResult<(StatusCode, Json<SubmitQuizResponse>)> {
    let payload = payload.normalized();
    payload.validate()?;

    let submission = SubmissionService::score_and_submit(
        state.quizzes(),
        state.submissions(),
        &quiz_id,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// Correction view for a submission; the id itself grants access
pub async fn get_correction(
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
) -> AppResult<Json<CorrectionView>> {
    let view =
        CorrectionService::build_correction(state.quizzes(), state.submissions(), &submission_id)
            .await?;

    Ok(Json(view))
}
