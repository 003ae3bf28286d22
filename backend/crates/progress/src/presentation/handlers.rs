//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use kernel::envelope::ApiResponse;
use kernel::extract::{JsonBody, QueryParams};
use kernel::id::{SubjectId, UserId};

use crate::application::config::ProgressConfig;
use crate::application::{
    FetchProgressInput, FetchProgressOutput, FetchProgressUseCase, SubmitLevelResultUseCase,
};
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::subject_error;
use crate::error::{ProgressError, ProgressResult};
use crate::presentation::dto::{ProgressQuery, SubmitProgressRequest, SubmitProgressResponse};

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProgressConfig>,
}

/// GET /progress?user_id=&subject_id=
pub async fn get_progress<R>(
    State(state): State<ProgressAppState<R>>,
    QueryParams(query): QueryParams<ProgressQuery>,
) -> ProgressResult<Response>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let input = parse_query(query)?;
    let use_case = FetchProgressUseCase::new(state.repo.clone(), state.config.clone());

    let response = match use_case.execute(input).await? {
        FetchProgressOutput::Subject(progress) => {
            ApiResponse::ok("Progress retrieved", progress).into_response()
        }
        FetchProgressOutput::All(all) => {
            ApiResponse::ok("All progress retrieved", all).into_response()
        }
    };

    Ok(response)
}

/// POST /progress
pub async fn submit_progress<R>(
    State(state): State<ProgressAppState<R>>,
    JsonBody(req): JsonBody<SubmitProgressRequest>,
) -> ProgressResult<ApiResponse<SubmitProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let outcome = SubmitLevelResultUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok(ApiResponse::ok(
        "Progress saved successfully",
        SubmitProgressResponse {
            subject_id: outcome.subject_id,
            total_stars: outcome.total_stars,
            stars_earned: outcome.stars_earned,
            level: outcome.level_number,
        },
    ))
}

fn parse_query(query: ProgressQuery) -> ProgressResult<FetchProgressInput> {
    let raw_user = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ProgressError::Validation("user_id is required".to_string()))?;

    let user_id = raw_user
        .parse::<i64>()
        .ok()
        .map(UserId::from_raw)
        .filter(UserId::is_valid)
        .ok_or_else(|| {
            ProgressError::Validation("user_id must be a positive integer".to_string())
        })?;

    let subject_id = match query.subject_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(SubjectId::new(raw).map_err(subject_error)?),
    };

    Ok(FetchProgressInput {
        user_id,
        subject_id,
    })
}
