//! HTTP Handlers

use axum::extract::State;
use kernel::envelope::ApiResponse;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<ApiResponse<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::created(
        "User created successfully",
        RegisterResponse {
            id: output.user_id,
            name: output.name.to_string(),
            email: output.email.to_string(),
        },
    ))
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            id: output.user_id,
            name: output.name.to_string(),
            email: output.email.to_string(),
            token: output.token,
        },
    ))
}
