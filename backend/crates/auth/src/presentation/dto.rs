//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_object::UserId;

// ============================================================================
// Register
// ============================================================================

/// Register request; missing fields are reported by the use case
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register response data
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub token: String,
}
