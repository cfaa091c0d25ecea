use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use models::user;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserOutput {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserOutput {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email }
    }
}

/// Create a user; duplicate emails are rejected before the insert.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(input): Json<CreateUserInput>,
) -> Result<Json<UserOutput>, ApiError> {
    let existing = user::find_by_email(&state.db, &input.email).await?;
    if existing.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }
    let created = user::create(&state.db, &input.name, &input.email).await?;
    Ok(Json(created.into()))
}

/// List every user, storage order, unbounded.
pub async fn list_users(
    State(state): State<ServerState>,
) -> Result<Json<Vec<UserOutput>>, ApiError> {
    let users = user::list(&state.db).await?;
    Ok(Json(users.into_iter().map(UserOutput::from).collect()))
}
