use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use models::feedback;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackInput {
    pub name: String,
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackOutput {
    pub id: i32,
    pub name: String,
    pub comment: String,
}

impl From<feedback::Model> for FeedbackOutput {
    fn from(m: feedback::Model) -> Self {
        Self { id: m.id, name: m.name, comment: m.comment }
    }
}

pub async fn create_feedback(
    State(state): State<ServerState>,
    Json(input): Json<CreateFeedbackInput>,
) -> Result<Json<FeedbackOutput>, ApiError> {
    let created = feedback::create(&state.db, &input.name, &input.comment).await?;
    Ok(Json(created.into()))
}

/// List every feedback entry, storage order, unbounded.
pub async fn list_feedback(
    State(state): State<ServerState>,
) -> Result<Json<Vec<FeedbackOutput>>, ApiError> {
    let entries = feedback::list(&state.db).await?;
    Ok(Json(entries.into_iter().map(FeedbackOutput::from).collect()))
}
