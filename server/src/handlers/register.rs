// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Registration handler

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use tracing::{info, warn};

use crate::AppState;
use crate::HandlerError;
use crate::constants::MSG_REGISTERED;
use crate::errors::{ClientError, ServerError};
use crate::registration::{RegisterRequest, RegisterResponse, Registration};

/// HTTP handler for `POST /api/register`: validate, then append one sheet row.
pub async fn register_http(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, HandlerError> {
    let Json(payload) = payload.map_err(|e| ClientError::InvalidBody(e.body_text()))?;
    let registration = Registration::from_request(payload, Utc::now())?;

    info!(
        id = %registration.id,
        grade = %registration.grade,
        interests = registration.interests.len(),
        "Received registration"
    );

    let outcome = state
        .sheets
        .append_row(&registration.to_row())
        .await
        .map_err(|e| {
            warn!(id = %registration.id, "Append failed: {e}");
            ServerError::from(e)
        })?;

    let updated_range = outcome.updates.and_then(|u| u.updated_range);
    info!(id = %registration.id, ?updated_range, "Registration appended");

    Ok(Json(RegisterResponse::success(MSG_REGISTERED)))
}
