// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::Json;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, error};

use crate::registration::RegisterResponse;
use crate::sheets::SheetsError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required fields.")]
    MissingFields,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

#[derive(Error, Debug)]
pub enum ServerError {
    /// No usable service-account key material.
    #[error("{0}")]
    Configuration(String),

    /// The Sheets API (or the token exchange in front of it) failed.
    #[error("Failed to register: {0}")]
    ExternalService(String),
}

impl From<SheetsError> for ServerError {
    fn from(err: SheetsError) -> Self {
        if err.is_configuration() {
            ServerError::Configuration(err.to_string())
        } else {
            ServerError::ExternalService(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::Client(_) => StatusCode::BAD_REQUEST,
            HandlerError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            HandlerError::Client(err) => {
                debug!("Client error: {err}");
                err.to_string()
            }
            HandlerError::Server(err) => {
                error!("Registration error: {err}");
                err.to_string()
            }
        };
        (status, Json(RegisterResponse::failure(message))).into_response()
    }
}
