// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Registration payloads and their spreadsheet row form

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sheets_auth::id::RegistrationId;

use crate::errors::ClientError;

/// Body of `POST /api/register`. Absent and `null` fields both deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

impl RegisterResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A validated submission, ready to become one spreadsheet row.
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: RegistrationId,
    pub name: String,
    pub email: String,
    pub grade: String,
    pub interests: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_request(
        request: RegisterRequest,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ClientError> {
        let (Some(name), Some(email), Some(grade)) = (
            present(request.name),
            present(request.email),
            present(request.grade),
        ) else {
            return Err(ClientError::MissingFields);
        };

        Ok(Self {
            id: RegistrationId::new(),
            name,
            email,
            grade,
            interests: request.interests.unwrap_or_default(),
            submitted_at,
        })
    }

    /// Row cells in sheet column order: id, name, email, grade, interests, timestamp.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.grade.clone(),
            self.interests.join(", "),
            self.submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
