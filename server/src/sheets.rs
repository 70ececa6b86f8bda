// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Google Sheets client
//!
//! Every append signs a fresh JWT, trades it for an access token and then
//! calls `values:append`. Nothing is cached between calls.

use chrono::Utc;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use sheets_auth::constants::{JWT_BEARER_GRANT, SHEETS_SCOPE};
use sheets_auth::credentials::{CredentialError, CredentialSource};
use sheets_auth::crypto::{RsaSigner, RsaUtilError};
use sheets_auth::jwt::{JwtClaims, encode_assertion};
use thiserror::Error;
use tracing::debug;

use crate::config::GoogleConfig;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error(transparent)]
    Configuration(#[from] CredentialError),

    #[error("GOOGLE_SHEET_ID is missing")]
    MissingSpreadsheetId,

    #[error("{0}")]
    Signing(#[from] RsaUtilError),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    Url(String),

    #[error("Token exchange failed: {0}")]
    Token(String),

    #[error("{message}")]
    Api { status: u16, message: String },
}

impl SheetsError {
    /// Errors caused by missing setup rather than a failing remote call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SheetsError::Configuration(_) | SheetsError::MissingSpreadsheetId
        )
    }
}

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    values: [&'a [String]; 1],
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendResponse {
    pub updates: Option<UpdateSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub updated_range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct OAuthError {
    error: String,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct SheetsClient {
    http: Client,
    credentials: Result<CredentialSource, CredentialError>,
    sheet_id: Option<String>,
    append_range: String,
    token_uri: String,
    api_base_url: String,
}

impl SheetsClient {
    /// Resolve credentials once; a failure is kept and reported on every append.
    pub fn new(config: &GoogleConfig) -> Self {
        Self {
            http: Client::new(),
            credentials: config.credential_source(),
            sheet_id: config.sheet_id.clone(),
            append_range: config.append_range.clone(),
            token_uri: config.token_uri.clone(),
            api_base_url: config.api_base_url.clone(),
        }
    }

    pub fn credentials(&self) -> Result<&CredentialSource, &CredentialError> {
        self.credentials.as_ref()
    }

    /// Append one row below the table found in the configured range.
    pub async fn append_row(&self, row: &[String]) -> Result<AppendResponse, SheetsError> {
        let source = self.credentials.as_ref().map_err(|e| e.clone())?;
        let sheet_id = self
            .sheet_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(SheetsError::MissingSpreadsheetId)?;

        let token = self.access_token(source).await?;
        let url = self.append_url(sheet_id)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&AppendRequest { values: [row] })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(AppendResponse::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn access_token(&self, source: &CredentialSource) -> Result<String, SheetsError> {
        let account = source.service_account();
        let signer = RsaSigner::from_pem(&account.private_key)?;
        let token_uri = account.token_uri.as_deref().unwrap_or(self.token_uri.as_str());

        let claims = JwtClaims::new(&account.client_email, SHEETS_SCOPE, token_uri, Utc::now());
        let assertion = encode_assertion(&claims, &signer)?;

        debug!(client_email = %account.client_email, %token_uri, "Requesting access token");
        let response = self
            .http
            .post(token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let reason = match serde_json::from_str::<OAuthError>(&body) {
                Ok(OAuthError {
                    error,
                    error_description: Some(description),
                }) => format!("{error}: {description}"),
                Ok(OAuthError { error, .. }) => error,
                Err(_) => format!("{status} {body}").trim().to_owned(),
            };
            return Err(SheetsError::Token(reason));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }

    fn append_url(&self, sheet_id: &str) -> Result<Url, SheetsError> {
        let mut url =
            Url::parse(&self.api_base_url).map_err(|e| SheetsError::Url(e.to_string()))?;
        let target = format!("{}:append", self.append_range);

        url.path_segments_mut()
            .map_err(|_| SheetsError::Url(self.api_base_url.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", sheet_id, "values", target.as_str()]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        Ok(url)
    }
}

async fn api_error(response: Response) -> SheetsError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_owned(),
        Err(_) => status.to_string(),
    };

    SheetsError::Api {
        status: status.as_u16(),
        message,
    }
}
