// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Service-account credential resolution.
//!
//! Credentials come either from a single JSON blob (the file Google hands out
//! when a key is created) or from two separate values: the account email and
//! the raw private key. Hosting dashboards tend to mangle multi-line secrets,
//! so the raw key is rebuilt into a clean PEM block before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{PEM_FOOTER, PEM_HEADER, PEM_LINE_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("GOOGLE_PRIVATE_KEY is missing")]
    MissingPrivateKey,

    #[error("GOOGLE_SERVICE_ACCOUNT_EMAIL is missing")]
    MissingClientEmail,

    #[error("GOOGLE_CREDENTIALS is not a valid service-account JSON: {0}")]
    InvalidBlob(String),

    /// The JSON blob parsed but one of its required fields is blank.
    #[error("GOOGLE_CREDENTIALS has an empty `{0}`")]
    IncompleteBlob(&'static str),
}

/// The subset of a Google service-account key file that authentication needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// A full JSON key file.
    Structured(ServiceAccountKey),
    /// Account email and private key supplied separately.
    SplitFields {
        client_email: String,
        private_key: String,
    },
}

impl CredentialSource {
    /// Pick a credential source, preferring the JSON blob whenever one is set.
    pub fn resolve(
        blob: Option<&str>,
        client_email: Option<&str>,
        private_key: Option<&str>,
    ) -> Result<Self, CredentialError> {
        if let Some(blob) = non_empty(blob) {
            let key: ServiceAccountKey = serde_json::from_str(blob)
                .map_err(|e| CredentialError::InvalidBlob(e.to_string()))?;
            if key_material(&key.private_key).is_empty() {
                return Err(CredentialError::IncompleteBlob("private_key"));
            }
            if key.client_email.trim().is_empty() {
                return Err(CredentialError::IncompleteBlob("client_email"));
            }
            debug!(client_email = %key.client_email, "Using structured credentials");
            return Ok(CredentialSource::Structured(key));
        }

        let private_key = non_empty(private_key)
            .filter(|key| !key_material(key).is_empty())
            .ok_or(CredentialError::MissingPrivateKey)?;
        let client_email = non_empty(client_email).ok_or(CredentialError::MissingClientEmail)?;

        debug!(%client_email, "Using split-field credentials");
        Ok(CredentialSource::SplitFields {
            client_email: client_email.trim().to_owned(),
            private_key: private_key.to_owned(),
        })
    }

    /// The service account with its private key rebuilt as a well-formed PEM.
    pub fn service_account(&self) -> ServiceAccountKey {
        match self {
            CredentialSource::Structured(key) => ServiceAccountKey {
                private_key: normalize_private_key(&key.private_key),
                ..key.clone()
            },
            CredentialSource::SplitFields {
                client_email,
                private_key,
            } => ServiceAccountKey {
                account_type: Some("service_account".to_owned()),
                project_id: None,
                private_key_id: None,
                private_key: normalize_private_key(private_key),
                client_email: client_email.clone(),
                token_uri: None,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::Structured(_) => "structured",
            CredentialSource::SplitFields { .. } => "split",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner.trim();
        }
    }
    s
}

/// Base64 key material with escapes, quotes, PEM markers and whitespace removed.
fn key_material(raw: &str) -> String {
    let unescaped = raw.replace("\\n", "\n");
    strip_quotes(unescaped.trim())
        .replace(PEM_HEADER, "")
        .replace(PEM_FOOTER, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Rebuild a private key as a PKCS#8 PEM block wrapped at 64 columns.
pub fn normalize_private_key(raw: &str) -> String {
    let material: Vec<char> = key_material(raw).chars().collect();

    let mut lines = Vec::with_capacity(material.len() / PEM_LINE_WIDTH + 3);
    lines.push(PEM_HEADER.to_owned());
    lines.extend(
        material
            .chunks(PEM_LINE_WIDTH)
            .map(|chunk| chunk.iter().collect::<String>()),
    );
    lines.push(PEM_FOOTER.to_owned());
    lines.push(String::new());

    lines.join("\n")
}
