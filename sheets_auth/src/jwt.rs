// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! JWT assertions for the OAuth2 JWT-bearer grant.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::JWT_LIFETIME_SECS;
use crate::crypto::CryptoUtil;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self {
            alg: "RS256".to_owned(),
            typ: "JWT".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Service-account email.
    pub iss: String,
    pub scope: String,
    /// Token endpoint the assertion is exchanged at.
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(
        client_email: impl Into<String>,
        scope: impl Into<String>,
        audience: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let iat = now.timestamp();
        Self {
            iss: client_email.into(),
            scope: scope.into(),
            aud: audience.into(),
            iat,
            exp: iat + JWT_LIFETIME_SECS,
        }
    }
}

/// Encode and sign the claims as a compact RS256 JWT.
pub fn encode_assertion(
    claims: &JwtClaims,
    crypto: &dyn CryptoUtil,
) -> Result<String, serde_json::Error> {
    let header = serde_json::to_vec(&JwtHeader::default())?;
    let claims = serde_json::to_vec(claims)?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(claims)
    );
    let sig = crypto.sign(signing_input.as_bytes());

    Ok(format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(sig)))
}
