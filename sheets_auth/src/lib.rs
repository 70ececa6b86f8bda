// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Service-account authentication for the Google Sheets API.
//!
//! Resolves credentials from configuration, repairs mangled private keys,
//! and signs the JWT assertions exchanged for OAuth2 access tokens.

pub mod constants;
pub mod credentials;
pub mod crypto;
pub mod id;
pub mod jwt;
