// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Cryptography utilities.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::signature::{Keypair, SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use thiserror::Error;

use crate::constants::RSA_KEY_SIZE;

pub trait CryptoUtil {
    /// Sign data and return the raw signature bytes.
    fn sign(&self, data: &[u8]) -> Vec<u8>;

    /// Verify a signature against the provided data.
    fn verify(&self, data: &[u8], sig: &[u8]) -> bool;
}

#[derive(Debug, Error)]
pub enum RsaUtilError {
    /// An error from the [`rsa`] library occurred.
    #[error("RSA library error: {0}")]
    RsaError(#[from] rsa::errors::Error),

    /// The private key could not be decoded.
    #[error("Invalid private key: {0}")]
    Pkcs8Error(#[from] rsa::pkcs8::Error),

    /// An error occurred while encoding the public key.
    #[error("Public key encoding error: {0}")]
    SpkiError(#[from] rsa::pkcs8::spki::Error),
}

/// RS256 signer backed by a service-account private key.
pub struct RsaSigner {
    priv_key: RsaPrivateKey,
    pub_key: RsaPublicKey,
    signing_key: SigningKey<Sha256>,
    verifying_key: VerifyingKey<Sha256>,
}

impl RsaSigner {
    /// Create a signer with a freshly generated key pair.
    pub fn new() -> Result<Self, RsaUtilError> {
        let mut rng = rand::thread_rng();
        let priv_key = RsaPrivateKey::new(&mut rng, RSA_KEY_SIZE)?;
        Ok(Self::from_private_key(priv_key))
    }

    /// Create a signer from a PKCS#8 PEM private key.
    pub fn from_pem(pem: &str) -> Result<Self, RsaUtilError> {
        let priv_key = RsaPrivateKey::from_pkcs8_pem(pem)?;
        Ok(Self::from_private_key(priv_key))
    }

    fn from_private_key(priv_key: RsaPrivateKey) -> Self {
        let pub_key = RsaPublicKey::from(&priv_key);
        let signing_key = SigningKey::<Sha256>::new(priv_key.clone());
        let verifying_key = signing_key.verifying_key();

        Self {
            priv_key,
            pub_key,
            signing_key,
            verifying_key,
        }
    }

    /// Get the private key as a PKCS#8 PEM string.
    pub fn privkey_pem(&self) -> Result<String, RsaUtilError> {
        Ok(self.priv_key.to_pkcs8_pem(LineEnding::LF)?.to_string())
    }

    /// Get the public key as a PEM string.
    pub fn pubkey_pem(&self) -> Result<String, RsaUtilError> {
        Ok(self.pub_key.to_public_key_pem(LineEnding::LF)?)
    }
}

impl CryptoUtil for RsaSigner {
    fn sign(&self, data: &[u8]) -> Vec<u8> {
        self.signing_key.sign(data).to_vec()
    }

    fn verify(&self, data: &[u8], sig: &[u8]) -> bool {
        match Signature::try_from(sig) {
            Ok(sig) => self.verifying_key.verify(data, &sig).is_ok(),
            Err(_) => false,
        }
    }
}
