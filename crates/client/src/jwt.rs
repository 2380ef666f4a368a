//! Default request-token signer
//!
//! Produces the short-lived bearer tokens the platform expects: a JWT whose
//! header carries the key id and a random nonce, and whose claims bind the
//! token to one `METHOD host/path`. Accepted key formats:
//!
//! * PEM ECDSA P-256 keys (`EC PRIVATE KEY` or PKCS#8 `PRIVATE KEY`), signed ES256
//! * PEM PKCS#8 Ed25519 keys, signed EdDSA
//! * base64 Ed25519 keys (64 bytes: seed followed by public key), signed EdDSA

use async_trait::async_trait;
use base64::{
	engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
	Engine as _,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey};
use p256::pkcs8::{DecodePrivateKey, EncodePrivateKey};
use serde::Serialize;
use tracing::debug;

use cdp_types::{AuthError, AuthResult, JwtOptions, JwtSigner};

const ISSUER: &str = "cdp";

// 32-byte seed followed by the 32-byte public key
const ED25519_KEYPAIR_LEN: usize = 64;

#[derive(Debug, Serialize)]
struct TokenHeader<'a> {
	alg: &'static str,
	kid: &'a str,
	typ: &'static str,
	nonce: String,
}

#[derive(Debug, Serialize)]
struct TokenClaims<'a> {
	sub: &'a str,
	iss: &'static str,
	nbf: i64,
	iat: i64,
	exp: i64,
	uris: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAlgorithm {
	Es256,
	EdDsa,
}

impl KeyAlgorithm {
	fn algorithm(self) -> Algorithm {
		match self {
			KeyAlgorithm::Es256 => Algorithm::ES256,
			KeyAlgorithm::EdDsa => Algorithm::EdDSA,
		}
	}

	fn header_name(self) -> &'static str {
		match self {
			KeyAlgorithm::Es256 => "ES256",
			KeyAlgorithm::EdDsa => "EdDSA",
		}
	}
}

fn invalid_key(reason: impl std::fmt::Display) -> AuthError {
	AuthError::InvalidKeyFormat(reason.to_string())
}

/// Signing key decoded from an API key secret
struct ApiSigningKey {
	key: EncodingKey,
	algorithm: KeyAlgorithm,
}

impl ApiSigningKey {
	fn parse(secret: &str) -> AuthResult<Self> {
		// Secrets copied out of JSON key files often keep escaped newlines
		let secret = secret.trim().replace("\\n", "\n");

		if secret.starts_with("-----BEGIN") {
			Self::from_pem(&secret)
		} else {
			Self::from_ed25519_keypair(&secret)
		}
	}

	/// P-256 keys in SEC1 or PKCS#8 form, Ed25519 keys in PKCS#8 form
	fn from_pem(pem: &str) -> AuthResult<Self> {
		if let Ok(key) = p256::SecretKey::from_sec1_pem(pem) {
			return Self::es256(&key);
		}
		if let Ok(key) = p256::SecretKey::from_pkcs8_pem(pem) {
			return Self::es256(&key);
		}
		if let Ok(key) = ed25519_dalek::SigningKey::from_pkcs8_pem(pem) {
			return Self::eddsa(&key);
		}

		Err(invalid_key(
			"expected a P-256 EC PRIVATE KEY or a P-256/Ed25519 PRIVATE KEY PEM block",
		))
	}

	fn from_ed25519_keypair(encoded: &str) -> AuthResult<Self> {
		let raw = STANDARD
			.decode(encoded.as_bytes())
			.map_err(|_| invalid_key("expected a PEM EC key or a base64 Ed25519 key"))?;

		let keypair: [u8; ED25519_KEYPAIR_LEN] = raw.as_slice().try_into().map_err(|_| {
			invalid_key(format!(
				"Ed25519 key must be {} bytes, got {}",
				ED25519_KEYPAIR_LEN,
				raw.len()
			))
		})?;

		let key = ed25519_dalek::SigningKey::from_keypair_bytes(&keypair)
			.map_err(|e| invalid_key(format!("inconsistent Ed25519 key pair: {}", e)))?;
		Self::eddsa(&key)
	}

	fn es256(key: &p256::SecretKey) -> AuthResult<Self> {
		let der = key.to_pkcs8_der().map_err(invalid_key)?;
		Ok(Self {
			key: EncodingKey::from_ec_der(der.as_bytes()),
			algorithm: KeyAlgorithm::Es256,
		})
	}

	fn eddsa(key: &ed25519_dalek::SigningKey) -> AuthResult<Self> {
		let der = key.to_pkcs8_der().map_err(invalid_key)?;
		Ok(Self {
			key: EncodingKey::from_ed_der(der.as_bytes()),
			algorithm: KeyAlgorithm::EdDsa,
		})
	}
}

fn encode_segment<T: Serialize>(value: &T) -> AuthResult<String> {
	let json = serde_json::to_vec(value).map_err(|e| AuthError::Signing(e.to_string()))?;
	Ok(URL_SAFE_NO_PAD.encode(json))
}

/// JWT signer for platform API keys
#[derive(Debug, Clone, Default)]
pub struct CdpJwtSigner;

impl CdpJwtSigner {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl JwtSigner for CdpJwtSigner {
	async fn generate_jwt(&self, options: &JwtOptions) -> AuthResult<String> {
		if options.api_key_id.is_empty() {
			return Err(AuthError::ConfigurationError(
				"API key id cannot be empty".to_string(),
			));
		}

		let signing_key = ApiSigningKey::parse(options.api_key_secret.expose_secret())?;
		let now = Utc::now().timestamp();

		let header = TokenHeader {
			alg: signing_key.algorithm.header_name(),
			kid: &options.api_key_id,
			typ: "JWT",
			nonce: hex::encode(rand::random::<[u8; 16]>()),
		};
		let claims = TokenClaims {
			sub: &options.api_key_id,
			iss: ISSUER,
			nbf: now,
			iat: now,
			exp: now + options.expires_in as i64,
			uris: vec![options.request_uri()],
		};

		let message = format!("{}.{}", encode_segment(&header)?, encode_segment(&claims)?);
		let signature =
			jsonwebtoken::crypto::sign(
				message.as_bytes(),
				&signing_key.key,
				signing_key.algorithm.algorithm(),
			)
				.map_err(|e| AuthError::Signing(e.to_string()))?;

		debug!(
			"Signed {} request token for {}",
			header.alg,
			options.request_uri()
		);

		Ok(format!("{}.{}", message, signature))
	}
}
