//! API key credentials and bearer-token signing

pub mod credentials;
pub mod errors;
pub mod traits;

pub use credentials::{Credentials, JwtOptions, DEFAULT_JWT_EXPIRES_IN_SECS};
pub use errors::*;
pub use traits::*;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
