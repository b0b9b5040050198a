//! Password verification and access token issuance.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::dto::tokens::{TokenRequest, TokenResponse};
use crate::models::auth::create_access_token;
use crate::models::config::ServerConfig;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Hashes a password into its PHC string form.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {e}")))
}

/// Checks a candidate password against a stored PHC string.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Password grant: verifies the credentials and signs an access token.
///
/// Unknown usernames, wrong passwords, and inactive accounts all fail the
/// same way so the endpoint does not leak which accounts exist.
pub fn issue_token<R>(
    repo: &R,
    config: &ServerConfig,
    request: TokenRequest,
) -> ServiceResult<TokenResponse>
where
    R: UserReader + ?Sized,
{
    let user = repo
        .get_by_username(request.username.trim())?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&request.password, &user.password_hash) || !user.is_active {
        return Err(ServiceError::Unauthorized);
    }

    let token = create_access_token(user.id, &user.email, &config.secret)
        .map_err(|e| ServiceError::Internal(format!("Failed to sign token: {e}")))?;

    Ok(TokenResponse::bearer(token))
}
