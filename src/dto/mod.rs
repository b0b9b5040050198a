//! Request parameter structs and response shapes for the REST API.

pub mod characters;
pub mod episodes;
pub mod notifications;
pub mod seasons;
pub mod tokens;
pub mod users;

use crate::models::config::ServerConfig;

/// Builds the absolute URL for a stored static-asset path.
///
/// The scheme is fixed: the service sits behind a TLS-terminating proxy and
/// forwarded headers are not propagated.
pub fn build_static_url(config: &ServerConfig, path: &str) -> String {
    format!(
        "https://{}/{}/{}",
        config.trusted_host,
        config.static_base.trim_matches('/'),
        path.trim_start_matches('/')
    )
}
