//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Secret used to sign access tokens.
    pub secret: String,
    /// Host name clients are expected to reach the API on; image URLs are
    /// built against it.
    pub trusted_host: String,
    /// URL path the static file mount is served under.
    pub static_base: String,
    /// Filesystem directory backing the static file mount.
    pub static_dir: String,
    /// Origins allowed by CORS; an empty list means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
}
