//! Serve command handler.

use anyhow::Result;
use std::path::PathBuf;

use eventreg_axum::{CorsConfig, ServerConfig, start_server};
use eventreg_core::database_path;

/// Build the server configuration from command-line values.
pub fn server_config(
    host: String,
    port: u16,
    allow_origin: Vec<String>,
    database: Option<PathBuf>,
) -> Result<ServerConfig> {
    let database_path = match database {
        Some(path) => path,
        None => database_path()?,
    };
    let config = ServerConfig {
        host,
        port,
        database_path,
        cors: CorsConfig::default(),
    };
    Ok(config.with_allowed_origins(allow_origin))
}

/// Execute the serve command. Runs until interrupted.
pub async fn execute(config: ServerConfig) -> Result<()> {
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_database_overrides_default() {
        let config = server_config(
            "0.0.0.0".to_string(),
            9000,
            vec!["http://a.test".to_string()],
            Some(PathBuf::from("/tmp/custom.db")),
        )
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/tmp/custom.db"));
        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://a.test".to_string()])
        );
    }

    #[test]
    fn test_no_origins_allows_all() {
        let config = server_config(
            "127.0.0.1".to_string(),
            8080,
            Vec::new(),
            Some(PathBuf::from("/tmp/custom.db")),
        )
        .unwrap();

        assert_eq!(config.cors, CorsConfig::AllowAll);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }
}
