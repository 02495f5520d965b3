// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
#[cfg(test)]
pub use state::test_state;
pub use types::Config;

/// Environment variable toggling debug mode
pub const DEBUG_ENV_VAR: &str = "is_debug_mode";

/// Host used when debug mode is on
const DEBUG_HOST: &str = "127.0.0.1";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let debug = std::env::var(DEBUG_ENV_VAR).ok().map(|v| parse_debug_flag(&v));
        Self::load_with(config_path, debug)
    }

    /// Load configuration with an explicit debug override
    pub fn load_with(config_path: &str, debug: Option<bool>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("JOKES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "joke-server/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("app.debug", false)?
            .set_default("app.static_dir", "static")?
            .set_default("app.site_name", "Random Joke Generator")?
            .set_override_option("app.debug", debug)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.apply_debug_mode();
        Ok(cfg)
    }

    /// Debug mode serves on loopback only and logs verbosely
    fn apply_debug_mode(&mut self) {
        if self.app.debug {
            self.server.host = DEBUG_HOST.to_string();
            self.logging.level = "debug".to_string();
            self.logging.show_headers = true;
        }
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn mode_name(&self) -> &'static str {
        if self.app.debug {
            "debug"
        } else {
            "production"
        }
    }
}

/// Interpret a boolean-like environment value.
///
/// `true`, `1` and `t` (any case) mean enabled; everything else is disabled.
pub fn parse_debug_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "t")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "does-not-exist/joke-server-test-config";

    #[test]
    fn test_parse_debug_flag() {
        assert!(parse_debug_flag("True"));
        assert!(parse_debug_flag("1"));
        assert!(parse_debug_flag("t"));
        assert!(parse_debug_flag(" TRUE "));
        assert!(!parse_debug_flag("False"));
        assert!(!parse_debug_flag("yes"));
        assert!(!parse_debug_flag(""));
    }

    #[test]
    fn test_production_defaults() {
        let cfg = Config::load_with(MISSING, Some(false)).unwrap();
        assert!(!cfg.app.debug);
        assert_eq!(cfg.mode_name(), "production");
        assert_eq!(cfg.app.static_dir, "static");
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.liveness_path, "/healthz");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.performance.shutdown_timeout, 10);
    }

    #[test]
    fn test_debug_mode_binds_loopback() {
        let cfg = Config::load_with(MISSING, Some(true)).unwrap();
        assert!(cfg.app.debug);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.show_headers);
        assert!(cfg.get_socket_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn test_invalid_address() {
        let mut cfg = Config::load_with(MISSING, Some(false)).unwrap();
        cfg.server.host = "not an ip".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
