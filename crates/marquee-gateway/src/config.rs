//! Gateway configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Marquee gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "marquee-gateway")]
#[command(about = "HTTP/JSON gateway for the Marquee movie catalog")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Movie dataset file (JSON array). Uses the bundled dataset when omitted.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Session idle timeout in minutes
    #[arg(long, default_value_t = 60)]
    pub session_timeout: u64,

    /// Maximum concurrent review sessions
    #[arg(long, default_value_t = 100)]
    pub max_sessions: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Dataset file; `None` selects the bundled dataset.
    pub data_path: Option<PathBuf>,
    /// Idle time after which a session is discarded.
    pub session_timeout: Duration,
    pub max_sessions: usize,
}

impl From<Args> for GatewayConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            data_path: args.data,
            session_timeout: Duration::from_secs(args.session_timeout.saturating_mul(60)),
            max_sessions: args.max_sessions,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_path: None,
            session_timeout: Duration::from_secs(60 * 60),
            max_sessions: 100,
        }
    }
}

impl GatewayConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["marquee-gateway"]);
        let config = GatewayConfig::from(args);

        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.session_timeout, Duration::from_secs(3600));
        assert_eq!(config.max_sessions, 100);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "marquee-gateway",
            "--port",
            "9090",
            "--host",
            "0.0.0.0",
            "--data",
            "/srv/movies.json",
            "--session-timeout",
            "5",
            "--max-sessions",
            "3",
        ]);
        let config = GatewayConfig::from(args);

        assert_eq!(config.base_url(), "http://0.0.0.0:9090");
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/movies.json")));
        assert_eq!(config.session_timeout, Duration::from_secs(300));
        assert_eq!(config.max_sessions, 3);
    }

    #[test]
    fn test_huge_session_timeout_saturates() {
        let max = u64::MAX.to_string();
        let args = Args::parse_from(["marquee-gateway", "--session-timeout", max.as_str()]);
        let config = GatewayConfig::from(args);
        assert_eq!(config.session_timeout, Duration::from_secs(u64::MAX));
    }
}
