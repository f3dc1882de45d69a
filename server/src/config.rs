//! Startup configuration, read once from flags or environment variables.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::telemetry::LogConfig;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "govgate",
    about = "Read-only DAO governance gateway with proposal simulation",
    long_about = "
govgate serves proposal listings, proposal state and proposal simulation for a
Governor contract over any EVM JSON-RPC endpoint. It never signs or sends
transactions.

ENVIRONMENT VARIABLES:
  RPC_URL            JSON-RPC endpoint
  DAO_ADDRESS        Governor used when a simulate request omits `dao`
  ALLOWED_TARGETS    Comma separated target allow-list (empty = any target)
  FRONTEND_ORIGIN    Allowed CORS origin (`*` mirrors the request origin)
",
    version
)]
pub struct Config {
    /// JSON-RPC endpoint URL
    #[arg(long, env = "RPC_URL", default_value = "http://localhost:8545")]
    pub rpc_url: String,

    /// Default Governor contract address
    #[arg(
        long,
        env = "DAO_ADDRESS",
        default_value = "0x0000000000000000000000000000000000000000"
    )]
    pub dao_address: String,

    /// Comma separated proposal target allow-list
    #[arg(long, env = "ALLOWED_TARGETS", default_value = "")]
    pub allowed_targets: String,

    #[arg(long, env = "FRONTEND_ORIGIN", default_value = "*")]
    pub frontend_origin: String,

    /// Governor ABI JSON file
    #[arg(long, env = "ABI_PATH", default_value = "abi/AIProposalGovernor.json")]
    pub abi_path: PathBuf,

    #[arg(long = "bind", env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Per-request RPC timeout, in seconds
    #[arg(long, env = "RPC_TIMEOUT_SECS", default_value_t = 10)]
    pub rpc_timeout_secs: u64,

    /// "trace" | "debug" | "info" | "warn" | "error", or a full filter directive
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit JSON structured logs
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "govgate",
            "--rpc-url",
            "https://rpc.example.org",
            "--allowed-targets",
            "0xabc0000000000000000000000000000000000001",
            "--bind",
            "127.0.0.1:9000",
            "--rpc-timeout-secs",
            "3",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(cfg.rpc_url, "https://rpc.example.org");
        assert_eq!(cfg.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.rpc_timeout_secs, 3);
        assert!(cfg.log_config().json);
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Config::try_parse_from(["govgate", "--bind", "not-an-addr"]).is_err());
    }
}
