//! # Ping Subcommand
//!
//! Calls `GET /api/v1/dispatch/` on the dispatch backend and prints its
//! reply. The base URL comes from `--base-url`, else `DISPATCH_API_BASE_URL`,
//! else the local development default.

use anyhow::{Context, Result};
use clap::Args;
use gt_dispatch_client::config::DEFAULT_TIMEOUT_SECS;
use gt_dispatch_client::{DispatchApiConfig, DispatchClient};

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Backend base URL. A missing scheme is treated as `http://`.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds. Defaults to `DISPATCH_API_TIMEOUT_SECS`,
    /// then 30.
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Execute the ping subcommand.
pub fn run_ping(args: &PingArgs) -> Result<u8> {
    let mut config = match &args.base_url {
        Some(url) => DispatchApiConfig::new(url, args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))?,
        None => DispatchApiConfig::from_env()?,
    };
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    let client = DispatchClient::new(config)?;
    tracing::info!(base_url = %client.config().base_url, "pinging dispatch backend");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let reply = runtime.block_on(client.ping())?;

    println!("  base url: {}", client.config().base_url);
    println!("  status:   {}", reply.status);
    println!("  message:  {}", reply.message);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_backend_is_an_error() {
        let args = PingArgs {
            base_url: Some("127.0.0.1:1".to_string()),
            timeout: Some(1),
        };
        let err = run_ping(&args).unwrap_err();
        assert!(format!("{err:#}").contains("/api/v1/dispatch/"));
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let args = PingArgs {
            base_url: Some("http://exa mple.com".to_string()),
            timeout: None,
        };
        assert!(run_ping(&args).is_err());
    }
}
