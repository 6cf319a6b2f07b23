use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use rust_decimal::Decimal;

/// Address that receives approved loan disbursements unless overridden.
pub const DEFAULT_DISBURSEMENT_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Recipient of approved loan transfers.
    pub disbursement_address: String,
    /// Recipient of insurance premiums paid through the wallet.
    pub premium_address: String,
    pub wallet_balance: Decimal,
    pub network_id: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("AGRIFIN_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid AGRIFIN_LISTEN_ADDR")?;
        let db_path = env_or("AGRIFIN_DB_PATH", "./db/agrifin.db");
        let cors_allow = env_or("AGRIFIN_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = parse_timeout_ms(&env_or("AGRIFIN_REQUEST_TIMEOUT_MS", "30000"))
            .context("Invalid AGRIFIN_REQUEST_TIMEOUT_MS")?;
        let disbursement_address =
            env_or("AGRIFIN_DISBURSEMENT_ADDRESS", DEFAULT_DISBURSEMENT_ADDRESS);
        let premium_address = std::env::var("AGRIFIN_PREMIUM_ADDRESS")
            .unwrap_or_else(|_| disbursement_address.clone());
        let wallet_balance: Decimal = env_or("AGRIFIN_WALLET_BALANCE", "10")
            .parse()
            .context("Invalid AGRIFIN_WALLET_BALANCE")?;
        let network_id = env_or("AGRIFIN_NETWORK_ID", "0x1");
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout,
            disbursement_address,
            premium_address,
            wallet_balance,
            network_id,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let millis: u64 = raw.trim().parse()?;
    anyhow::ensure!(millis > 0, "timeout must be positive");
    Ok(Duration::from_millis(millis))
}
