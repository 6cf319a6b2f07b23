//! In-process wallet used in place of a browser wallet extension.

use agrifin_core::errors::{Error, Result};
use agrifin_core::wallet::{WalletConnection, WalletTrait};
use async_trait::async_trait;
use rand::{rngs::OsRng, RngCore};
use rust_decimal::Decimal;

/// Reports a fixed account and accepts every positive transfer, returning a
/// random 32-byte transaction hash.
pub struct SimulatedWallet {
    address: String,
    balance: Decimal,
    network_id: String,
}

impl SimulatedWallet {
    pub fn new(balance: Decimal, network_id: impl Into<String>) -> Self {
        Self {
            address: random_hex(20),
            balance,
            network_id: network_id.into(),
        }
    }
}

#[async_trait]
impl WalletTrait for SimulatedWallet {
    async fn connect(&self) -> Result<WalletConnection> {
        Ok(WalletConnection {
            address: self.address.clone(),
            balance: self.balance,
            network_id: self.network_id.clone(),
        })
    }

    async fn transfer(&self, to_address: &str, amount: Decimal) -> Result<String> {
        if amount <= Decimal::ZERO {
            return Err(Error::Transfer(format!(
                "Refusing to send non-positive amount {}",
                amount
            )));
        }
        let tx_hash = random_hex(32);
        tracing::info!(
            "Simulated transfer of {} from {} to {}: {}",
            amount,
            self.address,
            to_address,
            tx_hash
        );
        Ok(tx_hash)
    }
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
