//! Wallet domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State reported by a wallet after a successful connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnection {
    /// Address of the connected account
    pub address: String,
    /// Balance in native units
    pub balance: Decimal,
    /// Network identifier reported by the wallet (e.g. `0x1`)
    pub network_id: String,
}
