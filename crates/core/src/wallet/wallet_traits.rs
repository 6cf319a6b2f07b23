//! Wallet and fund-transfer traits.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::wallet_model::WalletConnection;
use crate::errors::Result;

/// Trait defining a wallet able to report its state and move funds.
///
/// Failures are returned as `Error::Transfer`.
#[async_trait]
pub trait WalletTrait: Send + Sync {
    /// Connects to the wallet and reports address, balance and network.
    async fn connect(&self) -> Result<WalletConnection>;

    /// Sends `amount` (native units) to `to_address`.
    ///
    /// Returns the transaction reference on success.
    async fn transfer(&self, to_address: &str, amount: Decimal) -> Result<String>;
}

/// Capability handed to ledger operations that need to move funds.
///
/// The recipient is fixed by whoever builds the capability; the ledger only
/// supplies the amount.
#[async_trait]
pub trait FundTransferTrait: Send + Sync {
    async fn transfer(&self, amount: Decimal) -> Result<String>;
}

/// Binds a wallet to a recipient address.
#[derive(Clone)]
pub struct WalletTransfer {
    wallet: Arc<dyn WalletTrait>,
    recipient: String,
}

impl WalletTransfer {
    pub fn new(wallet: Arc<dyn WalletTrait>, recipient: impl Into<String>) -> Self {
        Self {
            wallet,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[async_trait]
impl FundTransferTrait for WalletTransfer {
    async fn transfer(&self, amount: Decimal) -> Result<String> {
        debug!("Transferring {} to {}", amount, self.recipient);
        self.wallet.transfer(&self.recipient, amount).await
    }
}
