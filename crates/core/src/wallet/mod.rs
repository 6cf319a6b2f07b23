//! Wallet module - the external fund-transfer capability.
//!
//! Core code only depends on the outcome of a transfer (a transaction
//! reference or a failure). Wallet protocol details live in the
//! implementations supplied by the runtime.

mod wallet_model;
mod wallet_traits;

pub use wallet_model::WalletConnection;
pub use wallet_traits::{FundTransferTrait, WalletTrait, WalletTransfer};
