use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use agrifin_core::wallet::WalletConnection;
use axum::{extract::State, routing::post, Json, Router};

async fn connect_wallet(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletConnection>> {
    let connection = state.wallet.connect().await?;
    tracing::info!(
        "Wallet {} connected on network {}",
        connection.address,
        connection.network_id
    );
    Ok(Json(connection))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/wallet/connect", post(connect_wallet))
}
