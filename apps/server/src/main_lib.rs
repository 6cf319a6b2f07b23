use std::sync::Arc;

use crate::{config::Config, wallet::SimulatedWallet};
use agrifin_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    ids::{IdGenerator, UuidIdGenerator},
    insurance::{InsuranceService, InsuranceServiceTrait},
    loans::{LoanService, LoanServiceTrait},
    profile::{ProfileService, ProfileServiceTrait},
    risk::{RandomRiskEstimator, RiskEstimator},
    wallet::{WalletTrait, WalletTransfer},
};
use agrifin_storage_sqlite::{
    db, InsuranceRepository, LoanRepository, LocalStorageRepository, ProfileRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub loan_service: Arc<dyn LoanServiceTrait>,
    pub insurance_service: Arc<dyn InsuranceServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub risk_estimator: Arc<dyn RiskEstimator>,
    pub wallet: Arc<dyn WalletTrait>,
    /// Pays approved loans out to the disbursement address.
    pub disbursement: WalletTransfer,
    /// Collects insurance premiums.
    pub premium_collection: WalletTransfer,
}

pub fn init_tracing() {
    let log_format = std::env::var("AGRIFIN_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());
    let storage = LocalStorageRepository::new(pool, writer);

    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::new());
    let risk_estimator: Arc<dyn RiskEstimator> = Arc::new(RandomRiskEstimator);

    let profile_repository = Arc::new(ProfileRepository::new(storage.clone()));
    let profile_service: Arc<dyn ProfileServiceTrait> = Arc::new(ProfileService::new(
        profile_repository.clone(),
        id_generator.clone(),
    ));

    let loan_service: Arc<dyn LoanServiceTrait> = Arc::new(LoanService::new(
        Arc::new(LoanRepository::new(storage.clone())),
        profile_repository,
        id_generator.clone(),
    ));

    let insurance_service: Arc<dyn InsuranceServiceTrait> = Arc::new(InsuranceService::new(
        Arc::new(InsuranceRepository::new(storage)),
        id_generator,
    ));

    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        profile_service.clone(),
        loan_service.clone(),
        insurance_service.clone(),
        risk_estimator.clone(),
    ));

    let wallet: Arc<dyn WalletTrait> = Arc::new(SimulatedWallet::new(
        config.wallet_balance,
        config.network_id.clone(),
    ));
    let disbursement = WalletTransfer::new(wallet.clone(), config.disbursement_address.clone());
    let premium_collection = WalletTransfer::new(wallet.clone(), config.premium_address.clone());
    tracing::info!(
        "Loan disbursements go to {}, premiums to {}",
        disbursement.recipient(),
        premium_collection.recipient()
    );

    Ok(Arc::new(AppState {
        profile_service,
        loan_service,
        insurance_service,
        dashboard_service,
        risk_estimator,
        wallet,
        disbursement,
        premium_collection,
    }))
}
