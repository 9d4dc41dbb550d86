use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::PixClient;
use crate::repositories::{
    BalanceRepository, ChargebackRepository, CreatorRepository, DbPool,
    DeviceFingerprintRepository, FraudFlagRepository, PaymentRepository, PayoutRepository,
    PgBalanceRepository, PgChargebackRepository, PgCreatorRepository,
    PgDeviceFingerprintRepository, PgFraudFlagRepository, PgPaymentRepository,
    PgPayoutRepository, PgSubscriberRepository, SubscriberRepository,
};
use eyre::Result;
pub use fanpix_primitives::models::app_config::AppConfig;

/// One handle per repository; every component gets its stores through
/// here instead of reaching for a shared connection.
#[derive(Clone)]
pub struct Stores {
    pub balances: Arc<dyn BalanceRepository>,
    pub creators: Arc<dyn CreatorRepository>,
    pub subscribers: Arc<dyn SubscriberRepository>,
    pub payouts: Arc<dyn PayoutRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub fraud_flags: Arc<dyn FraudFlagRepository>,
    pub fingerprints: Arc<dyn DeviceFingerprintRepository>,
    pub chargebacks: Arc<dyn ChargebackRepository>,
}

impl Stores {
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            balances: Arc::new(PgBalanceRepository::new(pool.clone())),
            creators: Arc::new(PgCreatorRepository::new(pool.clone())),
            subscribers: Arc::new(PgSubscriberRepository::new(pool.clone())),
            payouts: Arc::new(PgPayoutRepository::new(pool.clone())),
            payments: Arc::new(PgPaymentRepository::new(pool.clone())),
            fraud_flags: Arc::new(PgFraudFlagRepository::new(pool.clone())),
            fingerprints: Arc::new(PgDeviceFingerprintRepository::new(pool.clone())),
            chargebacks: Arc::new(PgChargebackRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub http_client: Client,
    pub config: AppConfig,
    pub pix: PixClient,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        Self::with_stores(Stores::postgres(pool), config)
    }

    pub fn with_stores(stores: Stores, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let pix = PixClient::new(
            http.clone(),
            &config.pix_details.pix_api_url,
            config.pix_details.pix_api_key.clone(),
        )?;

        Ok(Arc::new(Self {
            stores,
            http_client: http,
            config,
            pix,
        }))
    }
}
