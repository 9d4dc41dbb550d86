#![allow(dead_code)]

use chrono::{DateTime, Utc};
use fanpix_core::app_state::{AppState, Stores};
use fanpix_core::repositories::{
    BalanceRepository, ChargebackRepository, CreatorRepository, DeviceFingerprintRepository,
    FraudFlagRepository, PaymentRepository, PayoutRepository, SubscriberRepository,
};
use fanpix_primitives::error::ApiError;
use fanpix_primitives::models::app_state::{AppConfig, PixInfo, SettlementInfo};
use fanpix_primitives::models::entities::{
    Balance, Chargeback, ChargebackState, Creator, DeviceFingerprint, FraudFlag, KycStatus,
    NewChargeback, NewDeviceFingerprint, NewFraudFlag, NewPayout, Payment, PaymentState, Payout,
    PayoutState, PixKeyType, Subscriber,
};
use fanpix_primitives::models::fraud_dto::FraudFlagFilter;
use secrecy::SecretString;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory stand-ins for the Postgres repositories. Each mutation takes
/// the table lock for its whole read-modify-write, matching the atomicity
/// the production stores get from single-statement updates.
#[derive(Default)]
pub struct MemoryDb {
    pub subscribers: Mutex<Vec<Subscriber>>,
    pub creators: Mutex<Vec<Creator>>,
    pub balances: Mutex<Vec<Balance>>,
    pub payouts: Mutex<Vec<Payout>>,
    pub payments: Mutex<Vec<Payment>>,
    pub fraud_flags: Mutex<Vec<FraudFlag>>,
    pub fingerprints: Mutex<Vec<DeviceFingerprint>>,
    pub chargebacks: Mutex<Vec<Chargeback>>,
}

pub struct MemBalances(pub Arc<MemoryDb>);

impl BalanceRepository for MemBalances {
    fn get(&self, creator_id: Uuid) -> Result<Balance, ApiError> {
        self.0
            .balances
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.creator_id == creator_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Balance".into()))
    }

    fn credit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut rows = self.0.balances.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.creator_id == creator_id)
            .ok_or_else(|| ApiError::NotFound("Balance".into()))?;
        row.available += amount;
        row.updated_at = Utc::now();
        Ok(())
    }

    fn debit(&self, creator_id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut rows = self.0.balances.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.creator_id == creator_id && b.available >= amount)
            .ok_or(ApiError::InsufficientFunds)?;
        row.available -= amount;
        row.updated_at = Utc::now();
        Ok(())
    }
}

pub struct MemCreators(pub Arc<MemoryDb>);

impl CreatorRepository for MemCreators {
    fn find(&self, id: Uuid) -> Result<Option<Creator>, ApiError> {
        Ok(self
            .0
            .creators
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn find_by_subscriber(&self, subscriber_id: Uuid) -> Result<Option<Creator>, ApiError> {
        Ok(self
            .0
            .creators
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.subscriber_id == subscriber_id)
            .cloned())
    }

    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Creator>, ApiError> {
        Ok(self
            .0
            .creators
            .lock()
            .unwrap()
            .iter()
            .find(|c| {
                Some(c.id) != exclude
                    && c.cpf_cnpj
                        .as_deref()
                        .map(|doc| doc == normalized || doc == raw)
                        .unwrap_or(false)
            })
            .cloned())
    }

    fn increment_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError> {
        let mut rows = self.0.creators.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
        row.chargeback_count += 1;
        row.updated_at = Utc::now();
        Ok(row.chargeback_count)
    }

    fn decrement_chargeback_count(&self, id: Uuid) -> Result<i32, ApiError> {
        let mut rows = self.0.creators.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
        if row.chargeback_count > 0 {
            row.chargeback_count -= 1;
            row.updated_at = Utc::now();
        }
        Ok(row.chargeback_count)
    }

    fn block_payouts(&self, id: Uuid, reason: &str) -> Result<(), ApiError> {
        let mut rows = self.0.creators.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
        row.payouts_blocked = true;
        row.payout_block_reason = Some(reason.to_string());
        row.updated_at = Utc::now();
        Ok(())
    }

    fn add_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut rows = self.0.creators.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
        row.chargeback_penalty_balance += amount;
        row.updated_at = Utc::now();
        Ok(())
    }

    fn reduce_penalty_balance(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut rows = self.0.creators.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound("Creator".into()))?;
        row.chargeback_penalty_balance = (row.chargeback_penalty_balance - amount).max(0);
        row.updated_at = Utc::now();
        Ok(())
    }

    fn with_outstanding_penalty(&self) -> Result<Vec<Creator>, ApiError> {
        Ok(self
            .0
            .creators
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.chargeback_penalty_balance > 0)
            .cloned()
            .collect())
    }
}

pub struct MemSubscribers(pub Arc<MemoryDb>);

impl SubscriberRepository for MemSubscribers {
    fn find(&self, id: Uuid) -> Result<Option<Subscriber>, ApiError> {
        Ok(self
            .0
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    fn find_by_document(
        &self,
        normalized: &str,
        raw: &str,
        exclude: Option<Uuid>,
    ) -> Result<Option<Subscriber>, ApiError> {
        Ok(self
            .0
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .find(|s| {
                Some(s.id) != exclude
                    && s.cpf_cnpj
                        .as_deref()
                        .map(|doc| doc == normalized || doc == raw)
                        .unwrap_or(false)
            })
            .cloned())
    }
}

pub struct MemPayouts(pub Arc<MemoryDb>);

impl PayoutRepository for MemPayouts {
    fn create(&self, new_payout: NewPayout) -> Result<Payout, ApiError> {
        let payout = Payout {
            id: Uuid::new_v4(),
            creator_id: new_payout.creator_id,
            amount: new_payout.amount,
            fee: new_payout.fee,
            net_amount: new_payout.net_amount,
            status: new_payout.status,
            external_transfer_id: None,
            failed_reason: None,
            processed_at: None,
            created_at: Utc::now(),
        };
        self.0.payouts.lock().unwrap().push(payout.clone());
        Ok(payout)
    }

    fn find(&self, id: Uuid) -> Result<Option<Payout>, ApiError> {
        Ok(self
            .0
            .payouts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn mark_completed(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError> {
        let mut rows = self.0.payouts.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.status = PayoutState::Completed;
            row.external_transfer_id = Some(transfer_id.to_string());
            row.processed_at = Some(Utc::now());
        }
        Ok(())
    }

    fn mark_processing_transfer(&self, id: Uuid, transfer_id: &str) -> Result<(), ApiError> {
        let mut rows = self.0.payouts.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.external_transfer_id = Some(transfer_id.to_string());
        }
        Ok(())
    }

    fn mark_failed(&self, id: Uuid, reason: &str) -> Result<(), ApiError> {
        let mut rows = self.0.payouts.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.status = PayoutState::Failed;
            row.failed_reason = Some(reason.to_string());
        }
        Ok(())
    }

    fn count_since(&self, creator_id: Uuid, since: DateTime<Utc>) -> Result<i64, ApiError> {
        Ok(self
            .0
            .payouts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.creator_id == creator_id && p.created_at >= since)
            .count() as i64)
    }

    fn count_countable_since(
        &self,
        creator_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        Ok(self
            .0
            .payouts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.creator_id == creator_id
                    && p.created_at >= since
                    && p.status != PayoutState::Failed
            })
            .count() as i64)
    }

    fn stale_processing(&self, older_than: DateTime<Utc>) -> Result<Vec<Payout>, ApiError> {
        Ok(self
            .0
            .payouts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.status == PayoutState::Processing && p.created_at < older_than)
            .cloned()
            .collect())
    }
}

pub struct MemPayments(pub Arc<MemoryDb>);

impl PaymentRepository for MemPayments {
    fn count_by_payer_since(
        &self,
        subscriber_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        Ok(self
            .0
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.subscriber_id == subscriber_id && p.created_at >= since)
            .count() as i64)
    }
}

pub struct MemFraudFlags(pub Arc<MemoryDb>);

impl FraudFlagRepository for MemFraudFlags {
    fn create(&self, flag: NewFraudFlag) -> Result<FraudFlag, ApiError> {
        let flag = FraudFlag {
            id: Uuid::new_v4(),
            subscriber_id: flag.subscriber_id,
            creator_id: flag.creator_id,
            flag_kind: flag.flag_kind,
            severity: flag.severity,
            description: flag.description,
            metadata: flag.metadata,
            is_resolved: false,
            resolved_by: None,
            resolution: None,
            created_at: Utc::now(),
        };
        self.0.fraud_flags.lock().unwrap().push(flag.clone());
        Ok(flag)
    }

    fn find(&self, id: Uuid) -> Result<Option<FraudFlag>, ApiError> {
        Ok(self
            .0
            .fraud_flags
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    fn resolve(&self, id: Uuid, resolver: Uuid, resolution: &str) -> Result<FraudFlag, ApiError> {
        let mut rows = self.0.fraud_flags.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ApiError::NotFound("Fraud flag".into()))?;
        row.is_resolved = true;
        row.resolved_by = Some(resolver);
        row.resolution = Some(resolution.to_string());
        Ok(row.clone())
    }

    fn list(&self, filter: &FraudFlagFilter) -> Result<Vec<FraudFlag>, ApiError> {
        let mut flags: Vec<FraudFlag> = self
            .0
            .fraud_flags
            .lock()
            .unwrap()
            .iter()
            .filter(|f| {
                filter.flag_kind.map_or(true, |kind| f.flag_kind == kind)
                    && filter.creator_id.map_or(true, |id| f.creator_id == Some(id))
                    && filter
                        .subscriber_id
                        .map_or(true, |id| f.subscriber_id == Some(id))
                    && filter.is_resolved.map_or(true, |r| f.is_resolved == r)
                    && filter.min_severity.map_or(true, |s| f.severity >= s)
            })
            .cloned()
            .collect();
        flags.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        flags.truncate(filter.limit.unwrap_or(100) as usize);
        Ok(flags)
    }
}

pub struct MemFingerprints(pub Arc<MemoryDb>);

impl DeviceFingerprintRepository for MemFingerprints {
    fn touch(&self, subscriber_id: Uuid, fingerprint: &str) -> Result<bool, ApiError> {
        let mut rows = self.0.fingerprints.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|f| f.subscriber_id == subscriber_id && f.fingerprint == fingerprint)
        {
            row.last_seen_at = Utc::now();
            return Ok(true);
        }
        Ok(false)
    }

    fn insert(&self, record: NewDeviceFingerprint) -> Result<DeviceFingerprint, ApiError> {
        let record = DeviceFingerprint {
            id: Uuid::new_v4(),
            subscriber_id: record.subscriber_id,
            fingerprint: record.fingerprint,
            first_seen_at: Utc::now(),
            last_seen_at: Utc::now(),
        };
        self.0.fingerprints.lock().unwrap().push(record.clone());
        Ok(record)
    }

    fn other_subscribers_with(
        &self,
        fingerprint: &str,
        excluding: Uuid,
    ) -> Result<Vec<Uuid>, ApiError> {
        let mut ids: Vec<Uuid> = self
            .0
            .fingerprints
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.fingerprint == fingerprint && f.subscriber_id != excluding)
            .map(|f| f.subscriber_id)
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}

pub struct MemChargebacks(pub Arc<MemoryDb>);

impl ChargebackRepository for MemChargebacks {
    fn create(&self, new_chargeback: NewChargeback) -> Result<Chargeback, ApiError> {
        let chargeback = Chargeback {
            id: Uuid::new_v4(),
            payment_id: new_chargeback.payment_id,
            creator_id: new_chargeback.creator_id,
            amount: new_chargeback.amount,
            status: ChargebackState::Pending,
            external_chargeback_id: new_chargeback.external_chargeback_id,
            penalty_amount: 0,
            penalty_applied: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.0.chargebacks.lock().unwrap().push(chargeback.clone());
        Ok(chargeback)
    }

    fn find(&self, id: Uuid) -> Result<Option<Chargeback>, ApiError> {
        Ok(self
            .0
            .chargebacks
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn update_status(&self, id: Uuid, status: ChargebackState) -> Result<(), ApiError> {
        let mut rows = self.0.chargebacks.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
            row.status = status;
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    fn set_penalty(&self, id: Uuid, amount: i64) -> Result<(), ApiError> {
        let mut rows = self.0.chargebacks.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
            row.penalty_amount = amount;
            row.penalty_applied = true;
            row.updated_at = Utc::now();
        }
        Ok(())
    }
}

pub struct TestContext {
    pub db: Arc<MemoryDb>,
    pub state: Arc<AppState>,
}

pub fn test_config(gateway_url: &str) -> AppConfig {
    AppConfig {
        pix_details: PixInfo {
            pix_api_url: gateway_url.to_string(),
            pix_api_key: SecretString::new(Box::from("sk_test_pix")),
        },
        settlement: SettlementInfo {
            min_payout_amount: 2000,
            payout_fee: 500,
            min_net_amount: 100,
            velocity_window_minutes: 60,
            velocity_payout_limit: 3,
            monthly_payout_limit: 4,
            monthly_payout_limit_pro: 8,
            chargeback_block_threshold: 3,
        },
    }
}

pub fn create_test_state() -> TestContext {
    create_test_state_with(test_config("http://gateway.invalid"))
}

pub fn create_test_state_with_gateway(gateway_url: &str) -> TestContext {
    create_test_state_with(test_config(gateway_url))
}

pub fn create_test_state_with(config: AppConfig) -> TestContext {
    let db = Arc::new(MemoryDb::default());
    let stores = Stores {
        balances: Arc::new(MemBalances(db.clone())),
        creators: Arc::new(MemCreators(db.clone())),
        subscribers: Arc::new(MemSubscribers(db.clone())),
        payouts: Arc::new(MemPayouts(db.clone())),
        payments: Arc::new(MemPayments(db.clone())),
        fraud_flags: Arc::new(MemFraudFlags(db.clone())),
        fingerprints: Arc::new(MemFingerprints(db.clone())),
        chargebacks: Arc::new(MemChargebacks(db.clone())),
    };
    let state = AppState::with_stores(stores, config).unwrap();
    TestContext { db, state }
}

pub fn seed_subscriber(db: &MemoryDb, cpf_cnpj: Option<&str>) -> Subscriber {
    let subscriber = Subscriber {
        id: Uuid::new_v4(),
        email: format!("user_{}@example.com", Uuid::new_v4()),
        cpf_cnpj: cpf_cnpj.map(|s| s.to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    db.subscribers.lock().unwrap().push(subscriber.clone());
    subscriber
}

pub fn seed_creator(db: &MemoryDb, customize: impl FnOnce(&mut Creator)) -> Creator {
    let subscriber = seed_subscriber(db, None);
    let mut creator = Creator {
        id: Uuid::new_v4(),
        subscriber_id: subscriber.id,
        display_name: "Test Creator".to_string(),
        cpf_cnpj: None,
        kyc_status: KycStatus::Approved,
        payouts_blocked: false,
        payout_block_reason: None,
        is_pro: false,
        chargeback_count: 0,
        chargeback_penalty_balance: 0,
        pix_key: Some("creator@example.com".to_string()),
        pix_key_type: Some(PixKeyType::Email),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    customize(&mut creator);
    db.creators.lock().unwrap().push(creator.clone());
    creator
}

pub fn seed_balance(db: &MemoryDb, creator_id: Uuid, available: i64) {
    db.balances.lock().unwrap().push(Balance {
        id: Uuid::new_v4(),
        creator_id,
        available,
        pending: 0,
        updated_at: Utc::now(),
    });
}

pub fn seed_payout(
    db: &MemoryDb,
    creator_id: Uuid,
    status: PayoutState,
    created_at: DateTime<Utc>,
) -> Payout {
    let payout = Payout {
        id: Uuid::new_v4(),
        creator_id,
        amount: 2500,
        fee: 500,
        net_amount: 2000,
        status,
        external_transfer_id: None,
        failed_reason: None,
        processed_at: None,
        created_at,
    };
    db.payouts.lock().unwrap().push(payout.clone());
    payout
}

pub fn seed_payment(
    db: &MemoryDb,
    subscriber_id: Uuid,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
) -> Payment {
    let payment = Payment {
        id: Uuid::new_v4(),
        subscriber_id,
        creator_id,
        amount: 990,
        status: PaymentState::Completed,
        created_at,
    };
    db.payments.lock().unwrap().push(payment.clone());
    payment
}
