use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub mod balance_repository;
pub mod chargeback_repository;
pub mod creator_repository;
pub mod device_fingerprint_repository;
pub mod fraud_flag_repository;
pub mod payment_repository;
pub mod payout_repository;
pub mod subscriber_repository;

pub use balance_repository::{BalanceRepository, PgBalanceRepository};
pub use chargeback_repository::{ChargebackRepository, PgChargebackRepository};
pub use creator_repository::{CreatorRepository, PgCreatorRepository};
pub use device_fingerprint_repository::{DeviceFingerprintRepository, PgDeviceFingerprintRepository};
pub use fraud_flag_repository::{FraudFlagRepository, PgFraudFlagRepository};
pub use payment_repository::{PaymentRepository, PgPaymentRepository};
pub use payout_repository::{PayoutRepository, PgPayoutRepository};
pub use subscriber_repository::{PgSubscriberRepository, SubscriberRepository};
