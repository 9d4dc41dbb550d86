pub mod balance;
pub mod chargeback;
pub mod creator;
pub mod device_fingerprint;
pub mod enum_types;
pub mod fraud_flag;
pub mod payment;
pub mod payout;
pub mod subscriber;

pub use balance::*;
pub use chargeback::*;
pub use creator::*;
pub use device_fingerprint::*;
pub use enum_types::*;
pub use fraud_flag::*;
pub use payment::*;
pub use payout::*;
pub use subscriber::*;
