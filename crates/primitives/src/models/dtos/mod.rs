pub mod chargeback_dto;
pub mod device_dto;
pub mod fraud_dto;
pub mod payout_dto;
pub mod pix_dto;
pub mod velocity_dto;

pub use chargeback_dto::*;
pub use device_dto::*;
pub use fraud_dto::*;
pub use payout_dto::*;
pub use pix_dto::*;
pub use velocity_dto::*;
