pub mod app_config;
pub mod pix_details;
pub mod settlement_details;

pub use app_config::AppConfig;
pub use pix_details::PixInfo;
pub use settlement_details::SettlementInfo;
