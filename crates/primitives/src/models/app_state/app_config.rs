use crate::models::app_state::pix_details::PixInfo;
use crate::models::app_state::settlement_details::SettlementInfo;
use eyre::Report;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pix_details: PixInfo,

    pub settlement: SettlementInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            pix_details: PixInfo::new()?,

            settlement: SettlementInfo::new()?,
        })
    }
}
