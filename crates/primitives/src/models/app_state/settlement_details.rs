use eyre::Report;
use std::env;

/// Payout fees and limits, minor currency units throughout.
#[derive(Debug, Clone)]
pub struct SettlementInfo {
    pub min_payout_amount: i64,
    pub payout_fee: i64,
    pub min_net_amount: i64,
    pub velocity_window_minutes: i64,
    pub velocity_payout_limit: i64,
    pub monthly_payout_limit: i64,
    pub monthly_payout_limit_pro: i64,
    pub chargeback_block_threshold: i32,
}

impl SettlementInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            min_payout_amount: env_or("MIN_PAYOUT_AMOUNT", "2000")?,
            payout_fee: env_or("PAYOUT_FEE", "500")?,
            min_net_amount: env_or("MIN_NET_AMOUNT", "100")?,
            velocity_window_minutes: env_or("PAYOUT_VELOCITY_WINDOW_MINUTES", "60")?,
            velocity_payout_limit: env_or("PAYOUT_VELOCITY_LIMIT", "3")?,
            monthly_payout_limit: env_or("MONTHLY_PAYOUT_LIMIT", "4")?,
            monthly_payout_limit_pro: env_or("MONTHLY_PAYOUT_LIMIT_PRO", "8")?,
            chargeback_block_threshold: env_or("CHARGEBACK_BLOCK_THRESHOLD", "3")?,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, Report>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(env::var(key).unwrap_or_else(|_| default.into()).parse()?)
}
