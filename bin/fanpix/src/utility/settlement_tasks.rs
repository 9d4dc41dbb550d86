use chrono::Utc;
use fanpix_core::AppState;
use fanpix_primitives::error::ApiError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

const PENALTY_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);
const STALE_PAYOUT_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);
const STALE_PAYOUT_AGE_HOURS: i64 = 24;

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    // Settle outstanding chargeback penalties (hourly)
    tokio::spawn(async move {
        info!("Starting hourly chargeback penalty settlement task");
        settle_penalties(state_clone).await;
    });

    // Report payouts stuck in processing (daily)
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily stale payout report task");
        report_stale_payouts(state_clone).await;
    });

    info!("Background settlement tasks spawned");
}

/// Penalties that could not be taken at `lost`-time wait on the creator
/// record until the balance covers them. All-or-nothing per creator.
async fn settle_penalties(state: Arc<AppState>) {
    let mut interval = interval(PENALTY_SWEEP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let creators = match state.stores.creators.with_outstanding_penalty() {
            Ok(creators) => creators,
            Err(e) => {
                error!("Penalty sweep: {}", e);
                continue;
            }
        };

        if creators.is_empty() {
            debug!("No outstanding chargeback penalties");
            continue;
        }

        for creator in creators {
            let owed = creator.chargeback_penalty_balance;

            match state.stores.balances.debit(creator.id, owed) {
                Ok(()) => {
                    if let Err(e) = state.stores.creators.reduce_penalty_balance(creator.id, owed)
                    {
                        error!(
                            creator_id = %creator.id,
                            "Penalty sweep bookkeeping failed: {}", e
                        );
                    } else {
                        info!(
                            creator_id = %creator.id,
                            owed,
                            "Outstanding chargeback penalty settled"
                        );
                    }
                }
                Err(ApiError::InsufficientFunds) => {
                    debug!(creator_id = %creator.id, owed, "Balance still short of penalty");
                }
                Err(e) => error!(creator_id = %creator.id, "Penalty sweep debit failed: {}", e),
            }
        }
    }
}

async fn report_stale_payouts(state: Arc<AppState>) {
    let mut interval = interval(STALE_PAYOUT_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let cutoff = Utc::now() - chrono::Duration::hours(STALE_PAYOUT_AGE_HOURS);

        match state.stores.payouts.stale_processing(cutoff) {
            Ok(stale) if stale.is_empty() => debug!("No stale processing payouts"),
            Ok(stale) => {
                for payout in stale {
                    warn!(
                        payout_id = %payout.id,
                        creator_id = %payout.creator_id,
                        amount = payout.amount,
                        "Payout stuck in processing, needs reconciliation"
                    );
                }
            }
            Err(e) => error!("Stale payout report failed: {}", e),
        }
    }
}
