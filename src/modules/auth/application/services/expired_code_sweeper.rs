use chrono::Utc;
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::auth::application::ports::outgoing::VerificationCodeRepository;

pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;

/// Periodically deletes verification codes past their expiry.
pub struct ExpiredCodeSweeper {
    codes: Arc<dyn VerificationCodeRepository>,
    interval: Duration,
}

impl ExpiredCodeSweeper {
    pub fn new(codes: Arc<dyn VerificationCodeRepository>, interval: Duration) -> Self {
        Self { codes, interval }
    }

    /// Reads `VERIFICATION_SWEEP_SECONDS`, falling back to five minutes.
    pub fn interval_from_env() -> Duration {
        let seconds = std::env::var("VERIFICATION_SWEEP_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECONDS);
        Duration::from_secs(seconds)
    }

    /// One pass. Returns how many rows were removed.
    pub async fn sweep_once(&self) -> u64 {
        match self.codes.delete_expired(Utc::now()).await {
            Ok(0) => {
                debug!("No expired verification codes");
                0
            }
            Ok(deleted) => {
                info!(deleted, "Purged expired verification codes");
                deleted
            }
            Err(e) => {
                error!(error = %e, "Verification code sweep failed");
                0
            }
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                self.sweep_once().await;
            }
        })
    }
}
