use std::time::Duration;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio::time::{MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::events::Navigate;
use crate::input::NavRequest;
use crate::tasks::presenter::deadline_after;

/// Requests the next slide every `interval` until `cancel` fires. The presenter
/// cancels it on the first user interaction.
pub async fn run(
    to_presenter: Sender<Navigate>,
    interval: Duration,
    cancel: CancellationToken,
) -> Result<()> {
    let mut ticker = interval_at(deadline_after(interval), interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_ms = interval.as_millis() as u64, "autoplay started");

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("autoplay stopped");
                break;
            }
            _ = ticker.tick() => {
                if to_presenter.send(Navigate::autoplay(NavRequest::Next)).await.is_err() {
                    warn!("presenter channel closed");
                    break;
                }
            }
        }
    }
    Ok(())
}
