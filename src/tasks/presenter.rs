use std::time::Duration;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace};

use crate::controller::SlideController;
use crate::events::{InputSource, Navigate, TransitionFinished};
use crate::render::SlideRenderer;
use crate::transition::TransitionId;

/// `now + delay`, saturating far in the future instead of overflowing.
pub(crate) fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay)
        .unwrap_or_else(|| now + Duration::from_secs(30 * 365 * 24 * 60 * 60))
}

/// Owns the controller and feeds it every input.
///
/// Rules:
/// - Navigation requests arriving mid-transition are dropped by the controller.
/// - A transition commits on the renderer's finish signal or on its fallback
///   deadline, whichever comes first; the other is ignored.
/// - The first user request cancels `autoplay`; autoplay requests still
///   queued behind it are discarded.
/// - Slide 0's content is revealed `initial_reveal_delay` after startup.
#[instrument(skip_all, fields(slides = controller.len()))]
pub async fn run<R: SlideRenderer + Send>(
    mut controller: SlideController<R>,
    mut nav_rx: Receiver<Navigate>,
    mut finished_rx: Receiver<TransitionFinished>,
    autoplay: CancellationToken,
    initial_reveal_delay: Duration,
    cancel: CancellationToken,
) -> Result<()> {
    controller.present_initial();
    let mut reveal_at = Some(deadline_after(initial_reveal_delay));
    let mut fallback: Option<(TransitionId, Instant)> = None;
    let mut inputs_open = true;
    let mut renderer_open = true;

    loop {
        let fallback_deadline = fallback.map_or_else(Instant::now, |(_, at)| at);
        let reveal_deadline = reveal_at.unwrap_or_else(Instant::now);

        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting presenter task");
                break;
            }

            maybe_nav = nav_rx.recv(), if inputs_open => {
                let Some(Navigate { request, source }) = maybe_nav else {
                    debug!("all input sources closed");
                    inputs_open = false;
                    continue;
                };
                match source {
                    InputSource::User if !autoplay.is_cancelled() => {
                        info!("user input; autoplay stopped");
                        autoplay.cancel();
                    }
                    InputSource::Autoplay if autoplay.is_cancelled() => continue,
                    _ => {}
                }
                match controller.apply(request) {
                    Some(ticket) => {
                        reveal_at = None;
                        fallback = Some((ticket.id, deadline_after(ticket.fallback_after)));
                    }
                    None => trace!(?request, ?source, "navigation ignored"),
                }
            }

            maybe_done = finished_rx.recv(), if renderer_open => {
                let Some(TransitionFinished(id)) = maybe_done else {
                    debug!("renderer finish channel closed; relying on fallback timer");
                    renderer_open = false;
                    continue;
                };
                if controller.complete(id).is_some() {
                    fallback = None;
                }
            }

            _ = sleep_until(fallback_deadline), if fallback.is_some() => {
                if let Some((id, _)) = fallback.take() {
                    if let Some(index) = controller.complete(id) {
                        debug!(%id, index, "no finish signal; committed by fallback timer");
                    }
                }
            }

            _ = sleep_until(reveal_deadline), if reveal_at.is_some() => {
                reveal_at = None;
                controller.reveal_current();
            }
        }
    }

    Ok(())
}
