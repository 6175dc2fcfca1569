use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tracing::{debug, info};

use crate::deck::Slide;
use crate::entrance::entrance_cues;
use crate::events::TransitionFinished;
use crate::transition::{TransitionId, VisualState};

/// View layer the controller drives.
pub trait SlideRenderer {
    fn set_visual_state(&mut self, slide: &Slide, state: VisualState);

    /// `slide` has just been told to animate in; report `TransitionFinished(id)`
    /// once its animation settles. Renderers without a finish signal can ignore
    /// this and let the fallback timer commit.
    fn watch_finish(&mut self, _slide: &Slide, _id: TransitionId) {}

    /// `slide` became the active slide; play its content entrance.
    fn reveal_content(&mut self, _slide: &Slide) {}
}

/// Renderer used by the binary: logs every state and emulates the
/// transition-finished signal after the configured duration.
pub struct LogRenderer {
    finished_tx: Sender<TransitionFinished>,
    duration: Duration,
}

impl LogRenderer {
    pub fn new(finished_tx: Sender<TransitionFinished>, duration: Duration) -> Self {
        Self {
            finished_tx,
            duration,
        }
    }
}

impl SlideRenderer for LogRenderer {
    fn set_visual_state(&mut self, slide: &Slide, state: VisualState) {
        debug!(
            slide = slide.index(),
            offset = state.offset,
            opacity = state.opacity,
            z = state.z_order,
            animated = state.animated,
            "visual state"
        );
    }

    fn watch_finish(&mut self, slide: &Slide, id: TransitionId) {
        let tx = self.finished_tx.clone();
        let duration = self.duration;
        let slide = slide.index();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(TransitionFinished(id)).await.is_err() {
                debug!(slide, %id, "presenter gone before transition finished");
            }
        });
    }

    fn reveal_content(&mut self, slide: &Slide) {
        info!(index = slide.index(), title = slide.title(), "showing slide");
        for cue in entrance_cues(&slide.layout()) {
            debug!(
                kind = ?cue.kind,
                ordinal = cue.ordinal,
                delay_ms = cue.delay.as_millis() as u64,
                duration_ms = cue.duration.as_millis() as u64,
                "entrance cue"
            );
        }
    }
}
