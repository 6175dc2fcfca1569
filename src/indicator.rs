use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, trace};

/// Receives the index of every committed transition.
pub trait IndexObserver {
    fn on_index_changed(&mut self, index: usize);
}

impl<T: IndexObserver + ?Sized> IndexObserver for Arc<Mutex<T>> {
    fn on_index_changed(&mut self, index: usize) {
        match self.lock() {
            Ok(mut inner) => inner.on_index_changed(index),
            Err(poisoned) => poisoned.into_inner().on_index_changed(index),
        }
    }
}

/// Publishes the index to async consumers.
impl IndexObserver for watch::Sender<usize> {
    fn on_index_changed(&mut self, index: usize) {
        self.send_replace(index);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// One dot per slide; the dot of the current slide is active.
#[derive(Debug, Clone)]
pub struct DotsIndicator {
    dots: Vec<Dot>,
}

impl DotsIndicator {
    pub fn new(len: usize) -> Self {
        let dots = (0..len)
            .map(|index| Dot {
                index,
                label: format!("Go to slide {}", index + 1),
                active: index == 0,
            })
            .collect();
        Self { dots }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn active(&self) -> Option<usize> {
        self.dots.iter().position(|d| d.active)
    }
}

impl IndexObserver for DotsIndicator {
    fn on_index_changed(&mut self, index: usize) {
        for dot in &mut self.dots {
            dot.active = dot.index == index;
        }
        trace!(active = index, "dots updated");
    }
}

/// Fills proportionally to how far into the deck the current slide is.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    len: usize,
    percent: f32,
}

impl ProgressBar {
    pub fn new(len: usize) -> Self {
        let mut bar = Self { len, percent: 0.0 };
        bar.on_index_changed(0);
        bar
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

impl IndexObserver for ProgressBar {
    fn on_index_changed(&mut self, index: usize) {
        self.percent = (index + 1) as f32 / self.len.max(1) as f32 * 100.0;
        debug!(index, percent = self.percent, "progress updated");
    }
}
