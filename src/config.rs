use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::deck::{ContentLayout, Deck};
use crate::error::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SwipeOptions {
    /// Horizontal travel a swipe must exceed to navigate, in pixels.
    pub threshold_px: f32,
    /// Movement on either axis below this is treated as a tap, in pixels.
    pub slop_px: f32,
}

impl SwipeOptions {
    const fn default_threshold_px() -> f32 {
        40.0
    }

    const fn default_slop_px() -> f32 {
        5.0
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.slop_px >= 0.0, "swipe.slop-px must not be negative");
        ensure!(
            self.threshold_px > self.slop_px,
            "swipe.threshold-px must be greater than swipe.slop-px"
        );
        Ok(())
    }
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            threshold_px: Self::default_threshold_px(),
            slop_px: Self::default_slop_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AutoplayOptions {
    /// Time between automatic advances.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl AutoplayOptions {
    const fn default_interval() -> Duration {
        Duration::from_secs(8)
    }
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            interval: Self::default_interval(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SlideEntry {
    pub title: String,
    #[serde(default)]
    pub text_blocks: usize,
    #[serde(default)]
    pub images: usize,
    #[serde(default)]
    pub info_cards: usize,
    #[serde(default)]
    pub note_boxes: usize,
}

impl SlideEntry {
    fn layout(&self) -> ContentLayout {
        ContentLayout {
            text_blocks: self.text_blocks,
            images: self.images,
            info_cards: self.info_cards,
            note_boxes: self.note_boxes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Length of the slide-and-fade animation between two slides.
    #[serde(with = "humantime_serde")]
    pub transition_duration: Duration,
    /// Extra wait after the animation before the transition commits without a finish signal.
    #[serde(with = "humantime_serde")]
    pub completion_margin: Duration,
    /// Delay before the first slide's content entrance plays.
    #[serde(with = "humantime_serde")]
    pub initial_reveal_delay: Duration,
    /// Touch gesture recognition.
    pub swipe: SwipeOptions,
    /// Automatic advancing; off when absent.
    pub autoplay: Option<AutoplayOptions>,
    /// Slides in presentation order.
    pub slides: Vec<SlideEntry>,
}

const MAX_TIMING: Duration = Duration::from_secs(60 * 60);
const MAX_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.transition_duration.is_zero(),
            "transition-duration must be greater than zero"
        );
        ensure!(
            !self.completion_margin.is_zero(),
            "completion-margin must be greater than zero"
        );
        ensure!(
            self.transition_duration <= MAX_TIMING,
            "transition-duration must be at most 1h"
        );
        ensure!(
            self.completion_margin <= MAX_TIMING,
            "completion-margin must be at most 1h"
        );
        ensure!(
            self.initial_reveal_delay <= MAX_TIMING,
            "initial-reveal-delay must be at most 1h"
        );
        self.swipe.validate()?;
        if let Some(autoplay) = &self.autoplay {
            ensure!(
                !autoplay.interval.is_zero(),
                "autoplay.interval must be greater than zero"
            );
            ensure!(
                autoplay.interval <= MAX_AUTOPLAY_INTERVAL,
                "autoplay.interval must be at most 24h"
            );
        }
        Ok(self)
    }

    pub fn deck(&self) -> Result<Deck> {
        Deck::new(self.slides.iter().map(|s| (s.title.clone(), s.layout())))
            .context("slides must list at least one slide")
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            transition_duration: Duration::from_millis(600),
            completion_margin: Duration::from_millis(90),
            initial_reveal_delay: Duration::from_millis(300),
            swipe: SwipeOptions::default(),
            autoplay: None,
            slides: Vec::new(),
        }
    }
}
