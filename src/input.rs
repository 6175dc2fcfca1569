use std::str::FromStr;

use thiserror::Error;

use crate::config::SwipeOptions;

/// A navigation request after input normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Previous,
    Next,
    GoTo(usize),
    First,
    Last,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty key name")]
    EmptyKey,
}

/// Keys the presentation reacts to. Anything else parses as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other,
}

impl Key {
    pub fn request(self) -> Option<NavRequest> {
        match self {
            Self::ArrowRight => Some(NavRequest::Next),
            Self::ArrowLeft => Some(NavRequest::Previous),
            Self::Home => Some(NavRequest::First),
            Self::End => Some(NavRequest::Last),
            Self::Other => None,
        }
    }
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "arrowright" | "right" => Ok(Self::ArrowRight),
            "arrowleft" | "left" => Ok(Self::ArrowLeft),
            "home" => Ok(Self::Home),
            "end" => Ok(Self::End),
            "" => Err(InputError::EmptyKey),
            _ => Ok(Self::Other),
        }
    }
}

/// Maps a click on dot `index` to a jump.
pub fn dot_click(index: usize) -> NavRequest {
    NavRequest::GoTo(index)
}

#[derive(Debug, Clone, Copy)]
struct TouchStart {
    x: f32,
    y: f32,
    moved: bool,
}

/// Turns a single-finger touch gesture into at most one navigation request.
///
/// A gesture counts only once it has moved past the slop on either axis, and
/// fires on release when the horizontal travel beats both the threshold and
/// the vertical travel. Swiping left goes forward.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold_px: f32,
    slop_px: f32,
    start: Option<TouchStart>,
}

impl SwipeDetector {
    pub fn new(options: &SwipeOptions) -> Self {
        Self {
            threshold_px: options.threshold_px,
            slop_px: options.slop_px,
            start: None,
        }
    }

    pub fn touch_start(&mut self, touch_points: usize, x: f32, y: f32) {
        if touch_points != 1 {
            return;
        }
        self.start = Some(TouchStart { x, y, moved: false });
    }

    pub fn touch_move(&mut self, touch_points: usize, x: f32, y: f32) {
        if touch_points != 1 {
            return;
        }
        if let Some(start) = self.start.as_mut() {
            if !start.moved
                && ((x - start.x).abs() > self.slop_px || (y - start.y).abs() > self.slop_px)
            {
                start.moved = true;
            }
        }
    }

    /// Ends the gesture. `end` is the lifted touch point, if the platform reports one.
    pub fn touch_end(&mut self, end: Option<(f32, f32)>) -> Option<NavRequest> {
        let start = self.start.take()?;
        if !start.moved {
            return None;
        }
        let (end_x, end_y) = end.unwrap_or((start.x, start.y));
        let dx = end_x - start.x;
        let dy = (end_y - start.y).abs();
        if dx.abs() > self.threshold_px && dx.abs() > dy {
            if dx < 0.0 {
                Some(NavRequest::Next)
            } else {
                Some(NavRequest::Previous)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> SwipeDetector {
        SwipeDetector::new(&SwipeOptions::default())
    }

    #[test]
    fn key_names_map_to_requests() {
        assert_eq!("ArrowRight".parse::<Key>().unwrap().request(), Some(NavRequest::Next));
        assert_eq!("left".parse::<Key>().unwrap().request(), Some(NavRequest::Previous));
        assert_eq!("HOME".parse::<Key>().unwrap().request(), Some(NavRequest::First));
        assert_eq!("End".parse::<Key>().unwrap().request(), Some(NavRequest::Last));
        assert_eq!("Escape".parse::<Key>().unwrap().request(), None);
        assert!(matches!("  ".parse::<Key>(), Err(InputError::EmptyKey)));
    }

    #[test]
    fn left_swipe_fires_next_once_per_gesture() {
        let mut swipe = detector();
        swipe.touch_start(1, 200.0, 100.0);
        let mut fired = Vec::new();
        for step in 1..=6 {
            swipe.touch_move(1, 200.0 - 10.0 * step as f32, 101.0);
        }
        fired.extend(swipe.touch_end(Some((140.0, 102.0))));
        fired.extend(swipe.touch_end(Some((140.0, 102.0))));
        assert_eq!(fired, vec![NavRequest::Next]);
    }

    #[test]
    fn right_swipe_goes_back() {
        let mut swipe = detector();
        swipe.touch_start(1, 100.0, 100.0);
        swipe.touch_move(1, 130.0, 100.0);
        assert_eq!(swipe.touch_end(Some((160.0, 100.0))), Some(NavRequest::Previous));
    }

    #[test]
    fn short_or_vertical_gestures_are_ignored() {
        let mut swipe = detector();
        swipe.touch_start(1, 100.0, 100.0);
        swipe.touch_move(1, 80.0, 100.0);
        assert_eq!(swipe.touch_end(Some((70.0, 100.0))), None);

        swipe.touch_start(1, 100.0, 100.0);
        swipe.touch_move(1, 100.0, 160.0);
        assert_eq!(swipe.touch_end(Some((40.0, 200.0))), None);
    }

    #[test]
    fn unmoved_or_multi_touch_gestures_are_ignored() {
        let mut swipe = detector();
        swipe.touch_start(1, 100.0, 100.0);
        assert_eq!(swipe.touch_end(Some((20.0, 100.0))), None);

        swipe.touch_start(2, 100.0, 100.0);
        swipe.touch_move(2, 20.0, 100.0);
        assert_eq!(swipe.touch_end(Some((20.0, 100.0))), None);
    }

    #[test]
    fn missing_end_point_reuses_start() {
        let mut swipe = detector();
        swipe.touch_start(1, 100.0, 100.0);
        swipe.touch_move(1, 40.0, 100.0);
        assert_eq!(swipe.touch_end(None), None);
    }
}
