use crate::input::NavRequest;
use crate::transition::TransitionId;

/// Where a navigation request came from. User input stops autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    User,
    Autoplay,
}

/// Input -> Presenter
#[derive(Debug, Clone, Copy)]
pub struct Navigate {
    pub request: NavRequest,
    pub source: InputSource,
}

impl Navigate {
    pub fn user(request: NavRequest) -> Self {
        Self {
            request,
            source: InputSource::User,
        }
    }

    pub fn autoplay(request: NavRequest) -> Self {
        Self {
            request,
            source: InputSource::Autoplay,
        }
    }
}

/// Renderer -> Presenter, once the incoming slide stopped animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFinished(pub TransitionId);
