use std::fmt;
use std::time::Duration;

/// Which way the deck moves for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Forward when moving up the deck, or wrapping from the last slide to the first.
    /// Only the indices count: wrapping backward from the first slide to the
    /// last is a move up the deck, so it animates forward.
    pub fn between(from: usize, to: usize, len: usize) -> Self {
        if to > from || (from + 1 == len && to == 0) {
            Self::Next
        } else {
            Self::Prev
        }
    }

    /// Offset the outgoing slide animates toward.
    pub fn exit_offset(self) -> f32 {
        match self {
            Self::Next => -1.0,
            Self::Prev => 1.0,
        }
    }

    /// Offset the incoming slide starts from.
    pub fn entry_offset(self) -> f32 {
        -self.exit_offset()
    }
}

/// Position, opacity and stacking of one slide, as handed to the renderer.
///
/// `offset` is a fraction of the slide width; `animated` tells the renderer
/// whether to tween into this state or jump to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub offset: f32,
    pub opacity: f32,
    pub z_order: i32,
    pub animated: bool,
}

impl VisualState {
    const RESTING_Z: i32 = 0;
    const INCOMING_Z: i32 = 3;

    /// The slide on screen once no transition is running.
    pub const fn active() -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
            z_order: Self::RESTING_Z,
            animated: false,
        }
    }

    /// Every slide that is not the active one.
    pub const fn hidden() -> Self {
        Self {
            offset: 1.0,
            opacity: 0.0,
            z_order: Self::RESTING_Z,
            animated: false,
        }
    }

    fn staged(direction: Direction) -> Self {
        Self {
            offset: direction.entry_offset(),
            opacity: 0.0,
            z_order: Self::INCOMING_Z,
            animated: false,
        }
    }

    fn exiting(direction: Direction) -> Self {
        Self {
            offset: direction.exit_offset(),
            opacity: 0.0,
            z_order: Self::RESTING_Z,
            animated: true,
        }
    }

    fn entering() -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
            z_order: Self::INCOMING_Z,
            animated: true,
        }
    }
}

/// Identifies one started transition; finish signals carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub u64);

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fires once. Both the renderer's finish signal and the fallback timer go
/// through it; whichever arrives second sees `false`.
#[derive(Debug, Default)]
pub struct CompletionGuard {
    fired: bool,
}

impl CompletionGuard {
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Renderer instructions for one transition, in the order they must be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub stage_incoming: VisualState,
    pub animate_outgoing: VisualState,
    pub animate_incoming: VisualState,
}

impl TransitionPlan {
    pub fn for_direction(direction: Direction) -> Self {
        Self {
            stage_incoming: VisualState::staged(direction),
            animate_outgoing: VisualState::exiting(direction),
            animate_incoming: VisualState::entering(),
        }
    }
}

/// What the caller of `go_to` gets back when a transition actually starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    pub id: TransitionId,
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Commit anyway once this much time has passed without a finish signal.
    pub fallback_after: Duration,
}

/// The single transition a controller may have in flight.
#[derive(Debug)]
pub(crate) struct InFlight {
    pub(crate) ticket: TransitionTicket,
    pub(crate) guard: CompletionGuard,
}
