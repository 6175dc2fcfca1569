use std::time::Duration;

use tracing::{debug, trace};

use crate::deck::Deck;
use crate::indicator::IndexObserver;
use crate::input::NavRequest;
use crate::render::SlideRenderer;
use crate::transition::{
    CompletionGuard, Direction, InFlight, TransitionId, TransitionPlan, TransitionTicket,
    VisualState,
};

/// Index and in-flight flag of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub transitioning: bool,
}

/// Owns the navigation state and sequences the two-slide transition for every
/// accepted request. At most one transition is in flight; requests made while
/// one runs are dropped.
pub struct SlideController<R> {
    deck: Deck,
    renderer: R,
    observers: Vec<Box<dyn IndexObserver + Send>>,
    current: usize,
    in_flight: Option<InFlight>,
    next_id: u64,
    fallback_after: Duration,
}

impl<R: SlideRenderer> SlideController<R> {
    /// `duration` is the visual transition length; the fallback commit fires
    /// `margin` after it if the renderer never reports back.
    pub fn new(deck: Deck, renderer: R, duration: Duration, margin: Duration) -> Self {
        Self {
            deck,
            renderer,
            observers: Vec::new(),
            current: 0,
            in_flight: None,
            next_id: 0,
            fallback_after: duration + margin,
        }
    }

    pub fn register_indicator(&mut self, observer: Box<dyn IndexObserver + Send>) {
        self.observers.push(observer);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_index: self.current,
            transitioning: self.is_transitioning(),
        }
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn in_flight(&self) -> Option<TransitionTicket> {
        self.in_flight.as_ref().map(|f| f.ticket)
    }

    /// Lays out the resting state before any navigation: slide 0 active,
    /// everything else hidden.
    pub fn present_initial(&mut self) {
        for slide in self.deck.slides() {
            let state = if slide.index() == self.current {
                VisualState::active()
            } else {
                VisualState::hidden()
            };
            self.renderer.set_visual_state(slide, state);
        }
        self.notify(self.current);
    }

    /// Plays the entrance cues of the current slide.
    pub fn reveal_current(&mut self) {
        if let Some(slide) = self.deck.get(self.current) {
            self.renderer.reveal_content(slide);
        }
    }

    pub fn previous(&mut self) -> Option<TransitionTicket> {
        self.go_to(self.current as isize - 1)
    }

    pub fn next(&mut self) -> Option<TransitionTicket> {
        self.go_to(self.current as isize + 1)
    }

    pub fn first(&mut self) -> Option<TransitionTicket> {
        self.go_to(0)
    }

    pub fn last(&mut self) -> Option<TransitionTicket> {
        self.go_to(self.deck.last_index() as isize)
    }

    pub fn go_to_index(&mut self, index: usize) -> Option<TransitionTicket> {
        self.go_to(isize::try_from(index).unwrap_or(isize::MAX))
    }

    pub fn apply(&mut self, request: NavRequest) -> Option<TransitionTicket> {
        match request {
            NavRequest::Previous => self.previous(),
            NavRequest::Next => self.next(),
            NavRequest::GoTo(index) => self.go_to_index(index),
            NavRequest::First => self.first(),
            NavRequest::Last => self.last(),
        }
    }

    /// Starts a transition toward `target` (wrapped into the deck). Returns
    /// `None` when a transition is already running or the target is the
    /// current slide; nothing is touched in that case.
    pub fn go_to(&mut self, target: isize) -> Option<TransitionTicket> {
        if let Some(flight) = &self.in_flight {
            trace!(
                requested = target,
                in_flight = %flight.ticket.id,
                "navigation dropped while transitioning"
            );
            return None;
        }
        let to = self.deck.wrap(target);
        if to == self.current {
            return None;
        }

        let from = self.current;
        let direction = Direction::between(from, to, self.deck.len());
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        let ticket = TransitionTicket {
            id,
            from,
            to,
            direction,
            fallback_after: self.fallback_after,
        };
        self.in_flight = Some(InFlight {
            ticket,
            guard: CompletionGuard::default(),
        });
        debug!(%id, from, to, ?direction, "transition started");

        let plan = TransitionPlan::for_direction(direction);
        if let (Some(outgoing), Some(incoming)) = (self.deck.get(from), self.deck.get(to)) {
            self.renderer.set_visual_state(incoming, plan.stage_incoming);
            self.renderer.set_visual_state(outgoing, plan.animate_outgoing);
            self.renderer.set_visual_state(incoming, plan.animate_incoming);
            self.renderer.watch_finish(incoming, id);
        }
        Some(ticket)
    }

    /// Commits transition `id`. Safe to call from both the finish signal and
    /// the fallback timer: only the first call for the in-flight id commits,
    /// returning the new index.
    pub fn complete(&mut self, id: TransitionId) -> Option<usize> {
        let flight = self.in_flight.as_mut()?;
        if flight.ticket.id != id {
            trace!(%id, in_flight = %flight.ticket.id, "stale completion ignored");
            return None;
        }
        if !flight.guard.fire() {
            return None;
        }
        let TransitionTicket { from, to, .. } = flight.ticket;
        self.in_flight = None;

        if let Some(outgoing) = self.deck.get(from) {
            self.renderer.set_visual_state(outgoing, VisualState::hidden());
        }
        if let Some(incoming) = self.deck.get(to) {
            self.renderer.set_visual_state(incoming, VisualState::active());
            self.renderer.reveal_content(incoming);
        }
        self.current = to;
        debug!(%id, index = to, "transition committed");
        self.notify(to);
        Some(to)
    }

    fn notify(&mut self, index: usize) {
        for observer in &mut self.observers {
            observer.on_index_changed(index);
        }
    }
}
