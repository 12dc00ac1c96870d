use tracing::{debug, info, warn};

use super::deck::{Deck, PageId, ReorderError};
use super::resolver::{InsertPosition, resolve_insert_position};

/// Input mechanism driving the current gesture.
///
/// The modality never changes the resolver formula; it controls when the
/// indicator is re-evaluated and whether the deck reflows live mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    Pointer,
    Keyboard,
}

/// Ephemeral state for one drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    active: PageId,
    target: Option<PageId>,
    modality: Modality,
}

impl DragSession {
    /// The page being dragged.
    pub fn active(&self) -> &PageId {
        &self.active
    }

    /// The page currently under the gesture, if any.
    pub fn target(&self) -> Option<&PageId> {
        self.target.as_ref()
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }
}

/// Event emitted by a drag engine. Exactly one terminal event (`End` or
/// `Cancel`) follows each `Start`; the machine tolerates anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEvent {
    Start { id: PageId, modality: Modality },
    Over(Option<PageId>),
    End,
    Cancel,
}

/// What happened when a session terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The deck was reordered; indices are canonical positions at commit time.
    Committed { from: usize, to: usize },
    /// The session ended without touching the deck.
    NoChange,
}

/// Tracks the lifecycle of one drag gesture and owns the only write path
/// into the [`Deck`].
///
/// Idle until a `Start` arrives; `Over` retargets while dragging; `End`
/// commits at most one move; `Cancel` rolls back unconditionally.
#[derive(Debug, Clone, Default)]
pub struct ReorderMachine {
    deck: Deck,
    session: Option<DragSession>,
}

impl ReorderMachine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            session: None,
        }
    }

    /// The canonical deck. Mid-drag this is always the pre-drag order.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current drag session, if one is active.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one engine event through the machine.
    pub fn handle(&mut self, event: DragEvent) -> Result<DropOutcome, ReorderError> {
        match event {
            DragEvent::Start { id, modality } => {
                self.start(id, modality);
                Ok(DropOutcome::NoChange)
            }
            DragEvent::Over(target) => {
                self.over(target);
                Ok(DropOutcome::NoChange)
            }
            DragEvent::End => self.end(),
            DragEvent::Cancel => {
                self.cancel();
                Ok(DropOutcome::NoChange)
            }
        }
    }

    /// Begin a session for `id`. A `Start` received while already dragging
    /// performs an implicit cancel first, so no in-flight session can ever
    /// commit twice.
    pub fn start(&mut self, id: PageId, modality: Modality) {
        if self.session.is_some() {
            info!("Drag started while dragging; cancelling the previous session");
            self.cancel();
        }
        if self.deck.index_of(&id).is_none() {
            warn!("Ignoring drag start for unknown page {id}");
            return;
        }
        debug!("Drag start: page={id} modality={modality:?}");
        self.session = Some(DragSession {
            active: id,
            target: None,
            modality,
        });
    }

    /// Update the hover target. May fire repeatedly; ignored while idle.
    pub fn over(&mut self, target: Option<PageId>) {
        let Some(session) = self.session.as_mut() else {
            debug!("Ignoring hover update while idle");
            return;
        };
        if session.target != target {
            debug!("Drag over: page={} target={target:?}", session.active);
            session.target = target;
        }
    }

    /// Terminate the session, committing a single move when a valid target
    /// is set. Ending over nothing actionable is a successful no-change
    /// session, not an error.
    pub fn end(&mut self) -> Result<DropOutcome, ReorderError> {
        let Some(session) = self.session.take() else {
            debug!("Ignoring drag end while idle");
            return Ok(DropOutcome::NoChange);
        };
        let Some(target) = session.target else {
            debug!("Drag end with no target; leaving the deck unchanged");
            return Ok(DropOutcome::NoChange);
        };
        let (Some(from), Some(to)) = (
            self.deck.index_of(&session.active),
            self.deck.index_of(&target),
        ) else {
            warn!(
                "Drag end with stale pages (active={} target={target}); leaving the deck unchanged",
                session.active
            );
            return Ok(DropOutcome::NoChange);
        };
        if from == to {
            return Ok(DropOutcome::NoChange);
        }
        self.deck.move_page(from, to)?;
        info!("Moved page {} from {from} to {to}", session.active);
        Ok(DropOutcome::Committed { from, to })
    }

    /// Discard the session without touching the deck.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("Drag cancelled: page={}", session.active);
        }
    }

    /// Insert indicator for the current hover target, re-derived from the
    /// canonical deck on every call.
    pub fn insert_position(&self) -> Option<(PageId, InsertPosition)> {
        let session = self.session.as_ref()?;
        let target = session.target.clone()?;
        let active_index = self.deck.index_of(&session.active)?;
        let target_index = self.deck.index_of(&target)?;
        resolve_insert_position(active_index, target_index).map(|position| (target, position))
    }

    /// Order the deck should render in right now. Pointer gestures reflow
    /// live toward the prospective destination; keyboard gestures keep the
    /// canonical order until commit, with the indicator as the only cue.
    pub fn preview_order(&self) -> Vec<PageId> {
        if let Some(session) = self.session.as_ref()
            && session.modality == Modality::Pointer
            && let Some(target) = session.target.as_ref()
            && let (Some(from), Some(to)) = (
                self.deck.index_of(&session.active),
                self.deck.index_of(target),
            )
            && let Ok(order) = self.deck.moved(from, to)
        {
            return order;
        }
        self.deck.ids().to_vec()
    }
}
