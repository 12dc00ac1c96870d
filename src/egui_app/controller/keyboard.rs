//! Keyboard sensor: lifts, retargets, and drops pages without a pointer.
//!
//! Keyboard gestures never reflow the deck mid-session; the insert marker is
//! the only cue of the prospective destination until the drop commits.

use tracing::debug;

use super::DeckController;
use crate::egui_app::state::StatusTone;
use crate::egui_app::ui::input::InputSnapshot;
use crate::reorder::Modality;

/// Keyboard command derived from one frame of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardIntent {
    FocusPrev,
    FocusNext,
    Lift,
    Drop,
    Cancel,
    TargetPrev,
    TargetNext,
}

impl KeyboardIntent {
    /// Map raw key state onto a command for the current machine state.
    ///
    /// Arrows mean "move focus" while idle and "step the target" while a
    /// keyboard session is active. Escape cancels any session, including a
    /// pointer-driven one.
    pub fn from_input(snapshot: &InputSnapshot, keyboard_session: bool) -> Option<Self> {
        if snapshot.escape {
            return Some(Self::Cancel);
        }
        let prev = snapshot.arrow_left || snapshot.arrow_up;
        let next = snapshot.arrow_right || snapshot.arrow_down;
        if keyboard_session {
            if snapshot.space || snapshot.enter {
                return Some(Self::Drop);
            }
            if prev {
                return Some(Self::TargetPrev);
            }
            if next {
                return Some(Self::TargetNext);
            }
            return None;
        }
        if snapshot.space || snapshot.enter {
            return Some(Self::Lift);
        }
        if prev {
            return Some(Self::FocusPrev);
        }
        if next {
            return Some(Self::FocusNext);
        }
        None
    }
}

impl DeckController {
    /// True while the active session was started from the keyboard.
    pub fn keyboard_session_active(&self) -> bool {
        self.machine
            .session()
            .is_some_and(|session| session.modality() == Modality::Keyboard)
    }

    /// Apply one keyboard command.
    pub fn handle_keyboard(&mut self, intent: KeyboardIntent) {
        match intent {
            KeyboardIntent::FocusPrev => self.focus_step(-1),
            KeyboardIntent::FocusNext => self.focus_step(1),
            KeyboardIntent::Lift => self.lift_focused_page(),
            KeyboardIntent::Drop => {
                if self.keyboard_session_active() {
                    self.finish_active_drag();
                }
            }
            KeyboardIntent::Cancel => self.cancel_active_drag(),
            KeyboardIntent::TargetPrev => self.step_keyboard_target(-1),
            KeyboardIntent::TargetNext => self.step_keyboard_target(1),
        }
    }

    fn focus_step(&mut self, delta: isize) {
        if self.machine.is_dragging() {
            return;
        }
        let deck = self.machine.deck();
        if deck.is_empty() {
            return;
        }
        let next = match self.ui.focused.as_ref().and_then(|id| deck.index_of(id)) {
            Some(index) => step_index(index, delta, deck.len(), false),
            None if delta < 0 => deck.len() - 1,
            None => 0,
        };
        if let Some(id) = deck.get(next) {
            self.ui.focused = Some(id.clone());
        }
    }

    /// Start a keyboard session on the focused page (or the first page).
    pub fn lift_focused_page(&mut self) {
        if self.machine.is_dragging() {
            return;
        }
        let Some(page) = self
            .ui
            .focused
            .clone()
            .or_else(|| self.machine.deck().get(0).cloned())
        else {
            return;
        };
        debug!("Keyboard lift on page {page}");
        self.machine.start(page.clone(), Modality::Keyboard);
        self.ui.focused = Some(page.clone());
        self.set_status(
            format!("Picked up page {page}; arrows choose a spot, Space drops, Esc cancels"),
            StatusTone::Info,
        );
    }

    /// Step the keyboard target one page through the deck.
    fn step_keyboard_target(&mut self, delta: isize) {
        if !self.keyboard_session_active() {
            return;
        }
        let deck = self.machine.deck();
        let Some(session) = self.machine.session() else {
            return;
        };
        let anchor = session
            .target()
            .unwrap_or_else(|| session.active());
        let Some(anchor) = deck.index_of(anchor) else {
            return;
        };
        let next = step_index(
            anchor,
            delta,
            deck.len(),
            self.controls.wrap_keyboard_targeting,
        );
        let target = deck.get(next).cloned();
        self.machine.over(target);
    }
}

fn step_index(index: usize, delta: isize, len: usize, wrap: bool) -> usize {
    debug_assert!(len > 0);
    let last = len as isize - 1;
    let stepped = index as isize + delta;
    let stepped = if wrap {
        stepped.rem_euclid(len as isize)
    } else {
        stepped.clamp(0, last)
    };
    stepped as usize
}
