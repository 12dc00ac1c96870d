//! Shared state types for the egui UI.

use egui::{Color32, Pos2};

use crate::egui_app::ui::style;
use crate::reorder::{InsertPosition, PageId};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub drag: DragUiState,
    /// Page that currently owns keyboard focus.
    pub focused: Option<PageId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            drag: DragUiState::default(),
            focused: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before any gesture has run.
    pub fn idle() -> Self {
        Self {
            text: "Drag a page, or focus one and press Space to sort with the keyboard".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
        }
    }
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

/// Screen-space state for the floating drag preview.
///
/// Pointer gestures update the anchor every frame from the cursor; keyboard
/// gestures anchor it to the targeted card instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragUiState {
    pub position: Option<Pos2>,
}

/// One renderable card, derived per frame from the reorder machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCardView {
    pub id: PageId,
    /// The card is being dragged and renders dimmed in place.
    pub active: bool,
    /// The card owns keyboard focus.
    pub focused: bool,
    /// Edge marker to draw when this card is the hover target.
    pub insert: Option<InsertPosition>,
}
