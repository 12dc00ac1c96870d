//! Bridges the reorder core to the egui renderer.

use egui::Pos2;
use tracing::{debug, error, warn};

use crate::config::{self, AppConfig, DeckLayout, InteractionOptions};
use crate::egui_app::state::{PageCardView, StatusTone, UiState};
use crate::egui_app::ui::style;
use crate::reorder::{Deck, DropOutcome, Modality, PageId, ReorderMachine};

mod keyboard;
#[cfg(test)]
mod tests;

pub use keyboard::KeyboardIntent;

/// Maintains app state and feeds engine events into the reorder machine.
pub struct DeckController {
    pub ui: UiState,
    machine: ReorderMachine,
    layout: DeckLayout,
    controls: InteractionOptions,
    page_count: usize,
    config_dirty: bool,
}

impl DeckController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            machine: ReorderMachine::default(),
            layout: DeckLayout::default(),
            controls: InteractionOptions::default(),
            page_count: config::DEFAULT_PAGE_COUNT,
            config_dirty: false,
        }
    }

    /// Load persisted config and seed the deck.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let cfg = config::load_or_default()?;
        self.apply_config(cfg);
        Ok(())
    }

    /// Apply loaded settings, falling back to a fresh deck when the persisted
    /// order is unusable.
    pub fn apply_config(&mut self, cfg: AppConfig) {
        self.layout = cfg.layout;
        self.controls = cfg.controls.clone();
        self.page_count = cfg.deck.page_count.max(1);
        let deck = if cfg.deck.order.is_empty() {
            Deck::numbered(self.page_count)
        } else {
            match Deck::new(cfg.deck.order.iter().map(PageId::from_string)) {
                Ok(deck) => deck,
                Err(err) => {
                    warn!("Persisted page order is unusable ({err}); seeding a fresh deck");
                    self.set_status(
                        "Saved page order was invalid; starting over",
                        StatusTone::Warning,
                    );
                    Deck::numbered(self.page_count)
                }
            }
        };
        self.machine = ReorderMachine::new(deck);
    }

    /// Snapshot current settings for persistence.
    pub fn config_snapshot(&self) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.layout = self.layout;
        cfg.controls = self.controls.clone();
        cfg.deck.page_count = self.page_count;
        cfg.deck.order = self
            .machine
            .deck()
            .ids()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();
        cfg
    }

    /// True once per change that warrants a config write.
    pub fn take_config_dirty(&mut self) -> bool {
        std::mem::take(&mut self.config_dirty)
    }

    pub fn layout(&self) -> DeckLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: DeckLayout) {
        if self.layout != layout {
            self.layout = layout;
            self.config_dirty = true;
        }
    }

    pub fn controls(&self) -> &InteractionOptions {
        &self.controls
    }

    pub fn machine(&self) -> &ReorderMachine {
        &self.machine
    }

    pub fn is_dragging(&self) -> bool {
        self.machine.is_dragging()
    }

    /// Move keyboard focus to a page.
    pub fn focus_page(&mut self, id: &PageId) {
        self.ui.focused = Some(id.clone());
    }

    /// Cards to render this frame, in preview order.
    pub fn page_cards(&self) -> Vec<PageCardView> {
        let session = self.machine.session();
        let insert = self.machine.insert_position();
        self.machine
            .preview_order()
            .into_iter()
            .map(|id| {
                let active = session.is_some_and(|session| session.active() == &id);
                let focused = self.ui.focused.as_ref() == Some(&id);
                let marker = insert
                    .as_ref()
                    .filter(|(target, _)| target == &id)
                    .map(|(_, position)| *position);
                PageCardView {
                    id,
                    active,
                    focused,
                    insert: marker,
                }
            })
            .collect()
    }

    /// Begin a pointer-driven drag on a page.
    pub fn start_pointer_drag(&mut self, id: &PageId, pos: Pos2) {
        debug!("Pointer drag start on page {id}");
        self.machine.start(id.clone(), Modality::Pointer);
        self.ui.focused = Some(id.clone());
        self.ui.drag.position = Some(pos);
    }

    /// Update the pointer position and current hover target mid-drag.
    pub fn update_pointer_drag(&mut self, pos: Pos2, hover: Option<PageId>) {
        if !self.machine.is_dragging() {
            return;
        }
        self.ui.drag.position = Some(pos);
        self.machine.over(hover);
    }

    /// Terminate the active session, committing when a target is set.
    pub fn finish_active_drag(&mut self) {
        let Some(session) = self.machine.session() else {
            self.reset_drag_ui();
            return;
        };
        let page = session.active().clone();
        match self.machine.end() {
            Ok(DropOutcome::Committed { to, .. }) => {
                self.config_dirty = true;
                self.ui.focused = Some(page.clone());
                self.set_status(
                    format!("Moved page {page} to position {}", to + 1),
                    StatusTone::Info,
                );
            }
            Ok(DropOutcome::NoChange) => {
                self.set_status("Order unchanged", StatusTone::Idle);
            }
            Err(err) => {
                error!("Reorder commit failed: {err}");
                self.set_status(format!("Reorder failed: {err}"), StatusTone::Error);
            }
        }
        self.reset_drag_ui();
    }

    /// Abandon the active session without touching the deck.
    pub fn cancel_active_drag(&mut self) {
        if self.machine.is_dragging() {
            self.machine.cancel();
            self.set_status("Reorder cancelled", StatusTone::Idle);
        }
        self.reset_drag_ui();
    }

    fn reset_drag_ui(&mut self) {
        self.ui.drag.position = None;
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).into();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }
}

impl Default for DeckController {
    fn default() -> Self {
        Self::new()
    }
}
