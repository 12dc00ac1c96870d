use super::deck::PageId;
use super::machine::{Modality, ReorderMachine};
use super::resolver::InsertPosition;

/// What the floating drag preview should render.
///
/// Derived read-only from the machine; recomputed whenever the session or
/// the deck changes. No preview is produced while idle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayPreview {
    /// The page the detached clone renders.
    pub page: PageId,
    pub modality: Modality,
    /// Resolved insert indicator for the current hover target.
    pub insert: Option<(PageId, InsertPosition)>,
}

impl OverlayPreview {
    /// Project the overlay for the machine's current state.
    pub fn project(machine: &ReorderMachine) -> Option<Self> {
        let session = machine.session()?;
        Some(Self {
            page: session.active().clone(),
            modality: session.modality(),
            insert: machine.insert_position(),
        })
    }

    /// Whether the overlay clone itself should carry the insert marker.
    ///
    /// Keyboard gestures get the marker on the clone because the deck does
    /// not reflow until commit; pointer gestures already reflow live, so the
    /// clone stays unannotated.
    pub fn marker_on_clone(&self) -> Option<(&PageId, InsertPosition)> {
        if self.modality != Modality::Keyboard {
            return None;
        }
        self.insert
            .as_ref()
            .map(|(target, position)| (target, *position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorder::Deck;

    fn machine(ids: &[&str]) -> ReorderMachine {
        let deck = Deck::new(ids.iter().map(|id| PageId::from(*id))).unwrap();
        ReorderMachine::new(deck)
    }

    #[test]
    fn idle_machine_projects_no_overlay() {
        let machine = machine(&["a", "b"]);
        assert_eq!(OverlayPreview::project(&machine), None);
    }

    #[test]
    fn overlay_clones_the_active_page() {
        let mut machine = machine(&["a", "b", "c"]);
        machine.start(PageId::from("b"), Modality::Pointer);
        let preview = OverlayPreview::project(&machine).unwrap();
        assert_eq!(preview.page, PageId::from("b"));
        assert_eq!(preview.insert, None);
    }

    #[test]
    fn keyboard_overlay_carries_the_marker() {
        let mut machine = machine(&["a", "b", "c"]);
        machine.start(PageId::from("a"), Modality::Keyboard);
        machine.over(Some(PageId::from("c")));
        let preview = OverlayPreview::project(&machine).unwrap();
        assert_eq!(
            preview.marker_on_clone(),
            Some((&PageId::from("c"), InsertPosition::After))
        );
    }

    #[test]
    fn pointer_overlay_suppresses_the_marker_but_keeps_the_resolution() {
        let mut machine = machine(&["a", "b", "c"]);
        machine.start(PageId::from("a"), Modality::Pointer);
        machine.over(Some(PageId::from("b")));
        let preview = OverlayPreview::project(&machine).unwrap();
        assert_eq!(preview.marker_on_clone(), None);
        assert_eq!(
            preview.insert,
            Some((PageId::from("b"), InsertPosition::After))
        );
    }
}
