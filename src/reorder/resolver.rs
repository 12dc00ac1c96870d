/// Where the dragged page would land relative to the hover target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    /// The dragged page would take the target's slot, pushing it later.
    Before,
    /// The dragged page would land just past the target.
    After,
}

/// Resolve the insert indicator for the current hover target.
///
/// Returns `None` when hovering the dragged page itself (no displacement).
/// The formula is modality-independent; pointer gestures re-evaluate it on
/// every hover change while keyboard gestures re-evaluate it once per step.
pub fn resolve_insert_position(
    active_index: usize,
    target_index: usize,
) -> Option<InsertPosition> {
    if target_index == active_index {
        None
    } else if target_index > active_index {
        Some(InsertPosition::After)
    } else {
        Some(InsertPosition::Before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_the_dragged_page_resolves_to_nothing() {
        for index in 0..4 {
            assert_eq!(resolve_insert_position(index, index), None);
        }
    }

    #[test]
    fn later_targets_resolve_after_and_earlier_targets_before() {
        for active in 0..6 {
            for target in 0..6 {
                let resolved = resolve_insert_position(active, target);
                if target > active {
                    assert_eq!(resolved, Some(InsertPosition::After));
                } else if target < active {
                    assert_eq!(resolved, Some(InsertPosition::Before));
                } else {
                    assert_eq!(resolved, None);
                }
            }
        }
    }
}
