//! Drag-to-reorder logic kept pure and testable so the egui integration code
//! can stay small. The modules here know nothing about pointers, keys, or
//! rects; they consume a typed event stream and answer read queries.

mod deck;
mod machine;
mod overlay;
mod resolver;

pub use deck::{Deck, PageId, ReorderError};
pub use machine::{DragEvent, DragSession, DropOutcome, Modality, ReorderMachine};
pub use overlay::OverlayPreview;
pub use resolver::{InsertPosition, resolve_insert_position};
