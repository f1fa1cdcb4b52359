//! Model layer - centralized state management
//!
//! - `FontRecord` - one manifest entry
//! - `FontListing` - filter text, visible subset and checkbox state
//! - `ExportOutcome` - per-run export tally
//! - `ModalStack` - modal overlay management

pub mod font;
pub mod listing;
pub mod modal;
pub mod outcome;

pub use font::FontRecord;
pub use listing::FontListing;
pub use modal::{MessageLevel, Modal, ModalStack};
pub use outcome::ExportOutcome;
