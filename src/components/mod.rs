//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod destination_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod message_dialog;
pub mod quit_dialog;

pub use destination_dialog::DestinationDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::centered_popup;
pub use message_dialog::MessageDialog;
pub use quit_dialog::QuitDialog;
