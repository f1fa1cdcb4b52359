//! Modal stack for managing overlays
//!
//! Dialogs (quit confirmation, destination prompt, result and error
//! messages) are pushed onto a stack; only the top one receives input.

/// Severity of a message dialog, drives its title color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn title(&self) -> &'static str {
        match self {
            MessageLevel::Info => "Result",
            MessageLevel::Warning => "Warning",
            MessageLevel::Error => "Error",
        }
    }
}

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Destination folder prompt shown before exporting
    Destination,
    /// Blocking message (export result, warnings, load failures)
    Message { level: MessageLevel, body: String },
}

impl Modal {
    pub fn message(level: MessageLevel, body: impl Into<String>) -> Self {
        Modal::Message {
            level,
            body: body.into(),
        }
    }
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Destination);
        stack.push(Modal::message(MessageLevel::Info, "done"));

        let top = stack.pop();
        assert_eq!(
            top,
            Some(Modal::Message {
                level: MessageLevel::Info,
                body: "done".to_string()
            })
        );
        assert_eq!(stack.pop(), Some(Modal::Destination));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_message_level_titles() {
        assert_eq!(MessageLevel::Info.title(), "Result");
        assert_eq!(MessageLevel::Warning.title(), "Warning");
        assert_eq!(MessageLevel::Error.title(), "Error");
    }
}
