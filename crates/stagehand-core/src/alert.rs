#![forbid(unsafe_code)]

//! Framework-agnostic alert description.
//!
//! An [`Alert`] is pure data: title, optional message, and a button row. The
//! coordinator builds one per alert item (see [`crate::host::AlertHost`]);
//! rendering it is the host framework's job.
//!
//! # Example
//!
//! ```
//! use stagehand_core::alert::{Alert, AlertButton};
//!
//! let alert = Alert::confirm("Delete file?", "This action cannot be undone.");
//! assert_eq!(alert.buttons.len(), 2);
//!
//! let custom = Alert::new("Unsaved changes")
//!     .message("Save before closing?")
//!     .button(AlertButton::new("Save"))
//!     .button(AlertButton::destructive("Discard"))
//!     .button(AlertButton::cancel("Cancel"));
//! ```

/// Role of an alert button, used by hosts for placement and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertButtonRole {
    /// Ordinary action.
    #[default]
    Default,
    /// Dismisses without acting; hosts typically place it last.
    Cancel,
    /// Irreversible action; hosts typically style it as a warning.
    Destructive,
}

/// A single button in an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertButton {
    /// Display label.
    pub label: String,
    /// Semantic role.
    pub role: AlertButtonRole,
}

impl AlertButton {
    /// Create a default-role button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: AlertButtonRole::Default,
        }
    }

    /// Create a cancel button.
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: AlertButtonRole::Cancel,
        }
    }

    /// Create a destructive button.
    pub fn destructive(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: AlertButtonRole::Destructive,
        }
    }
}

/// An alert ready for the host framework to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Alert title.
    pub title: String,
    /// Optional body text.
    pub message: Option<String>,
    /// Buttons in display order.
    pub buttons: Vec<AlertButton>,
}

impl Alert {
    /// Start a custom alert with no buttons; add them with
    /// [`button`](Self::button).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            buttons: Vec::new(),
        }
    }

    /// Preset: message with a single OK button.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title).message(message).button(AlertButton::new("OK"))
    }

    /// Preset: message with OK and Cancel buttons.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title)
            .message(message)
            .button(AlertButton::new("OK"))
            .button(AlertButton::cancel("Cancel"))
    }

    /// Set the body text.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append a button.
    pub fn button(mut self, button: AlertButton) -> Self {
        self.buttons.push(button);
        self
    }
}
