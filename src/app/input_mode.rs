//! Input mode enum
//!
//! Defines how keyboard input is handled based on the current mode.

/// Input mode determines how keyboard input is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - keys are handled as commands
    #[default]
    Normal,
    /// Confirming console log clear
    ConfirmingClear,
    /// Confirming application quit
    ConfirmingQuit,
}

impl InputMode {
    /// Check if a confirmation dialog is open
    pub fn is_confirming(&self) -> bool {
        matches!(self, InputMode::ConfirmingClear | InputMode::ConfirmingQuit)
    }
}
