#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Delay before a shown message is auto-dismissed, in milliseconds.
pub const DISMISS_AFTER_MS: u32 = 5_000;

/// Styling applied to the transient status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Success,
    Error,
}

impl MessageKind {
    /// CSS class for the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Transient feedback for the outcome of the last mutating action.
///
/// Hidden -> Visible on any completed signup/unregister attempt, whether it
/// succeeded or failed. Visible -> Hidden on the fixed timer or immediately
/// when superseded by a newer message. Dismissal is unconditional and timers
/// are never cancelled, so a timer started for an older message can hide a
/// newer one early.
#[derive(Clone, Debug, Default)]
pub struct MessageState {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
}

impl MessageState {
    /// Show a message, superseding whatever is currently displayed.
    pub fn show(&mut self, text: String, kind: MessageKind) {
        self.text = text;
        self.kind = kind;
        self.visible = true;
    }

    /// Hide the message. Unconditional: callers do not pass a token, so a
    /// stale timer dismisses whatever is currently shown.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
