//! # Notifier Adapters
//!
//! Sinks for the shopper-facing notices the cart store emits.
//!
//! ```text
//! CartStore ──notify(Notice)──┬──► ChannelNotifier ──mpsc──► UI toast loop
//!                             └──► TracingNotifier ────────► log output
//! ```
//!
//! Both are fire-and-forget: a notice that cannot be delivered is dropped.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use tote_core::{Notice, Notifier, Severity};

// =============================================================================
// Channel Notifier
// =============================================================================

/// Forwards notices over an unbounded channel to whoever renders them.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver its notices arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (ChannelNotifier { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(mpsc::error::SendError(notice)) = self.sender.send(notice) {
            debug!(message = %notice.message, "Notice dropped, receiver closed");
        }
    }
}

// =============================================================================
// Tracing Notifier
// =============================================================================

/// Writes notices to the log. Used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Success => info!(message = %notice.message, "Notice"),
            Severity::Error => warn!(message = %notice.message, "Notice"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
