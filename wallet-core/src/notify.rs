// wallet-core/src/notify.rs
//
// Notification sink - fire-and-forget user-facing messages

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Info,
    Error,
}

impl fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotifyLevel::Success => "success",
            NotifyLevel::Info => "info",
            NotifyLevel::Error => "error",
        })
    }
}

/// Surfaces operation outcomes to a user
///
/// The manager calls this after each operation and never inspects a result,
/// so implementations must not block.
pub trait NotificationSink: Send {
    fn notify(&self, level: NotifyLevel, message: &str);
}

/// Forwards notifications to `tracing`. Default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, level: NotifyLevel, message: &str) {
        match level {
            NotifyLevel::Success | NotifyLevel::Info => {
                tracing::info!(target: "hdwallet_core::notify", %level, "{}", message)
            }
            NotifyLevel::Error => {
                tracing::warn!(target: "hdwallet_core::notify", %level, "{}", message)
            }
        }
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl NotificationSink for NoopNotifier {
    fn notify(&self, _level: NotifyLevel, _message: &str) {}
}

impl<F> NotificationSink for F
where
    F: Fn(NotifyLevel, &str) + Send,
{
    fn notify(&self, level: NotifyLevel, message: &str) {
        self(level, message)
    }
}
