//! Failure notification capability.
//!
//! The submitter tells the user about failures through a [`Notifier`] it is
//! handed at construction time, so it never depends on a display surface.

use tokio::sync::mpsc::UnboundedSender;

/// Something that can put a failure message in front of the user immediately.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Any callback taking the message works as a notifier.
impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Forward messages into a channel for another task to display.
impl Notifier for UnboundedSender<String> {
    fn notify(&self, message: &str) {
        if self.send(message.to_string()).is_err() {
            tracing::warn!("Notification receiver dropped, message lost: {}", message);
        }
    }
}
