//! Outbound notifications
//!
//! Password reset delivery is an external collaborator. The backend only
//! produces the reset link; the transport (SMTP relay, message queue, ...)
//! sits behind [`ResetNotifier`] so it can be swapped without touching the
//! handlers.

use tracing::info;

/// Delivery seam for password reset notifications
pub trait ResetNotifier: Send + Sync {
    /// Deliver a password reset link to the given address
    fn send_password_reset(&self, email: &str, reset_token: &str);
}

/// Notifier that records the reset link in the service log.
///
/// Stands in for a real mail transport in development and tests.
pub struct LogNotifier {
    reset_link_base: String,
}

impl LogNotifier {
    /// Create a new logging notifier
    pub fn new(reset_link_base: String) -> Self {
        Self { reset_link_base }
    }

    /// Build the reset link handed to the user
    pub fn reset_link(&self, reset_token: &str) -> String {
        format!("{}/{}/", self.reset_link_base.trim_end_matches('/'), reset_token)
    }
}

impl ResetNotifier for LogNotifier {
    fn send_password_reset(&self, email: &str, reset_token: &str) {
        let link = self.reset_link(reset_token);
        info!("Password reset link for {}: {}", email, link);
    }
}
