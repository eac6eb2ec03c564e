//! Notification channels. Delivery is simulated: the receipt is logged and
//! returned to the caller for display.

use academia_common::config::NotifierKind;
use tracing::info;

use crate::ports::outbound::notifier::Notifier;

pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn notify(&self, message: &str) -> String {
        info!(channel = "email", "{message}");
        format!("Sending email notification: {message}")
    }
}

pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn notify(&self, message: &str) -> String {
        info!(channel = "sms", "{message}");
        format!("Sending SMS notification: {message}")
    }
}

pub fn notifier(kind: NotifierKind) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::Email => Box::new(EmailNotifier),
        NotifierKind::Sms => Box::new(SmsNotifier),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
