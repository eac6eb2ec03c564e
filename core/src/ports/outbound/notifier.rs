/// Delivers a user-facing message over some channel.
pub trait Notifier {
    /// Sends `message` and returns the delivery receipt shown to the user.
    fn notify(&self, message: &str) -> String;
}
