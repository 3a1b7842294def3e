pub mod log_notifier;
pub mod telegram;

pub use log_notifier::LogNotifier;
pub use telegram::TelegramNotifier;
