pub mod core;
pub mod mock;
pub mod notify;
pub mod observability;
pub mod persistence;
pub mod sofascore;

pub use self::core::HttpClientFactory;
pub use notify::{LogNotifier, TelegramNotifier};
pub use sofascore::SofascoreClient;
