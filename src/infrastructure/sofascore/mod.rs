pub mod client;

pub use client::SofascoreClient;
