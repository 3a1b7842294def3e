pub mod report;
pub mod signal_monitor;

pub use report::CycleReport;
pub use signal_monitor::SignalMonitor;
