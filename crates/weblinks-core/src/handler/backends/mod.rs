//! Browsing environment implementations.

mod system;

pub use system::SystemBrowser;
