//! Contract between the addon and a host terminal.

pub mod errors;
pub mod traits;
pub mod types;

pub use errors::HostError;
pub use traits::{Disposable, HostTerminal};
pub use types::{HostCapabilities, LinkMatcherOptions, MatcherId};
