use std::sync::Arc;

use super::errors::HostError;
use super::types::{HostCapabilities, LinkMatcherOptions, MatcherId};
use crate::handler::LinkHandler;
use crate::pattern::CompositePattern;
use crate::provider::WebLinkProvider;

/// A registration that is released by disposing it. Disposal consumes the
/// value, so it can happen only once.
pub trait Disposable: Send {
    fn dispose(self: Box<Self>);
}

/// The link APIs a host terminal exposes.
///
/// Hosts own their buffer, rendering, and hit-testing. They use the pattern
/// (legacy) or the provider (provider mode) to find links and call back into
/// the handler when the user activates one.
pub trait HostTerminal: Send + Sync {
    /// Capabilities beyond the legacy matcher API.
    fn capabilities(&self) -> HostCapabilities {
        HostCapabilities::legacy_only()
    }

    /// Legacy mode: register a pattern whose `options.match_index` group is
    /// passed to `handler` on activation.
    fn register_link_matcher(
        &self,
        pattern: CompositePattern,
        handler: Arc<dyn LinkHandler>,
        options: LinkMatcherOptions,
    ) -> Result<MatcherId, HostError>;

    /// Release a legacy registration.
    fn deregister_link_matcher(&self, id: MatcherId);

    /// Provider mode. Only called when `capabilities().link_provider` is set.
    fn register_link_provider(
        &self,
        _provider: WebLinkProvider,
    ) -> Result<Box<dyn Disposable>, HostError> {
        Err(HostError::CapabilityUnavailable {
            capability: "link providers",
        })
    }
}
