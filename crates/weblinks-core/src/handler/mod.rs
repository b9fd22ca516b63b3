//! Link invocation.
//!
//! [`LinkHandler`] is the strategy a host calls when the user activates a
//! link. [`WebLinkHandler`] is the default: it opens a blank browsing
//! context, detaches it from its opener, and navigates it to the link,
//! remapping loopback hosts when the terminal runs inside a proxied
//! workspace. Every failure stays inside the invocation that caused it.

pub mod backends;
pub mod errors;
pub mod remap;
pub mod traits;

pub use backends::SystemBrowser;
pub use errors::{EnvironmentError, InvocationError};
pub use traits::{BrowsingContext, BrowsingEnvironment};

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::provider::BufferPosition;

/// Keyboard modifiers held during an interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// The user interaction that activated a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionEvent {
    pub position: BufferPosition,
    pub modifiers: Modifiers,
}

/// Called when the user activates a link. Side effects are the whole contract.
pub trait LinkHandler: Send + Sync {
    fn handle(&self, event: &InteractionEvent, uri: &str);
}

impl<F> LinkHandler for F
where
    F: Fn(&InteractionEvent, &str) + Send + Sync,
{
    fn handle(&self, event: &InteractionEvent, uri: &str) {
        self(event, uri)
    }
}

/// Default link handler.
pub struct WebLinkHandler {
    environment: Arc<dyn BrowsingEnvironment>,
}

impl WebLinkHandler {
    pub fn new(environment: Arc<dyn BrowsingEnvironment>) -> Self {
        Self { environment }
    }

    /// Where a click on `uri` navigates to.
    ///
    /// Non-loopback links navigate to `uri` exactly as matched. Loopback links
    /// are rewritten against the page location; without a location they are
    /// left as they are.
    pub fn resolve_target(&self, uri: &str) -> Result<String, InvocationError> {
        let parsed = Url::parse(uri).map_err(|e| InvocationError::InvalidUri {
            uri: uri.to_string(),
            message: e.to_string(),
        })?;

        if !remap::is_loopback(&parsed) {
            return Ok(uri.to_string());
        }

        let Some(location) = self.environment.location() else {
            debug!(
                event = "core.handler.remap_skipped",
                uri = uri,
                reason = "no page location"
            );
            return Ok(uri.to_string());
        };

        let rewritten = remap::rewrite_loopback(&parsed, &location)?;
        info!(
            event = "core.handler.loopback_remapped",
            uri = uri,
            remapped = %rewritten
        );
        Ok(rewritten.into())
    }
}

impl LinkHandler for WebLinkHandler {
    fn handle(&self, _event: &InteractionEvent, uri: &str) {
        info!(event = "core.handler.open_started", uri = uri);

        let mut context = match self.environment.open_blank() {
            Ok(context) => context,
            Err(e) => {
                warn!(event = "core.handler.open_blocked", uri = uri, error = %e);
                return;
            }
        };

        if let Err(e) = context.clear_opener() {
            debug!(event = "core.handler.opener_clear_refused", error = %e);
        }

        let target = match self.resolve_target(uri) {
            Ok(target) => target,
            Err(e) => {
                warn!(event = "core.handler.open_failed", uri = uri, error = %e);
                return;
            }
        };

        match context.navigate(&target) {
            Ok(()) => info!(event = "core.handler.open_completed", url = %target),
            Err(e) => warn!(event = "core.handler.navigate_failed", url = %target, error = %e),
        }
    }
}
