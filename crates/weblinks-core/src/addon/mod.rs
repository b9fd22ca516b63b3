//! Addon lifecycle.
//!
//! `Unattached → {AttachedLegacy | AttachedProvider} → Disposed`. The mode is
//! chosen once in [`WebLinksAddon::activate`] and the registration it
//! produces is released exactly once, by [`WebLinksAddon::dispose`] or on drop.

pub mod errors;
pub mod types;

pub use errors::AddonError;
pub use types::{AddonOptions, LinkMode};

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::handler::{BrowsingEnvironment, LinkHandler, WebLinkHandler};
use crate::host::{Disposable, HostTerminal, LinkMatcherOptions, MatcherId};
use crate::matcher::URI_MATCH_INDEX;
use crate::pattern::CompositePattern;
use crate::provider::WebLinkProvider;

enum AddonState {
    Unattached,
    AttachedLegacy {
        host: Arc<dyn HostTerminal>,
        id: MatcherId,
    },
    AttachedProvider {
        registration: Box<dyn Disposable>,
    },
    Disposed,
}

/// Attaches web link detection to one host terminal.
pub struct WebLinksAddon {
    handler: Arc<dyn LinkHandler>,
    options: AddonOptions,
    pattern: CompositePattern,
    state: AddonState,
}

impl WebLinksAddon {
    /// Create an addon with a caller-supplied handler, which fully replaces
    /// the default one.
    pub fn new(handler: Arc<dyn LinkHandler>, options: AddonOptions) -> Self {
        Self {
            handler,
            options,
            pattern: CompositePattern::web_links(),
            state: AddonState::Unattached,
        }
    }

    /// Create an addon using [`WebLinkHandler`] over `environment`.
    pub fn with_default_handler(
        environment: Arc<dyn BrowsingEnvironment>,
        options: AddonOptions,
    ) -> Self {
        Self::new(Arc::new(WebLinkHandler::new(environment)), options)
    }

    /// The pattern used for legacy registration and, absent an override,
    /// for the provider.
    pub fn pattern(&self) -> &CompositePattern {
        &self.pattern
    }

    /// The mode chosen at activation, while attached.
    pub fn mode(&self) -> Option<LinkMode> {
        match self.state {
            AddonState::AttachedLegacy { .. } => Some(LinkMode::Legacy),
            AddonState::AttachedProvider { .. } => Some(LinkMode::Provider),
            AddonState::Unattached | AddonState::Disposed => None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.state, AddonState::Disposed)
    }

    /// Register with `host`.
    ///
    /// Provider mode is used only when the options request it and the host
    /// advertises it; otherwise the built-in pattern is registered as a
    /// legacy matcher with `match_index` forced to the URI group.
    ///
    /// # Errors
    ///
    /// `AlreadyActivated` or `Disposed` if this addon was activated or
    /// disposed before. `Registration` if the host rejects the registration;
    /// the addon then stays unattached.
    pub fn activate(&mut self, host: Arc<dyn HostTerminal>) -> Result<LinkMode, AddonError> {
        match self.state {
            AddonState::Unattached => {}
            AddonState::Disposed => {
                error!(event = "core.addon.activate_after_dispose");
                return Err(AddonError::Disposed);
            }
            AddonState::AttachedLegacy { .. } | AddonState::AttachedProvider { .. } => {
                error!(event = "core.addon.activate_twice", mode = ?self.mode());
                return Err(AddonError::AlreadyActivated);
            }
        }

        let capabilities = host.capabilities();
        info!(
            event = "core.addon.activate_started",
            use_link_provider = self.options.use_link_provider,
            host_link_provider = capabilities.link_provider
        );

        if self.options.use_link_provider && capabilities.link_provider {
            let pattern = self
                .options
                .url_regex
                .clone()
                .unwrap_or_else(|| self.pattern.clone());
            let provider = WebLinkProvider::new(pattern, self.handler.clone());
            let registration = host.register_link_provider(provider).inspect_err(|e| {
                warn!(event = "core.addon.activate_failed", mode = "provider", error = %e);
            })?;

            self.state = AddonState::AttachedProvider { registration };
            info!(event = "core.addon.activate_completed", mode = "provider");
            return Ok(LinkMode::Provider);
        }

        if self.options.use_link_provider {
            debug!(
                event = "core.addon.provider_unavailable",
                "Host has no link provider support, falling back to legacy matcher"
            );
        }

        let options = LinkMatcherOptions {
            match_index: URI_MATCH_INDEX,
            ..self.options.matcher
        };
        let id = host
            .register_link_matcher(self.pattern.clone(), self.handler.clone(), options)
            .inspect_err(|e| {
                warn!(event = "core.addon.activate_failed", mode = "legacy", error = %e);
            })?;

        self.state = AddonState::AttachedLegacy { host, id };
        info!(
            event = "core.addon.activate_completed",
            mode = "legacy",
            matcher_id = id.0
        );
        Ok(LinkMode::Legacy)
    }

    /// Release the registration. Safe to call any number of times.
    pub fn dispose(&mut self) {
        match std::mem::replace(&mut self.state, AddonState::Disposed) {
            AddonState::AttachedLegacy { host, id } => {
                host.deregister_link_matcher(id);
                info!(event = "core.addon.dispose_completed", mode = "legacy", matcher_id = id.0);
            }
            AddonState::AttachedProvider { registration } => {
                registration.dispose();
                info!(event = "core.addon.dispose_completed", mode = "provider");
            }
            AddonState::Unattached | AddonState::Disposed => {
                debug!(event = "core.addon.dispose_skipped", reason = "no registration");
            }
        }
    }
}

impl Drop for WebLinksAddon {
    fn drop(&mut self) {
        self.dispose();
    }
}
