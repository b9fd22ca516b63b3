//! Desktop browsing environment backed by the OS URL opener.

use tracing::{debug, info};
use url::Url;

use weblinks_config::RemapConfig;

use crate::handler::errors::EnvironmentError;
use crate::handler::traits::{BrowsingContext, BrowsingEnvironment};

/// Environment variable naming the page location when no config sets one.
pub const PAGE_URL_ENV: &str = "WEBLINKS_PAGE_URL";

/// Opens links with the system's default browser.
///
/// A desktop browser tab has no opener to clear, and its "blank context"
/// does not exist until `navigate` hands the URL to the OS.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    page_url: Option<Url>,
}

impl SystemBrowser {
    pub fn new(page_url: Option<Url>) -> Self {
        Self { page_url }
    }

    /// Page location from `remap.page_url`, falling back to `$WEBLINKS_PAGE_URL`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_config(remap: &RemapConfig) -> Self {
        let raw = remap
            .page_url
            .clone()
            .or_else(|| std::env::var(PAGE_URL_ENV).ok().filter(|s| !s.is_empty()));

        let page_url = raw.and_then(|value| match Url::parse(&value) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(
                    event = "core.system_browser.page_url_invalid",
                    value = %value,
                    error = %e
                );
                None
            }
        });

        Self { page_url }
    }
}

impl BrowsingEnvironment for SystemBrowser {
    fn location(&self) -> Option<Url> {
        self.page_url.clone()
    }

    fn open_blank(&self) -> Result<Box<dyn BrowsingContext>, EnvironmentError> {
        Ok(Box::new(SystemBrowserContext))
    }
}

struct SystemBrowserContext;

impl BrowsingContext for SystemBrowserContext {
    fn clear_opener(&mut self) -> Result<(), EnvironmentError> {
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<(), EnvironmentError> {
        // Only allow http/https so file://, javascript: and friends never
        // reach the OS opener.
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(EnvironmentError::SchemeBlocked {
                url: url.to_string(),
            });
        }

        info!(event = "core.system_browser.open_started", url = url);
        open::that(url).map_err(|e| EnvironmentError::NavigationFailed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
