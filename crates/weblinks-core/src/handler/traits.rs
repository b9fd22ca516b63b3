use url::Url;

use super::errors::EnvironmentError;

/// The environment links are opened in: a browser page, or the desktop.
pub trait BrowsingEnvironment: Send + Sync {
    /// Location of the page hosting the terminal, if there is one.
    fn location(&self) -> Option<Url>;

    /// Open a new, blank browsing context.
    fn open_blank(&self) -> Result<Box<dyn BrowsingContext>, EnvironmentError>;
}

/// A freshly opened browsing context.
pub trait BrowsingContext {
    /// Drop the context's back-reference to the page that opened it.
    fn clear_opener(&mut self) -> Result<(), EnvironmentError>;

    fn navigate(&mut self, url: &str) -> Result<(), EnvironmentError>;
}
