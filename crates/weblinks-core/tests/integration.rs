//! End-to-end tests for the web links addon.
//!
//! These tests attach the addon to an in-memory host terminal, click on
//! rendered text, and check where the default handler navigates.

use std::sync::{Arc, Mutex};

use url::Url;
use weblinks_core::{
    AddonOptions, BrowsingContext, BrowsingEnvironment, BufferPosition, CompositePattern,
    Disposable, EnvironmentError, HostCapabilities, HostError, HostTerminal, InteractionEvent,
    LinkHandler, LinkMatcherOptions, LinkMode, MatcherId, WebLinkProvider, WebLinksAddon,
};

type Matcher = (MatcherId, CompositePattern, Arc<dyn LinkHandler>, LinkMatcherOptions);

/// Host terminal holding a few rendered lines.
struct InMemoryTerminal {
    lines: Vec<String>,
    provider_support: bool,
    next_id: Mutex<u32>,
    matchers: Mutex<Vec<Matcher>>,
    providers: Arc<Mutex<Vec<WebLinkProvider>>>,
}

impl InMemoryTerminal {
    fn new(lines: &[&str], provider_support: bool) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            provider_support,
            next_id: Mutex::new(0),
            matchers: Mutex::new(Vec::new()),
            providers: Arc::default(),
        }
    }

    /// Simulate a click at a character column.
    fn click(&self, row: usize, column: usize) {
        let line = &self.lines[row];
        let position = BufferPosition { row, column };
        let event = InteractionEvent {
            position,
            ..InteractionEvent::default()
        };

        for provider in self.providers.lock().unwrap().iter() {
            if let Some(link) = provider.link_at(line, position) {
                provider.activate(&event, &link);
                return;
            }
        }

        for (_, pattern, handler, options) in self.matchers.lock().unwrap().iter() {
            for caps in pattern.regex().captures_iter(line) {
                let Some(m) = caps.get(options.match_index) else {
                    continue;
                };
                let start = line[..m.start()].chars().count();
                let end = start + m.as_str().chars().count();
                if column >= start && column < end {
                    handler.handle(&event, m.as_str());
                    return;
                }
            }
        }
    }

    fn matcher_count(&self) -> usize {
        self.matchers.lock().unwrap().len()
    }

    fn provider_count(&self) -> usize {
        self.providers.lock().unwrap().len()
    }
}

struct ProviderRegistration {
    providers: Arc<Mutex<Vec<WebLinkProvider>>>,
}

impl Disposable for ProviderRegistration {
    fn dispose(self: Box<Self>) {
        self.providers.lock().unwrap().clear();
    }
}

impl HostTerminal for InMemoryTerminal {
    fn capabilities(&self) -> HostCapabilities {
        HostCapabilities {
            link_provider: self.provider_support,
        }
    }

    fn register_link_matcher(
        &self,
        pattern: CompositePattern,
        handler: Arc<dyn LinkHandler>,
        options: LinkMatcherOptions,
    ) -> Result<MatcherId, HostError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = MatcherId(*next_id);
        self.matchers
            .lock()
            .unwrap()
            .push((id, pattern, handler, options));
        Ok(id)
    }

    fn deregister_link_matcher(&self, id: MatcherId) {
        self.matchers.lock().unwrap().retain(|(m, ..)| *m != id);
    }

    fn register_link_provider(
        &self,
        provider: WebLinkProvider,
    ) -> Result<Box<dyn Disposable>, HostError> {
        self.providers.lock().unwrap().push(provider);
        Ok(Box::new(ProviderRegistration {
            providers: self.providers.clone(),
        }))
    }
}

/// Browser page at a proxied workspace URL that records navigations.
struct WorkspacePage {
    location: Url,
    navigations: Arc<Mutex<Vec<String>>>,
}

impl WorkspacePage {
    fn new(location: &str) -> Self {
        Self {
            location: Url::parse(location).unwrap(),
            navigations: Arc::default(),
        }
    }
}

struct Tab {
    navigations: Arc<Mutex<Vec<String>>>,
}

impl BrowsingEnvironment for WorkspacePage {
    fn location(&self) -> Option<Url> {
        Some(self.location.clone())
    }

    fn open_blank(&self) -> Result<Box<dyn BrowsingContext>, EnvironmentError> {
        Ok(Box::new(Tab {
            navigations: self.navigations.clone(),
        }))
    }
}

impl BrowsingContext for Tab {
    fn clear_opener(&mut self) -> Result<(), EnvironmentError> {
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<(), EnvironmentError> {
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

const LINES: &[&str] = &[
    "  VITE ready at http://localhost:5173/ (press h for help)",
    "docs: https://example.org/guide, api: http://127.0.0.1:3000/api?v=2",
];

fn addon_with_page(options: AddonOptions) -> (WebLinksAddon, Arc<Mutex<Vec<String>>>) {
    let page = WorkspacePage::new("https://3000-workspace123.example.dev/terminal");
    let navigations = page.navigations.clone();
    (WebLinksAddon::with_default_handler(Arc::new(page), options), navigations)
}

#[test]
fn test_legacy_click_remaps_loopback_link() {
    let terminal = Arc::new(InMemoryTerminal::new(LINES, false));
    let (mut addon, navigations) = addon_with_page(AddonOptions::default());

    assert_eq!(addon.activate(terminal.clone()).unwrap(), LinkMode::Legacy);
    terminal.click(0, 20);

    assert_eq!(
        *navigations.lock().unwrap(),
        vec!["https://5173-workspace123.example.dev/".to_string()]
    );
}

#[test]
fn test_provider_click_opens_public_link_literally() {
    let terminal = Arc::new(InMemoryTerminal::new(LINES, true));
    let options = AddonOptions {
        use_link_provider: true,
        ..AddonOptions::default()
    };
    let (mut addon, navigations) = addon_with_page(options);

    assert_eq!(addon.activate(terminal.clone()).unwrap(), LinkMode::Provider);
    terminal.click(1, 10);

    assert_eq!(
        *navigations.lock().unwrap(),
        vec!["https://example.org/guide".to_string()]
    );
}

#[test]
fn test_provider_click_on_second_link_in_line() {
    let terminal = Arc::new(InMemoryTerminal::new(LINES, true));
    let options = AddonOptions {
        use_link_provider: true,
        ..AddonOptions::default()
    };
    let (mut addon, navigations) = addon_with_page(options);

    addon.activate(terminal.clone()).unwrap();
    terminal.click(1, 45);

    assert_eq!(
        *navigations.lock().unwrap(),
        vec!["https://3000-workspace123.example.dev/api?v=2".to_string()]
    );
}

#[test]
fn test_click_outside_links_does_nothing() {
    let terminal = Arc::new(InMemoryTerminal::new(LINES, false));
    let (mut addon, navigations) = addon_with_page(AddonOptions::default());

    addon.activate(terminal.clone()).unwrap();
    terminal.click(0, 2);

    assert!(navigations.lock().unwrap().is_empty());
}

#[test]
fn test_provider_override_pattern() {
    let terminal = Arc::new(InMemoryTerminal::new(&["see <ftp://files.example.org>"], true));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let handler: Arc<dyn LinkHandler> = Arc::new(move |_: &InteractionEvent, uri: &str| {
        sink.lock().unwrap().push(uri.to_string());
    });
    let options = AddonOptions {
        use_link_provider: true,
        url_regex: Some(CompositePattern::from_source(r"<([a-z]+://[^>]+)>").unwrap()),
        ..AddonOptions::default()
    };
    let mut addon = WebLinksAddon::new(handler, options);

    addon.activate(terminal.clone()).unwrap();
    terminal.click(0, 8);

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["ftp://files.example.org".to_string()]
    );
}

#[test]
fn test_dispose_removes_registrations() {
    let legacy = Arc::new(InMemoryTerminal::new(LINES, false));
    let provider = Arc::new(InMemoryTerminal::new(LINES, true));

    let (mut legacy_addon, _) = addon_with_page(AddonOptions::default());
    let (mut provider_addon, _) = addon_with_page(AddonOptions {
        use_link_provider: true,
        ..AddonOptions::default()
    });

    legacy_addon.activate(legacy.clone()).unwrap();
    provider_addon.activate(provider.clone()).unwrap();
    assert_eq!(legacy.matcher_count(), 1);
    assert_eq!(provider.provider_count(), 1);

    legacy_addon.dispose();
    provider_addon.dispose();
    legacy_addon.dispose();

    assert_eq!(legacy.matcher_count(), 0);
    assert_eq!(provider.provider_count(), 0);
}

#[test]
fn test_addon_from_config() {
    let mut config = weblinks_config::WeblinksConfig::default();
    config.addon.use_link_provider = Some(true);
    let options = AddonOptions::from_config(&config).unwrap();

    let terminal = Arc::new(InMemoryTerminal::new(LINES, true));
    let (mut addon, _) = addon_with_page(options);

    assert_eq!(addon.activate(terminal).unwrap(), LinkMode::Provider);
}
