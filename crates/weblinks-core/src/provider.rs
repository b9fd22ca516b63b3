//! Link provider for hosts that ask for links one buffer line at a time.
//!
//! Hover and decoration behavior belongs to the host; the provider only
//! reports where links are and forwards activation to the link handler.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::handler::{InteractionEvent, LinkHandler};
use crate::matcher::find_links;
use crate::pattern::CompositePattern;

/// A cell position in the host buffer. `column` counts characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BufferPosition {
    pub row: usize,
    pub column: usize,
}

/// Half-open range of cells covered by a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BufferRange {
    pub start: BufferPosition,
    /// Exclusive end position.
    pub end: BufferPosition,
}

impl BufferRange {
    pub fn contains(&self, position: BufferPosition) -> bool {
        position.row == self.start.row
            && position.column >= self.start.column
            && position.column < self.end.column
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvidedLink {
    pub range: BufferRange,
    pub text: String,
}

/// Computes links for a line using a shared pattern and activates them
/// through the addon's handler.
#[derive(Clone)]
pub struct WebLinkProvider {
    pattern: CompositePattern,
    handler: Arc<dyn LinkHandler>,
}

impl WebLinkProvider {
    pub fn new(pattern: CompositePattern, handler: Arc<dyn LinkHandler>) -> Self {
        Self { pattern, handler }
    }

    pub fn pattern(&self) -> &CompositePattern {
        &self.pattern
    }

    /// Links on one buffer line. Ranges are character columns, not bytes.
    pub fn provide_links(&self, line: &str, row: usize) -> Vec<ProvidedLink> {
        let matches = find_links(&self.pattern, line);
        if matches.is_empty() {
            return Vec::new();
        }

        // Byte offset → char index, with a sentinel for the exclusive end
        let mut byte_to_char = vec![0usize; line.len() + 1];
        for (char_idx, (byte_idx, _)) in line.char_indices().enumerate() {
            byte_to_char[byte_idx] = char_idx;
        }
        byte_to_char[line.len()] = line.chars().count();

        let links: Vec<ProvidedLink> = matches
            .into_iter()
            .map(|m| ProvidedLink {
                range: BufferRange {
                    start: BufferPosition {
                        row,
                        column: byte_to_char[m.uri_offset],
                    },
                    end: BufferPosition {
                        row,
                        column: byte_to_char[m.uri_end()],
                    },
                },
                text: m.uri,
            })
            .collect();

        debug!(
            event = "core.provider.links_provided",
            row = row,
            count = links.len()
        );
        links
    }

    /// The link under `position`, if any.
    pub fn link_at(&self, line: &str, position: BufferPosition) -> Option<ProvidedLink> {
        self.provide_links(line, position.row)
            .into_iter()
            .find(|link| link.range.contains(position))
    }

    /// Forward a user interaction on `link` to the handler.
    pub fn activate(&self, event: &InteractionEvent, link: &ProvidedLink) {
        debug!(event = "core.provider.link_activated", uri = %link.text);
        self.handler.handle(event, &link.text);
    }
}
