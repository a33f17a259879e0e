//! Bridge Notification Model
//!
//! One variant per notification channel the bridge broadcasts. Native
//! listeners receive every event; the subset addressed at the render surface
//! additionally crosses the channel boundary as tagged JSON.

use serde::{Deserialize, Serialize};

/// A notification broadcast by the bridge to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BridgeEvent {
    /// The text placeholder was poked; the surface should re-pull content.
    TextChanged { text: String },
    /// TOC state was replaced. `base_level` is the level of the outermost
    /// heading present, counted from 1.
    TocChanged { toc: String, base_level: u32 },
    /// Document HTML state was replaced.
    HtmlChanged { html: String },
    /// A log line was relayed from either side.
    LogChanged { log: String },
    /// The surface scrolled to a new current heading; empty anchor for none.
    HeaderChanged { anchor: String },
    /// Key press reported by the surface for native key-binding logic.
    KeyPressed { key: i32, ctrl: bool, shift: bool },
    /// Ask the surface to scroll to `anchor` (no leading '#', empty = top).
    RequestScrollToAnchor { anchor: String },
    /// Ask the surface to highlight a text segment.
    RequestHighlightText { text: String, id: u64, timestamp: u64 },
    /// Highlight result, echoing the request's id and timestamp.
    TextHighlighted { html: String, id: u64, timestamp: u64 },
    /// The surface accepts highlight requests from now on.
    ReadyToHighlightText,
    /// Ask the surface to convert `text` to HTML.
    RequestTextToHtml { text: String },
    /// Conversion result, carrying the original text and the HTML.
    TextToHtmlFinished { text: String, html: String },
    /// The surface accepts conversion requests from now on.
    ReadyToTextToHtml,
    /// Page logic (math rendering etc.) finished; resources may still load.
    LogicsFinished,
}

impl BridgeEvent {
    /// Whether this event is addressed at the render surface (and therefore
    /// crosses the channel) rather than at native listeners only.
    pub fn surface_bound(&self) -> bool {
        matches!(
            self,
            BridgeEvent::TextChanged { .. }
                | BridgeEvent::HtmlChanged { .. }
                | BridgeEvent::RequestScrollToAnchor { .. }
                | BridgeEvent::RequestHighlightText { .. }
                | BridgeEvent::RequestTextToHtml { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_changed_serializes_with_base_level() {
        let event = BridgeEvent::TocChanged {
            toc: "<ul><li>H1</li></ul>".to_string(),
            base_level: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "tocChanged",
                "toc": "<ul><li>H1</li></ul>",
                "baseLevel": 2
            })
        );
    }

    #[test]
    fn test_unit_variant_serializes_as_tag_only() {
        let json = serde_json::to_value(BridgeEvent::LogicsFinished).unwrap();
        assert_eq!(json, serde_json::json!({ "event": "logicsFinished" }));
    }

    #[test]
    fn test_request_events_are_surface_bound() {
        assert!(
            BridgeEvent::RequestHighlightText {
                text: "abc".to_string(),
                id: 7,
                timestamp: 42,
            }
            .surface_bound()
        );
        assert!(!BridgeEvent::ReadyToHighlightText.surface_bound());
        assert!(
            !BridgeEvent::HeaderChanged {
                anchor: "h".to_string()
            }
            .surface_bound()
        );
    }
}
