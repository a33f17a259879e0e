//! Surface Channel Codec
//!
//! The JSON message surface between the bridge and the render surface.
//! Inbound messages map one-to-one onto the bridge's callback entry points;
//! outbound, surface-bound notifications serialize as single JSON lines.
//! The codec carries no state and applies no filtering of its own.

use serde::Deserialize;

use crate::bridge::{BridgeEvent, DocumentBridge};

/// A message sent by the render surface to the bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SurfaceMessage {
    /// TOC the surface extracted, with its outermost heading level (from 1)
    SetToc { toc: String, base_level: u32 },
    /// Heading anchor currently under the scroll position, empty for none
    SetHeader { anchor: String },
    /// A script-side log line
    SetLog { log: String },
    /// Key press for native key-binding logic
    KeyPressEvent { key: i32, ctrl: bool, shift: bool },
    /// The surface wants the text placeholder re-announced
    UpdateText,
    /// Result of a highlight request, echoing its id and timestamp
    HighlightTextDone { html: String, id: u64, timestamp: u64 },
    /// The surface accepts highlight requests from now on
    NoticeReadyToHighlight,
    /// Result of a conversion request
    TextToHtmlDone { text: String, html: String },
    /// The surface accepts conversion requests from now on
    NoticeReadyToTextToHtml,
    /// Page logic finished; resources may still be loading
    FinishLogics,
}

/// Parse one line received from the render surface.
pub fn decode_message(line: &str) -> serde_json::Result<SurfaceMessage> {
    serde_json::from_str(line)
}

/// Apply an inbound message to the bridge.
pub fn dispatch(bridge: &mut DocumentBridge, message: SurfaceMessage) {
    match message {
        SurfaceMessage::SetToc { toc, base_level } => bridge.set_toc(toc, base_level),
        SurfaceMessage::SetHeader { anchor } => bridge.set_header(anchor),
        SurfaceMessage::SetLog { log } => bridge.relay_log(log),
        SurfaceMessage::KeyPressEvent { key, ctrl, shift } => {
            bridge.key_press_event(key, ctrl, shift)
        }
        SurfaceMessage::UpdateText => bridge.update_text(),
        SurfaceMessage::HighlightTextDone {
            html,
            id,
            timestamp,
        } => bridge.highlight_text_done(html, id, timestamp),
        SurfaceMessage::NoticeReadyToHighlight => bridge.notice_ready_to_highlight(),
        SurfaceMessage::TextToHtmlDone { text, html } => bridge.text_to_html_done(text, html),
        SurfaceMessage::NoticeReadyToTextToHtml => bridge.notice_ready_to_text_to_html(),
        SurfaceMessage::FinishLogics => bridge.finish_logics(),
    }
}

/// Serialize an event for the render surface as one JSON line, or `None`
/// for events addressed at native listeners only.
pub fn encode_event(event: &BridgeEvent) -> Option<String> {
    if !event.surface_bound() {
        return None;
    }
    // Serialization of these payload shapes cannot fail
    serde_json::to_string(event).ok()
}
