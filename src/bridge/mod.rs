//! Document Bridge
//!
//! The relay between a note's in-memory representation and the web-view
//! render surface. Native code pushes state and requests through the bridge;
//! the render surface reports results, readiness and user interaction back
//! through the callback entry points. Every operation is a plain state write
//! followed by one notification broadcast; the bridge transforms nothing.

pub mod event;
pub mod subscriber;

pub use event::BridgeEvent;
pub use subscriber::SubscriptionId;

use std::sync::Arc;

use crate::note::NoteFile;
use subscriber::SubscriberRegistry;

/// Observable bridge state for one preview pane.
///
/// The bridge assumes serialized call delivery (a single-threaded
/// event-driven host) and performs no locking of its own. Requests and their
/// asynchronous results are correlated only by the caller-supplied
/// id/timestamp pair; filtering stale results is the caller's job.
pub struct DocumentBridge {
    /// The note being previewed. Owned by the file layer, never mutated or
    /// deallocated here. May be absent.
    file: Option<Arc<NoteFile>>,

    // text does NOT contain actual content; setting it only serves to fire
    // the text-changed notification toward the surface.
    text: String,

    /// Rendered TOC HTML, with the level of its outermost heading (from 1).
    /// The base level is meaningless while the TOC is empty.
    toc: String,
    toc_base_level: u32,

    /// Anchor of the heading currently scrolled to, empty for none.
    /// Reported via notification only.
    header: String,

    /// Rendered document HTML. Populated only when the native side renders
    /// the document body itself.
    html: String,

    // One-shot latches, set by the surface's readiness callbacks. There is
    // no reset path; a reloaded surface gets a fresh bridge.
    ready_to_highlight: bool,
    ready_to_text_to_html: bool,

    subscribers: SubscriberRegistry,
}

impl DocumentBridge {
    /// Create a bridge for `file`, which may be absent.
    pub fn new(file: Option<Arc<NoteFile>>) -> Self {
        DocumentBridge {
            file,
            text: String::new(),
            toc: String::new(),
            toc_base_level: 0,
            header: String::new(),
            html: String::new(),
            ready_to_highlight: false,
            ready_to_text_to_html: false,
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Register a listener invoked synchronously on every notification,
    /// in registration order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BridgeEvent) + 'static,
    {
        self.subscribers.add(listener)
    }

    /// Remove a previously registered listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(id);
    }

    fn emit(&mut self, event: BridgeEvent) {
        log::trace!("bridge notification: {:?}", event);
        self.subscribers.notify(&event);
    }

    // ---- Native-side operations (native -> bridge -> surface) ----

    /// Replace the file reference. No notification is tied to the rebind.
    pub fn set_file(&mut self, file: Option<Arc<NoteFile>>) {
        self.file = file;
    }

    pub fn file(&self) -> Option<&Arc<NoteFile>> {
        self.file.as_ref()
    }

    /// Ask the surface to scroll to `anchor` (an element id without the
    /// leading '#'). An empty anchor scrolls to the top.
    pub fn scroll_to_anchor(&mut self, anchor: impl Into<String>) {
        self.emit(BridgeEvent::RequestScrollToAnchor {
            anchor: anchor.into(),
        });
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
        self.emit(BridgeEvent::HtmlChanged {
            html: self.html.clone(),
        });
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Request asynchronous highlighting of a text segment. The result
    /// arrives later via [`highlight_text_done`](Self::highlight_text_done)
    /// carrying the same `id` and `timestamp` for the caller to match.
    pub fn highlight_text_async(&mut self, text: impl Into<String>, id: u64, timestamp: u64) {
        self.emit(BridgeEvent::RequestHighlightText {
            text: text.into(),
            id,
            timestamp,
        });
    }

    /// Request asynchronous conversion of `text` to HTML.
    pub fn text_to_html_async(&mut self, text: impl Into<String>) {
        self.emit(BridgeEvent::RequestTextToHtml { text: text.into() });
    }

    /// Poke the text placeholder so the surface re-pulls document content.
    /// The placeholder carries no real content.
    pub fn update_text(&mut self) {
        self.emit(BridgeEvent::TextChanged {
            text: self.text.clone(),
        });
    }

    pub fn is_ready_to_highlight(&self) -> bool {
        self.ready_to_highlight
    }

    pub fn is_ready_to_text_to_html(&self) -> bool {
        self.ready_to_text_to_html
    }

    // ---- Callback entry points (surface -> bridge -> native) ----

    /// Record the TOC computed for the current document.
    ///
    /// Called by the surface once it has extracted headings, and equally
    /// usable from native code when the native renderer produces the TOC.
    /// `base_level` is the level of the outermost heading present, from 1.
    pub fn set_toc(&mut self, toc: impl Into<String>, base_level: u32) {
        self.toc = toc.into();
        self.toc_base_level = base_level;
        self.emit(BridgeEvent::TocChanged {
            toc: self.toc.clone(),
            base_level,
        });
    }

    pub fn toc(&self) -> &str {
        &self.toc
    }

    pub fn toc_base_level(&self) -> u32 {
        self.toc_base_level
    }

    /// The surface reports the heading anchor currently under the scroll
    /// position. Empty means no heading is current. No leading '#'.
    pub fn set_header(&mut self, anchor: impl Into<String>) {
        self.header = anchor.into();
        self.emit(BridgeEvent::HeaderChanged {
            anchor: self.header.clone(),
        });
    }

    /// Forward a log line to native listeners. Serves both directions: the
    /// surface reports script-side logs here, and native code relays its own.
    pub fn relay_log(&mut self, line: impl Into<String>) {
        self.emit(BridgeEvent::LogChanged { log: line.into() });
    }

    /// The surface reports a key press for native key-binding logic.
    pub fn key_press_event(&mut self, key: i32, ctrl: bool, shift: bool) {
        self.emit(BridgeEvent::KeyPressed { key, ctrl, shift });
    }

    /// Highlight result for an earlier [`highlight_text_async`] request.
    /// `id` and `timestamp` are echoed unmodified; the bridge does not
    /// discard stale results.
    ///
    /// [`highlight_text_async`]: Self::highlight_text_async
    pub fn highlight_text_done(&mut self, html: impl Into<String>, id: u64, timestamp: u64) {
        self.emit(BridgeEvent::TextHighlighted {
            html: html.into(),
            id,
            timestamp,
        });
    }

    /// The surface can now accept highlight requests. Latches; repeat calls
    /// re-notify but never clear the flag.
    pub fn notice_ready_to_highlight(&mut self) {
        self.ready_to_highlight = true;
        self.emit(BridgeEvent::ReadyToHighlightText);
    }

    /// Conversion result for an earlier [`text_to_html_async`] request,
    /// carrying the original text alongside the produced HTML.
    ///
    /// [`text_to_html_async`]: Self::text_to_html_async
    pub fn text_to_html_done(&mut self, text: impl Into<String>, html: impl Into<String>) {
        self.emit(BridgeEvent::TextToHtmlFinished {
            text: text.into(),
            html: html.into(),
        });
    }

    /// The surface can now accept text-to-HTML requests. Latches like
    /// [`notice_ready_to_highlight`](Self::notice_ready_to_highlight).
    pub fn notice_ready_to_text_to_html(&mut self) {
        self.ready_to_text_to_html = true;
        self.emit(BridgeEvent::ReadyToTextToHtml);
    }

    /// The surface finished its page logic (math rendering and the like).
    /// Page resources such as images may still be loading.
    pub fn finish_logics(&mut self) {
        self.emit(BridgeEvent::LogicsFinished);
    }
}

impl Default for DocumentBridge {
    fn default() -> Self {
        Self::new(None)
    }
}
