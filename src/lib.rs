//! Markdown Preview Bridge
//!
//! The native side of a note-taking application's web-view preview.
//!
//! This library provides:
//! - The document bridge relaying state and requests between native code
//!   and the render surface
//! - A typed notification model with subscriber registration
//! - A JSON channel codec for the render-surface boundary
//! - An async stdio host loop driving the bridge over that channel

pub mod bridge;
pub mod channel;
pub mod config;
pub mod host;
pub mod note;

// Re-exports for clean public API
pub use bridge::{BridgeEvent, DocumentBridge, SubscriptionId};
pub use channel::{dispatch, encode_event, SurfaceMessage};
pub use config::{Config, RendererMode};
pub use note::NoteFile;
