//! Stdio Host Loop
//!
//! Drives a [`DocumentBridge`] over a line-delimited JSON channel: stdin is
//! the render surface's side, stdout carries surface-bound notifications.
//! The host stands in for the editor UI as the bridge's native listener.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::bridge::DocumentBridge;
use crate::channel;
use crate::config::{Config, RendererMode};
use crate::note::NoteFile;

/// Start the host on stdin/stdout.
pub async fn serve(config: Config) -> Result<()> {
    serve_channel(config, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Run the host loop over an arbitrary channel (useful for testing).
///
/// Returns when the reader reaches EOF, i.e. when the surface side closes
/// the channel.
pub async fn serve_channel<R, W>(config: Config, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut bridge = DocumentBridge::new(None);

    // Surface-bound notifications queue up here and drain to the writer
    // after each dispatch.
    let outbound: Rc<RefCell<VecDeque<String>>> = Rc::new(RefCell::new(VecDeque::new()));
    let queue = outbound.clone();
    bridge.subscribe(move |event| {
        if let Some(line) = channel::encode_event(event) {
            queue.borrow_mut().push_back(line);
        }
    });

    // Headless stand-in for the editor's native listeners.
    bridge.subscribe(|event| {
        if !event.surface_bound() {
            log::debug!("native notification: {:?}", event);
        }
    });

    if let Some(path) = &config.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        let mut note = NoteFile::new(name, content);
        note.path = Some(path.clone());
        let note = Arc::new(note);
        bridge.set_file(Some(note.clone()));

        match config.renderer {
            // The surface pulls and converts the markdown itself
            RendererMode::WebJs => bridge.update_text(),
            // The input is already-rendered HTML supplied by the embedder
            RendererMode::Native => bridge.set_html(note.content.clone()),
        }
    }
    flush_outbound(&outbound, &mut writer).await?;

    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match channel::decode_message(&line) {
            Ok(message) => channel::dispatch(&mut bridge, message),
            Err(e) => {
                log::warn!("dropping malformed surface message: {}", e);
                continue;
            }
        }
        flush_outbound(&outbound, &mut writer).await?;
    }

    log::info!("surface channel closed, shutting down");
    Ok(())
}

async fn flush_outbound<W>(queue: &Rc<RefCell<VecDeque<String>>>, writer: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    loop {
        let line = queue.borrow_mut().pop_front();
        let Some(line) = line else { break };
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}
