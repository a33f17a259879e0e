//! In-process host loop tests over an in-memory channel.

use std::io::Write;

use tempfile::NamedTempFile;

use mdview_bridge::config::{Config, RendererMode};
use mdview_bridge::host::serve_channel;

fn output_lines(buffer: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(buffer.to_vec())
        .expect("valid utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}

#[tokio::test]
async fn update_text_crosses_the_channel() {
    let input = concat!(
        "{\"method\":\"noticeReadyToHighlight\"}\n",
        "{\"method\":\"updateText\"}\n",
    );
    let mut output = Vec::new();

    serve_channel(Config::default(), input.as_bytes(), &mut output)
        .await
        .expect("host loop");

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "textChanged");
}

#[tokio::test]
async fn native_only_messages_produce_no_output() {
    let input = concat!(
        "{\"method\":\"setToc\",\"toc\":\"<ul><li>H1</li></ul>\",\"baseLevel\":2}\n",
        "{\"method\":\"setHeader\",\"anchor\":\"sec_3\"}\n",
        "{\"method\":\"keyPressEvent\",\"key\":74,\"ctrl\":true,\"shift\":false}\n",
        "{\"method\":\"finishLogics\"}\n",
    );
    let mut output = Vec::new();

    serve_channel(Config::default(), input.as_bytes(), &mut output)
        .await
        .expect("host loop");

    assert!(output.is_empty());
}

#[tokio::test]
async fn malformed_lines_are_skipped() {
    let input = concat!(
        "this is not json\n",
        "{\"method\":\"reloadPage\"}\n",
        "\n",
        "{\"method\":\"updateText\"}\n",
    );
    let mut output = Vec::new();

    serve_channel(Config::default(), input.as_bytes(), &mut output)
        .await
        .expect("host loop");

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "textChanged");
}

#[tokio::test]
async fn web_js_renderer_announces_text_on_startup() {
    let note = write_temp_note("# Title\n\nBody.\n");
    let config = Config {
        file: Some(note.path().to_path_buf()),
        renderer: RendererMode::WebJs,
        log_level: "info".to_string(),
    };
    let mut output = Vec::new();

    serve_channel(config, &b""[..], &mut output)
        .await
        .expect("host loop");

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "textChanged");
}

#[tokio::test]
async fn native_renderer_pushes_file_content_as_html() {
    let note = write_temp_note("<h1>Title</h1>");
    let config = Config {
        file: Some(note.path().to_path_buf()),
        renderer: RendererMode::Native,
        log_level: "info".to_string(),
    };
    let mut output = Vec::new();

    serve_channel(config, &b""[..], &mut output)
        .await
        .expect("host loop");

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "htmlChanged");
    assert_eq!(lines[0]["html"], "<h1>Title</h1>");
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let config = Config {
        file: Some(std::path::PathBuf::from("/nonexistent/note.md")),
        renderer: RendererMode::WebJs,
        log_level: "info".to_string(),
    };
    let mut output = Vec::new();

    let result = serve_channel(config, &b""[..], &mut output).await;
    assert!(result.is_err());
}

fn write_temp_note(content: &str) -> NamedTempFile {
    let mut note = NamedTempFile::new().expect("create temp note");
    note.write_all(content.as_bytes()).expect("write temp note");
    note
}
