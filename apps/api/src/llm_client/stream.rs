//! Incremental decoder for the upstream token framing.
//!
//! The completions endpoint frames its streamed reply as Server-Sent Events:
//! `data: {json}` lines separated by blank lines, terminated by
//! `data: [DONE]`. Network chunks can split a line anywhere, so the decoder
//! buffers bytes and only yields events for complete lines.

use serde::Deserialize;

/// One decoded event from the upstream stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A text token extracted from `choices[0].delta.content`.
    Token(String),
    /// The `[DONE]` terminator.
    Done,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Debug, Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
}

/// Stateful line reassembler. Feed it raw network chunks in arrival order.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one network chunk, returning every event completed by it.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line_bytes: Vec<u8> = self.buffer.drain(..=pos).collect();
            let Ok(line) = std::str::from_utf8(&line_bytes) else {
                continue;
            };
            if let Some(event) = parse_line(line.trim_end_matches(['\n', '\r'])) {
                events.push(event);
            }
        }
        events
    }
}

/// Parses one complete line. Blank keep-alives, comment lines and frames
/// without a text delta yield nothing.
fn parse_line(line: &str) -> Option<SseEvent> {
    if line.is_empty() || line.starts_with(':') {
        return None;
    }

    let data = line.strip_prefix("data:")?.trim_start();
    if data == "[DONE]" {
        return Some(SseEvent::Done);
    }

    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    let content = chunk.choices.into_iter().next()?.delta.content?;
    if content.is_empty() {
        return None;
    }
    Some(SseEvent::Token(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_line(content: &str) -> String {
        format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
            serde_json::to_string(content).unwrap()
        )
    }

    #[test]
    fn test_decodes_single_token() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(delta_line("Hello").as_bytes());
        assert_eq!(events, vec![SseEvent::Token("Hello".to_string())]);
    }

    #[test]
    fn test_decodes_multiple_lines_in_one_chunk() {
        let mut decoder = SseDecoder::new();
        let chunk = format!("{}{}data: [DONE]\n", delta_line("1. "), delta_line("Bio"));
        let events = decoder.feed(chunk.as_bytes());
        assert_eq!(
            events,
            vec![
                SseEvent::Token("1. ".to_string()),
                SseEvent::Token("Bio".to_string()),
                SseEvent::Done,
            ]
        );
    }

    #[test]
    fn test_reassembles_line_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("split token");
        let (head, tail) = line.split_at(17);

        assert!(decoder.feed(head.as_bytes()).is_empty());
        let events = decoder.feed(tail.as_bytes());
        assert_eq!(events, vec![SseEvent::Token("split token".to_string())]);
    }

    #[test]
    fn test_role_only_delta_yields_nothing() {
        let mut decoder = SseDecoder::new();
        let events =
            decoder.feed(b"data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n");
        assert!(events.is_empty());
    }

    #[test]
    fn test_finish_frame_with_empty_delta_yields_nothing() {
        let mut decoder = SseDecoder::new();
        let events = decoder
            .feed(b"data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n");
        assert!(events.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut decoder = SseDecoder::new();
        let events =
            decoder.feed(b"data: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\r\n\r\n");
        assert_eq!(events, vec![SseEvent::Token("x".to_string())]);
    }

    #[test]
    fn test_comment_and_blank_lines_ignored() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b": keep-alive\n\n");
        assert!(events.is_empty());
    }

    #[test]
    fn test_malformed_json_ignored() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: {not json}\n");
        assert!(events.is_empty());
    }

    #[test]
    fn test_done_without_trailing_tokens() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: [DONE]\n");
        assert_eq!(events, vec![SseEvent::Done]);
    }

    #[test]
    fn test_multibyte_content_split_mid_character() {
        let mut decoder = SseDecoder::new();
        let line = delta_line("café ☕");
        let bytes = line.as_bytes();
        // Split inside the multibyte character, not at a char boundary.
        let mid = bytes.len() - 9;

        assert!(decoder.feed(&bytes[..mid]).is_empty());
        let events = decoder.feed(&bytes[mid..]);
        assert_eq!(events, vec![SseEvent::Token("café ☕".to_string())]);
    }
}
