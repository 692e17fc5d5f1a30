//! Test Utilities
//!
//! Helpers for picking apart captured terminal output.

#![allow(dead_code)]

use blockclock::Color;
use regex::Regex;

/// One block draw as it appears in the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRecord {
    pub row: u32,
    pub col: u32,
    pub color: Color,
}

impl BlockRecord {
    /// The exact bytes a block renderer emits for this record
    pub fn render(&self) -> String {
        format!(
            "\x1b[{};{}H{}■\x1b[0m",
            self.row,
            self.col,
            self.color.escape_code()
        )
    }
}

fn block_record_regex() -> Regex {
    Regex::new(r"\x1b\[(\d+);(\d+)H\x1b\[(3[1-4])m■\x1b\[0m").unwrap()
}

fn color_from_code(code: &str) -> Color {
    match code {
        "31" => Color::Red,
        "32" => Color::Green,
        "34" => Color::Blue,
        "33" => Color::Yellow,
        other => panic!("unexpected color code {}", other),
    }
}

/// Parse a stream that must consist of nothing but whole block records.
///
/// Returns `None` if any byte falls outside a complete record, i.e. two
/// draws were interleaved.
pub fn parse_block_stream(stream: &str) -> Option<Vec<BlockRecord>> {
    let re = block_record_regex();
    let mut records = Vec::new();
    let mut pos = 0;

    for caps in re.captures_iter(stream) {
        let whole = caps.get(0).unwrap();
        if whole.start() != pos {
            return None;
        }
        pos = whole.end();
        records.push(BlockRecord {
            row: caps[1].parse().unwrap(),
            col: caps[2].parse().unwrap(),
            color: color_from_code(&caps[3]),
        });
    }

    (pos == stream.len()).then_some(records)
}

/// Every `HH:MM:SS` clock value drawn at the start of `row`
pub fn clock_updates(stream: &str, row: u32) -> Vec<String> {
    let re = Regex::new(&format!(r"\x1b\[{};1H(\d{{2,}}:\d{{2}}:\d{{2}})", row)).unwrap();
    re.captures_iter(stream).map(|c| c[1].to_string()).collect()
}

/// Split a stream into the individual writes the driver can emit.
///
/// Returns `None` if the stream contains anything else.
pub fn tokenize(stream: &str) -> Option<Vec<String>> {
    let re = Regex::new(
        r"\x1b\[2J|\x1b\[\d+;\d+H|\x1b\[3[1-4]m|\x1b\[0m|\x1b\[\?25h|■|\d{2,}:\d{2}:\d{2}|\r\n",
    )
    .unwrap();
    let mut tokens = Vec::new();
    let mut pos = 0;

    for m in re.find_iter(stream) {
        if m.start() != pos {
            return None;
        }
        pos = m.end();
        tokens.push(m.as_str().to_string());
    }

    (pos == stream.len()).then_some(tokens)
}
