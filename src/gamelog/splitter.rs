//! Segmentation of a log into marker-delimited event blocks.
//!
//! ```text
//! == GameEvent: forge.game.event.GameEventTurnPhase ===   <- opens block 0
//! turn=3                                                  <- body of block 0
//! == GameEvent: forge.game.event.GameEventGameOutcome === <- opens block 1
//! result=Ai(1)-Burn has won                               <- body of block 1
//! ```
//!
//! The splitter never looks inside a body. Lines are decoded lossily, so a
//! stray non-UTF-8 byte degrades one character instead of the whole log.

use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;

use super::types::RawBlock;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^== GameEvent: (.+) ===").expect("valid marker regex"));

/// Extract the event kind if `line` is a block marker.
pub fn marker_kind(line: &str) -> Option<&str> {
    MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lazy iterator over the event blocks of a line stream.
///
/// Lines preceding the first marker are discarded. The block still open at
/// end of stream is yielded last.
pub struct EventBlocks<R> {
    reader: R,
    buf: Vec<u8>,
    open: Option<(String, Vec<String>)>,
    next_ordinal: usize,
    done: bool,
}

impl<R: BufRead> EventBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            open: None,
            next_ordinal: 0,
            done: false,
        }
    }

    /// Recover the underlying reader, e.g. to seek back and split again.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read one line without its terminator; `Ok(None)` at end of stream.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn close(&mut self, kind: String, lines: Vec<String>) -> RawBlock {
        let block = RawBlock {
            kind,
            body: lines.join("\n"),
            ordinal: self.next_ordinal,
        };
        self.next_ordinal += 1;
        block
    }
}

impl<R: BufRead> Iterator for EventBlocks<R> {
    type Item = io::Result<RawBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.read_line() {
                Ok(Some(line)) => {
                    if let Some(kind) = marker_kind(&line) {
                        let previous = self.open.replace((kind.to_string(), Vec::new()));
                        if let Some((kind, lines)) = previous {
                            return Some(Ok(self.close(kind, lines)));
                        }
                    } else if let Some((_, lines)) = self.open.as_mut() {
                        lines.push(line);
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Ok(None) => {
                    self.done = true;
                    let (kind, lines) = self.open.take()?;
                    return Some(Ok(self.close(kind, lines)));
                }
            }
        }
    }
}

/// Split an in-memory log into blocks.
pub fn split_str(text: &str) -> Vec<RawBlock> {
    EventBlocks::new(text.as_bytes())
        .filter_map(Result::ok)
        .collect()
}
