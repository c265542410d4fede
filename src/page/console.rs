//! Captured console output.

use serde::Serialize;

/// One styled run of a console line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    /// CSS declarations applied via a `%c` directive, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One `console.log` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub segments: Vec<Segment>,
}

impl LogEntry {
    /// The line with styling stripped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// In-memory sink for everything the page logs.
///
/// Only the `%c` directive is interpreted: each occurrence starts a new
/// segment styled by the next extra argument. Text before the first `%c`
/// stays unstyled and empty runs are dropped.
#[derive(Debug, Default)]
pub struct Console {
    entries: Vec<LogEntry>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, format: &str, styles: &[&str]) {
        let mut segments = Vec::new();
        let mut chunks = format.split("%c");
        if let Some(head) = chunks.next()
            && !head.is_empty()
        {
            segments.push(Segment {
                text: head.to_owned(),
                style: None,
            });
        }
        for (i, chunk) in chunks.enumerate() {
            if chunk.is_empty() {
                continue;
            }
            segments.push(Segment {
                text: chunk.to_owned(),
                style: styles.get(i).map(|s| (*s).to_owned()),
            });
        }
        self.entries.push(LogEntry { segments });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn drain(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All captured lines with styling stripped, one per entry.
    pub fn plain_lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::plain_text).collect()
    }
}
