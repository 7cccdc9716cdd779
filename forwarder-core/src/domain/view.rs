//! Display buffer
//!
//! The single text surface the panel renders. Locally generated status and
//! error lines are appended; log snapshots fetched from the backend replace
//! the whole text. Every mutation leaves the view scrolled to its end.

/// Default number of lines visible at once
pub const DEFAULT_VIEWPORT: usize = 20;

/// Text surface with append and full-replace semantics
#[derive(Debug, Clone)]
pub struct LogView {
    text: String,
    /// Index of the first visible line
    scroll_top: usize,
    viewport: usize,
    /// Sequence number of the last snapshot applied by `replace_snapshot`
    last_snapshot: Option<u64>,
}

impl LogView {
    /// Creates an empty view showing `viewport` lines at a time
    pub fn new(viewport: usize) -> Self {
        Self {
            text: String::new(),
            scroll_top: 0,
            viewport: viewport.max(1),
            last_snapshot: None,
        }
    }

    /// Appends one line and scrolls to the end
    ///
    /// If the current text does not end in a newline (a snapshot was just
    /// written) the line starts on a fresh row so the last log line is not
    /// altered.
    pub fn append_line(&mut self, line: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.text.push('\n');
        self.scroll_to_end();
    }

    /// Replaces the whole text with a fetched log snapshot
    ///
    /// `seq` is the dispatch order of the fetch that produced `lines`. A
    /// snapshot older than the last applied one is dropped and `false` is
    /// returned, so a slow response can never overwrite a newer one.
    pub fn replace_snapshot(&mut self, seq: u64, lines: &[String]) -> bool {
        if self.last_snapshot.is_some_and(|last| seq <= last) {
            return false;
        }

        self.last_snapshot = Some(seq);
        self.text = lines.join("\n");
        self.scroll_to_end();
        true
    }

    /// Full text of the buffer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All lines of the buffer, in display order
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Lines currently inside the viewport
    pub fn visible_lines(&self) -> Vec<&str> {
        self.text
            .lines()
            .skip(self.scroll_top)
            .take(self.viewport)
            .collect()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Scrolls so the newest line is the last visible one
    pub fn scroll_to_end(&mut self) {
        self.scroll_top = self.line_count().saturating_sub(self.viewport);
    }

    pub fn is_scrolled_to_end(&self) -> bool {
        self.scroll_top == self.line_count().saturating_sub(self.viewport)
    }

    /// Sequence number of the snapshot currently applied, if any
    pub fn last_snapshot(&self) -> Option<u64> {
        self.last_snapshot
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT)
    }
}
