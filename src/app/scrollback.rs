// chatterm — a terminal scrollback viewer for chat streams
// Copyright (C) 2026  The chatterm authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::app::format;
use crate::chat::{ChannelEntry, NameLookup};
use textwrap::{Options, WrapAlgorithm};

/// Label shown in place of the last visible row while content continues
/// below the window.
pub const MORE_MARKER: &str = "- more -";

/// One physical terminal row. `source` is the index of the entry the row
/// was wrapped from; a multi-row entry repeats its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub source: usize,
    pub text: String,
}

/// A row handed to the renderer: real content, or the "more" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRow<'a> {
    Line(&'a RenderLine),
    More,
}

/// Append-only message log plus its wrapped projection onto a viewport.
///
/// Entries are never mutated after ingestion. The derived `RenderLine`s are
/// rebuilt in full whenever the wrap width changes; per-entry display text
/// is cached so a re-wrap never repeats name resolution.
pub struct ScrollbackBuffer {
    entries: Vec<ChannelEntry>,
    display: Vec<String>,
    lines: Vec<RenderLine>,
    width: usize,
    height: usize,
    scroll: usize,
}

impl ScrollbackBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { entries: Vec::new(), display: Vec::new(), lines: Vec::new(), width, height, scroll: 0 }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll >= self.max_scroll()
    }

    /// Ingest one entry: format once, wrap to the current width, extend the
    /// row projection. Keeps the bottom in view only when the viewport was
    /// already there; a reader who scrolled up is left where they are.
    pub fn append(&mut self, entry: ChannelEntry, names: &dyn NameLookup) {
        let at_bottom = self.is_at_bottom();
        let source = self.entries.len();
        let text = format::display_text(&entry, names);
        self.lines.extend(wrap_entry(source, &text, self.width));
        self.display.push(text);
        self.entries.push(entry);
        if at_bottom {
            self.scroll = self.max_scroll();
        }
    }

    /// Change the wrap width. A no-op when unchanged; otherwise every row is
    /// recomputed from the cached display strings.
    pub fn set_width(&mut self, width: usize) {
        if width == self.width {
            return;
        }
        self.width = width;
        self.lines.clear();
        for (source, text) in self.display.iter().enumerate() {
            self.lines.extend(wrap_entry(source, text, width));
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Viewport height used for scroll clamping and paging.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// At most `height` rows starting at the (clamped) scroll offset. When
    /// content continues past the window, the last row is replaced by the
    /// sentinel: one real row is sacrificed for a persistent cue that more
    /// lines exist below.
    pub fn visible_window(&self, height: usize) -> Vec<WindowRow<'_>> {
        if height == 0 {
            return Vec::new();
        }
        let total = self.lines.len();
        let scroll = self.scroll.min(total.saturating_sub(height));
        let count = height.min(total - scroll);
        let mut rows: Vec<WindowRow<'_>> =
            self.lines[scroll..scroll + count].iter().map(WindowRow::Line).collect();
        if total > scroll + height {
            rows.pop();
            rows.push(WindowRow::More);
        }
        rows
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.page());
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.page()).min(self.max_scroll());
    }

    /// Empty the log, e.g. when the view is re-bound to another channel.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.display.clear();
        self.lines.clear();
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// One page of scrolling, keeping a row of overlap for continuity.
    fn page(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }
}

/// Word-preserving wrap of one entry's display text. Hard newlines are
/// honored; a token wider than the viewport is hard-cut. Empty text still
/// produces one row, so every entry occupies at least one line.
fn wrap_entry(source: usize, text: &str, width: usize) -> Vec<RenderLine> {
    let options = Options::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    text.split('\n')
        .flat_map(|part| textwrap::wrap(part, &options))
        .map(|row| RenderLine { source, text: row.into_owned() })
        .collect()
}
