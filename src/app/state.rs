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

use crate::app::scrollback::ScrollbackBuffer;
use crate::app::typing::TypingTracker;
use crate::chat::{Channel, ChannelEntry, ChatDirectory, NameLookup};
use std::rc::Rc;
use tokio::sync::mpsc;

/// Events delivered to the render loop from outside the input path: the
/// protocol feed and the typing tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Entry(ChannelEntry),
    TypingFooter(Option<String>),
}

/// Sibling panel a horizontal navigation key hands focus to. The pager
/// never consumes Left/Right itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Left,
    Right,
}

pub struct App {
    pub channel: Option<Channel>,
    pub scrollback: ScrollbackBuffer,
    /// Current typing status line, rendered on the pager's bottom border.
    pub typing_footer: Option<String>,
    pub directory: Rc<dyn ChatDirectory>,
    pub event_tx: mpsc::UnboundedSender<ViewEvent>,
    pub event_rx: mpsc::UnboundedReceiver<ViewEvent>,
    pub should_quit: bool,
    /// Set when state changed since the last frame; cleared after drawing.
    pub dirty: bool,
    /// Pending focus handoff raised by Left/Right, consumed by the host
    /// loop.
    pub focus_request: Option<FocusTarget>,
    tracker: Option<TypingTracker>,
}

impl App {
    pub fn new(directory: Rc<dyn ChatDirectory>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            channel: None,
            scrollback: ScrollbackBuffer::new(0, 0),
            typing_footer: None,
            directory,
            event_tx,
            event_rx,
            should_quit: false,
            dirty: true,
            focus_request: None,
            tracker: None,
        }
    }

    /// Ingest one entry into the scrollback.
    pub fn append(&mut self, entry: ChannelEntry) {
        let names: &dyn NameLookup = self.directory.as_ref();
        self.scrollback.append(entry, names);
        self.dirty = true;
    }

    /// Bind the view to `channel`: reset the buffer and restart the typing
    /// tracker against the new channel id.
    pub async fn set_channel(&mut self, channel: Channel) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.stop().await;
        }
        self.scrollback.clear();
        self.typing_footer = None;
        self.tracker = Some(TypingTracker::spawn(
            channel.id.clone(),
            Rc::clone(&self.directory),
            self.event_tx.clone(),
        ));
        tracing::info!(channel = %channel.name, "channel bound");
        self.channel = Some(channel);
        self.dirty = true;
    }

    /// Viewport dimensions of the wrapped content area.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.scrollback.set_width(width);
        self.scrollback.set_height(height);
        self.dirty = true;
    }

    /// Stop the background tracker. Idempotent; no task survives the view.
    pub async fn teardown(&mut self) {
        if let Some(mut tracker) = self.tracker.take() {
            tracker.stop().await;
        }
    }
}
