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

use crate::app::mention;
use crate::chat::{ChannelEntry, NameLookup};

/// Flatten one channel entry into the display string the scrollback wraps.
///
/// Well-formed messages render as `author: text`, with the author name and
/// the leading mention token resolved through `names`. Everything else (a
/// raw protocol value, or a message that arrived without text) degrades to
/// a generic stringification instead of failing the render path.
pub fn display_text(entry: &ChannelEntry, names: &dyn NameLookup) -> String {
    match entry {
        ChannelEntry::Message(msg) => {
            let Some(text) = &msg.text else {
                tracing::warn!(author = %msg.author, "message arrived without text");
                return stringify(entry);
            };
            let author =
                names.display_name(&msg.author).unwrap_or_else(|| msg.author.to_string());
            format!("{author}: {}", mention::resolve_first(text, names))
        }
        ChannelEntry::Raw(_) => {
            tracing::warn!("non-message entry reached the formatter");
            stringify(entry)
        }
    }
}

fn stringify(entry: &ChannelEntry) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| "(unrenderable entry)".to_owned())
}
