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

pub mod feed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque protocol-side user identifier, e.g. `U023BECGF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One chat message as delivered by the protocol layer. Immutable once
/// ingested. `text` is optional because upstream delivery is not perfectly
/// typed; the formatter degrades rather than reject such a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub author: UserId,
    #[serde(default)]
    pub text: Option<String>,
    pub ts: DateTime<Utc>,
}

/// Anything the protocol layer can hand the view. Untagged: a payload that
/// does not decode as a message is carried raw and rendered best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelEntry {
    Message(Message),
    Raw(serde_json::Value),
}

/// Channel metadata. Only the pager title consumes this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub is_private: bool,
}

/// Display-name resolution, backed by the protocol client's user cache.
pub trait NameLookup {
    /// `None` when the id is unknown to the client.
    fn display_name(&self, user: &UserId) -> Option<String>;
}

/// The slice of the chat-protocol client this view depends on.
pub trait ChatDirectory: NameLookup {
    /// Users currently typing in `channel`. The protocol layer owns TTL
    /// expiry; the returned set is already filtered.
    fn typing_users(&self, channel: &str) -> Vec<UserId>;
}

impl NameLookup for HashMap<UserId, String> {
    fn display_name(&self, user: &UserId) -> Option<String> {
        self.get(user).cloned()
    }
}
