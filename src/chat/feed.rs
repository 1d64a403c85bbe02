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

//! Demo stand-in for the chat-protocol client: a fixed user roster, a
//! mutable typing set, and a scripted feed task. The real client lives
//! outside this crate; everything here goes through the same traits and
//! event channel it would use.

use crate::app::ViewEvent;
use crate::chat::{Channel, ChannelEntry, ChatDirectory, Message, NameLookup, UserId};
use chrono::Utc;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Pause while a scripted author "types" before their message lands.
const TYPING_PAUSE: Duration = Duration::from_millis(2500);
/// Gap between a message landing and the next author starting to type.
const MESSAGE_GAP: Duration = Duration::from_millis(1500);

pub struct DemoDirectory {
    users: HashMap<UserId, String>,
    typing: RefCell<HashMap<String, Vec<UserId>>>,
}

impl DemoDirectory {
    pub fn with_demo_roster() -> Self {
        let users = [
            ("U01ANDRA", "andra"),
            ("U02BORIS", "boris"),
            ("U03CLEO", "cleo"),
            ("U04DANE", "dane"),
        ]
        .into_iter()
        .map(|(id, name)| (UserId::from(id), name.to_owned()))
        .collect();
        Self { users, typing: RefCell::new(HashMap::new()) }
    }

    /// Replace the typing set for `channel`.
    pub fn set_typing(&self, channel: &str, users: Vec<UserId>) {
        self.typing.borrow_mut().insert(channel.to_owned(), users);
    }
}

impl NameLookup for DemoDirectory {
    fn display_name(&self, user: &UserId) -> Option<String> {
        self.users.get(user).cloned()
    }
}

impl ChatDirectory for DemoDirectory {
    fn typing_users(&self, channel: &str) -> Vec<UserId> {
        self.typing.borrow().get(channel).cloned().unwrap_or_default()
    }
}

pub fn demo_channel() -> Channel {
    Channel {
        id: "C0DEMO".to_owned(),
        name: "demo".to_owned(),
        topic: Some("scripted scrollback tour".to_owned()),
        purpose: None,
        is_private: false,
    }
}

/// Scripted channel history, replayed in a loop: (author id, message text).
const SCRIPT: &[(&str, &str)] = &[
    ("U01ANDRA", "morning all, staging is back up"),
    ("U02BORIS", "nice, did the cache warmup run too, <@U01ANDRA>?"),
    ("U01ANDRA", "yes, finished a minute ago"),
    ("U03CLEO", "reading through the incident notes now, the long-line rendering case is exactly what bit us last week"),
    ("U04DANE", "pushed a fix for the footer flicker, <@U03CLEO> mind taking a look when you get a chance?"),
    ("U02BORIS", "deploy notes are in the usual doc\nshout if anything looks off"),
    ("U03CLEO", "on it"),
];

/// Drive the demo: typing bursts followed by scripted messages, forever.
/// Ends on its own once the view's event channel closes.
pub fn spawn_feed(
    directory: Rc<DemoDirectory>,
    channel_id: String,
    events: UnboundedSender<ViewEvent>,
) -> JoinHandle<()> {
    tokio::task::spawn_local(async move {
        loop {
            for (author, text) in SCRIPT {
                let author = UserId::from(*author);
                directory.set_typing(&channel_id, vec![author.clone()]);
                tokio::time::sleep(TYPING_PAUSE).await;
                directory.set_typing(&channel_id, Vec::new());

                let message =
                    Message { author, text: Some((*text).to_owned()), ts: Utc::now() };
                if events.send(ViewEvent::Entry(ChannelEntry::Message(message))).is_err() {
                    return;
                }
                tokio::time::sleep(MESSAGE_GAP).await;
            }

            // Once per cycle: a malformed delivery for the fallback path,
            // then a group typing burst.
            let raw = serde_json::json!({ "type": "reaction_added", "reaction": "shipit" });
            if events.send(ViewEvent::Entry(ChannelEntry::Raw(raw))).is_err() {
                return;
            }
            directory.set_typing(
                &channel_id,
                ["U01ANDRA", "U02BORIS", "U03CLEO", "U04DANE"]
                    .iter()
                    .map(|id| UserId::from(*id))
                    .collect(),
            );
            tokio::time::sleep(TYPING_PAUSE).await;
            directory.set_typing(&channel_id, Vec::new());
            tokio::time::sleep(MESSAGE_GAP).await;
        }
    })
}
