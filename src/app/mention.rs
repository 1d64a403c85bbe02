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

use crate::chat::{NameLookup, UserId};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Inline user reference as it appears on the wire, e.g. `<@U023BECGF>`.
#[allow(clippy::expect_used)]
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<@([A-Z0-9]+)>").expect("mention pattern compiles"));

/// Rewrite the first `<@ID>` token in `text` to `@name`.
///
/// Only the leftmost token is substituted per call; later tokens pass
/// through verbatim. An id the lookup does not know keeps its raw form
/// behind the `@` so the line stays readable.
pub fn resolve_first<'a>(text: &'a str, names: &dyn NameLookup) -> Cow<'a, str> {
    MENTION_RE.replace(text, |caps: &Captures<'_>| {
        let id = &caps[1];
        match names.display_name(&UserId::from(id)) {
            Some(name) => format!("@{name}"),
            None => {
                tracing::warn!(user = id, "mention references an unknown user");
                format!("@{id}")
            }
        }
    })
}
