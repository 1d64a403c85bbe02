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

mod layout;
mod pager;
pub mod theme;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    pager::render(frame, areas.body, app);

    if let Some(hints) = areas.hints {
        render_hints(frame, hints);
    }
}

const HINTS: &str = "\u{2191}/\u{2193} scroll   PgUp/PgDn page   g/G top/bottom   \u{2190}/\u{2192} panel   q quit";

fn render_hints(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(HINTS, Style::default().fg(theme::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
