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

use crate::app::{App, MORE_MARKER, WindowRow};
use crate::chat::Channel;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = box_title(app.channel.as_ref());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .title(title_line(&title, area));
    if let Some(footer) = &app.typing_footer {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {footer} "),
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::ITALIC),
        )));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // The wrap width follows the inner area; set_width is a no-op between
    // resizes, so this costs nothing on ordinary frames.
    app.scrollback.set_width(usize::from(inner.width));
    app.scrollback.set_height(usize::from(inner.height));

    let lines: Vec<Line<'_>> = app
        .scrollback
        .visible_window(usize::from(inner.height))
        .into_iter()
        .map(|row| match row {
            WindowRow::Line(line) => Line::raw(line.text.clone()),
            WindowRow::More => Line::styled(MORE_MARKER, Style::default().fg(theme::DIM)),
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Box title: channel name, then topic (purpose when no topic is set), then
/// the privacy flag.
pub fn box_title(channel: Option<&Channel>) -> String {
    let Some(ch) = channel else {
        return "Messages".to_owned();
    };
    let mut title = format!("Messages | {}", ch.name);

    let topic = ch
        .topic
        .as_deref()
        .filter(|t| !t.is_empty())
        .or_else(|| ch.purpose.as_deref().filter(|p| !p.is_empty()));
    if let Some(topic) = topic {
        title.push_str(&format!(" ({topic})"));
    }

    if ch.is_private {
        title.push_str(" [PRIVATE]");
    }
    title
}

fn title_line(title: &str, area: Rect) -> Line<'static> {
    // Corners plus one cell of breathing room on each side.
    let max_width = usize::from(area.width).saturating_sub(4);
    let fitted = fit_width(title, max_width);
    Line::from(Span::styled(
        format!(" {fitted} "),
        Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD),
    ))
}

fn fit_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut fitted = String::new();
    let mut width: usize = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width.saturating_add(ch_width).saturating_add(3) > max_width {
            break;
        }
        fitted.push(ch);
        width = width.saturating_add(ch_width);
    }
    fitted.push_str("...");
    fitted
}
