use crate::chat_message::render_message;
use crate::constants::INPUT_PLACEHOLDER;
use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Builds every transcript line for a given width, one blank line between bubbles.
pub fn transcript_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in app.conversation.all() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, width));
    }
    lines
}

pub fn draw_messages(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = transcript_lines(app, area.width);

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.set_max_scroll(total_lines.saturating_sub(area.height));
    let offset = app.max_scroll - app.scroll;

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

pub fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let border_color = if app.is_processing {
        Color::DarkGray
    } else {
        Color::LightBlue
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(if app.is_processing { " ... " } else { " Send " })
        .border_style(Style::default().fg(border_color));

    let visible_width = area.width.saturating_sub(2);
    let text_width = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
    let scroll_offset = text_width.saturating_sub(visible_width.saturating_sub(1));

    let input = if app.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.input.as_str(),
            Style::default().fg(Color::White),
        ))
    };

    f.render_widget(
        Paragraph::new(input).block(block).scroll((0, scroll_offset)),
        area,
    );

    if !app.is_processing {
        let cursor_x = area.x + 1 + (text_width - scroll_offset);
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
