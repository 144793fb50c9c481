use crate::constants::BUBBLE_WIDTH_PERCENT;
use crate::models::{Message, Sender};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

// "│ " on the left plus " │" on the right.
const BUBBLE_CHROME: usize = 4;

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128),
        Sender::Bot => Color::Rgb(144, 238, 144),
    })
}

/// Renders a message as a boxed bubble no wider than 75% of `width`.
/// User bubbles hug the right edge and bot bubbles the left.
pub fn render_message(message: &Message, width: u16) -> Vec<Line<'static>> {
    let style = base_style(message.sender);
    let alignment = match message.sender {
        Sender::User => Alignment::Right,
        Sender::Bot => Alignment::Left,
    };

    let max_bubble = (width as usize * BUBBLE_WIDTH_PERCENT as usize / 100).max(BUBBLE_CHROME + 1);
    let text_width = max_bubble - BUBBLE_CHROME;

    let wrapped: Vec<String> = wrap(&message.text, text_width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    let inner = wrapped
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .min(text_width);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(
        Line::from(Span::styled(format!("╭{}╮", "─".repeat(inner + 2)), style))
            .alignment(alignment),
    );
    for text in wrapped {
        let padding = inner.saturating_sub(text.width());
        lines.push(
            Line::from(vec![
                Span::styled("│ ", style),
                Span::styled(format!("{}{}", text, " ".repeat(padding)), style),
                Span::styled(" │", style),
            ])
            .alignment(alignment),
        );
    }
    lines.push(
        Line::from(Span::styled(format!("╰{}╯", "─".repeat(inner + 2)), style))
            .alignment(alignment),
    );

    lines
}
