use crate::constants::{STATUS_CONNECTED, STATUS_KEY_REQUIRED, THINKING_TEXT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// One-line status bar: a spinner while a reply is pending on the left and
/// whether an API key is configured on the right.
#[derive(Debug)]
pub struct StatusIndicator {
    thinking: bool,
    key_configured: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new(key_configured: bool) -> Self {
        Self {
            thinking: false,
            key_configured,
            spinner_idx: 0,
        }
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn update_spinner(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn connection_label(&self) -> &'static str {
        if self.key_configured {
            STATUS_CONNECTED
        } else {
            STATUS_KEY_REQUIRED
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(32)])
            .split(area);

        if self.thinking {
            let spinner = SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()];
            let thinking = Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(
                    THINKING_TEXT,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]);
            frame.render_widget(Paragraph::new(thinking).alignment(Alignment::Left), chunks[0]);
        }

        let status_color = if self.key_configured {
            Color::Green
        } else {
            Color::Red
        };
        let status = Line::from(vec![
            Span::styled("API Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.connection_label(), Style::default().fg(status_color)),
        ]);
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_label_follows_key() {
        assert_eq!(StatusIndicator::new(true).connection_label(), STATUS_CONNECTED);
        assert_eq!(StatusIndicator::new(false).connection_label(), STATUS_KEY_REQUIRED);
    }

    #[test]
    fn test_spinner_only_moves_while_thinking() {
        let mut indicator = StatusIndicator::new(true);
        indicator.update_spinner();
        assert_eq!(indicator.spinner_idx, 0);

        indicator.set_thinking(true);
        indicator.update_spinner();
        indicator.update_spinner();
        assert_eq!(indicator.spinner_idx, 2);
        assert!(indicator.is_thinking());
    }
}
