use crate::conversation::Conversation;
use crate::models::Message;
use crate::status_indicator::StatusIndicator;

pub struct App {
    pub conversation: Conversation,
    pub input: String,
    /// Set from submit until the reply lands; gates editing and sending.
    pub is_processing: bool,
    pub should_quit: bool,
    /// Lines scrolled up from the bottom of the transcript; 0 follows new messages.
    pub scroll: u16,
    /// Furthest `scroll` can go, as measured by the last draw of the transcript.
    pub max_scroll: u16,
    pub status_indicator: StatusIndicator,
}

impl App {
    pub fn new(key_configured: bool) -> App {
        App {
            conversation: Conversation::new(),
            input: String::new(),
            is_processing: false,
            should_quit: false,
            scroll: 0,
            max_scroll: 0,
            status_indicator: StatusIndicator::new(key_configured),
        }
    }

    pub fn can_send(&self) -> bool {
        !self.is_processing && !self.input.trim().is_empty()
    }

    /// Moves the input into the transcript as a user message and returns the
    /// text to dispatch. Blank input, or input while a reply is pending, does nothing.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.conversation.append(Message::user(text.clone()));
        self.is_processing = true;
        self.status_indicator.set_thinking(true);
        self.scroll = 0;
        Some(text)
    }

    pub fn receive_reply(&mut self, reply: String) {
        self.conversation.append(Message::bot(reply));
        self.is_processing = false;
        self.status_indicator.set_thinking(false);
        self.scroll = 0;
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_processing {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_processing {
            self.input.pop();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn on_tick(&mut self) {
        self.status_indicator.update_spinner();
    }
}
