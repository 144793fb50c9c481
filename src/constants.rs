// UI Constants
pub const APP_TITLE: &str = "🤖 Gemini AI Chatbot";
pub const INPUT_PLACEHOLDER: &str = "Type your message here...";
pub const THINKING_TEXT: &str = "🤔 Bot is thinking...";
pub const STATUS_CONNECTED: &str = "🟢 Connected";
pub const STATUS_KEY_REQUIRED: &str = "🔴 API Key Required";
pub const GREETING: &str = "Hi! How can I help you today?";

/// Bubbles never take more than this share of the transcript width.
pub const BUBBLE_WIDTH_PERCENT: u16 = 75;

// API Constants
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

// Reply strings shown in the transcript
pub const MISSING_KEY_REPLY: &str =
    "⚠️ Please add your Gemini API key to the .env file to start chatting!";
pub const EMPTY_REPLY: &str = "Sorry, I couldn't generate a response. Please try again.";
pub const INVALID_REQUEST_REPLY: &str =
    "❌ Invalid API key or request format. Please check your Gemini API key.";
pub const PERMISSION_DENIED_REPLY: &str =
    "❌ API key doesn't have permission to access Gemini. Please check your API key settings.";
pub const RATE_LIMITED_REPLY: &str = "⏳ Too many requests. Please wait a moment and try again.";
pub const UNAVAILABLE_REPLY: &str =
    "❌ Failed to connect to Gemini API. Please check your internet connection and try again.";
