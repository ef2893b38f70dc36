pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// OpenRouter model identifiers queried by the council, in display order.
pub const COUNCIL_MODELS: &[&str] = &[
    "openai/gpt-5.1",
    "google/gemini-3-pro-preview",
    "anthropic/claude-opus-4.5",
    "deepseek/deepseek-v3.2",
];

/// Model that synthesizes the final answer from the council's responses.
pub const CHAIRMAN_MODEL: &str = "google/gemini-3-pro-preview";

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

pub const DATA_DIR: &str = "data/conversations";

/// Turns (user+assistant pairs) forwarded to the chairman. Earlier stages
/// always see the full history.
pub const MAX_HISTORY_FOR_CHAIRMAN: usize = 3;
