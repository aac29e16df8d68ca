//! Default values shared by the configuration components

/// Chat model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Upper bound on generated tokens per optimization
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature; kept low so the JSON envelope stays stable
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// OpenAI-compatible API root
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// System prompt override, relative to the working directory
pub const DEFAULT_PROMPT_FILE: &str = "prompt.md";

/// Bind address for the web server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port for the web server
pub const DEFAULT_PORT: u16 = 7860;

/// Page title
pub const DEFAULT_TITLE: &str = "AI Prompt Optimizer";

/// Page subtitle
pub const DEFAULT_DESCRIPTION: &str =
    "Transform your casual questions into professional, optimized prompts for better AI responses";
