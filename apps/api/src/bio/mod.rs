// Bio generation: form validation, prompt rendering, token-stream relay,
// display split. All completion calls go through llm_client — no direct
// OpenAI calls here.

pub mod form;
pub mod handlers;
pub mod prompts;
pub mod splitter;
