// Resume analysis and application email generation.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod writer;
