// Outreach script generation: turns a prospective contact into a short
// friend-request message plus the reasoning behind it.
// All LLM calls go through llm_client; nothing here talks to the provider directly.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod tracker;
pub mod validation;
