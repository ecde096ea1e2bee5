// AI narrative feedback over a categorized analysis.
// All model calls go through llm_client; nothing here talks HTTP directly.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
