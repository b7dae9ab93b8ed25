//! Saju — Four Pillars report generation backed by an external LLM.
//!
//! The pipeline is a single linear chain: render prompt template → call
//! model → parse/validate JSON → format Markdown/JSON or dashboard HTML.
//! The model call is an injected `ModelClient` so every stage is testable
//! with a stub collaborator.

pub mod chain;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod llm_client;
pub mod output;
pub mod prompts;
pub mod report;
pub mod routes;
pub mod schema;
pub mod state;
pub mod template;
