//! CV document rendering engine.
//!
//! `render(record, template_id)` turns a CV record into a typed document tree
//! for one of six templates. The optional enhancement pass rewrites the
//! record's free text through a remote model before rendering, and the same
//! model drafts cover letters from the record's background.

pub mod config;
pub mod cover_letter;
pub mod enhance;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod render;

pub use models::Record;
pub use render::{render, Document};
