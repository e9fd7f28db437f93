//! Conversation logging with keyword summaries.
//!
//! `convlog` takes a question/answer pair (or a pasted transcript), derives a
//! short summary from it, and appends the result to two files kept in step:
//!
//! | File | Format | Order |
//! |------|--------|-------|
//! | Record store | JSON array of records | Chronological, ids `1..N` |
//! | Rendered log | Markdown | Newest entry directly under the section marker |
//!
//! The summary is heuristic. Sentences are split on `。`, key points and
//! follow-up actions are sentences containing fixed keywords, and tags come
//! from an ordered keyword table.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`summary`] — Segmentation, key-point/follow-up extraction, and tagging
//! - [`store`] — The record repository, its JSON and in-memory backends, and the advisory lock
//! - [`render`] — Entry rendering and the marker-based log merge
//! - [`conversation`] — Record types and the [`ConversationManager`](conversation::ConversationManager) entry point
//! - [`error`] — The crate error type

pub mod config;
pub mod conversation;
pub mod error;
pub mod render;
pub mod store;
pub mod summary;

pub use conversation::{ConversationManager, ConversationRecord, RecordKind};
pub use error::{Error, Result};
