//! Keyword highlighting over a PDF viewer's text layer.
//!
//! Reimplements the browser-extension content script's highlight/clear cycle
//! around an explicit marker registry: every text mutation is recorded when
//! made and reversed exactly on clear, so clearing restores the document
//! text byte-for-byte.

pub mod command;
pub mod engine;
pub mod error;
pub mod layer;

pub use command::{handle_command, Command, Response};
pub use engine::HighlightEngine;
pub use error::HighlightError;
pub use layer::{Page, Segment, TextRun, ViewerDocument};
