//! Core types shared across the compiler pipeline.
//!
//! Map data read from list files flows in as [`NodeData`] and [`EdgeData`],
//! the attribute parser turns it into [`Statement`]s, and the compiler
//! reports grammar violations as [`CompileError`]s.

use std::collections::HashMap;

mod compile_error;
mod statement;

pub use compile_error::CompileError;
pub use statement::Statement;

/// Node name to raw attribute text, one entry per location.
pub type NodeData = HashMap<String, String>;

/// Directed `(src, dst)` pair to raw attribute text, one entry per passage.
pub type EdgeData = HashMap<(String, String), String>;
