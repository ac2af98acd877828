//! Line-position translation between two commits of the same file, driven by
//! the unified diff between them.
//!
//! The crate is a pure leaf: it parses `git diff` output for a single file
//! into [`Hunk`]s and maps a position expressed in the original commit's
//! coordinate space into the new commit's coordinate space. Lines that were
//! added, removed, or edited have no stable counterpart and translate to
//! `None` rather than a guessed position.

mod error;
mod hunk;
mod parser;
mod position;

pub use error::DiffError;
pub use error::Result;
pub use hunk::Hunk;
pub use parser::parse_file_diff;
pub use position::Position;
pub use position::translate_position;
