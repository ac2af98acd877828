//! Multi-upload code-intelligence queries with commit-relative position
//! translation.
//!
//! A repository may have several indexed snapshots ("uploads"), each tied to
//! a commit that is usually not the commit being browsed. [`QueryResolver`]
//! fans a definitions/references/hover query out across the uploads nearest
//! to the browsed commit: for each upload it translates the requested
//! position through the git diff between the two commits (skipping uploads
//! where the line was edited away), issues the query against that upload's
//! index, and merges results according to the query kind — first non-empty
//! answer wins for definitions and hover, while references accumulate across
//! uploads behind a single opaque pagination cursor.

mod config;
mod cursor;
mod error;
mod proto;
mod resolver;
mod source;

pub use config::QueryConfig;
pub use cursor::decode_cursor;
pub use cursor::encode_cursor;
pub use error::QueryError;
pub use error::Result;
pub use proto::Hover;
pub use proto::Location;
pub use proto::PagedPositionArgs;
pub use proto::PositionArgs;
pub use proto::Range;
pub use proto::ReferencePage;
pub use proto::Upload;
pub use resolver::QueryResolver;
pub use source::DiffSource;
pub use source::GitDiffSource;
pub use source::IntelSource;
pub use source::SourceQuery;
