use serde::Deserialize;
use serde::Serialize;

/// An indexed snapshot of the repository at a specific commit.
///
/// Callers supply uploads ordered by ascending commit distance from the
/// queried commit; the resolver preserves that order and never re-sorts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upload {
    pub id: i64,
    pub commit: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Range {
    pub start_line: i32,
    pub start_character: i32,
    pub end_line: i32,
    pub end_character: i32,
}

/// A single code-intelligence result location within the repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub range: Range,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hover {
    pub text: String,
    pub range: Range,
}

/// Position arguments for single-best-result queries (definitions, hover).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionArgs {
    pub line: i32,
    pub character: i32,
}

/// Position arguments for paginated queries (references).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagedPositionArgs {
    pub line: i32,
    pub character: i32,
    /// Requested page size; clamped by [`crate::QueryConfig`].
    pub first: Option<i32>,
    /// Opaque cursor from the previous page, absent on the first page.
    pub after: Option<String>,
}

/// One page of reference results spanning every upload still contributing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferencePage {
    pub locations: Vec<Location>,
    /// Cursor for the next page; `None` when all uploads are exhausted.
    pub end_cursor: Option<String>,
}
