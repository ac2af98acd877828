/// A contiguous changed region from a unified diff between two versions of
/// one file.
///
/// Line numbers are one-based, matching `git diff` headers. `body` holds the
/// hunk's lines verbatim, each retaining its leading marker: `+` (addition),
/// `-` (deletion), or a space (context).
///
/// For a well-formed diff, hunks arrive in file order, never overlap, and are
/// strictly increasing in `orig_start_line`. Each header's start fields
/// already encode the cumulative insertion/deletion offset of every earlier
/// hunk, so a consumer never needs to re-sum preceding hunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub orig_start_line: i32,
    pub orig_lines: i32,
    pub new_start_line: i32,
    pub new_lines: i32,
    pub body: Vec<String>,
}
