//! Parses `git diff` output for a single file into an ordered hunk list.
//!
//! Only the hunk headers and bodies are retained; the file-level preamble
//! (`diff --git`, `index`, `---`/`+++`, mode and rename lines) is skipped.
//! A diff with no hunks (identical files, or a binary file) parses to an
//! empty list rather than an error.

use crate::error::DiffError;
use crate::error::Result;
use crate::hunk::Hunk;

const HUNK_HEADER_MARKER: &str = "@@ -";
const NO_NEWLINE_MARKER: &str = "\\";

const PREAMBLE_MARKERS: &[&str] = &[
    "diff ",
    "index ",
    "--- ",
    "+++ ",
    "old mode",
    "new mode",
    "deleted file mode",
    "new file mode",
    "similarity index",
    "dissimilarity index",
    "rename from",
    "rename to",
    "copy from",
    "copy to",
    "Binary files",
];

pub fn parse_file_diff(input: &str) -> Result<Vec<Hunk>> {
    let mut hunks: Vec<Hunk> = Vec::new();
    let mut current: Option<HunkBuilder> = None;

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;

        // "\ No newline at end of file" annotates the preceding line and
        // counts toward neither file. Git emits it mid-body (after the last
        // old-side line) or after the hunk's final line, so it must be
        // skipped whether or not the current hunk is complete.
        if line.starts_with(NO_NEWLINE_MARKER) {
            continue;
        }

        if let Some(builder) = current.as_mut() {
            if !builder.is_complete() {
                builder.push_body_line(line, line_number)?;
                continue;
            }
            if let Some(finished) = current.take() {
                hunks.push(finished.finish());
            }
        }

        if line.starts_with(HUNK_HEADER_MARKER) {
            current = Some(HunkBuilder::from_header(line, line_number)?);
        } else if !is_preamble_line(line) {
            return Err(DiffError::Parse {
                message: format!("unexpected line outside hunk: {line:?}"),
                line_number,
            });
        }
    }

    if let Some(builder) = current {
        if !builder.is_complete() {
            return Err(DiffError::Parse {
                message: "diff ended mid-hunk".to_string(),
                line_number: input.lines().count(),
            });
        }
        hunks.push(builder.finish());
    }

    Ok(hunks)
}

fn is_preamble_line(line: &str) -> bool {
    line.is_empty()
        || PREAMBLE_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
}

struct HunkBuilder {
    hunk: Hunk,
    orig_remaining: i32,
    new_remaining: i32,
}

impl HunkBuilder {
    fn from_header(line: &str, line_number: usize) -> Result<Self> {
        let (orig, new) = parse_hunk_header(line).ok_or_else(|| DiffError::Parse {
            message: format!("invalid hunk header: {line:?}"),
            line_number,
        })?;

        Ok(Self {
            hunk: Hunk {
                orig_start_line: orig.0,
                orig_lines: orig.1,
                new_start_line: new.0,
                new_lines: new.1,
                body: Vec::new(),
            },
            orig_remaining: orig.1,
            new_remaining: new.1,
        })
    }

    fn is_complete(&self) -> bool {
        self.orig_remaining == 0 && self.new_remaining == 0
    }

    fn push_body_line(&mut self, line: &str, line_number: usize) -> Result<()> {
        match line.chars().next() {
            Some('+') => self.new_remaining -= 1,
            Some('-') => self.orig_remaining -= 1,
            // Git emits context lines with a leading space; a fully empty
            // line can appear when trailing whitespace was stripped.
            Some(' ') | None => {
                self.orig_remaining -= 1;
                self.new_remaining -= 1;
            }
            Some(other) => {
                return Err(DiffError::Parse {
                    message: format!("unknown hunk line marker {other:?}"),
                    line_number,
                });
            }
        }

        if self.orig_remaining < 0 || self.new_remaining < 0 {
            return Err(DiffError::Parse {
                message: "hunk body longer than its header declares".to_string(),
                line_number,
            });
        }

        self.hunk.body.push(line.to_string());
        Ok(())
    }

    fn finish(self) -> Hunk {
        self.hunk
    }
}

/// Parses `@@ -l[,n] +l[,n] @@ ...` into `((orig_start, orig_lines),
/// (new_start, new_lines))`. An omitted count defaults to 1.
fn parse_hunk_header(line: &str) -> Option<((i32, i32), (i32, i32))> {
    let rest = line.strip_prefix("@@ -")?;
    let (ranges, _section) = rest.split_once(" @@")?;
    let (orig, new) = ranges.split_once(" +")?;
    Some((parse_range(orig)?, parse_range(new)?))
}

fn parse_range(spec: &str) -> Option<(i32, i32)> {
    match spec.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((spec.parse().ok()?, 1)),
    }
}
