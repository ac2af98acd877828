use crate::error::DiffError;
use crate::error::Result;
use crate::hunk::Hunk;

/// A textual position within one commit's version of a file. `character` is
/// carried through translation untouched; only `line` is remapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: i32,
    pub character: i32,
}

/// Translates `position`, expressed in the original file's coordinate space,
/// into the new file's coordinate space according to the diff `hunks` between
/// the two versions.
///
/// Returns `Ok(None)` when the line was added, removed, or edited between the
/// versions: such a line has no stable counterpart, and guessing would point
/// the caller at unrelated code.
pub fn translate_position(hunks: &[Hunk], position: Position) -> Result<Option<Position>> {
    // The anchor is the last hunk starting at or before the queried line.
    // Every hunk header already encodes the cumulative offset of all earlier
    // hunks in its own start fields, so the anchor alone determines the
    // translation; summing over prior hunks would double-count.
    let first_after = hunks
        .iter()
        .position(|hunk| hunk.orig_start_line > position.line)
        .unwrap_or(hunks.len());

    match first_after.checked_sub(1) {
        // The line precedes every hunk, so no offset has accumulated yet.
        None => Ok(Some(position)),
        Some(anchor) => translate_within_hunk(&hunks[anchor], position),
    }
}

fn translate_within_hunk(hunk: &Hunk, position: Position) -> Result<Option<Position>> {
    if position.line >= hunk.orig_start_line + hunk.orig_lines {
        // The anchor hunk ends before this line; shift by the anchor's net
        // insertion/deletion count and nothing else.
        let relative_difference = (hunk.new_start_line + hunk.new_lines)
            - (hunk.orig_start_line + hunk.orig_lines);
        return Ok(Some(Position {
            line: position.line + relative_difference,
            character: position.character,
        }));
    }

    // Two fingers, one per file, both starting at the hunk's first line.
    let mut orig_offset = hunk.orig_start_line;
    let mut new_offset = hunk.new_start_line;

    for body_line in &hunk.body {
        let added = body_line.starts_with('+');
        let removed = body_line.starts_with('-');

        // An added line exists only in the new file; a removed line only in
        // the original. Context lines advance both fingers.
        if !added {
            orig_offset += 1;
        }
        if !removed {
            new_offset += 1;
        }

        if orig_offset - 1 < position.line {
            continue;
        }

        if !added && !removed {
            // The line is untouched by the hunk and exists in both files.
            return Ok(Some(Position {
                line: new_offset - 1,
                character: position.character,
            }));
        }

        // The queried line was edited, removed, or newly added. There is no
        // position in the other file that means the same thing, so refuse to
        // translate rather than return a plausible-but-wrong mapping.
        return Ok(None);
    }

    // The header put the line inside this hunk's range, but the body ran out
    // of original-file lines first.
    Err(DiffError::MalformedHunk)
}
