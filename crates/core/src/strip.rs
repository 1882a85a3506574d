//! Comment stripping — the first pipeline stage.
//!
//! Line-oriented: each input line yields at most one output line. Text from a
//! `//` marker to end-of-line is cut; text between `/*` and `*/` is cut even
//! across lines. A line wholly swallowed by an open block comment is dropped
//! from the output entirely (not emitted as an empty line), which matters
//! downstream: the declaration scanner treats *blank* lines as a signal, and
//! comment-swallowed lines must not fabricate that signal.
//!
//! A block comment opened but never closed before end-of-file silently
//! swallows everything after it. That is accepted input handling here, not an
//! error.

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_MARKER: &str = "//";

/// Remove comment text from `lines`, preserving the order of what remains.
pub fn strip_comments(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut in_block = false;

    for line in lines {
        if in_block {
            match line.find(BLOCK_CLOSE) {
                // Still inside the block comment: the line never reaches
                // downstream stages.
                None => continue,
                Some(idx) => {
                    in_block = false;
                    let rest = &line[idx + BLOCK_CLOSE.len()..];
                    out.push(strip_outside(rest, &mut in_block));
                }
            }
        } else {
            out.push(strip_outside(line, &mut in_block));
        }
    }

    out
}

/// Strip comment text from a line fragment that starts outside any block
/// comment. Sets `in_block` if the fragment opens a block comment that does
/// not close on the same line. The earliest marker wins by position, so a
/// `//` inside `/* … */` is never honored and vice versa.
fn strip_outside(fragment: &str, in_block: &mut bool) -> String {
    let mut kept = String::new();
    let mut rest = fragment;

    loop {
        let block = rest.find(BLOCK_OPEN);
        let line = rest.find(LINE_MARKER);

        match (block, line) {
            (None, None) => {
                kept.push_str(rest);
                return kept;
            }
            // Line comment first: everything after it is gone.
            (None, Some(l)) => {
                kept.push_str(&rest[..l]);
                return kept;
            }
            (Some(b), Some(l)) if l < b => {
                kept.push_str(&rest[..l]);
                return kept;
            }
            // Block comment first.
            (Some(b), _) => {
                kept.push_str(&rest[..b]);
                match rest[b + BLOCK_OPEN.len()..].find(BLOCK_CLOSE) {
                    None => {
                        *in_block = true;
                        return kept;
                    }
                    Some(c) => {
                        rest = &rest[b + BLOCK_OPEN.len() + c + BLOCK_CLOSE.len()..];
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
