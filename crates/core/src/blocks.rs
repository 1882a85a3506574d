//! Extern-block isolation — keep only lines lexically inside an
//! `extern "C" { … }` block.
//!
//! Two-state scan over comment-free lines. The opener and closer lines
//! themselves are not emitted; everything between them is emitted verbatim.
//! Nested braces are not tracked: the first line inside a block whose trimmed
//! text ends with `}` closes it. FFI binding files do not nest extern blocks,
//! so brace-depth tracking is deliberately left out.

use regex::Regex;

/// Matches an extern block opener such as `extern "C" {` or
/// `#[link(name = "wlc")] extern "C"{`.
const OPENER_PATTERN: &str = r#"extern\s+"C"\s*\{"#;

/// Return only the lines strictly inside `extern "C"` blocks.
pub fn extern_block_lines(lines: &[String]) -> Vec<String> {
    // Pattern is a checked constant; see tests.
    let opener = Regex::new(OPENER_PATTERN).unwrap();
    let mut out = Vec::new();
    let mut inside = false;

    for line in lines {
        let trimmed = line.trim();
        if !inside {
            inside = opener.is_match(trimmed);
            continue;
        }
        if trimmed.ends_with('}') {
            inside = false;
            continue;
        }
        out.push(line.clone());
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
