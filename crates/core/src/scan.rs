//! Declaration scanning — merge the lines of each `extern` declaration into
//! one raw string.
//!
//! A declaration ends at a `;` with no body. A definition opens a body with
//! `{` before any `;` ever appears. That single distinction lets the scanner
//! tell a binding stub from an accidental inline implementation without
//! tracking brace depth: while hunting for the terminator, hitting `{` or a
//! blank line means the candidate is a definition and is discarded whole.

/// Marker that a line starts (or continues into) a function declaration.
/// Surrounding whitespace keeps identifiers like `defn_table` from matching.
const FN_TOKEN: &str = " fn ";

/// Walk isolated extern-block lines and return each declaration as a single
/// concatenated string, in source order.
pub fn collect_declarations(lines: &[String]) -> Vec<String> {
    let mut decls = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        if !line.contains(FN_TOKEN) || line.trim().is_empty() {
            index += 1;
            continue;
        }

        let start = index;
        let mut end = index;
        let mut is_definition = false;

        // Hunt for the terminating `;`, extending over following lines.
        while !lines[end].contains(';') {
            if lines[end].contains('{') || lines[end].trim().is_empty() {
                is_definition = true;
                break;
            }
            if end + 1 >= lines.len() {
                // Ran off the end of the block with no terminator; treat
                // like a definition and drop the candidate.
                is_definition = true;
                break;
            }
            end += 1;
        }

        if is_definition {
            index = end + 1;
            continue;
        }

        decls.push(lines[start..=end].concat());
        index = end + 1;
    }

    decls
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
