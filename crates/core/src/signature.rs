//! Signature splitting — pull a function name, raw argument annotations, and
//! a raw return annotation out of one merged declaration string.
//!
//! This is string surgery, not parsing: the argument list ends at the first
//! `)` that still has the terminating `;` somewhere after it, and argument
//! fragments split their label from their type at the *last* colon. The
//! last-colon rule is what makes `libc::`-qualified annotations like
//! `handle: libc::uintptr_t` come out as `uintptr_t` without special-casing
//! the path prefix here.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CheckError, Result};

/// Name token up to the first following `(`.
const NAME_PATTERN: &str = r"fn(.*?)\(";
/// Return arrow after the argument list closes.
const ARROW_PATTERN: &str = r"\)\s*->";

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).unwrap())
}

fn arrow_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ARROW_PATTERN).unwrap())
}

/// A declaration split into its parts, types still raw (qualifiers and path
/// prefixes intact). Validation happens in [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSignature {
    pub name: String,
    pub raw_args: Vec<String>,
    pub raw_return: Option<String>,
}

/// Split one merged declaration string into name, raw argument annotations,
/// and raw return annotation.
pub fn split_signature(decl: &str) -> Result<RawSignature> {
    let caps = name_re()
        .captures(decl)
        .ok_or_else(|| CheckError::MalformedDeclaration(format!("no `fn … (` pattern in `{}`", decl.trim())))?;
    let name_match = caps.get(1).expect("pattern has one capture group");
    let name = name_match.as_str().trim().to_string();
    let args_start = name_match.end() + 1;

    // The argument list closes at the first `)` after the name's `(` that is
    // still followed by the statement terminator. Searching from `args_start`
    // keeps a `)` earlier in the line (an attribute, say) from producing an
    // inverted range.
    let args_end = decl[args_start..]
        .match_indices(')')
        .find(|(idx, _)| decl[args_start + idx..].contains(';'))
        .map(|(idx, _)| args_start + idx)
        .ok_or_else(|| {
            CheckError::MalformedDeclaration(format!("unterminated argument list in `{}`", decl.trim()))
        })?;

    let mut raw_args = Vec::new();
    for fragment in decl[args_start..args_end].split(',') {
        if fragment.trim().is_empty() {
            continue;
        }
        let colon = fragment.rfind(':').ok_or_else(|| {
            CheckError::MalformedDeclaration(format!("input parameter malformed: `{}`", fragment.trim()))
        })?;
        raw_args.push(fragment[colon + 1..].to_string());
    }

    // Return annotation sits between the arrow and the final terminator.
    let tail = &decl[args_end..];
    let raw_return = match (arrow_re().find(tail), tail.rfind(';')) {
        (Some(arrow), Some(semi)) if arrow.end() <= semi => {
            Some(tail[arrow.end()..semi].to_string())
        }
        _ => None,
    };

    Ok(RawSignature { name, raw_args, raw_return })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(Regex::new(NAME_PATTERN).is_ok());
        assert!(Regex::new(ARROW_PATTERN).is_ok());
    }

    #[test]
    fn test_name_args_and_return() {
        let sig = split_signature("    fn wlc_output_get_name(output: uintptr_t) -> *const c_char;")
            .unwrap();
        assert_eq!(sig.name, "wlc_output_get_name");
        assert_eq!(sig.raw_args, vec![" uintptr_t"]);
        assert_eq!(sig.raw_return.as_deref(), Some(" *const c_char"));
    }

    #[test]
    fn test_no_return_arrow_means_none() {
        let sig = split_signature("    fn wlc_run();").unwrap();
        assert_eq!(sig.name, "wlc_run");
        assert!(sig.raw_args.is_empty());
        assert_eq!(sig.raw_return, None);
    }

    #[test]
    fn test_trailing_comma_and_empty_fragments_dropped() {
        let sig = split_signature("fn f(a: size_t, b: pid_t,);").unwrap();
        assert_eq!(sig.raw_args.len(), 2);
    }

    #[test]
    fn test_qualified_label_uses_last_colon() {
        let sig = split_signature("fn f(handle: libc::uintptr_t);").unwrap();
        assert_eq!(sig.raw_args, vec![String::from("uintptr_t")]);
    }

    #[test]
    fn test_attribute_before_fn_token() {
        // A `)` ahead of the function's own `(` must not derail the
        // argument-list search.
        let sig =
            split_signature("    #[cfg(target_os = \"linux\")] fn f(x: c_int);").unwrap();
        assert_eq!(sig.name, "f");
        assert_eq!(sig.raw_args, vec![" c_int"]);
        assert_eq!(sig.raw_return, None);
    }

    #[test]
    fn test_missing_fn_pattern_is_malformed() {
        let err = split_signature("static COUNT: u32;").unwrap_err();
        assert!(matches!(err, CheckError::MalformedDeclaration(_)), "got {err:?}");
    }

    #[test]
    fn test_typeless_fragment_is_malformed() {
        let err = split_signature("fn f(just_a_name);").unwrap_err();
        match err {
            CheckError::MalformedDeclaration(msg) => {
                assert!(msg.contains("just_a_name"), "fragment not named: {msg}")
            }
            other => panic!("expected MalformedDeclaration, got {other:?}"),
        }
    }

    #[test]
    fn test_merged_multi_line_equals_single_line() {
        let single = split_signature("fn wlc_view_focus(view: uintptr_t, force: bool);").unwrap();
        let merged =
            split_signature("fn wlc_view_focus(view: uintptr_t,                 force: bool);")
                .unwrap();
        assert_eq!(single.name, merged.name);
        let trim = |v: &[String]| v.iter().map(|s| s.trim().to_string()).collect::<Vec<_>>();
        assert_eq!(trim(&single.raw_args), trim(&merged.raw_args));
    }

    #[test]
    fn test_unit_return_annotation_preserved_raw() {
        let sig = split_signature("fn f() -> ();").unwrap();
        assert_eq!(sig.raw_return.as_deref(), Some(" ()"));
    }
}
