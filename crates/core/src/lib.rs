//! FFIScope — static checker for hand-written `extern "C"` declarations.
//!
//! Scans one Rust source file, isolates the declarations inside extern blocks,
//! and validates every argument and return type against the libc type-alias
//! vocabulary and the Rust primitive vocabulary. A misspelled or mismatched
//! type name at the FFI boundary is undefined behavior waiting to happen;
//! catching it is a string-level check, so that is all this does — no full
//! parse, no ABI or layout verification, one file per invocation.
//!
//! # Modules
//!
//! - [`strip`] — comment removal, line-oriented
//! - [`blocks`] — `extern "C" { … }` block isolation
//! - [`scan`] — multi-line declaration merging, definition exclusion
//! - [`signature`] — name / argument / return splitting
//! - [`validate`] — type normalization and vocabulary precedence
//! - [`vocab`] — the two built-in type vocabularies
//! - [`types`] — signatures, warnings, the check report
//! - [`error`] — fatal scan failures

pub mod blocks;
pub mod error;
pub mod scan;
pub mod signature;
pub mod strip;
pub mod types;
pub mod validate;
pub mod vocab;

use std::path::Path;

use tracing::{debug, warn};

use error::{CheckError, Result};
use types::{CheckReport, FunctionSignature};
use validate::TypeChecker;
use vocab::TypeVocabulary;

// ---------------------------------------------------------------------------
// .ffiscope.toml config loading
// ---------------------------------------------------------------------------

/// Config file name, looked up in the directory of the checked file (or an
/// explicitly given directory).
pub const CONFIG_FILE: &str = ".ffiscope.toml";

/// Known keys in `.ffiscope.toml`, for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["extra_libc_types", "extra_rust_types"];

/// Extra vocabulary entries layered on top of the built-in lists. Binding
/// crates routinely pass their own `#[repr(C)]` handle types (`Size`,
/// `Geometry`, …) across the boundary; this is how those get whitelisted.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub extra_libc_types: Vec<String>,
    pub extra_rust_types: Vec<String>,
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load `.ffiscope.toml` from `dir`, returning defaults when the file is
/// missing or unparseable. Unknown keys warn with a typo suggestion; a broken
/// config never fails the check.
pub fn load_config(dir: &Path) -> CheckConfig {
    let mut config = CheckConfig::default();
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return config;
    }
    debug!("Loading {}", config_path.display());

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) => {
            warn!("Could not read {}: {err}", config_path.display());
            return config;
        }
    };
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(err) => {
            warn!("Failed to parse {}: {err}", config_path.display());
            return config;
        }
    };

    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            let suggestion =
                KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)).unwrap();
            if edit_distance(key, suggestion) <= 3 {
                warn!("Unknown key `{key}` in {CONFIG_FILE} — did you mean `{suggestion}`?");
            } else {
                warn!(
                    "Unknown key `{key}` in {CONFIG_FILE} (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(names) = table.get("extra_libc_types").and_then(|v| v.as_array()) {
        config.extra_libc_types =
            names.iter().filter_map(|v| v.as_str().map(|s| s.to_string())).collect();
    }
    if let Some(names) = table.get("extra_rust_types").and_then(|v| v.as_array()) {
        config.extra_rust_types =
            names.iter().filter_map(|v| v.as_str().map(|s| s.to_string())).collect();
    }

    config
}

/// Build a [`TypeChecker`] over the built-in vocabularies extended with the
/// config's extra names.
pub fn build_checker(config: &CheckConfig) -> TypeChecker {
    let mut libc = TypeVocabulary::libc();
    libc.extend(config.extra_libc_types.iter().cloned());
    let mut rust = TypeVocabulary::rust_primitives();
    rust.extend(config.extra_rust_types.iter().cloned());
    TypeChecker::new(libc, rust)
}

// ---------------------------------------------------------------------------
// Scan drivers
// ---------------------------------------------------------------------------

/// Run the full pipeline over in-memory source text.
///
/// Fail-fast: the first malformed declaration or unknown type aborts the
/// scan and no partial report is returned. Warnings never abort.
pub fn check_source(content: &str, checker: &TypeChecker) -> Result<CheckReport> {
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let lines = strip::strip_comments(&lines);
    let lines = blocks::extern_block_lines(&lines);
    let declarations = scan::collect_declarations(&lines);

    let mut report = CheckReport::default();
    for declaration in &declarations {
        let raw = signature::split_signature(declaration)?;

        let mut arg_types = Vec::new();
        for raw_arg in &raw.raw_args {
            if let Some(bare) = checker.resolve(raw_arg, &mut report.warnings)? {
                arg_types.push(bare);
            }
        }
        let return_type = match &raw.raw_return {
            Some(raw_return) => checker.resolve(raw_return, &mut report.warnings)?,
            None => None,
        };

        debug!("validated declaration `{}`", raw.name);
        report.functions.push(FunctionSignature { name: raw.name, arg_types, return_type });
    }

    Ok(report)
}

/// Check one source file on disk. I/O failure surfaces as
/// [`CheckError::SourceUnavailable`], distinct from parse failures.
pub fn check_file(path: &Path, config: &CheckConfig) -> Result<CheckReport> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        CheckError::SourceUnavailable { path: path.to_path_buf(), source }
    })?;
    let checker = build_checker(config);
    check_source(&content, &checker)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("extra_libc_types", "extra_libc_types"), 0);
        assert_eq!(edit_distance("extra_libc_type", "extra_libc_types"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert!(config.extra_libc_types.is_empty());
        assert!(config.extra_rust_types.is_empty());
    }

    #[test]
    fn test_load_config_reads_extra_types() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "extra_rust_types = [\"Size\", \"Geometry\"]\nextra_libc_types = [\"wlc_handle\"]\n",
        )
        .unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.extra_rust_types, vec!["Size", "Geometry"]);
        assert_eq!(config.extra_libc_types, vec!["wlc_handle"]);
    }

    #[test]
    fn test_load_config_broken_toml_is_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "extra_rust_types = [unclosed").unwrap();
        let config = load_config(dir.path());
        assert!(config.extra_rust_types.is_empty());
    }

    #[test]
    fn test_check_source_end_to_end() {
        let source = r#"
extern "C" {
    fn output_set_sleep(output: uintptr_t, sleep: bool);
}
"#;
        let report = check_source(source, &TypeChecker::with_builtin()).unwrap();
        assert_eq!(report.functions.len(), 1);
        let sig = &report.functions[0];
        assert_eq!(sig.name, "output_set_sleep");
        assert_eq!(sig.arg_types, vec!["uintptr_t", "bool"]);
        assert_eq!(sig.return_type, None);
        // `bool` is a Rust primitive in a libc position.
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_check_source_unknown_type_fails_whole_scan() {
        let source = r#"
extern "C" {
    fn good();
    fn f(x: bogus_t);
}
"#;
        let err = check_source(source, &TypeChecker::with_builtin()).unwrap_err();
        match err {
            CheckError::UnknownType(name) => assert_eq!(name, "bogus_t"),
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }

    #[test]
    fn test_check_source_unit_return_absent_with_one_warning() {
        let source = "extern \"C\" {\n    fn f() -> ();\n}\n";
        let report = check_source(source, &TypeChecker::with_builtin()).unwrap();
        assert_eq!(report.functions.len(), 1);
        assert_eq!(report.functions[0].return_type, None);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_check_file_missing_is_source_unavailable() {
        let err = check_file(Path::new("/nonexistent/bindings.rs"), &CheckConfig::default())
            .unwrap_err();
        assert!(matches!(err, CheckError::SourceUnavailable { .. }), "got {err:?}");
    }
}
