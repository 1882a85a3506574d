//! Core data types shared across the FFIScope pipeline: validated function
//! signatures, vocabulary warnings, and the per-file check report.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Function signatures
// ---------------------------------------------------------------------------

/// One validated `extern "C"` declaration. Built once per recognized
/// declaration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    /// Bare argument type names in declaration order. Empty for `fn f();`.
    pub arg_types: Vec<String>,
    /// Bare return type name. `None` when the declaration has no return
    /// arrow, and also when it spells out `-> ()` explicitly.
    pub return_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Warnings and the check report
// ---------------------------------------------------------------------------

/// A non-fatal style finding. Logged via `tracing::warn!` when emitted and
/// retained here so callers can summarize without re-running the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Result of checking one source file: every declaration found inside
/// `extern "C"` blocks, plus the warnings streamed along the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub functions: Vec<FunctionSignature>,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    /// True when the scan produced no style findings at all.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = CheckReport {
            functions: vec![FunctionSignature {
                name: "wlc_output_get_mask".to_string(),
                arg_types: vec!["uintptr_t".to_string()],
                return_type: Some("uint32_t".to_string()),
            }],
            warnings: vec![Warning::new("Using Rust type `u32` instead of a libc type")],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["functions"][0]["name"], "wlc_output_get_mask");
        assert_eq!(json["functions"][0]["arg_types"][0], "uintptr_t");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_absent_return_type_is_null() {
        let sig = FunctionSignature {
            name: "f".to_string(),
            arg_types: Vec::new(),
            return_type: None,
        };
        let json = serde_json::to_value(&sig).unwrap();
        assert!(json["return_type"].is_null(), "expected null, got {json}");
    }
}
