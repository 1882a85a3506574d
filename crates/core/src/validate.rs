//! Type normalization and validation against the two vocabularies.
//!
//! Precedence is load-bearing: libc first (silently correct), the explicit
//! unit return second (warn, treat as absent), Rust primitives third (warn
//! but accept), unknown last (fatal). Checking Rust primitives before libc
//! would silently bless wrong-but-plausible types, so the order never
//! changes.

use tracing::warn;

use crate::error::{CheckError, Result};
use crate::types::Warning;
use crate::vocab::TypeVocabulary;

/// The nullary return spelling, `-> ()`.
const UNIT_TYPE: &str = "()";

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Reduce a raw type annotation to its bare name: keep only the text after
/// the last `::` path separator, delete every pointer qualifier, and trim.
/// Purely textual, no semantic parsing.
pub fn normalize(raw: &str) -> String {
    let unqualified = match raw.rfind("::") {
        Some(idx) => &raw[idx + 2..],
        None => raw,
    };
    unqualified.replace("*mut", "").replace("*const", "").trim().to_string()
}

// ---------------------------------------------------------------------------
// TypeChecker
// ---------------------------------------------------------------------------

/// Validates bare type names against the libc and Rust vocabularies.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct TypeChecker {
    libc: TypeVocabulary,
    rust: TypeVocabulary,
}

impl TypeChecker {
    pub fn new(libc: TypeVocabulary, rust: TypeVocabulary) -> Self {
        Self { libc, rust }
    }

    /// Checker over the built-in vocabularies only.
    pub fn with_builtin() -> Self {
        Self::new(TypeVocabulary::libc(), TypeVocabulary::rust_primitives())
    }

    pub fn libc_vocabulary(&self) -> &TypeVocabulary {
        &self.libc
    }

    pub fn rust_vocabulary(&self) -> &TypeVocabulary {
        &self.rust
    }

    /// Normalize `raw` and resolve it against the vocabularies.
    ///
    /// Returns the accepted bare name, or `None` when the type is the unit
    /// spelling and therefore treated as absent. Style findings are logged
    /// immediately and appended to `warnings`; an unrecognized name is a
    /// fatal [`CheckError::UnknownType`].
    pub fn resolve(&self, raw: &str, warnings: &mut Vec<Warning>) -> Result<Option<String>> {
        let bare = normalize(raw);

        if self.libc.contains(&bare) {
            return Ok(Some(bare));
        }

        if bare == UNIT_TYPE {
            let finding = Warning::new("Using explicit `-> ()`, can be removed");
            warn!("{}", finding.message);
            warnings.push(finding);
            return Ok(None);
        }

        if self.rust.contains(&bare) {
            let finding =
                Warning::new(format!("Using Rust type `{bare}` instead of a libc type"));
            warn!("{}", finding.message);
            warnings.push(finding);
            return Ok(Some(bare));
        }

        Err(CheckError::UnknownType(bare))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
