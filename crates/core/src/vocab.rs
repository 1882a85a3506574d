//! Type vocabularies — the two sets of bare type names a declaration may use
//! at the `extern "C"` boundary.
//!
//! Membership is a case-sensitive exact match on the bare name; there is no
//! prefix or partial matching. Lookups carry no ordinal meaning, so the
//! vocabularies are plain sets.

use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Built-in type name lists
// ---------------------------------------------------------------------------

/// Rust primitive and built-in scalar/compound names. Accepted at the FFI
/// boundary with a style warning — a libc alias is the canonical choice.
const RUST_TYPES: &[&str] = &[
    "char", "bool",
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64",
    "isize", "usize", "f32", "f64",
    "Array", "Slice", "Str", "Tuple", "Function",
];

/// Type aliases defined in Rust's libc crate.
// TODO: generate this from the installed libc crate instead of pinning it.
const LIBC_TYPES: &[&str] = &[
    "__fsword_t", "blkcnt64_t", "blkcnt_t", "blksize_t", "c_char", "c_double",
    "c_float", "c_int", "c_long", "c_longlong", "c_schar", "c_short",
    "c_uchar", "c_uint", "c_ulong", "c_ulonglong", "c_ushort", "cc_t",
    "clock_t", "dev_t", "fsblkcnt_t", "fsfilcnt_t", "gid_t", "in_addr_t",
    "in_port_t", "ino64_t", "ino_t", "int16_t", "int32_t", "int64_t",
    "int8_t", "intmax_t", "intptr_t", "key_t", "loff_t", "mode_t", "mqd_t",
    "nfds_t", "nlink_t", "off64_t", "off_t", "pid_t", "pthread_key_t",
    "pthread_t", "ptrdiff_t", "rlim64_t", "rlim_t", "sa_family_t",
    "shmatt_t", "sighandler_t", "size_t", "socklen_t", "speed_t", "ssize_t",
    "suseconds_t", "tcflag_t", "time_t", "uid_t", "uint16_t", "uint32_t",
    "uint64_t", "uint8_t", "uintmax_t", "uintptr_t", "useconds_t", "wchar_t",
];

// ---------------------------------------------------------------------------
// TypeVocabulary
// ---------------------------------------------------------------------------

/// A set of recognized bare type names.
#[derive(Debug, Clone)]
pub struct TypeVocabulary {
    names: HashSet<String>,
}

impl TypeVocabulary {
    /// Build a vocabulary from any iterator of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// The built-in libc type alias vocabulary.
    pub fn libc() -> Self {
        Self::from_names(LIBC_TYPES.iter().copied())
    }

    /// The built-in Rust primitive vocabulary.
    pub fn rust_primitives() -> Self {
        Self::from_names(RUST_TYPES.iter().copied())
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Add extra names (e.g. project handle types from `.ffiscope.toml`).
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// Names in sorted order, for display.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
