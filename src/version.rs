//! Dotted version comparison.
//!
//! Versions are compared on their first three dot-separated parts only.
//! Missing parts count as `0`, as do parts without a leading integer, so
//! `"1.2"` equals `"1.2.0"` and `"3.1.0.GA"` equals `"3.1.0"`.

use std::cmp::Ordering;

/// Current version of tiapp.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Oldest Titanium SDK the toolchain supports.
pub const MINIMUM_SDK_VERSION: &str = "3.0.0";

/// A `major.minor.patch` triplet parsed leniently from a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl Version {
    /// Parse a version string. Never fails; unusable parts become `0`.
    pub fn parse(s: &str) -> Self {
        let mut parts = s
            .split('.')
            .take(3)
            .map(|p| parse_int_prefix(p).unwrap_or(0));

        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }
}

/// Compare two version strings.
pub fn compare(v1: &str, v2: &str) -> Ordering {
    Version::parse(v1).cmp(&Version::parse(v2))
}

/// `v1 == v2`
pub fn eq(v1: &str, v2: &str) -> bool {
    compare(v1, v2) == Ordering::Equal
}

/// `v1 > v2`
pub fn gt(v1: &str, v2: &str) -> bool {
    compare(v1, v2) == Ordering::Greater
}

/// `v1 >= v2`
pub fn gte(v1: &str, v2: &str) -> bool {
    compare(v1, v2) != Ordering::Less
}

/// `v1 < v2`
pub fn lt(v1: &str, v2: &str) -> bool {
    compare(v1, v2) == Ordering::Less
}

/// `v1 <= v2`
pub fn lte(v1: &str, v2: &str) -> bool {
    compare(v1, v2) != Ordering::Greater
}

/// `v1 != v2`
pub fn neq(v1: &str, v2: &str) -> bool {
    compare(v1, v2) != Ordering::Equal
}

/// Render an ordering as `-1`, `0` or `1`.
pub fn ordering_to_i32(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Parse the leading integer of `s`, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digit follows. Values past the `i64` range saturate.
pub(crate) fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
