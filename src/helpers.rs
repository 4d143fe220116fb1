use crate::parser::Captures;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Simple semver-ish comparison: is `a < b`?  Compares dot-separated numeric
/// components left to right (missing or non-numeric components count as 0).
pub(crate) fn version_lt(a: &str, b: &str) -> bool {
    let mut ai = a.split('.');
    let mut bi = b.split('.');
    loop {
        let (av, bv) = match (ai.next(), bi.next()) {
            (None, None) => return false,
            (av, bv) => (av.unwrap_or("0"), bv.unwrap_or("0")),
        };
        match cmp_component(av, bv) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }
}

/// Numeric order on digit strings of any length.
fn cmp_component(a: &str, b: &str) -> Ordering {
    let (a, b) = (digits(a), digits(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `s` without leading zeros, or `"0"` when it is empty or not all digits.
fn digits(s: &str) -> &str {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return "0";
    }
    match s.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// Simple semver-ish comparison: is `a >= b`?
pub(crate) fn version_ge(a: &str, b: &str) -> bool {
    !version_lt(a, b)
}

pub(crate) fn capture_or_empty<'a>(captures: &Captures<'a>, group: usize) -> Cow<'a, str> {
    captures
        .get_str(group)
        .map(Cow::Borrowed)
        .unwrap_or(Cow::Borrowed(""))
}

/// Matomo writes versions like `17_1` with dots.
pub(crate) fn normalize_version(version: Cow<'_, str>) -> Cow<'_, str> {
    if version.contains('_') {
        Cow::Owned(version.replace('_', "."))
    } else {
        version
    }
}

/// `"name version"`, trimmed, so a missing half leaves no stray space.
pub(crate) fn display_name(name: &str, version: &str) -> String {
    format!("{} {}", name, version).trim().to_string()
}

/// `Some(s)` unless `s` is empty.
pub(crate) fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
