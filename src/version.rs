use serde::Serialize;

/// A version split into numeric components.
///
/// Components are `None` when the source did not carry that segment or the
/// segment is not a number; `Some(0)` means the classifier really saw a zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    /// Display string, e.g. `"WebKit 14.2"`.
    pub summary: Option<String>,
}

impl VersionInfo {
    /// Parse a dotted version string such as `"14.2"` or `"120.0.6099.71"`.
    ///
    /// Segments past the third are ignored. `summary` is stored as given,
    /// whether or not any numeric component could be read.
    pub fn parse(version: &str, summary: impl Into<String>) -> Self {
        let mut segments = version.split('.').map(parse_segment);
        Self {
            major: segments.next().flatten(),
            minor: segments.next().flatten(),
            patch: segments.next().flatten(),
            summary: Some(summary.into()),
        }
    }

    /// Build from components that were already split by the classifier.
    pub fn from_parts(
        major: Option<&str>,
        minor: Option<&str>,
        patch: Option<&str>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            major: major.and_then(parse_segment),
            minor: minor.and_then(parse_segment),
            patch: patch.and_then(parse_segment),
            summary: Some(summary.into()),
        }
    }

    /// `true` when no numeric component is known.
    pub fn is_unknown(&self) -> bool {
        self.major.is_none() && self.minor.is_none() && self.patch.is_none()
    }
}

fn parse_segment(segment: &str) -> Option<u32> {
    segment.trim().parse().ok()
}
