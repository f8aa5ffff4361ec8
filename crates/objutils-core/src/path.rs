//! Path model for nested property access
//!
//! A [`Path`] is an ordered list of segments. Each segment names a key in a
//! mapping or, written as a canonical decimal, a position in a sequence.
//! There is no escaping: a key containing `.` is only reachable through
//! [`Path::from_segments`].

use std::fmt;

/// Segment delimiter used by [`Path::parse`]
pub const DELIMITER: char = '.';

/// An ordered sequence of key/index segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a dot-delimited path
    ///
    /// The empty string parses to a path with zero segments. Any other input
    /// is split on every `.`, so `"a..b"` has an empty middle segment.
    ///
    /// # Example
    ///
    /// ```
    /// use objutils_core::Path;
    ///
    /// let path = Path::parse("items.0.id");
    /// assert_eq!(path.segments(), ["items", "0", "id"]);
    /// assert!(Path::parse("").is_empty());
    /// ```
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self {
            segments: path.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    /// Build a path from pre-split segments, used verbatim
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment and the segments leading to it
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Path::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::parse(&path)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::from_segments(segments)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Interpret a segment as a sequence index
///
/// Only canonical decimal forms qualify: ASCII digits, no sign, and no
/// leading zero unless the segment is exactly `"0"`.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}
