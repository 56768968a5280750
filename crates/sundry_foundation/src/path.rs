//! Property paths in dot/bracket notation.
//!
//! `a.b[0]["c.d"]` parses into the segments `a`, `b`, `0`, `c.d`. Canonical
//! integer segments become [`Segment::Index`]; everything else is a key.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{Error, Result, Value};

/// One step of a property path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named property.
    Key(Arc<str>),
    /// Positional property.
    Index(usize),
}

impl Segment {
    /// Classifies raw segment text: canonical integers become indices.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        canonical_index(text).map_or_else(|| Self::Key(text.into()), Self::Index)
    }

    /// Looks this segment up on a value.
    #[must_use]
    pub fn lookup(&self, value: &Value) -> Option<Value> {
        match self {
            Self::Key(key) => value.property(key),
            Self::Index(index) => value.index(*index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A parsed property path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parses dot/bracket notation.
    ///
    /// Empty text, a leading or trailing dot, and doubled dots produce empty
    /// keys. Bracket contents may be quoted with `'` or `"`, with backslash
    /// escapes inside the quotes.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPath`](crate::ErrorKind::InvalidPath) for an
    /// unterminated bracket or quote, empty brackets, or a stray `]`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut after_bracket = false;
        let mut chars = text.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '.' => {
                    if !after_bracket || !current.is_empty() {
                        segments.push(Segment::from_text(&current));
                    }
                    current.clear();
                    after_bracket = false;
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(Segment::from_text(&current));
                        current.clear();
                    }
                    let quote = chars.next_if(|(_, c)| *c == '"' || *c == '\'');
                    let segment = if let Some((_, quote)) = quote {
                        let mut key = String::new();
                        loop {
                            match chars.next() {
                                Some((_, '\\')) => match chars.next() {
                                    Some((_, escaped)) => key.push(escaped),
                                    None => {
                                        return Err(Error::invalid_path(
                                            text,
                                            position,
                                            "unterminated quote",
                                        ));
                                    }
                                },
                                Some((_, c)) if c == quote => break,
                                Some((_, c)) => key.push(c),
                                None => {
                                    return Err(Error::invalid_path(
                                        text,
                                        position,
                                        "unterminated quote",
                                    ));
                                }
                            }
                        }
                        if chars.next_if(|(_, c)| *c == ']').is_none() {
                            return Err(Error::invalid_path(
                                text,
                                position,
                                "expected ']' after quoted key",
                            ));
                        }
                        Segment::Key(key.into())
                    } else {
                        let mut raw = String::new();
                        loop {
                            match chars.next() {
                                Some((_, ']')) => break,
                                Some((_, c)) => raw.push(c),
                                None => {
                                    return Err(Error::invalid_path(
                                        text,
                                        position,
                                        "unterminated bracket",
                                    ));
                                }
                            }
                        }
                        let raw = raw.trim();
                        if raw.is_empty() {
                            return Err(Error::invalid_path(text, position, "empty brackets"));
                        }
                        Segment::from_text(raw)
                    };
                    segments.push(segment);
                    after_bracket = true;
                }
                ']' => return Err(Error::invalid_path(text, position, "unexpected ']'")),
                c => {
                    current.push(c);
                    after_bracket = false;
                }
            }
        }

        if !after_bracket || !current.is_empty() {
            segments.push(Segment::from_text(&current));
        }
        Ok(Self { segments })
    }

    /// A path consisting of one literal key, however it is spelled.
    #[must_use]
    pub fn single_key(key: &str) -> Self {
        Self {
            segments: vec![Segment::Key(key.into())],
        }
    }

    /// Builds a path from segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walks the path from `root`.
    ///
    /// Returns `None` as soon as a segment is missing. The empty path
    /// resolves to `root` itself.
    #[must_use]
    pub fn resolve(&self, root: &Value) -> Option<Value> {
        self.segments
            .iter()
            .try_fold(root.clone(), |current, segment| segment.lookup(&current))
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) if is_plain_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Key(key) => {
                    f.write_str("[\"")?;
                    for c in key.chars() {
                        if c == '"' || c == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                    f.write_str("\"]")?;
                }
            }
        }
        Ok(())
    }
}

/// Keys that can be written bare without changing how they parse.
fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && canonical_index(key).is_none()
        && !key.contains(['.', '[', ']'])
}

/// Parses a canonical array index: decimal digits with no sign and no
/// leading zero (except `0` itself).
pub(crate) fn canonical_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    text.parse().ok()
}
