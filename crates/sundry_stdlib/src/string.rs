//! String transforms.
//!
//! Positions and lengths count Unicode scalar values, not bytes.

use regex::Regex;
use sundry_foundation::{Error, Result};
use tracing::debug;

// =============================================================================
// Word Splitting
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    /// Letters without case, e.g. CJK ideographs.
    Caseless,
    Apostrophe,
    Separator,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else if c.is_lowercase() {
            Self::Lower
        } else if c.is_numeric() {
            Self::Digit
        } else if c.is_alphabetic() {
            Self::Caseless
        } else if is_apostrophe(c) {
            Self::Apostrophe
        } else {
            Self::Separator
        }
    }

    const fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower | Self::Caseless)
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Returns true if a new word starts at `current`, given its neighbours
/// inside the same alphanumeric run.
fn is_word_boundary(prev: CharClass, current: CharClass, next: Option<CharClass>) -> bool {
    match (prev, current) {
        (CharClass::Lower, CharClass::Upper) => true,
        // Last capital of an upper-case run that starts a capitalized word.
        (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
        (CharClass::Digit, c) if c.is_letter() => true,
        (p, CharClass::Digit) if p.is_letter() => true,
        _ => false,
    }
}

/// Splits a string into words.
///
/// Words are runs of letters and digits, further split where lower case
/// meets upper case (`fooBar`), before the last capital of an upper-case run
/// followed by lower case (`XMLHttp`), and between letters and digits.
/// Apostrophes between two letters stay inside the word.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let classes: Vec<CharClass> = chars.iter().map(|c| CharClass::of(*c)).collect();

    let mut words = Vec::new();
    let mut current = String::new();
    let mut flush = |current: &mut String| {
        if !current.is_empty() {
            words.push(std::mem::take(current));
        }
    };

    for (i, (&c, &class)) in chars.iter().zip(&classes).enumerate() {
        let prev = i.checked_sub(1).map(|j| classes[j]);
        let next = classes.get(i + 1).copied();
        match class {
            CharClass::Separator => flush(&mut current),
            CharClass::Apostrophe => {
                let inside = !current.is_empty()
                    && prev.is_some_and(CharClass::is_letter)
                    && next.is_some_and(CharClass::is_letter);
                if inside {
                    current.push(c);
                } else {
                    flush(&mut current);
                }
            }
            _ => {
                let boundary = prev.is_some_and(|prev| is_word_boundary(prev, class, next));
                if boundary && !current.is_empty() {
                    flush(&mut current);
                }
                current.push(c);
            }
        }
    }
    flush(&mut current);
    words
}

/// Returns every match of `pattern` in `text`.
#[must_use]
pub fn words_matching(text: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Compiles `pattern` and returns every match of it in `text`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidPattern`](sundry_foundation::ErrorKind::InvalidPattern)
/// if the pattern does not compile.
pub fn words_with_pattern(text: &str, pattern: &str) -> Result<Vec<String>> {
    let regex = Regex::new(pattern).map_err(|err| {
        debug!(pattern, %err, "rejected word pattern");
        Error::invalid_pattern(err.to_string())
    })?;
    Ok(words_matching(text, &regex))
}

// =============================================================================
// Case Transforms
// =============================================================================

/// String: camelCase
#[must_use]
pub fn camel_case(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_apostrophe(*c)).collect();
    words(&stripped)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { upper_first(&lower) }
        })
        .collect()
}

/// String: capitalize - first character upper case, the rest lower case
#[must_use]
pub fn capitalize(text: &str) -> String {
    upper_first(&text.to_lowercase())
}

/// String: upperFirst
#[must_use]
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// String: lowerFirst
#[must_use]
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Affix Checks
// =============================================================================

/// Clamps an optional character position into `[0, len]`.
fn clamp_position(position: Option<i64>, default: usize, len: usize) -> usize {
    match position {
        None => default,
        Some(p) if p <= 0 => 0,
        Some(p) => usize::try_from(p).map_or(len, |p| p.min(len)),
    }
}

/// Returns true if the first `position` characters of `text` end with
/// `target`.
///
/// `position` defaults to the length of `text` and is clamped to
/// `[0, length]`.
#[must_use]
pub fn ends_with(text: &str, target: &str, position: Option<i64>) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let end = clamp_position(position, chars.len(), chars.len());
    let target: Vec<char> = target.chars().collect();
    end.checked_sub(target.len())
        .is_some_and(|start| chars[start..end] == target[..])
}

/// Returns true if `text` starts with `target` at character `position`.
///
/// `position` defaults to 0 and is clamped to `[0, length]`.
#[must_use]
pub fn starts_with(text: &str, target: &str, position: Option<i64>) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let start = clamp_position(position, 0, chars.len());
    let target: Vec<char> = target.chars().collect();
    chars[start..].starts_with(&target)
}
