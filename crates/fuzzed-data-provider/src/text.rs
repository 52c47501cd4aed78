//! Character sets and UTF-16 decoding.

use serde::{Deserialize, Serialize};

use crate::scalar::FuzzInteger;

/// An ordered, duplicate-free set of characters.
///
/// Decoded code units select a character by `unit mod len`, so the order is
/// part of the decoding contract: it is the order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CharBag {
    chars: Vec<char>,
}

impl CharBag {
    /// Build a bag from characters, keeping the first occurrence of each.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut bag = Self::default();
        bag.extend(chars);
        bag
    }

    /// Append `c` unless already present. Returns whether it was added.
    pub fn insert(&mut self, c: char) -> bool {
        if self.chars.contains(&c) {
            return false;
        }
        self.chars.push(c);
        true
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the bag has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` is in the bag.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Characters in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Character selected by a decoded code unit, `None` for an empty bag.
    #[must_use]
    pub fn select(&self, unit: u16) -> Option<char> {
        let index = usize::from(unit).checked_rem(self.chars.len())?;
        self.chars.get(index).copied()
    }
}

impl Extend<char> for CharBag {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for CharBag {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for CharBag {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl From<String> for CharBag {
    fn from(s: String) -> Self {
        Self::new(s.chars())
    }
}

impl From<CharBag> for String {
    fn from(bag: CharBag) -> Self {
        bag.chars.into_iter().collect()
    }
}

/// Split raw bytes into code units using the integer byte order.
///
/// A trailing odd byte is ignored; callers size their requests in pairs.
pub(crate) fn code_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .filter_map(|pair| <[u8; 2]>::try_from(pair).ok())
        .map(u16::from_foreign_bytes)
        .collect()
}

/// Turn code units into a string, either remapped through `bag` or decoded
/// as UTF-16 with lone surrogates replaced by U+FFFD.
pub(crate) fn units_to_string(units: &[u16], bag: Option<&CharBag>) -> String {
    match bag.filter(|bag| !bag.is_empty()) {
        Some(bag) => units.iter().filter_map(|&unit| bag.select(unit)).collect(),
        None => String::from_utf16_lossy(units),
    }
}

/// A single code unit as a `char`; surrogates become U+FFFD.
pub(crate) fn unit_to_char(unit: u16) -> char {
    char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}
