//! Content hashing used to version script snapshots.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 128-bit content hash computed with XXH3, used as a script version token.
///
/// The hash depends on the text alone: identical content at two different
/// paths, or read at two different times, yields the same token. The analysis
/// engine compares tokens to decide whether a file must be re-parsed, so two
/// snapshots with equal hashes are treated as content-identical.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes the hash of a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(data).to_be_bytes())
    }

    /// Computes the hash of a script's text.
    ///
    /// The empty string is a valid input and yields a fixed token, although
    /// the snapshot cache never stores empty content.
    pub fn of_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Returns the lowercase hexadecimal form (32 characters).
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContentHash({:02x}{:02x}{:02x}{:02x}..)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Error returned when a string is not a 32-character hex content hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid content hash '{0}'")]
pub struct ParseContentHashError(String);

impl FromStr for ContentHash {
    type Err = ParseContentHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.is_ascii() {
            return Err(ParseContentHashError(s.to_string()));
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| ParseContentHashError(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = ContentHash::of_text("let x = 1;");
        let b = ContentHash::of_text("let x = 1;");
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(ContentHash::of_text("a"), ContentHash::of_text("b"));
    }

    #[test]
    fn empty_text_has_defined_token() {
        let empty = ContentHash::of_text("");
        assert_eq!(empty, ContentHash::from_bytes(&[]));
        assert_eq!(empty.to_hex().len(), 32);
    }

    #[test]
    fn parse_display_roundtrip() {
        let h = ContentHash::of_text("export const y = 2;");
        let parsed: ContentHash = h.to_hex().parse().unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("abc".parse::<ContentHash>().is_err());
        assert!("zz".repeat(16).parse::<ContentHash>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let h = ContentHash::of_text("serde");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{h}\""));
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
