//! Module header (5 words).
//!
//! Layout:
//! - 0: magic number
//! - 1: version, `0x00MMmm00`
//! - 2: generator id
//! - 3: id bound, one past the largest result id
//! - 4: schema, reserved and always 0

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::{DEFAULT_GENERATOR, HEADER_WORDS, MAGIC};

/// Format version as encoded in header word 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const V1_0: Self = Self::new(1, 0);
    pub const V1_3: Self = Self::new(1, 3);
    pub const V1_6: Self = Self::new(1, 6);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn to_word(self) -> u32 {
        ((self.major as u32) << 16) | ((self.minor as u32) << 8)
    }

    pub const fn from_word(word: u32) -> Self {
        Self {
            major: (word >> 16) as u8,
            minor: (word >> 8) as u8,
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::V1_0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Rejected `MAJOR.MINOR` version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("expected MAJOR.MINOR, got {0:?}")]
    MissingDot(String),
    #[error("invalid major version {text:?}: {source}")]
    Major { text: String, source: ParseIntError },
    #[error("invalid minor version {text:?}: {source}")]
    Minor { text: String, source: ParseIntError },
}

/// Parses `"1.3"`.
impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| VersionParseError::MissingDot(s.to_string()))?;
        let major = major
            .parse::<u8>()
            .map_err(|source| VersionParseError::Major {
                text: major.to_string(),
                source,
            })?;
        let minor = minor
            .parse::<u8>()
            .map_err(|source| VersionParseError::Minor {
                text: minor.to_string(),
                source,
            })?;
        Ok(Self::new(major, minor))
    }
}

/// Decoded module header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub version: Version,
    pub generator: u32,
    pub bound: u32,
    pub schema: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: Version::default(),
            generator: DEFAULT_GENERATOR,
            bound: 1,
            schema: 0,
        }
    }
}

impl Header {
    /// Decode from the first five words.
    pub fn from_words(words: &[u32]) -> Self {
        assert!(words.len() >= HEADER_WORDS, "header too short");

        Self {
            magic: words[0],
            version: Version::from_word(words[1]),
            generator: words[2],
            bound: words[3],
            schema: words[4],
        }
    }

    pub fn to_words(&self) -> [u32; HEADER_WORDS] {
        [
            self.magic,
            self.version.to_word(),
            self.generator,
            self.bound,
            self.schema,
        ]
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    /// Generator tool id (high half of the generator word).
    pub fn generator_tool(&self) -> u16 {
        (self.generator >> 16) as u16
    }

    /// Generator version (low half of the generator word).
    pub fn generator_version(&self) -> u16 {
        self.generator as u16
    }
}
