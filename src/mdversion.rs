use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Schema version of a module metadata document.
///
/// Version 1 documents carry `buildrequires`, `requires` and `eol`; every
/// later version carries a `dependencies` list instead. Versions above 2 are
/// treated the same as 2 wherever only the 1/2 boundary matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum MdVersion {
    One,
    Extended(ExtendedVersion),
}

/// An mdversion of 2 or later. Only `MdVersion::new` constructs one, so the
/// two `MdVersion` variants never share a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtendedVersion(u64);

impl ExtendedVersion {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl MdVersion {
    pub const V1: MdVersion = MdVersion::One;
    pub const V2: MdVersion = MdVersion::Extended(ExtendedVersion(2));

    pub fn new(value: u64) -> Result<Self, MdVersionError> {
        match value {
            0 => Err(MdVersionError::Unsupported(value)),
            1 => Ok(MdVersion::One),
            n => Ok(MdVersion::Extended(ExtendedVersion(n))),
        }
    }

    pub fn as_u64(self) -> u64 {
        match self {
            MdVersion::One => 1,
            MdVersion::Extended(extended) => extended.get(),
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, MdVersion::Extended(_))
    }
}

impl TryFrom<u64> for MdVersion {
    type Error = MdVersionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        MdVersion::new(value)
    }
}

impl From<MdVersion> for u64 {
    fn from(version: MdVersion) -> Self {
        version.as_u64()
    }
}

impl fmt::Display for MdVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

impl FromStr for MdVersion {
    type Err = MdVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| MdVersionError::InvalidFormat(s.to_string()))?;
        MdVersion::new(value)
    }
}

impl PartialOrd for MdVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MdVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MdVersionError {
    #[error("Unsupported mdversion: {0}")]
    Unsupported(u64),

    #[error("Invalid mdversion format: {0}")]
    InvalidFormat(String),
}
