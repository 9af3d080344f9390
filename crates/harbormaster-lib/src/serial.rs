//! Container serial numbers and the sources that number them.
//!
//! A serial pairs the container's type discriminator with a numeric suffix in
//! `[SERIAL_MIN, SERIAL_MAX]`. Uniqueness is best-effort: [`RandomSerials`]
//! can repeat a number within one process, so callers that need strict
//! uniqueness should use [`SequentialSerials`].

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};

use crate::container::ContainerType;
use crate::error::{Error, Result};

/// Prefix shared by every rendered serial number.
pub const SERIAL_PREFIX: &str = "KON";
/// Smallest numeric suffix handed out by a serial source.
pub const SERIAL_MIN: u32 = 1;
/// Largest numeric suffix handed out by a serial source.
pub const SERIAL_MAX: u32 = 9999;

/// Identifier assigned to a container at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SerialNumber {
    kind: ContainerType,
    number: u32,
}

impl SerialNumber {
    pub fn new(kind: ContainerType, number: u32) -> Self {
        Self { kind, number }
    }

    pub fn kind(&self) -> ContainerType {
        self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", SERIAL_PREFIX, self.kind.code(), self.number)
    }
}

impl Serialize for SerialNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for SerialNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            message: format!(
                "'{s}' is not a serial number of the form {SERIAL_PREFIX}-<type>-<number>"
            ),
        };

        let mut parts = s.trim().split('-');
        let prefix = parts.next().ok_or_else(invalid)?;
        let code = parts.next().ok_or_else(invalid)?;
        let number = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() || !prefix.eq_ignore_ascii_case(SERIAL_PREFIX) {
            return Err(invalid());
        }

        let mut chars = code.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => ContainerType::from_code(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let number = number.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(kind, number))
    }
}

/// Source of numeric serial suffixes, injected into container constructors.
pub trait SerialSource {
    /// Produce the next suffix in `[SERIAL_MIN, SERIAL_MAX]`.
    fn next_number(&mut self) -> u32;

    /// Assign a full serial for a container of the given type.
    fn assign(&mut self, kind: ContainerType) -> SerialNumber {
        SerialNumber::new(kind, self.next_number())
    }
}

/// Random suffixes drawn uniformly from `[SERIAL_MIN, SERIAL_MAX]`.
#[derive(Debug, Clone)]
pub struct RandomSerials {
    rng: StdRng,
}

impl RandomSerials {
    /// Seed from the operating system's entropy source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSerials {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSource for RandomSerials {
    fn next_number(&mut self) -> u32 {
        self.rng.random_range(SERIAL_MIN..=SERIAL_MAX)
    }
}

/// Counter-based suffixes; wraps back to `SERIAL_MIN` after `SERIAL_MAX`.
#[derive(Debug, Clone)]
pub struct SequentialSerials {
    next: u32,
}

impl SequentialSerials {
    pub fn new() -> Self {
        Self { next: SERIAL_MIN }
    }

    /// Start counting from `first`, clamped into the valid range.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first.clamp(SERIAL_MIN, SERIAL_MAX),
        }
    }
}

impl Default for SequentialSerials {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSource for SequentialSerials {
    fn next_number(&mut self) -> u32 {
        let current = self.next;
        self.next = if current >= SERIAL_MAX {
            SERIAL_MIN
        } else {
            current + 1
        };
        current
    }
}
