use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed for the pseudorandom initial generation.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Seed(pub u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Seed from the wall clock. A clock set before the UNIX epoch yields 0.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Fold the bits above 64 in rather than truncating them.
        Self((nanos as u64) ^ ((nanos >> 64) as u64))
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
